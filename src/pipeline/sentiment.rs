//! Lexicon-presence sentiment detection.

use crate::pipeline::text::{contains_any, fold_case};
use crate::pipeline::types::Sentiment;

/// Markers of frustration or failure. Matched as substrings, so "down"
/// also fires on "download".
const NEGATIVE_TERMS: &[&str] = &[
    "unable",
    "cannot",
    "doesn't",
    "doesnt",
    "error",
    "charged twice",
    "down",
    "inaccessible",
    "urgent",
    "critical",
    "immediately",
    "blocked",
    "cannot access",
    "frustrated",
    "issue",
    "problem",
];

const POSITIVE_TERMS: &[&str] = &["thank you", "appreciate", "great", "good", "thanks"];

/// Detect sentiment from the presence of negative and positive markers.
pub fn detect_sentiment(text: &str) -> Sentiment {
    let folded = fold_case(text);
    let negative = contains_any(&folded, NEGATIVE_TERMS);
    let positive = contains_any(&folded, POSITIVE_TERMS);

    match (negative, positive) {
        (true, false) => Sentiment::Negative,
        (false, true) => Sentiment::Positive,
        (true, true) => Sentiment::Mixed,
        (false, false) => Sentiment::Neutral,
    }
}
