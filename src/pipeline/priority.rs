//! Keyword-weighted urgency scoring.

use crate::pipeline::sentiment::detect_sentiment;
use crate::pipeline::text::{count_present, fold_case};
use crate::pipeline::types::Priority;

/// Score at or above which a message is `Urgent`.
const URGENT_THRESHOLD: usize = 1;

/// Each phrase counts once no matter how often it appears.
const URGENT_KEYWORDS: &[&str] = &[
    "urgent",
    "immediate",
    "immediately",
    "critical",
    "cannot access",
    "blocked",
    "servers are down",
    "completely inaccessible",
    "charged twice",
    "reset link doesn",
    "reset link doesn\u{2019}t",
    "reset link doesn't",
];

fn urgency_score(text: &str) -> usize {
    let folded = fold_case(text);
    let mut score = count_present(&folded, URGENT_KEYWORDS);
    if detect_sentiment(&folded).carries_negative() {
        score += 1;
    }
    score
}

/// Score text and reduce it to the binary priority label.
pub fn score_priority(text: &str) -> Priority {
    if urgency_score(text) >= URGENT_THRESHOLD {
        Priority::Urgent
    } else {
        Priority::NotUrgent
    }
}
