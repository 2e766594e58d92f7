//! Rule-based enrichment pipeline for support email.
//!
//! Every inbound record flows through:
//! 1. `rules::is_eligible()` — support-intent test on the subject
//! 2. `rules::classify_issue()` — ordered first-match-wins categorization
//! 3. `sentiment::detect_sentiment()` — lexicon presence, four states
//! 4. `priority::score_priority()` — urgency keywords + negative bonus
//! 5. `contacts::extract_contacts()` — emails and phones from the body
//! 6. `drafter::draft_response()` — templated reply for a human to edit
//!
//! **No reply is ever sent.** Drafts are suggestions only.

pub mod contacts;
pub mod drafter;
pub mod priority;
pub mod processor;
pub mod rules;
pub mod sentiment;
pub mod text;
pub mod types;

pub use processor::{enrich, enrich_batch};
pub use types::{EmailRecord, EnrichedRecord, IssueType, Priority, Sentiment};
