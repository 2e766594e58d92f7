//! Triage queue view — filtering, search, ordering and summary counts.
//!
//! The view borrows enriched records; it never changes them.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::pipeline::types::{EnrichedRecord, IssueType, Priority, Sentiment};

/// Narrowing applied to the queue. `None` on a field means "All".
#[derive(Debug, Clone, Default)]
pub struct QueueFilter {
    pub sentiment: Option<Sentiment>,
    pub priority: Option<Priority>,
    pub issue_type: Option<IssueType>,
    /// Case-insensitive substring searched in subject or body.
    pub search: Option<String>,
}

impl QueueFilter {
    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        if self.sentiment.is_some_and(|s| s != record.sentiment) {
            return false;
        }
        if self.priority.is_some_and(|p| p != record.priority) {
            return false;
        }
        if self.issue_type.is_some_and(|i| i != record.issue_type) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                record.email.subject.to_lowercase().contains(&needle)
                    || record.email.body.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}

/// Triage ordering: eligible first, then urgent first, then oldest first.
/// Undated records sort after dated ones.
pub fn triage_order(a: &EnrichedRecord, b: &EnrichedRecord) -> Ordering {
    b.eligible
        .cmp(&a.eligible)
        .then_with(|| a.priority.ordinal().cmp(&b.priority.ordinal()))
        .then_with(|| match (a.sent_at, b.sent_at) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Sort records in place for triage. Stable, so ties keep input order.
pub fn sort_for_triage(records: &mut [&EnrichedRecord]) {
    records.sort_by(|a, b| triage_order(a, b));
}

/// Filter then sort into a borrowed view.
pub fn apply<'a>(records: &'a [EnrichedRecord], filter: &QueueFilter) -> Vec<&'a EnrichedRecord> {
    let mut view: Vec<&EnrichedRecord> = records.iter().filter(|r| filter.matches(r)).collect();
    sort_for_triage(&mut view);
    view
}

/// Headline numbers plus per-label breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueueSummary {
    pub total: usize,
    pub eligible: usize,
    /// Records sent within the recent window ending at `now`.
    pub recent: usize,
    pub urgent: usize,
    pub by_issue: Vec<(String, usize)>,
    pub by_sentiment: Vec<(String, usize)>,
    pub by_priority: Vec<(String, usize)>,
}

impl QueueSummary {
    /// Headline numbers over `all`, breakdowns over `view`.
    pub fn build(
        all: &[EnrichedRecord],
        view: &[&EnrichedRecord],
        now: NaiveDateTime,
        window: Duration,
    ) -> Self {
        let cutoff = now - window;
        Self {
            total: all.len(),
            eligible: all.iter().filter(|r| r.eligible).count(),
            recent: all
                .iter()
                .filter(|r| r.sent_at.is_some_and(|t| t >= cutoff))
                .count(),
            urgent: all
                .iter()
                .filter(|r| r.priority == Priority::Urgent)
                .count(),
            by_issue: value_counts(view.iter().map(|r| r.issue_type.label())),
            by_sentiment: value_counts(view.iter().map(|r| r.sentiment.label())),
            by_priority: value_counts(view.iter().map(|r| r.priority.label())),
        }
    }
}

/// Count labels, most frequent first, ties alphabetical.
fn value_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, n)| (label.to_string(), n))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::pipeline::enrich;
    use crate::pipeline::types::EmailRecord;

    fn record(sender: &str, subject: &str, body: &str, sent: &str) -> EnrichedRecord {
        enrich(EmailRecord::new(sender, subject, body, sent))
    }

    fn sample() -> Vec<EnrichedRecord> {
        vec![
            // not eligible, not urgent
            record("a@x.com", "Hello", "Just checking in, thanks", "2025-08-19 09:00:00"),
            // eligible, not urgent, later
            record("b@x.com", "Pricing query", "What does it cost?", "2025-08-19 12:00:00"),
            // eligible, urgent, undated
            record("c@x.com", "Help", "Servers are down!", "soon"),
            // eligible, urgent, early
            record("d@x.com", "Support needed", "I cannot log in", "2025-08-18 08:00:00"),
            // eligible, not urgent, earlier
            record("e@x.com", "Request for invoice", "Please send it", "2025-08-19 08:00:00"),
        ]
    }

    fn senders(view: &[&EnrichedRecord]) -> Vec<String> {
        view.iter().map(|r| r.email.sender.clone()).collect()
    }

    #[test]
    fn sort_contract() {
        let records = sample();
        let view = apply(&records, &QueueFilter::default());
        assert_eq!(
            senders(&view),
            vec!["d@x.com", "c@x.com", "e@x.com", "b@x.com", "a@x.com"]
        );
    }

    #[test]
    fn filter_by_priority() {
        let records = sample();
        let filter = QueueFilter {
            priority: Some(Priority::Urgent),
            ..Default::default()
        };
        let view = apply(&records, &filter);
        assert_eq!(senders(&view), vec!["d@x.com", "c@x.com"]);
    }

    #[test]
    fn filter_by_issue_and_sentiment() {
        let records = sample();
        let filter = QueueFilter {
            issue_type: Some(IssueType::LoginIssue),
            sentiment: Some(Sentiment::Negative),
            ..Default::default()
        };
        assert_eq!(senders(&apply(&records, &filter)), vec!["d@x.com"]);
    }

    #[test]
    fn search_is_case_insensitive_over_subject_and_body() {
        let records = sample();
        let filter = QueueFilter {
            search: Some("SERVERS".into()),
            ..Default::default()
        };
        assert_eq!(senders(&apply(&records, &filter)), vec!["c@x.com"]);

        let filter = QueueFilter {
            search: Some("invoice".into()),
            ..Default::default()
        };
        assert_eq!(senders(&apply(&records, &filter)), vec!["e@x.com"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let records = sample();
        let filter = QueueFilter {
            search: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(apply(&records, &filter).len(), records.len());
    }

    #[test]
    fn no_matches_is_empty_view() {
        let records = sample();
        let filter = QueueFilter {
            issue_type: Some(IssueType::Subscription),
            ..Default::default()
        };
        assert!(apply(&records, &filter).is_empty());
    }

    #[test]
    fn summary_counts() {
        let records = sample();
        let view = apply(&records, &QueueFilter::default());
        let now = NaiveDate::from_ymd_opt(2025, 8, 19)
            .and_then(|d| d.and_hms_opt(18, 0, 0))
            .unwrap();
        let summary = QueueSummary::build(&records, &view, now, Duration::hours(24));

        assert_eq!(summary.total, 5);
        assert_eq!(summary.eligible, 4);
        assert_eq!(summary.recent, 3);
        assert_eq!(summary.urgent, 2);
        assert_eq!(
            summary.by_priority,
            vec![("Not urgent".to_string(), 3), ("Urgent".to_string(), 2)]
        );
        assert_eq!(summary.by_issue.iter().map(|(_, n)| n).sum::<usize>(), 5);
    }

    #[test]
    fn value_counts_orders_by_count_then_label() {
        let counts = value_counts(["b", "a", "b", "c", "a"].into_iter());
        assert_eq!(
            counts,
            vec![("a".to_string(), 2), ("b".to_string(), 2), ("c".to_string(), 1)]
        );
    }
}
