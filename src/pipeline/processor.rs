//! Record enrichment — runs every stage over one email.
//!
//! Flow, per record:
//! 1. Eligibility from the subject
//! 2. Issue, sentiment and priority from `"{subject} {body}"`
//! 3. Contacts from the raw body
//! 4. Draft from sender + issue + sentiment + priority
//!
//! Each record is handled on its own; nothing here can fail.

use tracing::{debug, info};

use crate::ingest::parse_sent_date;
use crate::pipeline::contacts::extract_contacts;
use crate::pipeline::drafter::draft_response;
use crate::pipeline::priority::score_priority;
use crate::pipeline::rules::{classify_issue, is_eligible};
use crate::pipeline::sentiment::detect_sentiment;
use crate::pipeline::types::{EmailRecord, EnrichedRecord};

/// Enrich a single email.
pub fn enrich(email: EmailRecord) -> EnrichedRecord {
    let text = email.combined_text();

    let eligible = is_eligible(&email.subject);
    let issue_type = classify_issue(&text);
    let sentiment = detect_sentiment(&text);
    let priority = score_priority(&text);
    let contacts = extract_contacts(&email.body);
    let draft_response = draft_response(&email.sender, issue_type, sentiment, priority);
    let sent_at = parse_sent_date(&email.sent_date);

    debug!(
        sender = %email.sender,
        eligible,
        issue_type = issue_type.label(),
        sentiment = sentiment.label(),
        priority = priority.label(),
        dated = sent_at.is_some(),
        "Record enriched"
    );

    EnrichedRecord {
        email,
        sent_at,
        eligible,
        issue_type,
        sentiment,
        priority,
        contacts_email: contacts.emails,
        contacts_phone: contacts.phones,
        draft_response,
    }
}

/// Enrich a batch, preserving input order.
pub fn enrich_batch(emails: Vec<EmailRecord>) -> Vec<EnrichedRecord> {
    let count = emails.len();
    let enriched: Vec<EnrichedRecord> = emails.into_iter().map(enrich).collect();

    let undated = enriched.iter().filter(|r| r.sent_at.is_none()).count();
    info!(total = count, undated, "Batch enrichment complete");
    enriched
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::pipeline::drafter::issue_summary;
    use crate::pipeline::types::{IssueType, Priority, Sentiment};

    #[test]
    fn urgent_login_end_to_end() {
        let email = EmailRecord::new(
            "jane.smith@example.com",
            "URGENT: cannot log into account",
            "I am unable to log in, please help, error persists",
            "2025-08-19 10:15:00",
        );
        let record = enrich(email);

        assert!(record.eligible);
        assert_eq!(record.issue_type, IssueType::LoginIssue);
        assert_eq!(record.sentiment, Sentiment::Negative);
        assert_eq!(record.priority, Priority::Urgent);
        assert!(record.draft_response.starts_with("Hi Jane,"));
        assert!(record.draft_response.contains("I\u{2019}m sorry for the trouble"));
        assert!(record.draft_response.contains(issue_summary(IssueType::LoginIssue)));
        assert_eq!(
            record.sent_at,
            NaiveDate::from_ymd_opt(2025, 8, 19).and_then(|d| d.and_hms_opt(10, 15, 0))
        );
    }

    #[test]
    fn empty_record_takes_default_branches() {
        let record = enrich(EmailRecord::default());

        assert!(!record.eligible);
        assert_eq!(record.issue_type, IssueType::Other);
        assert_eq!(record.sentiment, Sentiment::Neutral);
        assert_eq!(record.priority, Priority::NotUrgent);
        assert_eq!(record.contacts_email, None);
        assert_eq!(record.contacts_phone, None);
        assert_eq!(record.sent_at, None);
        assert!(record.draft_response.starts_with("Hi there,"));
    }

    #[test]
    fn contacts_come_from_body_only() {
        let email = EmailRecord::new(
            "ops@example.com",
            "Help: reach billing@example.com",
            "Call me on +44 20 7946 0958 or write to me@example.org",
            "",
        );
        let record = enrich(email);

        assert_eq!(record.contacts_email.as_deref(), Some("me@example.org"));
        assert_eq!(record.contacts_phone.as_deref(), Some("+44 20 7946 0958"));
    }

    #[test]
    fn batch_preserves_order() {
        let emails = vec![
            EmailRecord::new("a@x.com", "Pricing request", "What is the cost?", ""),
            EmailRecord::new("b@x.com", "Hello", "Just saying hi", ""),
        ];
        let records = enrich_batch(emails);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].email.sender, "a@x.com");
        assert_eq!(records[0].issue_type, IssueType::Pricing);
        assert_eq!(records[1].issue_type, IssueType::Other);
    }
}
