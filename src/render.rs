//! Plain-text rendering of the triage queue.

use crate::config::QueueConfig;
use crate::pipeline::types::EnrichedRecord;
use crate::queue::QueueSummary;

/// Subject column width in the queue table.
const SUBJECT_WIDTH: usize = 40;

const SENT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Full report: headline metrics, breakdowns, queue table, and an optional
/// detail block for the selected record.
pub fn render_report(
    summary: &QueueSummary,
    view: &[&EnrichedRecord],
    selected: Option<&EnrichedRecord>,
    config: &QueueConfig,
) -> String {
    let mut out = String::new();
    out.push_str(&render_summary(summary, config));
    out.push('\n');
    out.push_str(&render_table(view, config));
    if let Some(record) = selected {
        out.push('\n');
        out.push_str(&render_detail(record, config));
    }
    out
}

pub fn render_summary(summary: &QueueSummary, config: &QueueConfig) -> String {
    let recent_label = format!("Last {}h:", config.recent_window_hours);
    let mut out = format!(
        "Total emails:          {}\n\
         Eligible (by subject): {}\n\
         {recent_label:<23}{}\n\
         Urgent:                {}\n",
        summary.total, summary.eligible, summary.recent, summary.urgent,
    );

    for (title, counts) in [
        ("Issue Types", &summary.by_issue),
        ("Sentiment", &summary.by_sentiment),
        ("Priority", &summary.by_priority),
    ] {
        out.push_str(&format!("\n{title}\n"));
        if counts.is_empty() {
            out.push_str(&format!("  No such combinations exist for {title}\n"));
            continue;
        }
        for (label, count) in counts {
            out.push_str(&format!("  {label:<22}{count}\n"));
        }
    }
    out
}

pub fn render_table(view: &[&EnrichedRecord], config: &QueueConfig) -> String {
    let mut out = String::from("Filtered Support Emails\n");
    if view.is_empty() {
        out.push_str("  No such combinations exist for the current filter selection.\n");
        return out;
    }

    out.push_str(&table_row(
        "#", "sender", "subject", "issue", "sentiment", "priority", "sent",
    ));
    for (index, record) in view.iter().enumerate() {
        let sent = record
            .sent_at
            .map(|t| t.format(SENT_FORMAT).to_string())
            .unwrap_or_else(|| config.placeholder.clone());
        out.push_str(&table_row(
            &index.to_string(),
            &truncate(&record.email.sender, 26),
            &truncate(&record.email.subject, SUBJECT_WIDTH),
            record.issue_type.label(),
            record.sentiment.label(),
            record.priority.label(),
            &sent,
        ));
    }
    out
}

fn table_row(
    index: &str,
    sender: &str,
    subject: &str,
    issue: &str,
    sentiment: &str,
    priority: &str,
    sent: &str,
) -> String {
    format!(
        "{index:>3}  {sender:<28}{subject:<w$}  {issue:<22}{sentiment:<10}{priority:<12}{sent}\n",
        w = SUBJECT_WIDTH,
    )
}

/// Detail block for one record: body, extracted details, contacts, draft.
pub fn render_detail(record: &EnrichedRecord, config: &QueueConfig) -> String {
    let placeholder = config.placeholder.as_str();
    let email = &record.email;
    format!(
        "{} \u{2014} {}\n\
         \nBody:\n{}\n\
         \nIssue: {}  Sentiment: {}  Priority: {}\n\
         \nContacts in body:\n  \
         Email: {}\n  \
         Phone: {}\n\
         \nDraft response:\n{}\n",
        email.sender,
        email.subject,
        email.body,
        record.issue_type,
        record.sentiment,
        record.priority,
        record.contacts_email.as_deref().unwrap_or(placeholder),
        record.contacts_phone.as_deref().unwrap_or(placeholder),
        record.draft_response,
    )
}

/// Cut to `max` characters, marking the cut with an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    let single_line = s.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= max {
        return single_line;
    }
    let mut cut: String = single_line.chars().take(max.saturating_sub(1)).collect();
    cut.push('\u{2026}');
    cut
}
