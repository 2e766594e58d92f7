//! Templated reply drafts.
//!
//! A draft is assembled from five fixed sections joined by blank lines:
//! greeting, acknowledgment (with an empathy sentence for urgent or
//! unhappy senders), a per-category summary, an SLA line and a signature.
//! Drafts are never sent; they are handed to a human for editing.

use crate::pipeline::types::{IssueType, Priority, Sentiment};

const FALLBACK_NAME: &str = "there";

const ACKNOWLEDGMENT: &str = "Thanks for writing in.";

const EMPATHY: &str = " I\u{2019}m sorry for the trouble you\u{2019}re facing\u{2014}we understand \
                       how disruptive this can be and we\u{2019}re on it.";

const SLA_URGENT: &str = "We\u{2019}ve prioritized your case and will update you shortly.";

const SLA_STANDARD: &str = "We\u{2019}ll review and get back to you soon.";

const CLOSING: &str = "Best regards,\nSupport Team";

/// Sentence used for `other` and anything the template table does not know.
pub const GENERIC_SUMMARY: &str =
    "Thanks for reaching out. Could you share more detail so I can assist quickly?";

/// Build the reply draft for one enriched message.
pub fn draft_response(
    sender: &str,
    issue_type: IssueType,
    sentiment: Sentiment,
    priority: Priority,
) -> String {
    let is_urgent = priority == Priority::Urgent;
    let empathy = if is_urgent || sentiment.carries_negative() {
        EMPATHY
    } else {
        ""
    };
    let sla = if is_urgent { SLA_URGENT } else { SLA_STANDARD };

    [
        format!("Hi {},", display_name(sender)),
        format!("{ACKNOWLEDGMENT}{empathy}"),
        issue_summary(issue_type).to_string(),
        sla.to_string(),
        CLOSING.to_string(),
    ]
    .join("\n\n")
}

/// Fixed summary sentence for each category.
pub fn issue_summary(issue_type: IssueType) -> &'static str {
    match issue_type {
        IssueType::LoginIssue => {
            "From your message, it looks like you\u{2019}re unable to access your account. \
             Please confirm your email/username."
        }
        IssueType::PasswordReset => {
            "You mentioned password reset issues. We\u{2019}ll verify the reset token validity \
             and email deliverability."
        }
        IssueType::BillingError => {
            "You flagged a billing concern. We\u{2019}ll audit your last invoice and payment events."
        }
        IssueType::Downtime => {
            "You reported a service outage. We\u{2019}re checking system health and incident logs."
        }
        IssueType::IntegrationApi => {
            "Regarding API/CRM integration, we support standard OAuth and webhook flows."
        }
        IssueType::Pricing => {
            "You asked about pricing tiers. I\u{2019}ll send a breakdown of plans and features."
        }
        IssueType::AccountVerification => {
            "You\u{2019}re facing account verification issues. We\u{2019}ll re-trigger the \
             verification email."
        }
        IssueType::Subscription => {
            "On subscription queries, happy to help with plan changes, renewals, or cancellations."
        }
        IssueType::GeneralQuery => {
            "Thanks for your general query. Could you share a bit more context?"
        }
        IssueType::Other => GENERIC_SUMMARY,
    }
}

/// Name used in the greeting: the local part of the address up to the
/// first `.`, title-cased. Falls back to "there" when nothing is left.
pub fn display_name(sender: &str) -> String {
    let local = sender.split('@').next().unwrap_or_default();
    let first = local.split('.').next().unwrap_or_default();
    if first.trim().is_empty() {
        return FALLBACK_NAME.to_string();
    }
    title_case(first)
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
