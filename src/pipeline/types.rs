//! Shared types for the enrichment pipeline.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ── Inbound record ──────────────────────────────────────────────────

/// A raw support email as supplied by ingestion.
///
/// All fields are free-form text. Missing cells arrive as empty strings;
/// the pipeline never rejects a record for its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Sender address (usually `name@domain`).
    #[serde(default)]
    pub sender: String,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Message body.
    #[serde(default)]
    pub body: String,
    /// Sent date exactly as it appeared in the source.
    #[serde(default)]
    pub sent_date: String,
}

impl EmailRecord {
    pub fn new(sender: &str, subject: &str, body: &str, sent_date: &str) -> Self {
        Self {
            sender: sender.into(),
            subject: subject.into(),
            body: body.into(),
            sent_date: sent_date.into(),
        }
    }

    /// Subject and body joined the way the classifiers see them.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.subject, self.body)
    }
}

// ── Issue category ──────────────────────────────────────────────────

/// Closed taxonomy of support topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    LoginIssue,
    PasswordReset,
    BillingError,
    Downtime,
    IntegrationApi,
    Pricing,
    AccountVerification,
    Subscription,
    GeneralQuery,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 10] = [
        Self::LoginIssue,
        Self::PasswordReset,
        Self::BillingError,
        Self::Downtime,
        Self::IntegrationApi,
        Self::Pricing,
        Self::AccountVerification,
        Self::Subscription,
        Self::GeneralQuery,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::LoginIssue => "login_issue",
            Self::PasswordReset => "password_reset",
            Self::BillingError => "billing_error",
            Self::Downtime => "downtime",
            Self::IntegrationApi => "integration_api",
            Self::Pricing => "pricing",
            Self::AccountVerification => "account_verification",
            Self::Subscription => "subscription",
            Self::GeneralQuery => "general_query",
            Self::Other => "other",
        }
    }

    /// Map a label back to its category. Unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == label)
            .unwrap_or(Self::Other)
    }

    /// Parse a label case-insensitively. Unknown labels are `None`.
    pub fn parse_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Sentiment ───────────────────────────────────────────────────────

/// Four-quadrant sentiment from negative/positive lexicon presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Mixed,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 4] = [Self::Positive, Self::Negative, Self::Mixed, Self::Neutral];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Mixed => "Mixed",
            Self::Neutral => "Neutral",
        }
    }

    /// True when the text contained at least one negative marker.
    pub fn carries_negative(&self) -> bool {
        matches!(self, Self::Negative | Self::Mixed)
    }

    /// Parse a label case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Priority ────────────────────────────────────────────────────────

/// Binary urgency label.
///
/// Variant order follows the triage ordinal, so `Urgent < NotUrgent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Urgent,
    #[serde(rename = "Not urgent")]
    NotUrgent,
}

impl Priority {
    pub const ALL: [Priority; 2] = [Self::Urgent, Self::NotUrgent];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::NotUrgent => "Not urgent",
        }
    }

    /// Sort ordinal used by the queue view (lower sorts first).
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Urgent => 1,
            Self::NotUrgent => 2,
        }
    }

    /// Parse a label case-insensitively. Accepts `not-urgent` and `not_urgent`.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|p| p.label().to_lowercase() == normalized)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Enriched record ─────────────────────────────────────────────────

/// An email plus every signal the pipeline derives from it.
///
/// Built once by [`crate::pipeline::processor::enrich`]. Consumers read it
/// and may re-render the draft, but the derived fields are not recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub email: EmailRecord,
    /// Parsed `sent_date`, absent when no known format matched.
    pub sent_at: Option<NaiveDateTime>,
    pub eligible: bool,
    pub issue_type: IssueType,
    pub sentiment: Sentiment,
    pub priority: Priority,
    /// Sorted, deduplicated addresses found in the body.
    pub contacts_email: Option<String>,
    /// Sorted, deduplicated phone numbers found in the body.
    pub contacts_phone: Option<String>,
    pub draft_response: String,
}
