//! Email address and phone number extraction from message bodies.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use regex::Regex;

use crate::pipeline::text::join_sorted;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern")
});

/// Optional `+`, then at least nine digits/hyphens/spaces bounded by digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\-\s]{7,}\d").expect("phone pattern"));

/// Contact details found in a body. `None` means nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    pub emails: Option<String>,
    pub phones: Option<String>,
}

/// Scan raw (not case-folded) text for emails and phone numbers.
///
/// Emails are deduplicated by exact string, so `a@b.com` and `A@B.COM`
/// both survive. Phones are trimmed before deduplication.
pub fn extract_contacts(text: &str) -> Contacts {
    let emails = join_sorted(EMAIL_PATTERN.find_iter(text).map(|m| m.as_str()));
    let phones = join_sorted(PHONE_PATTERN.find_iter(text).map(|m| m.as_str().trim()));
    Contacts { emails, phones }
}
