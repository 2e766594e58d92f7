//! Issue classification rules and the support-intent eligibility test.
//!
//! Rules are evaluated top to bottom and the first match wins, so table
//! order is a priority order: a message mentioning both "login" and
//! "refund" is a `login_issue`. Patterns run against case-folded text and
//! match anywhere (so "password" also hits "passwords").

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::pipeline::text::fold_case;
use crate::pipeline::types::IssueType;

/// Built-in rule table, highest priority first.
const ISSUE_PATTERNS: &[(IssueType, &str)] = &[
    (
        IssueType::LoginIssue,
        r"unable to log in|cannot log in|login|log into",
    ),
    (
        IssueType::PasswordReset,
        r"reset my password|reset link|password",
    ),
    (
        IssueType::BillingError,
        r"billing error|charged twice|refund",
    ),
    (
        IssueType::Downtime,
        r"servers are down|system.*inaccessible|downtime|completely inaccessible",
    ),
    (IssueType::IntegrationApi, r"integration|api|crm"),
    (IssueType::Pricing, r"pricing tier|pricing|cost"),
    (
        IssueType::AccountVerification,
        r"verification|verify my account|verification email",
    ),
    (IssueType::Subscription, r"subscription"),
    (IssueType::GeneralQuery, r"general query"),
];

/// Subject vocabulary that marks a message as a support request: explicit
/// asks plus the blocked-user phrasing that shows up in subjects.
static SUPPORT_INTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"support|query|request|help|urgent|cannot|unable").expect("support-intent pattern")
});

static DEFAULT_CLASSIFIER: LazyLock<IssueClassifier> = LazyLock::new(IssueClassifier::default_rules);

/// A single classification rule with a compiled regex.
#[derive(Debug, Clone)]
pub struct IssueRule {
    /// Category assigned when the rule matches.
    pub issue_type: IssueType,
    /// Compiled regex, matched against case-folded text.
    pub regex: Regex,
}

/// Ordered first-match-wins classifier.
#[derive(Debug, Clone)]
pub struct IssueClassifier {
    rules: Vec<IssueRule>,
}

impl IssueClassifier {
    /// Create a classifier with the built-in rule table.
    pub fn default_rules() -> Self {
        let rules = ISSUE_PATTERNS
            .iter()
            .map(|(issue_type, pattern)| IssueRule {
                issue_type: *issue_type,
                regex: Regex::new(pattern).expect("built-in issue pattern"),
            })
            .collect();
        Self { rules }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[IssueRule] {
        &self.rules
    }

    /// Classify text, returning the first matching rule's category or `Other`.
    pub fn classify(&self, text: &str) -> IssueType {
        let folded = fold_case(text);
        for rule in &self.rules {
            if rule.regex.is_match(&folded) {
                debug!(
                    issue_type = rule.issue_type.label(),
                    pattern = rule.regex.as_str(),
                    "Text matched issue rule"
                );
                return rule.issue_type;
            }
        }
        IssueType::Other
    }
}

impl Default for IssueClassifier {
    fn default() -> Self {
        Self::default_rules()
    }
}

/// Classify with the process-wide built-in table.
pub fn classify_issue(text: &str) -> IssueType {
    DEFAULT_CLASSIFIER.classify(text)
}

/// Does the subject signal support intent?
pub fn is_eligible(subject: &str) -> bool {
    SUPPORT_INTENT.is_match(&fold_case(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_login_issue() {
        assert_eq!(classify_issue("I cannot log in to my dashboard"), IssueType::LoginIssue);
    }

    #[test]
    fn classifies_password_reset() {
        assert_eq!(classify_issue("Please reset my password"), IssueType::PasswordReset);
    }

    #[test]
    fn classifies_billing_error() {
        assert_eq!(classify_issue("I was charged twice this month"), IssueType::BillingError);
    }

    #[test]
    fn classifies_downtime_across_words() {
        assert_eq!(
            classify_issue("The system has been inaccessible since noon"),
            IssueType::Downtime
        );
    }

    #[test]
    fn classifies_integration() {
        assert_eq!(classify_issue("Question about CRM sync"), IssueType::IntegrationApi);
    }

    #[test]
    fn classifies_pricing() {
        assert_eq!(classify_issue("What does the pro plan cost?"), IssueType::Pricing);
    }

    #[test]
    fn classifies_account_verification() {
        assert_eq!(
            classify_issue("Never received the verification email"),
            IssueType::AccountVerification
        );
    }

    #[test]
    fn classifies_subscription() {
        assert_eq!(classify_issue("Cancel my subscription"), IssueType::Subscription);
    }

    #[test]
    fn classifies_general_query() {
        assert_eq!(classify_issue("General query about your product"), IssueType::GeneralQuery);
    }

    #[test]
    fn unmatched_text_is_other() {
        assert_eq!(classify_issue("Hello there"), IssueType::Other);
        assert_eq!(classify_issue(""), IssueType::Other);
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        // login (rule 1) and billing error (rule 3) both present
        assert_eq!(
            classify_issue("Login fails and there is a billing error"),
            IssueType::LoginIssue
        );
        // password (rule 2) beats refund (rule 3)
        assert_eq!(
            classify_issue("Refund me, my password does not work"),
            IssueType::PasswordReset
        );
    }

    #[test]
    fn matches_inside_words() {
        assert_eq!(classify_issue("Forgot both passwords"), IssueType::PasswordReset);
        // "api" inside "rapid"
        assert_eq!(classify_issue("rapid growth"), IssueType::IntegrationApi);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify_issue("BILLING ERROR on invoice"), IssueType::BillingError);
    }

    #[test]
    fn rule_table_order_is_fixed() {
        let classifier = IssueClassifier::default_rules();
        let order: Vec<IssueType> = classifier.rules().iter().map(|r| r.issue_type).collect();
        assert_eq!(order, IssueType::ALL[..9].to_vec());
    }

    #[test]
    fn eligibility_matches_support_vocabulary() {
        assert!(is_eligible("Support needed"));
        assert!(is_eligible("Query about billing"));
        assert!(is_eligible("REQUEST: new seat"));
        assert!(is_eligible("Please help"));
        assert!(is_eligible("Helpdesk ticket"));
        assert!(is_eligible("URGENT: cannot log into account"));
    }

    #[test]
    fn eligibility_rejects_other_subjects() {
        assert!(!is_eligible("Invoice attached"));
        assert!(!is_eligible("Question about pricing tiers"));
        assert!(!is_eligible(""));
    }
}
