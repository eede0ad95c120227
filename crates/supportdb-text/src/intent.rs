//! Keyword-based intent classification.
//!
//! Each intent owns a list of substring patterns. A query scores one point per
//! pattern found in its lowercased text; the best-scoring intent wins, with
//! ties resolved in favour of the intent declared first in [`INTENT_PATTERNS`].
//! No hits at all means [`Intent::General`].

use supportdb_core::types::Intent;

pub const INTENT_PATTERNS: &[(Intent, &[&str])] = &[
    (Intent::PasswordReset, &["reset", "password", "forgot", "login", "cannot access"]),
    (Intent::AccountUpdate, &["update", "change", "profile", "information", "details", "edit"]),
    (
        Intent::Integration,
        &["connect", "integration", "quickbooks", "stripe", "shopify", "integrate"],
    ),
    (
        Intent::Security,
        &["security", "secure", "protection", "two-factor", "2fa", "authentication"],
    ),
    (Intent::Billing, &["bill", "invoice", "payment", "charge", "subscription", "plan", "pricing"]),
    (
        Intent::Troubleshooting,
        &["error", "issue", "problem", "not working", "help", "fix", "trouble"],
    ),
    (
        Intent::Compliance,
        &[
            "compliance",
            "regulation",
            "regulatory",
            "kyc",
            "aml",
            "know your customer",
            "anti-money",
            "laundering",
            "ofac",
            "sanction",
            "privacy",
            "gdpr",
            "ccpa",
            "beneficial owner",
            "transaction monitoring",
            "suspicious activity",
            "report",
            "bsa",
            "bank secrecy",
            "verification",
            "identity",
        ],
    ),
];

/// Pattern hits per intent, in declaration order.
pub fn intent_scores(query: &str) -> Vec<(Intent, usize)> {
    let query = query.to_lowercase();
    INTENT_PATTERNS
        .iter()
        .map(|(intent, patterns)| (*intent, patterns.iter().filter(|p| query.contains(*p)).count()))
        .collect()
}

pub fn classify_intent(query: &str) -> Intent {
    let mut best = (Intent::General, 0);
    for (intent, score) in intent_scores(query) {
        if score > best.1 {
            best = (intent, score);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_reset_query() {
        assert_eq!(classify_intent("How do I reset my forgotten password?"), Intent::PasswordReset);
    }

    #[test]
    fn no_keywords_is_general() {
        assert_eq!(classify_intent("What's the weather today?"), Intent::General);
        assert_eq!(classify_intent(""), Intent::General);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(classify_intent("QuickBooks SYNC"), Intent::Integration);
        // "billing" contains "bill"
        assert_eq!(classify_intent("billing"), Intent::Billing);
    }

    #[test]
    fn ties_go_to_first_declared_intent() {
        // one hit each: "password" (password_reset) and "payment" (billing)
        let scores = intent_scores("password payment");
        assert_eq!(scores[0], (Intent::PasswordReset, 1));
        assert_eq!(scores[4], (Intent::Billing, 1));
        assert_eq!(classify_intent("password payment"), Intent::PasswordReset);
        assert_eq!(classify_intent("payment password"), Intent::PasswordReset);
    }

    #[test]
    fn higher_score_beats_declaration_order() {
        // password_reset: "password"; billing: "invoice", "payment"
        assert_eq!(classify_intent("invoice payment password"), Intent::Billing);
    }

    #[test]
    fn multi_word_patterns() {
        assert_eq!(classify_intent("I cannot access anything"), Intent::PasswordReset);
        assert_eq!(classify_intent("know your customer rules"), Intent::Compliance);
    }

    #[test]
    fn scores_cover_seven_declared_intents() {
        let scores = intent_scores("anything");
        assert_eq!(scores.len(), 7);
        assert!(scores.iter().all(|(i, _)| *i != Intent::General));
    }
}
