//! Intent classification over ordered keyword rules.
//!
//! Substring containment against small fixed keyword lists, evaluated in a
//! fixed priority order. First match wins; anything unmatched is `General`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category of a user request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Funding rounds, investments, raises
    Funding,
    /// Trending topics and market movements
    Trends,
    /// Breaking or latest news
    News,
    /// Competitor activity
    Competition,
    /// Digest delivery and email actions
    Email,
    /// Capability questions
    Help,
    /// Everything else
    General,
}

impl Intent {
    /// Returns a human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Funding => "funding",
            Intent::Trends => "trends",
            Intent::News => "news",
            Intent::Competition => "competition",
            Intent::Email => "email",
            Intent::Help => "help",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One classification rule: the rule's intent applies when any of its
/// keywords is contained in the lower-cased query.
struct IntentRule {
    intent: Intent,
    keywords: &'static [&'static str],
}

/// Priority-ordered rule table. The order is part of the contract: funding
/// outranks trends, trends outrank news, and so on down to the help rule.
const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Funding,
        keywords: &["fund", "investment", "raise"],
    },
    IntentRule {
        intent: Intent::Trends,
        keywords: &["trend", "trending"],
    },
    IntentRule {
        intent: Intent::News,
        keywords: &["news", "latest", "breaking"],
    },
    IntentRule {
        intent: Intent::Competition,
        keywords: &["competitor", "competition"],
    },
    IntentRule {
        intent: Intent::Email,
        keywords: &["email", "digest", "send"],
    },
    IntentRule {
        intent: Intent::Help,
        keywords: &["help", "what can you"],
    },
];

/// Intent classifier over the fixed rule table.
pub struct IntentClassifier;

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify the intent of a query. Matching is case-insensitive
    /// substring containment; ties are impossible since rules are evaluated
    /// in a fixed order.
    pub fn classify(&self, query: &str) -> Intent {
        let query = query.to_lowercase();

        for rule in RULES {
            if rule.keywords.iter().any(|keyword| query.contains(keyword)) {
                return rule.intent;
            }
        }

        Intent::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funding_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("recent funding rounds"), Intent::Funding);
        assert_eq!(classifier.classify("VC investment activity"), Intent::Funding);
        assert_eq!(classifier.classify("who is about to RAISE"), Intent::Funding);
    }

    #[test]
    fn test_priority_order() {
        let classifier = IntentClassifier::new();

        // "funding" and "news" both present: funding is checked first.
        assert_eq!(classifier.classify("urgent AI funding news"), Intent::Funding);
        // "trend" and "breaking" both present: trends outrank news.
        assert_eq!(classifier.classify("breaking trend report"), Intent::Trends);
    }

    #[test]
    fn test_each_rule_fires() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("what's trending"), Intent::Trends);
        assert_eq!(classifier.classify("latest developments"), Intent::News);
        assert_eq!(classifier.classify("competitor moves"), Intent::Competition);
        assert_eq!(classifier.classify("schedule the digest"), Intent::Email);
        assert_eq!(classifier.classify("what can you do"), Intent::Help);
    }

    #[test]
    fn test_general_fallback() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify(""), Intent::General);
        assert_eq!(classifier.classify("tell me something"), Intent::General);
        assert_eq!(classifier.classify("!@#$%"), Intent::General);
    }

    #[test]
    fn test_substring_containment_is_literal() {
        let classifier = IntentClassifier::new();

        // "fund" matches inside "refund" by design of the contract.
        assert_eq!(classifier.classify("refund policy"), Intent::Funding);
    }
}
