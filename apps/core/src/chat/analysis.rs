//! Entity, sentiment, and urgency extraction.
//!
//! Fixed keyword-set scans over the lower-cased query. No scoring, no
//! weighting; presence of a keyword is the whole signal.

use serde::{Deserialize, Serialize};

use super::intent::{Intent, IntentClassifier};

/// Industry tokens recognized as entities, in reporting order.
pub const INDUSTRIES: &[&str] = &[
    "ai",
    "fintech",
    "healthcare",
    "saas",
    "ecommerce",
    "crypto",
    "blockchain",
];

const POSITIVE_WORDS: &[&str] = &["great", "awesome", "excellent", "good", "amazing", "fantastic"];
const NEGATIVE_WORDS: &[&str] = &["bad", "terrible", "awful", "poor", "disappointing"];

const HIGH_URGENCY: &[&str] = &["urgent", "asap", "immediately"];
const MEDIUM_URGENCY: &[&str] = &["soon", "quickly", "breaking"];

/// Tone inferred from the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Priority tier inferred from keyword presence. Drives the banner prefix
/// on composed responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Everything extracted from a single query. Derived fresh per query and
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnalysis {
    pub intent: Intent,
    pub entities: Vec<String>,
    pub sentiment: Sentiment,
    pub urgency: Urgency,
}

/// Analyzer combining the intent classifier with the keyword extractors.
pub struct QueryAnalyzer {
    classifier: IntentClassifier,
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryAnalyzer {
    /// Create a new query analyzer
    pub fn new() -> Self {
        Self {
            classifier: IntentClassifier::new(),
        }
    }

    /// Analyze a query into intent, entities, sentiment, and urgency.
    pub fn analyze(&self, query: &str) -> QueryAnalysis {
        let lower = query.to_lowercase();

        let intent = self.classifier.classify(&lower);

        let entities: Vec<String> = INDUSTRIES
            .iter()
            .filter(|industry| lower.contains(*industry))
            .map(|industry| industry.to_string())
            .collect();

        // Positive is checked first; a negative word afterwards overrides.
        // Last writer wins.
        let mut sentiment = Sentiment::Neutral;
        if POSITIVE_WORDS.iter().any(|word| lower.contains(word)) {
            sentiment = Sentiment::Positive;
        }
        if NEGATIVE_WORDS.iter().any(|word| lower.contains(word)) {
            sentiment = Sentiment::Negative;
        }

        let urgency = if HIGH_URGENCY.iter().any(|word| lower.contains(word)) {
            Urgency::High
        } else if MEDIUM_URGENCY.iter().any(|word| lower.contains(word)) {
            Urgency::Medium
        } else {
            Urgency::Low
        };

        QueryAnalysis {
            intent,
            entities,
            sentiment,
            urgency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_extraction_keeps_list_order() {
        let analyzer = QueryAnalyzer::new();

        let analysis = analyzer.analyze("blockchain and fintech and AI news");
        assert_eq!(analysis.entities, vec!["ai", "fintech", "blockchain"]);
    }

    #[test]
    fn test_no_entities() {
        let analyzer = QueryAnalyzer::new();

        let analysis = analyzer.analyze("what moved the markets today");
        assert!(analysis.entities.is_empty());
    }

    #[test]
    fn test_negative_overrides_positive() {
        let analyzer = QueryAnalyzer::new();

        let analysis = analyzer.analyze("great quarter but terrible guidance");
        assert_eq!(analysis.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_sentiment_defaults_neutral() {
        let analyzer = QueryAnalyzer::new();

        let analysis = analyzer.analyze("saas churn benchmarks");
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_urgency_tiers() {
        let analyzer = QueryAnalyzer::new();

        assert_eq!(analyzer.analyze("need this ASAP").urgency, Urgency::High);
        assert_eq!(analyzer.analyze("breaking story").urgency, Urgency::Medium);
        assert_eq!(analyzer.analyze("whenever you get to it").urgency, Urgency::Low);
    }

    #[test]
    fn test_empty_query() {
        let analyzer = QueryAnalyzer::new();

        let analysis = analyzer.analyze("");
        assert_eq!(analysis.intent, Intent::General);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(analysis.urgency, Urgency::Low);
        assert!(analysis.entities.is_empty());
    }
}
