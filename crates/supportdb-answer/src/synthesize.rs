use tracing::debug;

use supportdb_core::traits::Responder;
use supportdb_core::types::{SearchResult, Source, SynthesizedAnswer};

use crate::steps::format_steps;
use crate::templates::{conclusion, intro, NO_MATCH_REPLY};

/// Top scores below this produce the canned no-match reply.
pub const MIN_RELEVANCE: f64 = 0.1;
pub const NO_MATCH_COMPLIANCE: u8 = 50;
pub const MAX_COMPLIANCE: u8 = 95;
/// Cap on displayed source relevance.
pub const MAX_SOURCE_RELEVANCE: f64 = 0.99;

/// `min(95, round(top * 100) + 50)`. Boosted scores above 1.0 saturate at 95.
pub fn compliance_score(top_score: f64) -> u8 {
    let raw = (top_score * 100.0).round() + f64::from(NO_MATCH_COMPLIANCE);
    if raw >= f64::from(MAX_COMPLIANCE) {
        MAX_COMPLIANCE
    } else {
        // below 95 and at least 50 for non-negative scores
        raw.max(0.0) as u8
    }
}

fn sources(result: &SearchResult<'_>) -> Vec<Source> {
    result
        .hits()
        .map(|(doc, score)| Source {
            title: doc.title.clone(),
            url: doc.url.clone(),
            relevance: score.min(MAX_SOURCE_RELEVANCE),
        })
        .collect()
}

fn no_match() -> SynthesizedAnswer {
    SynthesizedAnswer {
        text: NO_MATCH_REPLY.to_string(),
        compliance_score: NO_MATCH_COMPLIANCE,
        sources: Vec::new(),
    }
}

/// Build the answer for `query` from a ranked result.
///
/// Relevance values are the ranker's (possibly boosted) scores, capped at 0.99.
pub fn synthesize(query: &str, result: &SearchResult<'_>) -> SynthesizedAnswer {
    let Some((top, top_score)) = result.top() else {
        debug!(query, "no ranked articles");
        return no_match();
    };
    if top_score < MIN_RELEVANCE {
        debug!(query, top_score, "top article below relevance floor");
        return no_match();
    }

    let text = format!(
        "{}{}{}",
        intro(result.intent),
        format_steps(&top.body),
        conclusion(result.intent)
    );
    SynthesizedAnswer {
        text,
        compliance_score: compliance_score(top_score),
        sources: sources(result),
    }
}

/// [`Responder`] backed by [`synthesize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateResponder;

impl Responder for TemplateResponder {
    fn respond(&self, query: &str, result: &SearchResult<'_>) -> SynthesizedAnswer {
        synthesize(query, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supportdb_core::types::{Document, Intent};

    fn doc_x() -> Document {
        Document {
            id: "x".to_string(),
            title: "Doc X".to_string(),
            body: "Plain body.".to_string(),
            url: "https://example.com/x".to_string(),
            category: "Billing".to_string(),
            last_updated: String::new(),
            owner: None,
        }
    }

    #[test]
    fn below_floor_is_apology() {
        let doc = doc_x();
        let result = SearchResult {
            articles: vec![&doc],
            scores: vec![0.05],
            intent: Intent::General,
        };
        let answer = synthesize("anything", &result);
        assert_eq!(answer.text, NO_MATCH_REPLY);
        assert_eq!(answer.compliance_score, 50);
        assert!(answer.sources.is_empty());
    }

    #[test]
    fn empty_result_is_apology() {
        let answer = synthesize("anything", &SearchResult::empty(Intent::Billing));
        assert_eq!(answer.text, NO_MATCH_REPLY);
        assert_eq!(answer.compliance_score, 50);
    }

    #[test]
    fn match_path_scores_and_cites() {
        let doc = doc_x();
        let result = SearchResult {
            articles: vec![&doc],
            scores: vec![0.3],
            intent: Intent::General,
        };
        let answer = synthesize("anything", &result);
        assert_eq!(answer.compliance_score, 80);
        assert_eq!(answer.sources.len(), 1);
        assert_eq!(answer.sources[0].relevance, 0.3);
        assert_eq!(answer.sources[0].url, "https://example.com/x");
        assert_eq!(
            answer.text,
            "Thank you for your question! Plain body. I hope this information helps! Let me know if you have any other questions."
        );
    }

    #[test]
    fn floor_is_inclusive() {
        let doc = doc_x();
        let result = SearchResult {
            articles: vec![&doc],
            scores: vec![0.1],
            intent: Intent::Billing,
        };
        let answer = synthesize("bill", &result);
        assert_eq!(answer.compliance_score, 60);
        assert!(answer.text.starts_with("I understand you have a question about billing. "));
    }

    #[test]
    fn compliance_clamps_at_ninety_five() {
        assert_eq!(compliance_score(0.44), 94);
        assert_eq!(compliance_score(0.45), 95);
        assert_eq!(compliance_score(1.5), 95);
        assert_eq!(compliance_score(0.125), 63);
    }

    #[test]
    fn relevance_capped_but_boosted() {
        let a = doc_x();
        let mut b = doc_x();
        b.title = "Doc Y".to_string();
        let result = SearchResult {
            articles: vec![&a, &b],
            scores: vec![1.2, 0.6],
            intent: Intent::Billing,
        };
        let answer = synthesize("bill", &result);
        let relevance: Vec<f64> = answer.sources.iter().map(|s| s.relevance).collect();
        assert_eq!(relevance, vec![0.99, 0.6]);
        assert_eq!(answer.sources[1].title, "Doc Y");
    }
}
