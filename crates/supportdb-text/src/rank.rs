//! Intent-boosted cosine ranking over an in-memory document set.

use tracing::debug;

use supportdb_core::traits::Ranker;
use supportdb_core::types::{Document, Intent, SearchResult};

use crate::intent::classify_intent;
use crate::similarity::cosine_similarity;
use crate::tokenize::tokenize;
use crate::vectorize::{term_frequency, TermVector};

/// Multiplier applied when a document's category matches the query intent.
pub const INTENT_BOOST: f64 = 1.5;

/// Category that receives [`INTENT_BOOST`] for `intent`, if any.
///
/// Compliance queries are not boosted toward "Compliance Resources".
pub fn boosted_category(intent: Intent) -> Option<&'static str> {
    match intent {
        Intent::PasswordReset | Intent::AccountUpdate => Some("Account Management"),
        Intent::Integration => Some("Integrations"),
        Intent::Security => Some("Security"),
        Intent::Billing => Some("Billing"),
        Intent::Troubleshooting => Some("Troubleshooting"),
        Intent::Compliance | Intent::General => None,
    }
}

/// Unboosted similarity of one document to the query.
pub fn raw_score(query_tokens: &[String], query_vector: &TermVector, document: &Document) -> f64 {
    let text = format!("{} {}", document.title, document.body);
    let document_vector = term_frequency(query_tokens, &tokenize(&text));
    cosine_similarity(query_vector, &document_vector)
}

fn boost(score: f64, intent: Intent, document: &Document) -> f64 {
    match boosted_category(intent) {
        Some(category) if document.category == category => score * INTENT_BOOST,
        _ => score,
    }
}

/// Rank `documents` against `query` and keep the best `top_n`.
///
/// Scores are sorted descending; equal scores keep the input order.
pub fn search<'a, I>(query: &str, documents: I, top_n: usize) -> SearchResult<'a>
where
    I: IntoIterator<Item = &'a Document>,
{
    let documents: Vec<&'a Document> = documents.into_iter().collect();
    let intent = classify_intent(query);
    if documents.is_empty() {
        debug!(%intent, "empty corpus");
        return SearchResult::empty(intent);
    }

    let query_tokens = tokenize(query);
    let query_vector = term_frequency(&query_tokens, &query_tokens);

    let mut scored: Vec<(usize, f64)> = documents
        .iter()
        .enumerate()
        .map(|(index, doc)| {
            let score = raw_score(&query_tokens, &query_vector, doc);
            (index, boost(score, intent, doc))
        })
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.truncate(top_n);

    debug!(
        %intent,
        candidates = documents.len(),
        kept = scored.len(),
        terms = query_vector.len(),
        "ranked corpus"
    );

    SearchResult {
        articles: scored.iter().map(|&(index, _)| documents[index]).collect(),
        scores: scored.iter().map(|&(_, score)| score).collect(),
        intent,
    }
}

/// [`Ranker`] backed by [`search`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalRanker;

impl Ranker for LexicalRanker {
    fn rank<'a, I>(&self, query: &str, documents: I, top_n: usize) -> SearchResult<'a>
    where
        I: IntoIterator<Item = &'a Document>,
    {
        search(query, documents, top_n)
    }
}
