use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use supportdb_answer::{personalize, TemplateResponder};
use supportdb_core::config::{Config, Settings, DEFAULT_TOP_N};
use supportdb_core::corpus::{load_corpus, DocumentFilter};
use supportdb_core::traits::{Ranker, Responder};
use supportdb_core::types::{Document, Profile, SearchResult, SynthesizedAnswer};
use supportdb_text::LexicalRanker;

/// One question and everything produced for it.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange<'a> {
    pub query: String,
    pub result: SearchResult<'a>,
    pub answer: SynthesizedAnswer,
}

pub struct Assistant<R, S>
where
    R: Ranker,
    S: Responder,
{
    ranker: R,
    responder: S,
    documents: Vec<Document>,
    filter: DocumentFilter,
    profile: Profile,
    top_n: usize,
}

impl Assistant<LexicalRanker, TemplateResponder> {
    pub fn lexical(documents: Vec<Document>) -> Self {
        Self::new(LexicalRanker, TemplateResponder, documents)
    }

    /// Load the configured corpus and apply the configured filter, profile and `top_n`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let path = config.corpus_path()?;
        let documents = load_corpus(&path)?;
        info!(corpus = %path.display(), documents = documents.len(), "loaded knowledge base");
        Ok(Self::lexical(documents).with_settings(&config.settings()?))
    }
}

impl<R, S> Assistant<R, S>
where
    R: Ranker,
    S: Responder,
{
    pub fn new(ranker: R, responder: S, documents: Vec<Document>) -> Self {
        Self {
            ranker,
            responder,
            documents,
            filter: DocumentFilter::default(),
            profile: Profile::default(),
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_filter(mut self, filter: DocumentFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_settings(self, settings: &Settings) -> Self {
        self.with_filter(DocumentFilter::from_settings(&settings.filter))
            .with_profile(settings.profile.clone())
            .with_top_n(settings.search.top_n)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn filter(&self) -> &DocumentFilter {
        &self.filter
    }

    /// Filter the corpus, then rank it.
    pub fn search(&self, query: &str) -> SearchResult<'_> {
        let candidates = self.filter.apply(&self.documents);
        debug!(candidates = candidates.len(), total = self.documents.len(), "filtered corpus");
        self.ranker.rank(query, candidates, self.top_n)
    }

    /// Search, synthesize an answer and personalize it for the current profile.
    pub fn ask(&self, query: &str) -> Exchange<'_> {
        let result = self.search(query);
        let mut answer = self.responder.respond(query, &result);
        answer.text = personalize(&answer.text, &self.profile);
        info!(
            intent = %result.intent,
            sources = answer.sources.len(),
            compliance = answer.compliance_score,
            "answered query"
        );
        Exchange { query: query.to_string(), result, answer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supportdb_core::types::Intent;

    fn doc(id: &str, title: &str, body: &str, category: &str, owner: &str) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            url: format!("https://kb.example/{id}"),
            category: category.to_string(),
            last_updated: String::new(),
            owner: Some(owner.to_string()),
        }
    }

    fn corpus() -> Vec<Document> {
        vec![
            doc("1", "Invoices", "Download every invoice from the billing page.", "Billing", "Ann"),
            doc(
                "2",
                "Invoice disputes",
                "Dispute an invoice charge with support.",
                "Troubleshooting",
                "Bob",
            ),
            doc(
                "3",
                "Passwords",
                "Reset your password from the login page.",
                "Account Management",
                "Ann",
            ),
        ]
    }

    #[test]
    fn category_filter_runs_before_ranking() {
        let assistant = Assistant::lexical(corpus())
            .with_filter(DocumentFilter::new().with_category("Troubleshooting"));
        let result = assistant.search("invoice");
        assert_eq!(result.len(), 1);
        assert_eq!(result.articles[0].id, "2");
        assert_eq!(result.intent, Intent::Billing);
    }

    #[test]
    fn owner_filter_subset() {
        let assistant =
            Assistant::lexical(corpus()).with_filter(DocumentFilter::new().with_owner("Bob"));
        let result = assistant.search("invoice");
        let ids: Vec<&str> = result.articles.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn filter_excluding_everything_gives_apology() {
        let assistant = Assistant::lexical(corpus())
            .with_filter(DocumentFilter::new().with_category("Security"));
        let exchange = assistant.ask("reset password");
        assert!(exchange.result.is_empty());
        assert_eq!(exchange.result.intent, Intent::PasswordReset);
        assert_eq!(exchange.answer.compliance_score, 50);
    }

    #[test]
    fn ask_personalizes() {
        let profile = Profile { name: "Dana".to_string(), ..Profile::default() };
        let assistant = Assistant::lexical(corpus()).with_profile(profile).with_top_n(1);
        let exchange = assistant.ask("reset password");
        assert!(exchange
            .answer
            .text
            .starts_with("Hi Dana! I'd be happy to help you with resetting your password! "));
        assert_eq!(exchange.answer.sources.len(), 1);
        assert_eq!(exchange.answer.sources[0].url, "https://kb.example/3");
    }
}
