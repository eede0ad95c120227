//! Domain types shared by the ranking and answer crates.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type DocumentId = String;

/// A knowledge-base article.
///
/// - `id`: stable identity within a corpus
/// - `title`: display name; expected to be unique within the active set
/// - `body`: the article text (`content` in the JSON fixtures)
/// - `category`: flat category label (e.g. "Account Management")
/// - `owner`: optional team member responsible for the article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    #[serde(alias = "content")]
    pub body: String,
    #[serde(default)]
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Coarse guess about what a query is asking for.
///
/// Variant order is the classifier's declaration order and decides ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    PasswordReset,
    AccountUpdate,
    Integration,
    Security,
    Billing,
    Troubleshooting,
    Compliance,
    General,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::PasswordReset => "password_reset",
            Intent::AccountUpdate => "account_update",
            Intent::Integration => "integration",
            Intent::Security => "security",
            Intent::Billing => "billing",
            Intent::Troubleshooting => "troubleshooting",
            Intent::Compliance => "compliance",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranked retrieval output: parallel `articles` / `scores` plus the query intent.
///
/// Scores are cosine similarities, possibly multiplied by the intent boost, so
/// they can exceed 1.0. Articles borrow from the corpus passed to the ranker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    pub articles: Vec<&'a Document>,
    pub scores: Vec<f64>,
    pub intent: Intent,
}

impl<'a> SearchResult<'a> {
    pub fn empty(intent: Intent) -> Self {
        Self { articles: Vec::new(), scores: Vec::new(), intent }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Best-ranked article and its score.
    pub fn top(&self) -> Option<(&'a Document, f64)> {
        self.hits().next()
    }

    /// Articles paired with their scores, in rank order.
    pub fn hits(&self) -> impl Iterator<Item = (&'a Document, f64)> + '_ {
        self.articles.iter().copied().zip(self.scores.iter().copied())
    }
}

/// A cited article in a synthesized answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub relevance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedAnswer {
    pub text: String,
    pub compliance_score: u8,
    pub sources: Vec<Source>,
}

pub const DEFAULT_PROFILE_NAME: &str = "John Doe";

/// Who the assistant is talking to. The default is a placeholder and is never
/// used to personalize answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub company: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROFILE_NAME.to_string(),
            role: "Product Manager".to_string(),
            company: "Acme Inc.".to_string(),
        }
    }
}
