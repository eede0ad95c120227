//! Knowledge-base loading and pre-search filtering.
//!
//! A corpus is either a single JSON file holding an array of documents, or a
//! directory tree of `*.json` files, each holding an array or one document.
//! Files are read in sorted path order so document order (and therefore rank
//! tie-breaking) is stable across runs.
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::FilterSettings;
use crate::types::Document;
use crate::{Error, Result};

pub const ALL_CATEGORIES: &str = "All";

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Many(Vec<Document>),
    One(Document),
}

pub fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    if !path.exists() {
        return Err(Error::NotFound(path.display().to_string()));
    }
    let files = if path.is_dir() { list_json_files(path) } else { vec![path.to_path_buf()] };
    if files.is_empty() {
        warn!(dir = %path.display(), "no .json files found; corpus is empty");
    }

    let mut documents = Vec::new();
    for file in &files {
        let parsed = read_corpus_file(file)?;
        debug!(file = %file.display(), documents = parsed.len(), "loaded corpus file");
        documents.extend(parsed);
    }
    validate(&documents)?;
    Ok(documents)
}

/// Parse documents from an in-memory JSON string (array or single document).
pub fn parse_corpus(json: &str) -> Result<Vec<Document>> {
    let documents = match serde_json::from_str::<CorpusFile>(json)? {
        CorpusFile::Many(docs) => docs,
        CorpusFile::One(doc) => vec![doc],
    };
    validate(&documents)?;
    Ok(documents)
}

fn read_corpus_file(file: &Path) -> Result<Vec<Document>> {
    let content = fs::read_to_string(file)?;
    let parsed = serde_json::from_str::<CorpusFile>(&content)
        .map_err(|e| Error::InvalidCorpus(format!("{}: {}", file.display(), e)))?;
    Ok(match parsed {
        CorpusFile::Many(docs) => docs,
        CorpusFile::One(doc) => vec![doc],
    })
}

fn validate(documents: &[Document]) -> Result<()> {
    let mut ids = HashSet::new();
    let mut titles = HashSet::new();
    for doc in documents {
        if !ids.insert(doc.id.as_str()) {
            return Err(Error::InvalidCorpus(format!("duplicate document id '{}'", doc.id)));
        }
        // Titles double as display keys downstream; tolerated but flagged.
        if !titles.insert(doc.title.as_str()) {
            warn!(id = %doc.id, title = %doc.title, "duplicate document title");
        }
    }
    Ok(())
}

fn list_json_files(root: &Path) -> Vec<PathBuf> {
    let mut json_files = Vec::new();
    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            json_files.push(path.to_path_buf());
        }
    }
    json_files.sort();
    json_files
}

/// Caller-side restriction applied before ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    /// `None` or `"All"` keeps every category.
    pub category: Option<String>,
    /// Selected owners. Ignored when empty or when it covers every owner in the corpus.
    pub owners: Vec<String>,
}

impl DocumentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owners.push(owner.into());
        self
    }

    pub fn from_settings(settings: &FilterSettings) -> Self {
        Self { category: settings.category.clone(), owners: settings.owners.clone() }
    }

    pub fn apply<'a>(&self, documents: &'a [Document]) -> Vec<&'a Document> {
        let by_category: Vec<&Document> = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => documents.iter().collect(),
            Some(category) => documents.iter().filter(|d| d.category == category).collect(),
        };

        if !self.restricts_owners(documents) {
            return by_category;
        }
        by_category
            .into_iter()
            .filter(|d| d.owner.as_ref().is_some_and(|o| self.owners.contains(o)))
            .collect()
    }

    fn restricts_owners(&self, documents: &[Document]) -> bool {
        if self.owners.is_empty() {
            return false;
        }
        let roster = owners(documents);
        !roster.iter().all(|o| self.owners.iter().any(|s| s == o))
    }
}

/// Distinct owners present in the corpus, sorted.
pub fn owners(documents: &[Document]) -> BTreeSet<&str> {
    documents.iter().filter_map(|d| d.owner.as_deref()).collect()
}

/// Distinct categories present in the corpus, sorted.
pub fn categories(documents: &[Document]) -> BTreeSet<&str> {
    documents.iter().map(|d| d.category.as_str()).collect()
}
