//! Argument handling for the `supportdb` binary.

use anyhow::{anyhow, bail, Result};
use std::path::PathBuf;

use supportdb_core::config::Settings;

pub const USAGE: &str = "Usage: supportdb <search|ask|intent|phrases> <query|doc-id> \
[--corpus PATH] [--limit N] [--category NAME] [--owner NAME]... [--json]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rank the corpus and list hits.
    Search,
    /// Rank, synthesize and print an answer.
    Ask,
    /// Show the classified intent and per-intent keyword hits.
    Intent,
    /// Key phrases of one document, by id.
    Phrases,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub query: String,
    pub corpus: Option<PathBuf>,
    pub limit: Option<usize>,
    pub category: Option<String>,
    pub owners: Vec<String>,
    pub json: bool,
}

impl Args {
    /// Layer command-line overrides on top of configured settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(limit) = self.limit {
            settings.search.top_n = limit;
        }
        if let Some(category) = &self.category {
            settings.filter.category = Some(category.clone());
        }
        if !self.owners.is_empty() {
            settings.filter.owners = self.owners.clone();
        }
    }
}

fn flag_value<I: Iterator<Item = String>>(flag: &str, args: &mut I) -> Result<String> {
    args.next().ok_or_else(|| anyhow!("{} requires a value", flag))
}

pub fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = match args.next().as_deref() {
        Some("search") => Command::Search,
        Some("ask") => Command::Ask,
        Some("intent") => Command::Intent,
        Some("phrases") => Command::Phrases,
        Some(other) => bail!("Unknown command: {}", other),
        None => bail!("Missing command"),
    };

    let mut parsed = Args {
        command,
        query: String::new(),
        corpus: None,
        limit: None,
        category: None,
        owners: Vec::new(),
        json: false,
    };
    let mut words: Vec<String> = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--corpus" => parsed.corpus = Some(PathBuf::from(flag_value("--corpus", &mut args)?)),
            "--limit" => {
                let raw = flag_value("--limit", &mut args)?;
                let limit = raw
                    .parse()
                    .map_err(|_| anyhow!("--limit expects a non-negative integer, got '{}'", raw))?;
                parsed.limit = Some(limit);
            }
            "--category" => parsed.category = Some(flag_value("--category", &mut args)?),
            "--owner" => parsed.owners.push(flag_value("--owner", &mut args)?),
            "--json" => parsed.json = true,
            s if s.starts_with("--") => bail!("Unknown flag: {}", s),
            word => words.push(word.to_string()),
        }
    }

    parsed.query = words.join(" ");
    if parsed.command == Command::Phrases && parsed.query.is_empty() {
        bail!("phrases requires a document id");
    }
    Ok(parsed)
}
