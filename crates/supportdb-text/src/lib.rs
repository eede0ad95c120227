//! supportdb-text
//!
//! Lexical relevance ranking: tokenizer, term-frequency vectors, cosine
//! similarity, keyword intent classification and the intent-boosted ranker.
//! See `examples/search.rs` for ranking the demo knowledge base from the CLI.
pub mod intent;
pub mod phrases;
pub mod rank;
pub mod similarity;
pub mod tokenize;
pub mod vectorize;

pub use intent::classify_intent;
pub use phrases::{document_key_phrases, extract_key_phrases};
pub use rank::{search, LexicalRanker};
pub use similarity::cosine_similarity;
pub use tokenize::tokenize;
pub use vectorize::{term_frequency, TermVector};
