//! supportdb-answer
//!
//! Turns a ranked [`SearchResult`](supportdb_core::types::SearchResult) into a
//! friendly, templated answer with a compliance score and cited sources.
pub mod personalize;
pub mod steps;
pub mod synthesize;
pub mod templates;

pub use personalize::personalize;
pub use steps::format_steps;
pub use synthesize::{synthesize, TemplateResponder};
