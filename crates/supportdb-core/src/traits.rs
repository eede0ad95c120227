use crate::types::{Document, SearchResult, SynthesizedAnswer};

pub trait Ranker: Send + Sync {
    fn rank<'a, I>(&self, query: &str, documents: I, top_n: usize) -> SearchResult<'a>
    where
        I: IntoIterator<Item = &'a Document>;
}

pub trait Responder: Send + Sync {
    fn respond(&self, query: &str, result: &SearchResult<'_>) -> SynthesizedAnswer;
}
