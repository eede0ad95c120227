use std::collections::HashMap;

use supportdb_core::types::Document;

use crate::tokenize::tokenize;

pub const MAX_KEY_PHRASES: usize = 5;

/// Most frequent tokens of `text`, at most [`MAX_KEY_PHRASES`].
/// Equally frequent tokens keep their first-occurrence order.
pub fn extract_key_phrases(text: &str) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text) {
        match position.get(&token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(MAX_KEY_PHRASES).map(|(token, _)| token).collect()
}

/// Key phrases of an article, drawn from its title and body.
pub fn document_key_phrases(document: &Document) -> Vec<String> {
    extract_key_phrases(&format!("{} {}", document.title, document.body))
}
