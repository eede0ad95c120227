//! Word tokenizer: lowercase, drop punctuation, split on whitespace, discard
//! tokens of two characters or fewer. Order and duplicates are preserved since
//! term frequencies are counted from the output.

/// Tokens must be longer than this many bytes.
pub const MIN_TOKEN_LEN: usize = 2;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// ECMAScript `\s`: Unicode White_Space minus U+0085, plus the BOM.
fn is_separator(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || is_separator(c))
        .collect();

    cleaned
        .split(is_separator)
        .filter(|token| token.len() > MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}
