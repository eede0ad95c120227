//! Heuristic reformatting of article bodies into numbered steps.
//!
//! A body that mentions step-like wording is split on `". "`; every sentence
//! containing an action verb gets a `**Step N**:` label, where N is the
//! sentence's position in the full split. Step numbers can therefore skip.

use regex::Regex;
use std::sync::LazyLock;

static STEP_INDICATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)first|then|next|finally|follow|steps|click on|navigate|go to")
        .expect("static regex")
});

static ACTION_VERBS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)click|navigate|go to|select|enable|choose|enter|follow|open")
        .expect("static regex")
});

const SENTENCE_BREAK: &str = ". ";
const STEP_BREAK: &str = "\n\n";

pub fn has_step_indicators(body: &str) -> bool {
    STEP_INDICATORS.is_match(body)
}

pub fn format_steps(body: &str) -> String {
    if !has_step_indicators(body) {
        return body.to_string();
    }

    let mut labelled = false;
    let sentences: Vec<String> = body
        .split(SENTENCE_BREAK)
        .enumerate()
        .map(|(index, sentence)| {
            if ACTION_VERBS.is_match(sentence) {
                labelled = true;
                format!("{STEP_BREAK}**Step {}**: {sentence}", index + 1)
            } else {
                sentence.to_string()
            }
        })
        .collect();

    if !labelled {
        return format!("{STEP_BREAK}**Here's how to do this:**{STEP_BREAK}{body}");
    }
    let formatted = sentences.join(SENTENCE_BREAK);
    formatted.strip_prefix(STEP_BREAK).unwrap_or(&formatted).to_string()
}
