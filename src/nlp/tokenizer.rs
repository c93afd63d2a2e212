//! Whitespace tokenization with skill-aware cleaning

/// Tokenizer producing lowercase tokens for the extraction pipeline.
///
/// Splits on whitespace and strips surrounding punctuation, but keeps
/// characters that carry meaning in skill names (`c++`, `c#`, `ci/cd`,
/// `b.sc`, `scikit-learn`). Deterministic: identical text yields an
/// identical token sequence.
#[derive(Debug, Default, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|word| {
                let token = clean_token(word);
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            })
            .collect()
    }
}

fn clean_token(word: &str) -> String {
    let kept: String = word
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '/' | '-'))
        .collect();

    // Separator characters are meaningful inside a token, not at its edges
    kept.trim_matches(|c: char| matches!(c, '.' | '/' | '-'))
        .to_lowercase()
}
