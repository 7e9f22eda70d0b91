use crate::api::{HighlightedWord, WordCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    pub text: String,
    pub category: WordCategory,
}

/// Tokenize `text` on whitespace runs and tag each token with the category of
/// the highlight entry at the same position. Untagged tokens are neutral.
pub fn highlight(text: &str, highlights: &[HighlightedWord]) -> Vec<WordToken> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| WordToken {
            text: word.to_string(),
            category: highlights
                .iter()
                .find(|h| h.index == i)
                .map(|h| h.kind)
                .unwrap_or(WordCategory::Other),
        })
        .collect()
}
