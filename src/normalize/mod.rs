//! Text normalization applied to both inputs before scoring.
//!
//! Lowercase, replace ASCII punctuation with spaces, drop English stopwords,
//! and re-join the surviving tokens with single spaces. An empty result means
//! the text carried no meaningful content.

mod stopwords;


pub use stopwords::{ENGLISH_STOPWORDS, is_stopword};

/// Normalizes `text` for scoring. Blank input yields an empty string.
pub fn normalize(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let stripped: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();

    stripped
        .split_whitespace()
        .filter(|word| !is_stopword(word))
        .collect::<Vec<_>>()
        .join(" ")
}
