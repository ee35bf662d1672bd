//! Tokenizers shared by the classifier, insights, and weekly summary.
//!
//! The classifier uses [`basic_tokens`] (no filtering); frequency analytics
//! use [`strict_tokens`] with a caller-chosen minimum token length.

/// Words carrying no food signal, dropped by [`strict_tokens`].
pub const STOPWORDS: [&str; 12] = [
    "a", "the", "and", "with", "of", "in", "for", "had", "ate", "some", "my", "an",
];

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Lowercase, split on whitespace and commas, keep everything else.
pub fn basic_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercase, split on every non-alphanumeric character, then drop stopwords
/// and tokens shorter than `min_len` characters.
pub fn strict_tokens(text: &str, min_len: usize) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty() && !is_stopword(t) && t.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}
