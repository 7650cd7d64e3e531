use std::collections::HashSet;

/// Shortest word kept by [`extract_words`].
pub const MIN_WORD_LEN: usize = 3;

/// Common short words that make poor crossword entries.
pub const STOPWORDS: [&str; 38] = [
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old", "see",
    "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too", "use",
];

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Splits `text` into lowercase tokens.
///
/// Every character that is neither alphanumeric, `_` nor whitespace acts as a
/// separator, so `"don't"` yields `"don"` and `"t"`.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|ch: char| !is_word_char(ch))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Keeps the tokens of `text` that make usable words.
///
/// A token is kept if it has at least [`MIN_WORD_LEN`] characters, consists
/// of ASCII letters only and is not one of the [`STOPWORDS`]. Repeats are
/// dropped; the result is in order of first occurrence.
#[must_use]
pub fn extract_words(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .filter(|token| {
            token.len() >= MIN_WORD_LEN
                && token.chars().all(|ch| ch.is_ascii_alphabetic())
                && !STOPWORDS.contains(&token.as_str())
        })
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
