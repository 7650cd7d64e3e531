use std::fmt;

use serde::{Deserialize, Serialize};

use crate::InvalidWordError;

use super::cell::Letter;

/// A non-empty sequence of uppercase ASCII letters.
///
/// Input text matching `[A-Za-z]+` is case-folded to uppercase on
/// construction; anything else is rejected.
///
/// # Example
///
/// ```
/// use crossgen_engine::Word;
///
/// let word = Word::new("Python").unwrap();
/// assert_eq!(word.as_str(), "PYTHON");
/// assert_eq!(word.len(), 6);
///
/// assert!(Word::new("").is_err());
/// assert!(Word::new("e-mail").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

#[allow(clippy::len_without_is_empty)]
impl Word {
    pub fn new(text: &str) -> Result<Self, InvalidWordError> {
        if text.is_empty() {
            return Err(InvalidWordError::Empty);
        }
        if let Some(ch) = text.chars().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(InvalidWordError::NonAlphabetic {
                word: text.to_owned(),
                ch,
            });
        }
        Ok(Self(text.to_ascii_uppercase()))
    }

    /// Number of letters (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letters(&self) -> impl ExactSizeIterator<Item = Letter> + Clone + '_ {
        self.0.bytes().map(Letter::from_upper_byte)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Word {
    type Error = InvalidWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

/// A candidate word paired with the clue shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: Word,
    pub definition: String,
}

impl WordEntry {
    pub fn new(word: &str, definition: impl Into<String>) -> Result<Self, InvalidWordError> {
        Ok(Self {
            word: Word::new(word)?,
            definition: definition.into(),
        })
    }
}
