//! Turns free text into a word list for the crossword engine.
//!
//! - [`extract_words`] - Candidate words from raw text, filtered and
//!   de-duplicated
//! - [`DefinitionSource`] - Where clues come from ([`Glossary`],
//!   [`NoDefinitions`])
//! - [`build_word_list`] - Both steps combined into engine input
//!
//! # Example
//!
//! ```
//! use crossgen_words::{Glossary, build_word_list};
//!
//! let glossary: Glossary = [("rust", "A reddish corrosion")].into_iter().collect();
//! let entries = build_word_list("Rust never sleeps. RUST!", &glossary, 50);
//!
//! assert_eq!(entries.len(), 3);
//! assert_eq!(entries[0].word.as_str(), "RUST");
//! assert_eq!(entries[0].definition, "A reddish corrosion");
//! assert_eq!(entries[1].definition, "A never");
//! ```

pub use self::{definition::*, extract::*};

mod definition;
mod extract;

use crossgen_engine::WordEntry;

/// Word count used when the caller has no preference.
pub const DEFAULT_WORD_LIMIT: usize = 50;

/// Extracts words from `text` and pairs the first `limit` of them with
/// definitions from `source`.
///
/// Words without a definition get [`fallback_definition`].
pub fn build_word_list<S>(text: &str, source: &S, limit: usize) -> Vec<WordEntry>
where
    S: DefinitionSource + ?Sized,
{
    let words = extract_words(text);
    log::debug!("extracted {} distinct words, keeping {limit}", words.len());

    words
        .into_iter()
        .take(limit)
        .filter_map(|word| {
            let definition = source
                .define(&word)
                .unwrap_or_else(|| fallback_definition(&word));
            match WordEntry::new(&word, definition) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("skipping {word:?}: {e}");
                    None
                }
            }
        })
        .collect()
}
