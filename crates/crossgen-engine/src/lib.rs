//! Placement-and-scoring search engine for crossword-style word grids.
//!
//! Given an ordered list of words paired with clues, the engine lays the words
//! out on a square grid so they cross where letters agree, scores each layout,
//! and keeps the best one found within a time and attempt budget.
//!
//! - [`core`] - Grid model ([`Grid`], [`Cell`], [`Orientation`]) and validated
//!   input words ([`Word`], [`WordEntry`])
//! - [`search`] - Intersection search ([`PlacementIndex`]), placement policy
//!   ([`Attempt`]), scoring, and the repeated-attempt [`SearchLoop`]
//!
//! # Example
//!
//! ```
//! use crossgen_engine::{FixedStepClock, SearchConfig, SearchLoop, WordEntry};
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//!
//! let words = vec![
//!     WordEntry::new("crossword", "A word puzzle").unwrap(),
//!     WordEntry::new("words", "Units of language").unwrap(),
//!     WordEntry::new("grid", "A network of lines").unwrap(),
//! ];
//!
//! let rng = Pcg32::seed_from_u64(7);
//! let clock = FixedStepClock::default();
//! let search = SearchLoop::new(SearchConfig::default(), rng, clock);
//! if let Some(puzzle) = search.generate(&words) {
//!     assert!(puzzle.placed_words().len() <= words.len());
//! }
//! ```

pub use self::{core::*, search::*};

pub mod core;
pub mod search;

/// Returned when a word does not fit the grid at the requested position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("word does not fit at ({row}, {col}) {orientation}")]
pub struct PlacementConflictError {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidWordError {
    #[display("word is empty")]
    Empty,
    #[display("word {word:?} contains non-alphabetic character {ch:?}")]
    NonAlphabetic { word: String, ch: char },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid seed: expected 32 hex digits, got {len}")]
    InvalidLength { len: usize },
    #[display("invalid seed: {_0}")]
    InvalidDigits(std::num::ParseIntError),
}
