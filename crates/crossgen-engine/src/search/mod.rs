//! Layout search: placing words on a grid and keeping the best layout.
//!
//! The search is organized in layers:
//!
//! - [`PlacementIndex`] - Words placed so far and the intersection candidates
//!   they offer to the next word
//! - [`Attempt`] - One full placement pass over the length-sorted word list
//! - [`score_layout`] - Quality score of a finished attempt
//! - [`SearchLoop`] - Repeats attempts under a time and attempt budget and
//!   snapshots the best one as a [`PuzzleResult`]
//! - [`PuzzleGenerator`] - Builds a fresh [`SearchLoop`] per call
//!
//! # Search Flow
//!
//! 1. Sort the words by length, longest first (stable)
//! 2. Place the longest word across the middle of an empty grid
//! 3. Place every following word at its first valid intersection candidate,
//!    falling back to random positions while fewer than 3 words are placed
//! 4. Score the layout; keep it if it beats the best score so far
//! 5. Repeat until the clock or the attempt budget runs out
//!
//! Randomness enters only through the fallback in step 3, so repeated
//! attempts over the same words often produce the same layout.
//!
//! # Determinism
//!
//! The random source and the clock are both injected. With a seeded generator
//! and a [`FixedStepClock`], a search is fully reproducible.

pub use self::{
    attempt::*, clock::*, generator::*, placement_index::*, puzzle::*, scorer::*, search_loop::*,
    seed::*,
};

mod attempt;
mod clock;
mod generator;
mod placement_index;
mod puzzle;
mod scorer;
mod search_loop;
mod seed;
