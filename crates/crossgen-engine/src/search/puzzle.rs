use serde::Serialize;

use crate::core::{Grid, Orientation, Word};

use super::{attempt::Attempt, placement_index::PlacementRecord};

/// A numbered clue.
///
/// The number is the word's 1-based position in placement order, shared by
/// the across and down lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clue {
    pub number: usize,
    pub definition: String,
}

/// Snapshot of the best attempt of a search.
///
/// # Clue Numbering
///
/// Clues are numbered by placement order across both directions, not per
/// direction. If the second and third placed words run down and the first
/// runs across, the lists are `across = [1]` and `down = [2, 3]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PuzzleResult {
    grid: Grid,
    placed_words: Vec<Word>,
    placements: Vec<PlacementRecord>,
    score: f64,
    across_clues: Vec<Clue>,
    down_clues: Vec<Clue>,
}

impl PuzzleResult {
    /// Copies the grid and placements out of `attempt` and derives the clue
    /// lists.
    #[must_use]
    pub fn from_attempt(attempt: &Attempt) -> Self {
        let placements = attempt.placements().records().to_vec();
        let mut across_clues = vec![];
        let mut down_clues = vec![];
        for (i, record) in placements.iter().enumerate() {
            let clue = Clue {
                number: i + 1,
                definition: record.clue.clone(),
            };
            match record.orientation {
                Orientation::Across => across_clues.push(clue),
                Orientation::Down => down_clues.push(clue),
            }
        }
        Self {
            grid: attempt.grid().clone(),
            placed_words: placements.iter().map(|r| r.word.clone()).collect(),
            placements,
            score: attempt.score(),
            across_clues,
            down_clues,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn placed_words(&self) -> &[Word] {
        &self.placed_words
    }

    #[must_use]
    pub fn placements(&self) -> &[PlacementRecord] {
        &self.placements
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn across_clues(&self) -> &[Clue] {
        &self.across_clues
    }

    #[must_use]
    pub fn down_clues(&self) -> &[Clue] {
        &self.down_clues
    }

    #[must_use]
    pub fn clues(&self, orientation: Orientation) -> &[Clue] {
        match orientation {
            Orientation::Across => &self.across_clues,
            Orientation::Down => &self.down_clues,
        }
    }
}
