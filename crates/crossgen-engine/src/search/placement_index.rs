use serde::{Deserialize, Serialize};

use crate::core::{Orientation, Word};

/// A word written into the grid, with its origin cell and clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub word: Word,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub clue: String,
}

/// A position where the next word could be tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

/// Words placed in the current attempt, in placement order.
///
/// Placement order matters twice: candidates are generated by walking the
/// placed words in this order, and the final clue numbers are 1-based indices
/// into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementIndex {
    records: Vec<PlacementRecord>,
}

impl PlacementIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn words(&self) -> impl ExactSizeIterator<Item = &Word> {
        self.records.iter().map(|record| &record.word)
    }

    pub fn push(&mut self, record: PlacementRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn into_records(self) -> Vec<PlacementRecord> {
        self.records
    }

    /// Lists positions that would run `word` perpendicular to an already
    /// placed word through a shared letter.
    ///
    /// For every placed word and every pair of equal letters `word[i]` and
    /// `placed[j]`:
    ///
    /// - placed across: candidate down at `(placed.row + j, placed.col - i)`
    /// - placed down: candidate across at `(placed.row - i, placed.col + j)`
    ///
    /// Candidates with a negative coordinate are dropped. The order is placed
    /// words in placement order, then `i` ascending, then `j` ascending, and
    /// callers take the first valid one. Duplicates are kept and nothing is
    /// ranked.
    ///
    /// # Example
    ///
    /// ```
    /// use crossgen_engine::{Candidate, Orientation, PlacementIndex, PlacementRecord, Word};
    ///
    /// let mut index = PlacementIndex::new();
    /// index.push(PlacementRecord {
    ///     word: Word::new("WORLD").unwrap(),
    ///     row: 2,
    ///     col: 2,
    ///     orientation: Orientation::Across,
    ///     clue: "The earth".to_owned(),
    /// });
    ///
    /// let candidates = index.candidates(&Word::new("HELLO").unwrap());
    /// assert_eq!(
    ///     candidates.first(),
    ///     Some(&Candidate { row: 5, col: 0, orientation: Orientation::Down }),
    /// );
    /// ```
    #[must_use]
    pub fn candidates(&self, word: &Word) -> Vec<Candidate> {
        let mut candidates = vec![];
        for placed in &self.records {
            let orientation = placed.orientation.perpendicular();
            for (i, letter) in word.letters().enumerate() {
                for (j, placed_letter) in placed.word.letters().enumerate() {
                    if letter != placed_letter {
                        continue;
                    }
                    let origin = match placed.orientation {
                        Orientation::Across => placed
                            .col
                            .checked_sub(i)
                            .map(|col| (placed.row + j, col)),
                        Orientation::Down => placed
                            .row
                            .checked_sub(i)
                            .map(|row| (row, placed.col + j)),
                    };
                    if let Some((row, col)) = origin {
                        candidates.push(Candidate {
                            row,
                            col,
                            orientation,
                        });
                    }
                }
            }
        }
        candidates
    }
}
