use std::fmt;

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PlacementConflictError;

use super::{cell::Cell, word::Word};

/// Direction in which a word is written.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Orientation {
    /// The orientation crossing this one.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Position of the `index`-th letter of a word starting at `(row, col)`.
    #[must_use]
    pub const fn step(self, row: usize, col: usize, index: usize) -> (usize, usize) {
        match self {
            Self::Across => (row, col + index),
            Self::Down => (row + index, col),
        }
    }
}

/// Picks either orientation with equal probability.
impl Distribution<Orientation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.random() {
            Orientation::Across
        } else {
            Orientation::Down
        }
    }
}

/// Square matrix of [`Cell`]s that words are written into.
///
/// The size is fixed for the lifetime of a grid. Writes must respect overlap
/// agreement: a non-blank cell may only be written again with the same
/// letter, which [`Grid::can_place`] checks before [`Grid::place`] is called.
///
/// # Example
///
/// ```
/// use crossgen_engine::{Grid, Orientation, Word};
///
/// let mut grid = Grid::new(10);
/// let hello = Word::new("HELLO").unwrap();
/// let world = Word::new("WORLD").unwrap();
///
/// grid.try_place(&hello, 0, 0, Orientation::Across).unwrap();
/// // "W" cannot overwrite the "O" at (0, 4), but "OLIVE" can start on it
/// assert!(!grid.can_place(&world, 0, 4, Orientation::Down));
/// assert!(!grid.can_place(&world, 0, 3, Orientation::Down));
/// assert!(grid.can_place(&Word::new("OLIVE").unwrap(), 0, 4, Orientation::Down));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Default side length of a puzzle grid.
    pub const DEFAULT_SIZE: usize = 20;

    /// Creates an all-blank grid of `size` × `size` cells.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Blank; size * size],
        }
    }

    /// Clears the grid and resizes it to `size` × `size`.
    pub fn reset(&mut self, size: usize) {
        self.size = size;
        self.cells.clear();
        self.cells.resize(size * size, Cell::Blank);
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks_exact` well-defined for an empty grid.
        self.cells.chunks_exact(self.size.max(1))
    }

    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_letter()).count()
    }

    /// Fraction of cells holding a letter. Zero for an empty grid.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn density(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.filled_cells() as f64 / self.total_cells() as f64
    }

    fn fits(&self, len: usize, row: usize, col: usize, orientation: Orientation) -> bool {
        let (along, across) = match orientation {
            Orientation::Across => (col, row),
            Orientation::Down => (row, col),
        };
        across < self.size && along.checked_add(len).is_some_and(|end| end <= self.size)
    }

    /// Returns `true` if `word` lies inside the grid at the given origin and
    /// every cell it covers is blank or already holds the same letter.
    #[must_use]
    pub fn can_place(&self, word: &Word, row: usize, col: usize, orientation: Orientation) -> bool {
        if !self.fits(word.len(), row, col, orientation) {
            return false;
        }
        word.letters().enumerate().all(|(i, letter)| {
            let (r, c) = orientation.step(row, col, i);
            self.cells[r * self.size + c].accepts(letter)
        })
    }

    /// Writes `word` into the grid.
    ///
    /// The caller must have checked the position with [`Grid::can_place`].
    ///
    /// # Panics
    ///
    /// Panics if the word runs past the grid bounds.
    pub fn place(&mut self, word: &Word, row: usize, col: usize, orientation: Orientation) {
        debug_assert!(self.can_place(word, row, col, orientation));
        for (i, letter) in word.letters().enumerate() {
            let (r, c) = orientation.step(row, col, i);
            self.cells[r * self.size + c] = Cell::Letter(letter);
        }
    }

    /// Checks the position and writes `word` only if it fits.
    pub fn try_place(
        &mut self,
        word: &Word,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementConflictError> {
        if !self.can_place(word, row, col, orientation) {
            return Err(PlacementConflictError {
                row,
                col,
                orientation,
            });
        }
        self.place(word, row, col, orientation);
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                match cell {
                    Cell::Blank => write!(f, ".")?,
                    Cell::Letter(letter) => write!(f, "{letter}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialized as one string per row, blanks written as spaces.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(
            self.rows()
                .map(|row| row.iter().copied().map(Cell::as_char).collect::<String>()),
        )
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<String>::deserialize(deserializer)?;
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.iter().enumerate() {
            let start = cells.len();
            for ch in row.chars() {
                let cell = Cell::from_char(ch).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid cell {ch:?} in row {y}"))
                })?;
                cells.push(cell);
            }
            if cells.len() - start != size {
                return Err(serde::de::Error::custom(format!(
                    "grid is not square: row {y} has {} cells, expected {size}",
                    cells.len() - start
                )));
            }
        }
        Ok(Self { size, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn test_new_grid_is_blank() {
        let grid = Grid::new(5);
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.rows().len(), 5);
        assert!(grid.rows().all(|row| row.len() == 5));
        assert_eq!(grid.filled_cells(), 0);
        assert_eq!(grid.total_cells(), 25);
    }

    #[test]
    fn test_place_across_writes_letters() {
        let mut grid = Grid::new(10);
        let hello = word("HELLO");
        assert!(grid.can_place(&hello, 0, 0, Orientation::Across));
        grid.place(&hello, 0, 0, Orientation::Across);

        let first_row: String = grid.rows().next().unwrap()[..5]
            .iter()
            .copied()
            .map(Cell::as_char)
            .collect();
        assert_eq!(first_row, "HELLO");
        assert_eq!(grid.filled_cells(), 5);
    }

    #[test]
    fn test_place_down_writes_letters() {
        let mut grid = Grid::new(6);
        grid.try_place(&word("DOWN"), 1, 3, Orientation::Down).unwrap();
        for (i, ch) in "DOWN".chars().enumerate() {
            assert_eq!(grid.cell(1 + i, 3).map(Cell::as_char), Some(ch));
        }
        assert_eq!(grid.cell(0, 3), Some(Cell::Blank));
        assert_eq!(grid.cell(6, 3), None);
    }

    #[test]
    fn test_can_place_rejects_out_of_bounds() {
        let grid = Grid::new(5);
        let w = word("ABC");
        assert!(grid.can_place(&w, 0, 2, Orientation::Across));
        assert!(!grid.can_place(&w, 0, 3, Orientation::Across));
        assert!(!grid.can_place(&w, 3, 0, Orientation::Down));
        // the fixed coordinate must also be inside the grid
        assert!(!grid.can_place(&w, 5, 0, Orientation::Across));
        assert!(!grid.can_place(&w, 0, 5, Orientation::Down));
        assert!(!grid.can_place(&word("ABCDEF"), 0, 0, Orientation::Across));
        assert!(!grid.can_place(&w, usize::MAX, 0, Orientation::Down));
    }

    #[test]
    fn test_can_place_requires_overlap_agreement() {
        let mut grid = Grid::new(10);
        grid.place(&word("HELLO"), 2, 0, Orientation::Across);

        // crosses the "L" at (2, 2)
        assert!(grid.can_place(&word("OLIVE"), 1, 2, Orientation::Down));
        // would overwrite the "L" at (2, 2) with "I"
        assert!(!grid.can_place(&word("OLIVE"), 0, 2, Orientation::Down));
        // full overlap with identical letters is allowed
        assert!(grid.can_place(&word("HELLO"), 2, 0, Orientation::Across));
    }

    #[test]
    fn test_try_place_reports_conflict() {
        let mut grid = Grid::new(4);
        grid.place(&word("ABCD"), 0, 0, Orientation::Across);
        let err = grid
            .try_place(&word("XY"), 0, 1, Orientation::Down)
            .unwrap_err();
        assert_eq!(
            err,
            PlacementConflictError {
                row: 0,
                col: 1,
                orientation: Orientation::Down,
            }
        );
        assert_eq!(grid.filled_cells(), 4);
    }

    #[test]
    fn test_reset_clears_and_resizes() {
        let mut grid = Grid::new(4);
        grid.place(&word("ABCD"), 0, 0, Orientation::Across);
        grid.reset(3);
        assert_eq!(grid, Grid::new(3));
    }

    #[test]
    fn test_density() {
        let mut grid = Grid::new(4);
        assert!(grid.density().abs() < f64::EPSILON);
        grid.place(&word("ABCD"), 0, 0, Orientation::Across);
        assert!((grid.density() - 0.25).abs() < f64::EPSILON);
        assert!(Grid::new(0).density().abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_marks_blanks() {
        let mut grid = Grid::new(3);
        grid.place(&word("AB"), 1, 1, Orientation::Down);
        assert_eq!(grid.to_string(), "...\n.A.\n.B.\n");
    }

    #[test]
    fn test_serde_rows() {
        let mut grid = Grid::new(3);
        grid.place(&word("CAT"), 0, 0, Orientation::Across);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"["CAT","   ","   "]"#);
        let parsed: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, grid);

        assert!(serde_json::from_str::<Grid>(r#"["AB","C"]"#).is_err());
        assert!(serde_json::from_str::<Grid>(r#"["ab","  "]"#).is_err());
    }
}
