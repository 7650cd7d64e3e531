use crate::core::{Grid, Word};

/// Points awarded per placed word.
pub const WORD_BONUS: f64 = 10.0;

/// Penalty applied in proportion to the fraction of blank cells.
pub const EMPTY_PENALTY: f64 = 100.0;

/// Scores a finished layout.
///
/// ```text
/// score = 10 × word_count + Σ len(word) − 100 × (1 − filled_cells / total_cells)
/// ```
///
/// A layout with no words scores exactly `0.0`. Otherwise the score is not
/// normalized and is negative when few or short words sit on a large grid.
///
/// # Example
///
/// ```
/// use crossgen_engine::{Grid, Orientation, Word, score_layout};
///
/// let mut grid = Grid::new(20);
/// let python = Word::new("PYTHON").unwrap();
/// grid.place(&python, 10, 7, Orientation::Across);
///
/// let score = score_layout(&grid, [&python]);
/// assert!((score - (-82.5)).abs() < 1e-9);
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn score_layout<'a, I>(grid: &Grid, words: I) -> f64
where
    I: IntoIterator<Item = &'a Word>,
{
    let (count, letters) = words
        .into_iter()
        .fold((0_usize, 0_usize), |(count, letters), word| {
            (count + 1, letters + word.len())
        });
    if count == 0 {
        return 0.0;
    }
    let word_bonus = count as f64 * WORD_BONUS;
    let length_bonus = letters as f64;
    let empty_penalty = (1.0 - grid.density()) * EMPTY_PENALTY;
    word_bonus + length_bonus - empty_penalty
}
