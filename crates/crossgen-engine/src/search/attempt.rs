use std::cmp::Reverse;

use rand::Rng;

use crate::core::{Grid, Orientation, WordEntry};

use super::{
    placement_index::{Candidate, PlacementIndex, PlacementRecord},
    scorer::score_layout,
};

/// Random positions tried for a word that has no valid intersection.
const FALLBACK_TRIES: usize = 10;

/// Random fallback is only used while fewer words than this are placed.
const FALLBACK_PLACED_LIMIT: usize = 3;

/// Orders words for placement: longest first, ties in input order.
#[must_use]
pub fn sort_by_length(words: &[WordEntry]) -> Vec<&WordEntry> {
    let mut sorted: Vec<_> = words.iter().collect();
    sorted.sort_by_key(|entry| Reverse(entry.word.len()));
    sorted
}

/// One full placement pass over a word list.
///
/// # Placement Policy
///
/// 1. The first word goes across the middle row, centered horizontally
/// 2. Each following word goes to the first of its intersection candidates
///    (see [`PlacementIndex::candidates`]) that [`Grid::can_place`] accepts
/// 3. With no valid candidate and fewer than 3 words placed, up to 10 random
///    origins and orientations are tried
/// 4. Otherwise the word is dropped from this attempt
///
/// Words longer than the grid are always dropped.
///
/// # Example
///
/// ```
/// use crossgen_engine::{Attempt, Orientation, WordEntry, sort_by_length};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
///
/// let words = vec![WordEntry::new("python", "A programming language").unwrap()];
/// let attempt = Attempt::build(&sort_by_length(&words), 20, &mut Pcg32::seed_from_u64(0));
///
/// let record = &attempt.placements().records()[0];
/// assert_eq!((record.row, record.col), (10, 7));
/// assert_eq!(record.orientation, Orientation::Across);
/// ```
#[derive(Debug, Clone)]
pub struct Attempt {
    grid: Grid,
    placements: PlacementIndex,
    score: f64,
}

impl Attempt {
    /// Runs a placement pass over `words`, which must already be in
    /// placement order (see [`sort_by_length`]).
    pub fn build<R>(words: &[&WordEntry], grid_size: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut attempt = Self {
            grid: Grid::new(grid_size),
            placements: PlacementIndex::new(),
            score: 0.0,
        };
        attempt.run(words, rng);
        attempt
    }

    /// Like [`Self::build`], but reuses this attempt's buffers.
    ///
    /// Nothing from the previous pass survives.
    pub fn rebuild<R>(&mut self, words: &[&WordEntry], grid_size: usize, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.grid.reset(grid_size);
        self.placements = PlacementIndex::new();
        self.score = 0.0;
        self.run(words, rng);
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn placements(&self) -> &PlacementIndex {
        &self.placements
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    fn run<R>(&mut self, words: &[&WordEntry], rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        if let Some((first, rest)) = words.split_first() {
            if !self.place_first(first) {
                log::trace!("first word {} does not fit the grid", first.word);
            }
            for entry in rest {
                if !self.place_next(entry, rng) {
                    log::trace!("dropped {} from attempt", entry.word);
                }
            }
        }
        self.score = score_layout(&self.grid, self.placements.words());
    }

    fn place_first(&mut self, entry: &WordEntry) -> bool {
        let size = self.grid.size();
        let len = entry.word.len();
        if len > size {
            return false;
        }
        let candidate = Candidate {
            row: size / 2,
            col: size / 2 - len / 2,
            orientation: Orientation::Across,
        };
        if !self.can_place(entry, candidate) {
            return false;
        }
        self.record(entry, candidate);
        true
    }

    fn place_next<R>(&mut self, entry: &WordEntry, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        let size = self.grid.size();
        let len = entry.word.len();
        if len > size {
            return false;
        }

        let found = self
            .placements
            .candidates(&entry.word)
            .into_iter()
            .find(|candidate| self.can_place(entry, *candidate));
        if let Some(candidate) = found {
            self.record(entry, candidate);
            return true;
        }

        if self.placements.len() >= FALLBACK_PLACED_LIMIT {
            return false;
        }
        let max_origin = size - len;
        for _ in 0..FALLBACK_TRIES {
            let candidate = Candidate {
                row: rng.random_range(0..=max_origin),
                col: rng.random_range(0..=max_origin),
                orientation: rng.random(),
            };
            if self.can_place(entry, candidate) {
                self.record(entry, candidate);
                return true;
            }
        }
        false
    }

    fn can_place(&self, entry: &WordEntry, candidate: Candidate) -> bool {
        let Candidate {
            row,
            col,
            orientation,
        } = candidate;
        self.grid.can_place(&entry.word, row, col, orientation)
    }

    fn record(&mut self, entry: &WordEntry, candidate: Candidate) {
        let Candidate {
            row,
            col,
            orientation,
        } = candidate;
        self.grid.place(&entry.word, row, col, orientation);
        self.placements.push(PlacementRecord {
            word: entry.word.clone(),
            row,
            col,
            orientation,
            clue: entry.definition.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use crate::core::{Cell, Word};

    use super::*;

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words
            .iter()
            .map(|w| WordEntry::new(w, format!("definition of {w}")).unwrap())
            .collect()
    }

    fn build(words: &[WordEntry], grid_size: usize, seed: u64) -> Attempt {
        Attempt::build(
            &sort_by_length(words),
            grid_size,
            &mut Pcg32::seed_from_u64(seed),
        )
    }

    fn placed(attempt: &Attempt) -> Vec<(&str, usize, usize, Orientation)> {
        attempt
            .placements()
            .records()
            .iter()
            .map(|r| (r.word.as_str(), r.row, r.col, r.orientation))
            .collect()
    }

    fn assert_grid_agrees_with_records(attempt: &Attempt) {
        for record in attempt.placements().records() {
            for (i, letter) in record.word.letters().enumerate() {
                let (r, c) = record.orientation.step(record.row, record.col, i);
                assert_eq!(
                    attempt.grid().cell(r, c),
                    Some(Cell::Letter(letter)),
                    "{} disagrees with the grid at ({r}, {c})",
                    record.word,
                );
            }
        }
    }

    #[test]
    fn test_sort_by_length_is_stable() {
        let words = entries(&["bb", "aaa", "cc", "d", "eee"]);
        let sorted: Vec<_> = sort_by_length(&words)
            .into_iter()
            .map(|e| e.word.as_str())
            .collect();
        assert_eq!(sorted, ["AAA", "EEE", "BB", "CC", "D"]);
    }

    #[test]
    fn test_single_word_is_centered() {
        let attempt = build(&entries(&["python"]), 20, 0);
        assert_eq!(placed(&attempt), [("PYTHON", 10, 7, Orientation::Across)]);

        let row: String = attempt.grid().rows().nth(10).unwrap()[7..13]
            .iter()
            .copied()
            .map(Cell::as_char)
            .collect();
        assert_eq!(row, "PYTHON");
        assert_eq!(attempt.grid().filled_cells(), 6);

        // 10 + 6 - 100 * (1 - 6 / 400)
        assert!((attempt.score() - (-82.5)).abs() < 1e-9);
    }

    #[test]
    fn test_second_word_follows_candidate_formula() {
        let attempt = build(&entries(&["hello", "olive"]), 20, 0);
        // HELLO is centered at (10, 8); OLIVE's "O" matches HELLO's "O" at
        // index 4, giving a down candidate at (10 + 4, 8 - 0).
        assert_eq!(
            placed(&attempt),
            [
                ("HELLO", 10, 8, Orientation::Across),
                ("OLIVE", 14, 8, Orientation::Down),
            ]
        );
        assert_grid_agrees_with_records(&attempt);
    }

    #[test]
    fn test_first_valid_candidate_wins() {
        // LEI's first two candidates run down through OLIVE's "O" at (14, 8)
        // and are rejected; the third, from E(1)~E(1), is free.
        let attempt = build(&entries(&["hello", "olive", "lei"]), 20, 0);
        assert_eq!(
            placed(&attempt),
            [
                ("HELLO", 10, 8, Orientation::Across),
                ("OLIVE", 14, 8, Orientation::Down),
                ("LEI", 11, 7, Orientation::Down),
            ]
        );
        assert_grid_agrees_with_records(&attempt);
    }

    #[test]
    fn test_candidate_may_share_existing_letter() {
        // LEO's first candidate ends on OLIVE's "O" at (14, 8), which agrees
        let attempt = build(&entries(&["hello", "olive", "leo"]), 20, 0);
        assert_eq!(
            placed(&attempt)[2],
            ("LEO", 12, 8, Orientation::Down),
        );
        assert_eq!(attempt.grid().filled_cells(), 12);
    }

    #[test]
    fn test_duplicate_words_are_placed_independently() {
        // the second HELLO crosses the first through their shared "H"
        let words = vec![
            WordEntry::new("hello", "a").unwrap(),
            WordEntry::new("hello", "b").unwrap(),
        ];
        let attempt = build(&words, 20, 0);
        let records: Vec<_> = attempt
            .placements()
            .records()
            .iter()
            .map(|r| (r.word.as_str(), r.row, r.col, r.orientation, r.clue.as_str()))
            .collect();
        assert_eq!(
            records,
            [
                ("HELLO", 10, 8, Orientation::Across, "a"),
                ("HELLO", 10, 8, Orientation::Down, "b"),
            ]
        );
        assert_eq!(attempt.placements().words().count(), 2);
        assert_grid_agrees_with_records(&attempt);
    }

    #[test]
    fn test_oversized_words_are_skipped() {
        let long = "abcdefghijklmnopqrstu";
        assert_eq!(long.len(), 21);

        let attempt = build(&entries(&[long, "cat"]), 20, 3);
        let words: Vec<_> = attempt.placements().words().map(Word::as_str).collect();
        // the long word would be first but never fits; CAT falls back to a
        // random spot on the empty grid
        assert_eq!(words, ["CAT"]);
        assert_grid_agrees_with_records(&attempt);

        let attempt = build(&entries(&[long]), 20, 3);
        assert!(attempt.placements().is_empty());
        assert!(attempt.score().abs() < f64::EPSILON);
    }

    #[test]
    fn test_fallback_stops_after_three_words() {
        // no shared letters, so every word after the first needs the fallback
        let attempt = build(&entries(&["aaa", "bbb", "ccc", "ddd", "eee"]), 20, 11);
        let words: Vec<_> = attempt.placements().words().map(Word::as_str).collect();
        assert_eq!(words, ["AAA", "BBB", "CCC"]);
        assert_grid_agrees_with_records(&attempt);
    }

    #[test]
    fn test_empty_word_list() {
        let attempt = build(&[], 20, 0);
        assert!(attempt.placements().is_empty());
        assert_eq!(attempt.grid().filled_cells(), 0);
        assert!(attempt.score().abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_sized_grid() {
        let attempt = build(&entries(&["a", "b"]), 0, 0);
        assert!(attempt.placements().is_empty());
    }

    #[test]
    fn test_overlap_agreement_holds_for_many_seeds() {
        let words = entries(&[
            "crossword",
            "python",
            "flask",
            "hello",
            "world",
            "data",
            "code",
            "web",
            "app",
            "nltk",
            "beautifulsoup",
            "zzz",
            "qqq",
        ]);
        for seed in 0..50 {
            let attempt = build(&words, 15, seed);
            assert!(attempt.placements().len() <= words.len());
            assert_grid_agrees_with_records(&attempt);
            let expected = score_layout(attempt.grid(), attempt.placements().words());
            assert!((attempt.score() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_attempt() {
        let words = entries(&["aaa", "bbb", "ccc", "abc"]);
        let a = build(&words, 10, 42);
        let b = build(&words, 10, 42);
        assert_eq!(a.placements(), b.placements());
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_rebuild_discards_previous_pass() {
        let mut rng = Pcg32::seed_from_u64(5);
        let words = entries(&["hello", "olive"]);
        let sorted = sort_by_length(&words);
        let mut attempt = Attempt::build(&sorted, 20, &mut rng);
        assert_eq!(attempt.placements().len(), 2);

        attempt.rebuild(&[], 20, &mut rng);
        assert!(attempt.placements().is_empty());
        assert_eq!(attempt.grid().filled_cells(), 0);

        attempt.rebuild(&sorted, 20, &mut rng);
        assert_eq!(attempt.placements().len(), 2);
        assert_eq!(attempt.grid().filled_cells(), 10);
    }
}
