use rand::Rng as _;

use crate::core::WordEntry;

use super::{
    clock::SystemClock,
    puzzle::PuzzleResult,
    search_loop::{SearchConfig, SearchLoop, SearchReport},
    seed::GenerationSeed,
};

/// Entry point for callers that want wall-clock budgets.
///
/// Every call builds its own random generator, [`SystemClock`] and
/// [`SearchLoop`], and nothing is written back to the generator, so a single
/// instance can serve any number of calls, including from several threads.
///
/// Without a configured seed, each call draws a fresh one from the thread
/// random generator.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use crossgen_engine::{GenerationSeed, PuzzleGenerator, SearchConfig, WordEntry};
///
/// let words = vec![WordEntry::new("a", "The first letter").unwrap()];
/// let config = SearchConfig {
///     grid_size: 1,
///     time_limit: Duration::from_secs(5),
///     max_attempts: 3,
/// };
/// let seed = GenerationSeed::from_bytes([0; 16]);
/// let generator = PuzzleGenerator::new(config).with_seed(seed);
///
/// let (used, report) = generator.search(&words);
/// assert_eq!(used, seed);
/// assert!(report.attempts <= 3);
/// assert!(report.best.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: SearchConfig,
    seed: Option<GenerationSeed>,
}

impl PuzzleGenerator {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config, seed: None }
    }

    /// Makes every call use `seed` instead of a freshly drawn one.
    #[must_use]
    pub fn with_seed(mut self, seed: GenerationSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> Option<GenerationSeed> {
        self.seed
    }

    /// Runs a search and returns the seed it used along with the report.
    pub fn search(&self, words: &[WordEntry]) -> (GenerationSeed, SearchReport) {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        log::debug!("searching {} words with seed {seed}", words.len());
        let search = SearchLoop::new(self.config.clone(), seed.rng(), SystemClock::new());
        (seed, search.run(words))
    }

    /// Runs a search and returns the best puzzle, if any scored above zero.
    pub fn generate(&self, words: &[WordEntry]) -> Option<PuzzleResult> {
        self.search(words).1.best
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words
            .iter()
            .map(|w| WordEntry::new(w, format!("definition of {w}")).unwrap())
            .collect()
    }

    fn config(grid_size: usize) -> SearchConfig {
        SearchConfig {
            grid_size,
            time_limit: Duration::from_secs(30),
            max_attempts: 20,
        }
    }

    #[test]
    fn test_empty_input() {
        let generator = PuzzleGenerator::new(config(20));
        assert!(generator.generate(&[]).is_none());
    }

    #[test]
    fn test_configured_seed_is_reproducible() {
        let words = entries(&["ab", "ba", "aa"]);
        let seed = GenerationSeed::from_bytes([9; 16]);
        let generator = PuzzleGenerator::new(config(2)).with_seed(seed);

        let (seed_a, a) = generator.search(&words);
        let (seed_b, b) = generator.search(&words);
        assert_eq!(seed_a, seed);
        assert_eq!(seed_b, seed);
        assert_eq!(a.attempts, b.attempts);
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_calls_do_not_share_state() {
        let words = entries(&["a"]);
        let generator = PuzzleGenerator::new(config(1));
        let first = generator.generate(&words).unwrap();
        let second = generator.generate(&words).unwrap();
        assert_eq!(first, second);
        assert!(generator.seed().is_none());
        assert_eq!(generator.config(), &config(1));
    }

    #[test]
    fn test_shared_across_threads() {
        let words = entries(&["a"]);
        let generator = PuzzleGenerator::new(config(1));
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| generator.generate(&words)))
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap().is_some());
            }
        });
    }
}
