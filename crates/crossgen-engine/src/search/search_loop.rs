use std::time::Duration;

use rand::Rng;

use crate::core::{Grid, WordEntry};

use super::{
    attempt::{Attempt, sort_by_length},
    clock::Clock,
    puzzle::PuzzleResult,
};

/// Budget and grid settings for a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Wall-clock budget, checked between attempts only
    pub time_limit: Duration,
    /// Maximum number of attempts
    pub max_attempts: usize,
}

impl SearchConfig {
    pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);
    pub const DEFAULT_MAX_ATTEMPTS: usize = 100;
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            grid_size: Grid::DEFAULT_SIZE,
            time_limit: Self::DEFAULT_TIME_LIMIT,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// What a finished search produced.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Best puzzle found, or `None` if no attempt scored above zero
    pub best: Option<PuzzleResult>,
    /// Number of attempts run
    pub attempts: usize,
    /// 1-based number of the attempt that produced `best`
    pub best_attempt: Option<usize>,
    /// Clock time elapsed when the search stopped
    pub elapsed: Duration,
}

/// Repeats placement attempts and keeps the best-scoring one.
///
/// A search owns its random generator and clock and is consumed by
/// [`SearchLoop::run`], so no state carries over from one search to the
/// next.
///
/// # Budget
///
/// Before every attempt, including the first, the loop stops if the elapsed
/// clock time has reached [`SearchConfig::time_limit`] or
/// [`SearchConfig::max_attempts`] attempts have run. A running attempt is
/// never interrupted, so the time limit can be overshot by one attempt.
///
/// # Selection
///
/// An attempt replaces the current best only if its score is strictly
/// greater. The initial best score is `0.0`, so a search where every attempt
/// scores zero or less yields no puzzle.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use crossgen_engine::{FixedStepClock, SearchConfig, SearchLoop, WordEntry};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
///
/// let words: Vec<_> = ["hello", "olive", "lei", "leo", "heel"]
///     .into_iter()
///     .map(|w| WordEntry::new(w, format!("clue for {w}")).unwrap())
///     .collect();
///
/// let config = SearchConfig {
///     grid_size: 7,
///     ..SearchConfig::default()
/// };
/// let clock = FixedStepClock::new(Duration::from_secs(1));
/// let report = SearchLoop::new(config, Pcg32::seed_from_u64(1), clock).run(&words);
///
/// // clock readings 1..=59 each start an attempt; 60 reaches the limit
/// assert_eq!(report.attempts, 59);
/// ```
#[derive(Debug)]
pub struct SearchLoop<R, C> {
    config: SearchConfig,
    rng: R,
    clock: C,
}

impl<R, C> SearchLoop<R, C>
where
    R: Rng,
    C: Clock,
{
    pub fn new(config: SearchConfig, rng: R, clock: C) -> Self {
        Self { config, rng, clock }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search and returns only the best puzzle.
    pub fn generate(self, words: &[WordEntry]) -> Option<PuzzleResult> {
        self.run(words).best
    }

    /// Runs the search to completion.
    pub fn run(mut self, words: &[WordEntry]) -> SearchReport {
        let SearchConfig {
            grid_size,
            time_limit,
            max_attempts,
        } = self.config;
        let sorted = sort_by_length(words);
        let start = self.clock.now();

        let mut attempt = Attempt::build(&[], grid_size, &mut self.rng);
        let mut best = None;
        let mut best_score = 0.0;
        let mut best_attempt = None;
        let mut attempts = 0;

        let elapsed = loop {
            let elapsed = self.clock.now().saturating_sub(start);
            if elapsed >= time_limit || attempts >= max_attempts {
                break elapsed;
            }
            attempts += 1;

            attempt.rebuild(&sorted, grid_size, &mut self.rng);
            if attempt.score() > best_score {
                best_score = attempt.score();
                best = Some(PuzzleResult::from_attempt(&attempt));
                best_attempt = Some(attempts);
                log::debug!(
                    "attempt {attempts}: new best score {best_score:.1} with {} of {} words",
                    attempt.placements().len(),
                    words.len(),
                );
            }
        };

        log::info!(
            "search finished after {attempts} attempts in {elapsed:?}, best score {best_score:.1}"
        );
        SearchReport {
            best,
            attempts,
            best_attempt,
            elapsed,
        }
    }
}
