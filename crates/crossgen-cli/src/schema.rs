use chrono::{DateTime, Utc};
use crossgen_engine::{GenerationSeed, PuzzleResult};
use serde::Serialize;

/// Generated puzzle with the metadata needed to reproduce it
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleDocument {
    /// Timestamp when the puzzle was generated (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Random seed used for fallback placement
    pub seed: GenerationSeed,
    /// Side length of the square grid
    pub grid_size: usize,
    /// Number of attempts run by the search
    pub attempts: usize,
    /// 1-based number of the attempt that produced the puzzle
    pub best_attempt: usize,
    pub puzzle: PuzzleResult,
}
