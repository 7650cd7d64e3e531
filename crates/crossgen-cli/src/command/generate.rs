use std::{path::PathBuf, time::Duration};

use anyhow::bail;
use chrono::Utc;
use clap::{ArgGroup, builder::RangedU64ValueParser};
use crossgen_engine::{GenerationSeed, Grid, PuzzleGenerator, SearchConfig};
use crossgen_words::DEFAULT_WORD_LIMIT;

use crate::{
    render,
    schema::PuzzleDocument,
    util::{self, Output},
};

/// Largest accepted `--grid-size`.
const MAX_GRID_SIZE: u64 = 1000;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, clap::Args)]
#[command(group(ArgGroup::new("input").required(true).args(["words", "text"])))]
pub(crate) struct GenerateArg {
    /// Word list JSON file (`[{"word": ..., "definition": ...}]`)
    #[arg(long)]
    words: Option<PathBuf>,
    /// Text file to extract words from
    #[arg(long)]
    text: Option<PathBuf>,
    /// Glossary JSON file (`{"word": "definition"}`) for extracted words
    #[arg(long, requires = "text", conflicts_with = "words")]
    glossary: Option<PathBuf>,
    /// Maximum number of words extracted from text
    #[arg(long, default_value_t = DEFAULT_WORD_LIMIT)]
    limit: usize,
    /// Side length of the square grid
    #[arg(
        long,
        default_value_t = Grid::DEFAULT_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_GRID_SIZE),
    )]
    grid_size: usize,
    /// Time budget in seconds
    #[arg(long, default_value_t = SearchConfig::DEFAULT_TIME_LIMIT.as_secs())]
    time_limit: u64,
    /// Maximum number of placement attempts
    #[arg(long, default_value_t = SearchConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
    /// Random seed as 32 hex digits; drawn at random if omitted
    #[arg(long)]
    seed: Option<GenerationSeed>,
    /// Output format (json or text)
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl GenerateArg {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            grid_size: self.grid_size,
            time_limit: Duration::from_secs(self.time_limit),
            max_attempts: self.max_attempts,
        }
    }
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let entries = match (&arg.words, &arg.text) {
        (Some(path), _) => util::read_word_list_file(path)?,
        (None, Some(path)) => {
            util::build_word_list_from_file(path, arg.glossary.as_ref(), arg.limit)?
        }
        (None, None) => bail!("either --words or --text is required"),
    };
    if entries.is_empty() {
        bail!("No words to place");
    }

    let config = arg.search_config();
    let mut generator = PuzzleGenerator::new(config.clone());
    if let Some(seed) = arg.seed {
        generator = generator.with_seed(seed);
    }

    eprintln!(
        "Searching {} words on a {size}x{size} grid (up to {} attempts, {}s)...",
        entries.len(),
        config.max_attempts,
        config.time_limit.as_secs(),
        size = config.grid_size,
    );
    let (seed, report) = generator.search(&entries);
    eprintln!(
        "Ran {} attempts in {:.2}s (seed {seed})",
        report.attempts,
        report.elapsed.as_secs_f64()
    );

    let (Some(puzzle), Some(best_attempt)) = (report.best, report.best_attempt) else {
        bail!(
            "No puzzle scored above zero after {} attempts; try a smaller grid or more words",
            report.attempts
        );
    };
    eprintln!(
        "Best score {:.1} from attempt #{best_attempt}, {} of {} words placed",
        puzzle.score(),
        puzzle.placed_words().len(),
        entries.len(),
    );

    let mut output = Output::from_output_path(arg.output.clone())?;
    match arg.format {
        OutputFormat::Json => {
            let document = PuzzleDocument {
                generated_at: Utc::now(),
                seed,
                grid_size: config.grid_size,
                attempts: report.attempts,
                best_attempt,
                puzzle,
            };
            output.write_json(&document)?;
        }
        OutputFormat::Text => {
            output.write_with("puzzle", |output| render::write_puzzle(output, &puzzle))?;
        }
    }
    eprintln!("Puzzle written to {}", output.display_path());

    Ok(())
}
