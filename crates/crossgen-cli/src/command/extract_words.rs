use std::path::PathBuf;

use anyhow::bail;
use crossgen_words::DEFAULT_WORD_LIMIT;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ExtractWordsArg {
    /// Text file to extract words from
    #[arg(long)]
    text: PathBuf,
    /// Glossary JSON file (`{"word": "definition"}`)
    #[arg(long)]
    glossary: Option<PathBuf>,
    /// Maximum number of words to keep
    #[arg(long, default_value_t = DEFAULT_WORD_LIMIT)]
    limit: usize,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ExtractWordsArg) -> anyhow::Result<()> {
    let ExtractWordsArg {
        text,
        glossary,
        limit,
        output,
    } = arg;

    let entries = util::build_word_list_from_file(text, glossary.as_ref(), *limit)?;
    if entries.is_empty() {
        bail!("No usable words found in {}", text.display());
    }

    let mut output = Output::from_output_path(output.clone())?;
    output.write_json(&entries)?;
    eprintln!("Wrote {} words to {}", entries.len(), output.display_path());

    Ok(())
}
