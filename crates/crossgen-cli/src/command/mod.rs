use clap::{Parser, Subcommand};

use self::{extract_words::ExtractWordsArg, generate::GenerateArg};

mod extract_words;
mod generate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate a crossword puzzle from a word list or text
    Generate(#[clap(flatten)] GenerateArg),
    /// Extract a word list with definitions from text
    ExtractWords(#[clap(flatten)] ExtractWordsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::ExtractWords(arg) => extract_words::run(&arg)?,
    }
    Ok(())
}
