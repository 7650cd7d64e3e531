use std::{
    fs::{self, File},
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use crossgen_engine::WordEntry;
use crossgen_words::{DefinitionSource, Glossary, NoDefinitions};

/// Destination for command output: stdout, or a file when `--output` is given
#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Runs `write` against this output and flushes it
    pub fn write_with<F>(&mut self, what: &str, write: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Self) -> io::Result<()>,
    {
        write(self)
            .and_then(|()| self.flush())
            .with_context(|| format!("Failed to write {what} to {}", self.display_path()))
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        self.write_with("JSON", |output| {
            serde_json::to_writer_pretty(&mut *output, value)?;
            writeln!(output)
        })
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read a word list (`[{"word": ..., "definition": ...}]`) from a JSON file
///
/// Words are validated while parsing; a non-alphabetic word fails the whole
/// file.
pub fn read_word_list_file<P>(path: P) -> anyhow::Result<Vec<WordEntry>>
where
    P: AsRef<Path>,
{
    let entries: Vec<WordEntry> = read_json_file("word list", path)?;
    eprintln!("Loaded {} words", entries.len());
    Ok(entries)
}

pub fn read_glossary_file<P>(path: P) -> anyhow::Result<Glossary>
where
    P: AsRef<Path>,
{
    let glossary: Glossary = read_json_file("glossary", path)?;
    eprintln!("Loaded glossary with {} definitions", glossary.len());
    Ok(glossary)
}

/// Extract a word list from a text file, with definitions from an optional
/// glossary
pub fn build_word_list_from_file<P, G>(
    text_path: P,
    glossary_path: Option<G>,
    limit: usize,
) -> anyhow::Result<Vec<WordEntry>>
where
    P: AsRef<Path>,
    G: AsRef<Path>,
{
    let text_path = text_path.as_ref();
    let text = fs::read_to_string(text_path)
        .with_context(|| format!("Failed to read text file: {}", text_path.display()))?;

    let glossary = glossary_path.map(read_glossary_file).transpose()?;
    let source: &dyn DefinitionSource = match &glossary {
        Some(glossary) => glossary,
        None => &NoDefinitions,
    };

    let entries = crossgen_words::build_word_list(&text, source, limit);
    eprintln!(
        "Extracted {} words from {}",
        entries.len(),
        text_path.display()
    );
    Ok(entries)
}
