use std::io::{self, Write};

use crossgen_engine::{Orientation, PuzzleResult};

/// Writes the grid followed by the numbered clue lists.
pub fn write_puzzle<W>(writer: &mut W, puzzle: &PuzzleResult) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write!(writer, "{}", puzzle.grid())?;
    for (title, orientation) in [("Across", Orientation::Across), ("Down", Orientation::Down)] {
        let clues = puzzle.clues(orientation);
        if clues.is_empty() {
            continue;
        }
        writeln!(writer)?;
        writeln!(writer, "{title}:")?;
        for clue in clues {
            writeln!(writer, "{:>4}. {}", clue.number, clue.definition)?;
        }
    }
    Ok(())
}
