use std::fmt;

/// An uppercase ASCII letter (`A`-`Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Case-folds an ASCII alphabetic character into a letter.
    ///
    /// Returns `None` for anything outside `[A-Za-z]`.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self((ch as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    // Caller guarantees `byte` is already an uppercase ASCII letter.
    pub(crate) const fn from_upper_byte(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_uppercase());
        Self(byte)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single cell of the [`Grid`](super::grid::Grid).
///
/// A cell is either blank or holds exactly one uppercase letter; nothing else
/// is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Blank,
    /// Cell occupied by a letter of a placed word.
    Letter(Letter),
}

impl Cell {
    /// Character used for blank cells when a grid is serialized.
    pub const BLANK_CHAR: char = ' ';

    #[must_use]
    pub const fn letter(self) -> Option<Letter> {
        match self {
            Cell::Blank => None,
            Cell::Letter(letter) => Some(letter),
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Cell::Blank => Self::BLANK_CHAR,
            Cell::Letter(letter) => letter.as_char(),
        }
    }

    /// Parses a serialized cell: the blank character or an uppercase letter.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch == Self::BLANK_CHAR {
            return Some(Cell::Blank);
        }
        if !ch.is_ascii_uppercase() {
            return None;
        }
        Some(Cell::Letter(Letter::from_upper_byte(ch as u8)))
    }

    /// Returns `true` if `letter` may be written here without breaking overlap
    /// agreement.
    #[must_use]
    pub fn accepts(self, letter: Letter) -> bool {
        match self {
            Cell::Blank => true,
            Cell::Letter(existing) => existing == letter,
        }
    }
}
