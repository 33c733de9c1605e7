//! Core data structures for .puz format components.
//!
//! This module defines the fundamental types used throughout the library:
//! - The fixed header and checksum report
//! - The immutable decoded puzzle
//! - Grid coordinates and solving direction

use serde::{Deserialize, Serialize};

use crate::puz::format::sections::GEXT_CIRCLED;

/// Cell code for a black square in both the solution and the user grid.
pub const BLACK: u8 = b'.';
/// Cell code for a user-grid square that has never been filled.
pub const EMPTY: u8 = b'-';
/// Cell code for a user-grid square the solver has cleared.
pub const CLEARED: u8 = b' ';

/// Fields of the fixed 52-byte file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzHeader {
    /// Whole-file checksum as stored at offset 0. Reported, never enforced.
    pub file_checksum: u16,
    /// Header ("CIB") checksum as stored at offset 14.
    pub cib_checksum: u16,
    /// Three-character version string, e.g. `1.3`.
    pub version: String,
    pub width: u8,
    pub height: u8,
    pub nbr_clues: u16,
    /// Puzzle type bitmask at offset 48.
    pub puzzle_type: u16,
    /// Non-zero when the solution is scrambled.
    pub scrambled_tag: u16,
}

/// Computed checksums next to the values the file claims.
///
/// Only extra-section checksums are enforced during decode; these are
/// exposed so callers can decide for themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumReport {
    pub cib_computed: u16,
    pub cib_stored: u16,
    /// Chained over solution then grid, seeded with the CIB checksum.
    pub file_computed: u16,
    pub file_stored: u16,
}

impl ChecksumReport {
    pub fn cib_matches(&self) -> bool {
        self.cib_computed == self.cib_stored
    }

    pub fn file_matches(&self) -> bool {
        self.file_computed == self.file_stored
    }
}

/// An extra section seen after the string table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionInfo {
    pub name: String,
    pub len: u16,
    pub checksum: u16,
}

/// Solving direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Across,
    Down,
    Unknown,
}

impl Direction {
    /// The opposite axis. `Unknown` has no axis and stays `Unknown`.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
            Direction::Unknown => Direction::Unknown,
        }
    }

    /// Unit step along this axis, or `None` for `Unknown`.
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            Direction::Across => Some((1, 0)),
            Direction::Down => Some((0, 1)),
            Direction::Unknown => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
            Direction::Unknown => write!(f, "unknown"),
        }
    }
}

/// A cell coordinate, `x` across and `y` down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A fully decoded puzzle. Immutable once built.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub(crate) header: PuzHeader,
    pub(crate) solution: Vec<u8>,
    pub(crate) grid: Vec<u8>,
    pub(crate) strings: Vec<String>,
    pub(crate) notes: Option<String>,
    pub(crate) gext: Option<Vec<u8>>,
    pub(crate) sections: Vec<SectionInfo>,
    pub(crate) checksums: ChecksumReport,
}

impl Puzzle {
    pub fn header(&self) -> &PuzHeader {
        &self.header
    }

    pub fn width(&self) -> usize {
        self.header.width as usize
    }

    pub fn height(&self) -> usize {
        self.header.height as usize
    }

    pub fn version(&self) -> &str {
        &self.header.version
    }

    /// Number of cells, `width * height`.
    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Row-major index of `(x, y)`, or `None` when outside the grid.
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width() && y < self.height()).then(|| y * self.width() + x)
    }

    /// Solution codes, one per cell: `.` for black, else an uppercase letter.
    pub fn solution(&self) -> &[u8] {
        &self.solution
    }

    /// The user-entry grid as stored in the file.
    pub fn grid(&self) -> &[u8] {
        &self.grid
    }

    /// Title, author, copyright, then one clue per word.
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn title(&self) -> &str {
        &self.strings[0]
    }

    pub fn author(&self) -> &str {
        &self.strings[1]
    }

    /// The third header string. Most files carry a copyright line here.
    pub fn copyright(&self) -> &str {
        &self.strings[2]
    }

    /// Clue text for the given clue index.
    pub fn clue(&self, clue_index: usize) -> Option<&str> {
        self.strings.get(3 + clue_index).map(String::as_str)
    }

    pub fn clue_count(&self) -> usize {
        self.strings.len() - 3
    }

    /// Free-form notes trailing the clue strings, if the file has them.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Raw GEXT payload, one flag byte per cell.
    pub fn gext(&self) -> Option<&[u8]> {
        self.gext.as_deref()
    }

    /// Whether the GEXT section marks `(x, y)` as circled.
    pub fn is_circled(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .and_then(|i| self.gext.as_ref()?.get(i).copied())
            .is_some_and(|flags| flags & GEXT_CIRCLED != 0)
    }

    pub fn sections(&self) -> &[SectionInfo] {
        &self.sections
    }

    pub fn checksums(&self) -> &ChecksumReport {
        &self.checksums
    }

    /// A cell outside the grid counts as black.
    pub fn is_black(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_none_or(|i| self.solution[i] == BLACK)
    }
}
