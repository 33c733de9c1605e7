//! # puz-reader
//!
//! A reader for `.puz` crossword files.
//! Decodes and verifies the binary format, numbers the grid, pairs clues
//! with words, and provides the cursor/direction model used while solving.
//!
//! **Note:** Rebus squares and scrambled solutions are not supported.
pub mod config;
pub mod puz;

// Re-export the main types for convenience
pub use puz::{
    PuzError,
    Result,
    clues::{Clue, ClueIndex},
    codec::checksum,
    grid::{ClueEntry, GridModel, starts_across, starts_down},
    nav::{Navigator, SolverState},
    persist::{Snapshot, SnapshotStore},
    types::models::{
        ChecksumReport,
        Direction,
        Position,
        PuzHeader,
        Puzzle,
        SectionInfo,
    },
};
