//! File format parsing layer for .puz crossword files.
//!
//! Each region of the file has its own parser here. [`crate::puz::reader`]
//! runs them in file order to build a [`Puzzle`](crate::puz::types::models::Puzzle).
//!
//! # Module Organization
//!
//! - [`header`]: Parses the fixed 52-byte header
//! - [`strings`]: Splits the NUL-delimited string table
//! - [`sections`]: Verifies and collects extra sections
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────┐
//! │  Header         │ ← header::parse()
//! ├─────────────────┤
//! │  Solution       │
//! │  User grid      │
//! ├─────────────────┤
//! │  Strings        │ ← strings::parse()
//! ├─────────────────┤
//! │  Extra sections │ ← sections::parse()
//! └─────────────────┘
//! ```

pub mod header;
pub mod sections;
pub mod strings;
