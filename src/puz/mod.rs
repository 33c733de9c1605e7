//! Core .puz reader module

pub mod clues;
pub mod codec;
pub mod format;
pub mod grid;
pub mod nav;
pub mod persist;
pub mod reader;
pub mod types;
pub mod utils;

pub use types::error::{PuzError, Result};
