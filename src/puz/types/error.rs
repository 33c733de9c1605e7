//! Custom error types for the puz-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant except `Io` and `Snapshot` is raised only while decoding;
/// navigation never fails.
#[derive(Debug, Error)]
pub enum PuzError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The fixed `ACROSS&DOWN\0` literal was not found where expected.
    #[error("File did not contain expected magic number, contained '{}'", String::from_utf8_lossy(.found))]
    BadMagicNumber { found: Vec<u8> },

    /// An extra section's stored checksum disagrees with the computed one.
    #[error("Extra section {section} had computed checksum {actual:#06x}, versus given checksum {expected:#06x}")]
    ChecksumMismatch {
        section: String,
        expected: u16,
        actual: u16,
    },

    /// The string table ran out before every required field was terminated.
    #[error("String table ended early: expected {expected} strings, but found {found}")]
    InsufficientStrings { expected: usize, found: usize },

    /// A read reached past the end of the buffer.
    #[error("Read of {len} byte(s) at offset {offset} is out of bounds")]
    OutOfBounds { offset: usize, len: usize },

    /// The solution or user grid breaks the cell encoding rules.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// A persisted snapshot could not be serialized or parsed.
    #[error("Snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// A convenience `Result` type alias using the crate's `PuzError` type.
pub type Result<T> = std::result::Result<T, PuzError>;
