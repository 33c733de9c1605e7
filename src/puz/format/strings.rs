//! NUL-delimited string table parsing.
//!
//! The table holds title, author and copyright, then one clue per word in
//! across-before-down scan order. Some files append a notes string after the
//! last clue; others go straight on to the extra sections. Trailing bytes are
//! read as notes only when they do not start a valid section. Text is
//! ISO-8859-1, decoded here as Windows-1252.

use encoding_rs::WINDOWS_1252;
use log::{debug, trace};

use super::sections;
use crate::puz::types::error::{PuzError, Result};

/// Decoded string table plus the number of bytes it occupied.
#[derive(Debug)]
pub struct StringTable {
    pub strings: Vec<String>,
    pub notes: Option<String>,
    pub consumed: usize,
}

/// Splits exactly `nbr_clues + 3` NUL-terminated fields off the front of
/// `data`, then a trailing notes field unless the remaining bytes begin an
/// extra section.
///
/// # Errors
/// [`PuzError::InsufficientStrings`] if the data runs out before a required
/// field is terminated, or if trailing bytes begin a notes field that is
/// never terminated.
pub fn parse(data: &[u8], nbr_clues: u16) -> Result<StringTable> {
    let expected = nbr_clues as usize + 3;
    let mut strings = Vec::with_capacity(expected);
    let mut rest = data;

    while strings.len() < expected {
        let text = take_field(&mut rest).ok_or(PuzError::InsufficientStrings {
            expected,
            found: strings.len(),
        })?;
        strings.push(text);
    }
    trace!("Read {} required strings", strings.len());

    let notes = if rest.is_empty() || sections::starts_section(rest) {
        None
    } else {
        let text = take_field(&mut rest).ok_or(PuzError::InsufficientStrings {
            expected: expected + 1,
            found: expected,
        })?;
        Some(text)
    };

    let consumed = data.len() - rest.len();
    debug!("String table: {} strings, notes={}, {} bytes", strings.len(), notes.is_some(), consumed);

    Ok(StringTable {
        strings,
        notes,
        consumed,
    })
}

/// Reads a NUL-terminated field and advances the slice past the terminator.
fn take_field(reader: &mut &[u8]) -> Option<String> {
    let end = reader.iter().position(|&b| b == 0)?;
    let (decoded, _, _) = WINDOWS_1252.decode(&reader[..end]);
    *reader = &reader[end + 1..];
    Some(decoded.into_owned())
}
