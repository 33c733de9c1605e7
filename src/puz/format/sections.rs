//! Extra section parsing.
//!
//! # Section Structure
//! ```text
//! [4 bytes] ASCII name, e.g. "GEXT"
//! [2 bytes] payload length (little-endian u16)
//! [2 bytes] payload checksum (little-endian u16, seed 0)
//! [N bytes] payload
//! [1 byte ] NUL
//! ```
//!
//! Sections repeat until the end of the buffer. Only GEXT is interpreted;
//! every other name is verified and skipped.

use log::{debug, warn};

use crate::puz::types::{
    error::{PuzError, Result},
    models::SectionInfo,
};
use crate::puz::utils::ByteReader;

pub const GEXT: &str = "GEXT";

/// Bit in a GEXT cell byte marking a circled square.
pub const GEXT_CIRCLED: u8 = 0x80;

const SECTION_HEADER_LEN: usize = 8;

/// All extra sections found, and the GEXT payload if one was present.
#[derive(Debug, Default)]
pub struct Sections {
    pub infos: Vec<SectionInfo>,
    pub gext: Option<Vec<u8>>,
}

/// Whether `data` begins with a complete section whose payload matches its
/// checksum. Used to tell a trailing notes string from the first section.
pub fn starts_section(data: &[u8]) -> bool {
    let reader = ByteReader::new(data);
    let Ok(name) = reader.slice(0, 4) else {
        return false;
    };
    if !name.iter().all(u8::is_ascii_alphanumeric) {
        return false;
    }
    let (Ok(len), Ok(expected)) = (reader.short(4), reader.short(6)) else {
        return false;
    };
    let len = len as usize;
    reader.byte(SECTION_HEADER_LEN + len).is_ok()
        && reader.checksum(SECTION_HEADER_LEN, len, 0).is_ok_and(|actual| actual == expected)
}

/// Walks sections from `offset` to the end of the buffer.
///
/// # Errors
/// - [`PuzError::ChecksumMismatch`] if any payload fails its checksum
/// - [`PuzError::OutOfBounds`] if a section is truncated
pub fn parse(reader: &ByteReader<'_>, mut offset: usize) -> Result<Sections> {
    let mut sections = Sections::default();

    while offset < reader.len() {
        let name = String::from_utf8_lossy(reader.slice(offset, 4)?).into_owned();
        let len = reader.short(offset + 4)?;
        let checksum_expected = reader.short(offset + 6)?;
        let payload_offset = offset + SECTION_HEADER_LEN;
        let checksum_actual = reader.checksum(payload_offset, len as usize, 0)?;
        debug!(
            "Extra section {} at {}: len={}, checksum expected={:#06x}, actual={:#06x}",
            name, offset, len, checksum_expected, checksum_actual
        );
        if checksum_actual != checksum_expected {
            return Err(PuzError::ChecksumMismatch {
                section: name,
                expected: checksum_expected,
                actual: checksum_actual,
            });
        }

        let terminator_offset = payload_offset + len as usize;
        if reader.byte(terminator_offset)? != 0 {
            warn!("Extra section {} is not NUL-terminated", name);
        }

        if name == GEXT {
            sections.gext = Some(reader.slice(payload_offset, len as usize)?.to_vec());
        } else {
            debug!("Skipping uninterpreted section {}", name);
        }

        sections.infos.push(SectionInfo {
            name,
            len,
            checksum: checksum_expected,
        });
        offset = terminator_offset + 1;
    }

    Ok(sections)
}
