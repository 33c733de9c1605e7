//! .puz fixed header parsing.
//!
//! # Header Structure
//! ```text
//! [0x00] u16  whole-file checksum
//! [0x02] 12   "ACROSS&DOWN\0"
//! [0x0E] u16  CIB checksum
//! [0x10] 8    masked checksums (unused)
//! [0x18] 4    version string, e.g. "1.3\0"
//! [0x1C] 16   reserved
//! [0x2C] u8   width
//! [0x2D] u8   height
//! [0x2E] u16  number of clues
//! [0x30] u16  puzzle type
//! [0x32] u16  scrambled tag
//! [0x34]      solution, then user grid
//! ```
//!
//! The CIB checksum covers the eight bytes from width through scrambled tag.

use log::{trace, warn};

use crate::puz::types::{
    error::{PuzError, Result},
    models::PuzHeader,
};
use crate::puz::utils::ByteReader;

pub const FILE_CHECKSUM_OFFSET: usize = 0x00;
pub const MAGIC_OFFSET: usize = 0x02;
pub const MAGIC: &[u8; 12] = b"ACROSS&DOWN\0";
pub const CIB_CHECKSUM_OFFSET: usize = 0x0E;
pub const VERSION_OFFSET: usize = 0x18;
pub const VERSION_LEN: usize = 3;
pub const CIB_OFFSET: usize = 0x2C;
pub const CIB_LEN: usize = 8;
pub const WIDTH_OFFSET: usize = 0x2C;
pub const HEIGHT_OFFSET: usize = 0x2D;
pub const NBR_CLUES_OFFSET: usize = 0x2E;
pub const PUZZLE_TYPE_OFFSET: usize = 0x30;
pub const SCRAMBLED_OFFSET: usize = 0x32;
pub const HEADER_LEN: usize = 0x34;

/// Parses and validates the fixed header.
///
/// # Errors
/// - [`PuzError::BadMagicNumber`] when the literal is missing, carrying the
///   bytes actually found
/// - [`PuzError::OutOfBounds`] when the buffer is shorter than the header
pub fn parse(reader: &ByteReader<'_>) -> Result<PuzHeader> {
    let magic = reader.slice(MAGIC_OFFSET, MAGIC.len()).map_err(|_| PuzError::BadMagicNumber {
        found: reader.tail(MAGIC_OFFSET).unwrap_or_default().to_vec(),
    })?;
    if magic != MAGIC {
        return Err(PuzError::BadMagicNumber { found: magic.to_vec() });
    }

    // Fails on truncated headers before any field is trusted
    reader.slice(0, HEADER_LEN)?;

    let version_bytes = reader.slice(VERSION_OFFSET, VERSION_LEN)?;
    let version = String::from_utf8_lossy(version_bytes)
        .trim_end_matches('\0')
        .to_string();

    let header = PuzHeader {
        file_checksum: reader.short(FILE_CHECKSUM_OFFSET)?,
        cib_checksum: reader.short(CIB_CHECKSUM_OFFSET)?,
        version,
        width: reader.byte(WIDTH_OFFSET)?,
        height: reader.byte(HEIGHT_OFFSET)?,
        nbr_clues: reader.short(NBR_CLUES_OFFSET)?,
        puzzle_type: reader.short(PUZZLE_TYPE_OFFSET)?,
        scrambled_tag: reader.short(SCRAMBLED_OFFSET)?,
    };
    trace!(
        "Header fields: width={}, height={}, clues={}, type={:#06x}, scrambled={:#06x}",
        header.width, header.height, header.nbr_clues, header.puzzle_type, header.scrambled_tag
    );

    if header.scrambled_tag != 0 {
        warn!(
            "Puzzle solution is scrambled (tag {:#06x}); solution letters will not match entries",
            header.scrambled_tag
        );
    }

    Ok(header)
}
