use std::fs;
use std::path::Path;
use log::{debug, info, warn};

use super::codec::checksum;
use super::format::{self, header::{CIB_LEN, CIB_OFFSET, HEADER_LEN}};
use super::types::error::{PuzError, Result};
use super::types::models::*;
use super::utils::ByteReader;

impl Puzzle {
    /// Read and decode a .puz file from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be read
    /// - Any decode step fails (see [`Puzzle::from_bytes`])
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening puzzle file: {}", path.display());
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Decode a complete .puz buffer.
    ///
    /// Decoding is all-or-nothing: the whole buffer is validated before a
    /// puzzle is returned.
    ///
    /// # Errors
    /// - [`PuzError::BadMagicNumber`] if the format literal is missing
    /// - [`PuzError::OutOfBounds`] if the buffer is truncated
    /// - [`PuzError::InsufficientStrings`] if the string table is short
    /// - [`PuzError::InvalidGrid`] if a cell code is illegal or black squares
    ///   differ between solution and user grid
    /// - [`PuzError::ChecksumMismatch`] if an extra section is corrupt
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let reader = ByteReader::new(bytes);

        // Step 1: Fixed header
        let header = format::header::parse(&reader)?;
        let wh = header.width as usize * header.height as usize;
        debug!("Puzzle is {}x{} with {} clues", header.width, header.height, header.nbr_clues);

        // Step 2: Solution and user grid
        let grid_offset = HEADER_LEN + wh;
        let strings_offset = grid_offset + wh;
        let solution = reader.slice(HEADER_LEN, wh)?.to_vec();
        let grid = reader.slice(grid_offset, wh)?.to_vec();
        validate_cells(&solution, &grid)?;

        // Step 3: String table
        let table = format::strings::parse(reader.tail(strings_offset)?, header.nbr_clues)?;

        // Step 4: Checksums. The file-level values are reported, not enforced.
        let cib_computed = reader.checksum(CIB_OFFSET, CIB_LEN, 0)?;
        let file_computed = checksum::chain([solution.as_slice(), grid.as_slice()], cib_computed);
        let checksums = ChecksumReport {
            cib_computed,
            cib_stored: header.cib_checksum,
            file_computed,
            file_stored: header.file_checksum,
        };
        debug!(
            "Checksums: cib computed={:#06x} stored={:#06x}, file computed={:#06x} stored={:#06x}",
            checksums.cib_computed, checksums.cib_stored, checksums.file_computed, checksums.file_stored
        );

        // Step 5: Extra sections
        let sections = format::sections::parse(&reader, strings_offset + table.consumed)?;
        if let Some(gext) = &sections.gext
            && gext.len() != wh
        {
            warn!("GEXT section has {} bytes for {} cells", gext.len(), wh);
        }

        info!(
            "Puzzle decoded: version={}, title='{}', {}x{}, {} extra section(s)",
            header.version,
            table.strings[0],
            header.width,
            header.height,
            sections.infos.len()
        );

        Ok(Self {
            header,
            solution,
            grid,
            strings: table.strings,
            notes: table.notes,
            gext: sections.gext,
            sections: sections.infos,
            checksums,
        })
    }
}

/// Solution cells must be `.` or an uppercase letter, user grid cells must be
/// ASCII, and black squares must sit at the same positions in both
/// buffers.
fn validate_cells(solution: &[u8], grid: &[u8]) -> Result<()> {
    for (i, (&sol, &entry)) in solution.iter().zip(grid).enumerate() {
        if sol != BLACK && !sol.is_ascii_uppercase() {
            return Err(PuzError::InvalidGrid(format!(
                "solution cell {} has code {:#04x}",
                i, sol
            )));
        }
        if !entry.is_ascii() {
            return Err(PuzError::InvalidGrid(format!(
                "user grid cell {} has code {:#04x}",
                i, entry
            )));
        }
        if (sol == BLACK) != (entry == BLACK) {
            return Err(PuzError::InvalidGrid(format!(
                "black square mismatch at cell {} (solution '{}', grid '{}')",
                i,
                sol as char,
                entry as char
            )));
        }
    }
    Ok(())
}
