//! Low-level byte reading utilities

use byteorder::{ByteOrder, LittleEndian};

use crate::puz::codec::checksum;
use crate::puz::types::error::{PuzError, Result};

/// Bounds-checked view over a raw .puz buffer.
///
/// Every accessor fails with [`PuzError::OutOfBounds`] instead of panicking,
/// so callers can propagate with `?`.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read one unsigned octet.
    pub fn byte(&self, offset: usize) -> Result<u8> {
        self.bytes
            .get(offset)
            .copied()
            .ok_or(PuzError::OutOfBounds { offset, len: 1 })
    }

    /// Read a little-endian 16-bit value from two consecutive bytes.
    pub fn short(&self, offset: usize) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.slice(offset, 2)?))
    }

    /// Borrow `len` bytes starting at `offset`.
    pub fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        offset
            .checked_add(len)
            .and_then(|end| self.bytes.get(offset..end))
            .ok_or(PuzError::OutOfBounds { offset, len })
    }

    /// Everything from `offset` to the end of the buffer.
    pub fn tail(&self, offset: usize) -> Result<&'a [u8]> {
        self.bytes
            .get(offset..)
            .ok_or(PuzError::OutOfBounds { offset, len: 0 })
    }

    /// Run the rolling checksum over `len` bytes at `base`, starting from `seed`.
    pub fn checksum(&self, base: usize, len: usize, seed: u16) -> Result<u16> {
        Ok(checksum::region(self.slice(base, len)?, seed))
    }
}
