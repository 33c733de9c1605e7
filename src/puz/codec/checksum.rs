//! The .puz rolling 16-bit checksum.
//!
//! Each byte first rotates the running value right by one bit (the dropped
//! low bit wraps into bit 15), then adds the byte with 16-bit wraparound.

/// Fold `bytes` into `seed` and return the updated checksum.
pub fn region(bytes: &[u8], seed: u16) -> u16 {
    bytes
        .iter()
        .fold(seed, |sum, &b| sum.rotate_right(1).wrapping_add(b as u16))
}

/// Chain several regions, feeding each result into the next as its seed.
pub fn chain<'a>(regions: impl IntoIterator<Item = &'a [u8]>, seed: u16) -> u16 {
    regions.into_iter().fold(seed, |sum, bytes| region(bytes, sum))
}
