//! Codec layer for integrity checks.
//!
//! # Submodules
//!
//! - [`checksum`][]: the format's rolling 16-bit checksum

pub mod checksum;
