//! Construction-time errors.
//!
//! The bus's read/write surface never fails — every access produces a
//! defined value or is silently absorbed, per hardware's own lack of a fault
//! mechanism. The one fallible boundary is building the backing stores from
//! caller-supplied images.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    /// The supplied ROM image is larger than the 32 MiB GamePak window.
    RomTooLarge(usize),
    /// The supplied BIOS image is not exactly 16 KiB.
    BiosWrongSize(usize),
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RomTooLarge(len) => write!(
                f,
                "ROM image of {len} bytes exceeds the 32 MiB GamePak window"
            ),
            Self::BiosWrongSize(len) => write!(f, "BIOS image must be 16 KiB, got {len} bytes"),
        }
    }
}

impl std::error::Error for BusError {}
