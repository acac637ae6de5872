//! Fail-fast errors for caller bugs
//!
//! Only programming errors live here. Enemies leaving the strip, the player
//! hitting an edge or an attack window expiring are ordinary state changes.

use core::fmt;

/// Invalid strip construction or out-of-range pixel access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// A strip must hold at least one pixel
    ZeroLength,
    /// Requested length does not fit the backing buffer
    TooLong { len: usize, capacity: usize },
    /// Direct access outside `[0, len)`
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => f.write_str("strip length must be non-zero"),
            Self::TooLong { len, capacity } => {
                write!(f, "strip length {len} exceeds capacity {capacity}")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "pixel index {index} out of range for strip of {len}")
            }
        }
    }
}

/// World registration failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldError {
    /// No room left for another enemy
    Full { capacity: usize },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full { capacity } => write!(f, "world already holds {capacity} enemies"),
        }
    }
}
