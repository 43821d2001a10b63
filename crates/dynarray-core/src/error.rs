//! Error types for container operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
///
/// Every fallible operation reports exactly one of these and leaves the
/// container byte-for-byte unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Element width is zero or exceeds [`MAX_WIDTH`](crate::MAX_WIDTH).
    /// Only raised at construction.
    InvalidWidth {
        /// The rejected width in bytes.
        width: usize,
    },
    /// Slot storage could not be allocated, either because the allocator
    /// refused or because the byte size overflowed `usize`.
    OutOfMemory {
        /// Number of slots that were requested.
        capacity: usize,
    },
    /// A positional index is outside the operation's valid range.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
    /// The operation needs at least one element.
    Empty,
    /// A linear search matched nothing.
    NotFound,
    /// Two element widths disagree: either two arrays being compared, or a
    /// caller buffer whose length is not the array's element width.
    WidthMismatch {
        /// The width the array expects.
        expected: usize,
        /// The width that was supplied.
        actual: usize,
    },
    /// Two arrays being compared hold different numbers of elements.
    SizeMismatch {
        /// Length of the receiver.
        left: usize,
        /// Length of the other array.
        right: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { width } => {
                write!(
                    f,
                    "invalid element width {width}: must be within {}..={}",
                    crate::MIN_WIDTH,
                    crate::MAX_WIDTH
                )
            }
            Self::OutOfMemory { capacity } => {
                write!(f, "out of memory allocating {capacity} slots")
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::Empty => write!(f, "array is empty"),
            Self::NotFound => write!(f, "no element matched"),
            Self::WidthMismatch { expected, actual } => {
                write!(f, "element width mismatch: expected {expected}, got {actual}")
            }
            Self::SizeMismatch { left, right } => {
                write!(f, "length mismatch: {left} vs {right}")
            }
        }
    }
}

impl Error for ArrayError {}
