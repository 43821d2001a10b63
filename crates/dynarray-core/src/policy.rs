//! Capacity and bounds policy shared by every container.
//!
//! All functions are pure: they compute what a container should do and
//! leave the doing to the caller, which keeps the rollback story simple.
//! A container asks the policy first, allocates second, and only mutates
//! once both have succeeded.

use crate::config::DEFAULT_CAPACITY;
use crate::error::ArrayError;

/// Validate an insertion position. Inserting at `len` appends.
pub fn check_insert(at: usize, len: usize) -> Result<(), ArrayError> {
    if at > len {
        return Err(ArrayError::OutOfBounds { index: at, len });
    }
    Ok(())
}

/// Validate a position for read, update, or delete.
///
/// Emptiness is reported before bounds.
pub fn check_access(at: usize, len: usize) -> Result<(), ArrayError> {
    if len == 0 {
        return Err(ArrayError::Empty);
    }
    if at >= len {
        return Err(ArrayError::OutOfBounds { index: at, len });
    }
    Ok(())
}

/// Capacity after an automatic growth step: always double.
pub fn grown_capacity(capacity: usize) -> Result<usize, ArrayError> {
    capacity
        .checked_mul(2)
        .ok_or(ArrayError::OutOfMemory { capacity })
}

/// Byte size of `slots` elements of `width` bytes each.
pub fn slot_bytes(slots: usize, width: usize) -> Result<usize, ArrayError> {
    slots
        .checked_mul(width)
        .ok_or(ArrayError::OutOfMemory { capacity: slots })
}

/// Outcome of an explicit resize request.
///
/// Capacity never drops below [`DEFAULT_CAPACITY`]; length is clamped to
/// the *requested* capacity, so a request below the floor still truncates
/// to the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizePlan {
    /// Slots to allocate.
    pub capacity: usize,
    /// Elements kept from the front of the old storage.
    pub len: usize,
}

impl ResizePlan {
    /// Plan a resize of an array holding `len` elements to `requested` slots.
    pub fn new(requested: usize, len: usize) -> Self {
        Self {
            capacity: requested.max(DEFAULT_CAPACITY),
            len: requested.min(len),
        }
    }

    /// How many elements the plan drops off the end.
    pub fn truncated(&self, old_len: usize) -> usize {
        old_len.saturating_sub(self.len)
    }
}
