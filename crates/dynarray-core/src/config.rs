//! Container configuration parameters.

use crate::error::ArrayError;
use crate::policy;

/// Smallest permitted element width in bytes.
pub const MIN_WIDTH: usize = 1;

/// Largest permitted element width in bytes.
pub const MAX_WIDTH: usize = 0xFFF;

/// Slot count allocated at construction and the floor for every resize.
pub const DEFAULT_CAPACITY: usize = 16;

/// Configuration for a runtime-width container.
///
/// Validated at construction; immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Size of one element in bytes.
    ///
    /// Must lie within `MIN_WIDTH..=MAX_WIDTH`.
    pub element_width: usize,
}

impl ArrayConfig {
    /// Create a config for elements of `element_width` bytes.
    pub fn new(element_width: usize) -> Self {
        Self { element_width }
    }

    /// Check that the element width is in range.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.element_width) {
            return Err(ArrayError::InvalidWidth {
                width: self.element_width,
            });
        }
        Ok(())
    }

    /// Bytes needed for the initial `DEFAULT_CAPACITY` slots.
    pub fn initial_bytes(&self) -> Result<usize, ArrayError> {
        policy::slot_bytes(DEFAULT_CAPACITY, self.element_width)
    }
}
