//! C-compatible status codes and the per-thread last-status channel.
//!
//! Every FFI entry point returns a [`DynArrayStatus`] as `i32` and also
//! records it for the calling thread. Callers that only look at success
//! can query [`dynarray_last_status`] afterwards, errno-style.

use std::cell::Cell;

use dynarray_core::ArrayError;

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DynArrayStatus {
    /// Success.
    Ok = 0,
    /// Handle is null, unknown, or was already destroyed.
    InvalidHandle = -1,
    /// A pointer argument is null or a callback is missing.
    InvalidArgument = -2,
    /// Element width is zero or above the maximum.
    InvalidWidth = -3,
    /// Allocation failed; the array is unchanged.
    OutOfMemory = -4,
    /// Index outside the operation's valid range.
    OutOfBounds = -5,
    /// The array has no elements.
    Empty = -6,
    /// Search matched nothing.
    NotFound = -7,
    /// Compared arrays have different element widths.
    WidthMismatch = -8,
    /// Compared arrays have different lengths.
    SizeMismatch = -9,
    /// Internal error (e.g. poisoned mutex after a prior panic).
    InternalError = -20,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&ArrayError> for DynArrayStatus {
    fn from(e: &ArrayError) -> Self {
        match e {
            ArrayError::InvalidWidth { .. } => DynArrayStatus::InvalidWidth,
            ArrayError::OutOfMemory { .. } => DynArrayStatus::OutOfMemory,
            ArrayError::OutOfBounds { .. } => DynArrayStatus::OutOfBounds,
            ArrayError::Empty => DynArrayStatus::Empty,
            ArrayError::NotFound => DynArrayStatus::NotFound,
            ArrayError::WidthMismatch { .. } => DynArrayStatus::WidthMismatch,
            ArrayError::SizeMismatch { .. } => DynArrayStatus::SizeMismatch,
        }
    }
}

thread_local! {
    static LAST_STATUS: Cell<i32> = const { Cell::new(0) };
}

/// Remember `status` as this thread's most recent outcome and pass it through.
pub(crate) fn record(status: i32) -> i32 {
    LAST_STATUS.with(|cell| cell.set(status));
    status
}

/// Status of the most recent dynarray call made on this thread.
///
/// Reading it does not reset it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_last_status() -> i32 {
    LAST_STATUS.with(Cell::get)
}
