//! Growable arrays with deep-copy boundaries.
//!
//! Two containers share one policy (see `dynarray_core::policy`):
//!
//! ```text
//! ByteArray   runtime element width, erased byte storage
//! └── Slots   zero-filled Vec<u8> of capacity * width bytes
//! Array<T>    compile-time element type, Vec<T> with tracked capacity
//! ```
//!
//! # Guarantees
//!
//! - Capacity starts at `DEFAULT_CAPACITY`, doubles when an insert finds
//!   the array full, and only shrinks through an explicit `resize`.
//! - No operation hands out a reference into storage. Reads copy out,
//!   writes copy in. Search and equality predicates see borrowed slots for
//!   the duration of the call only.
//! - Every operation either fully succeeds or leaves the array unchanged.
//!   Replacement storage is built completely before it is swapped in.
//! - Allocation uses `try_reserve_exact`, so allocator refusal is reported
//!   as `ArrayError::OutOfMemory` rather than aborting the process.
//!
//! Neither container synchronises internally. Share one behind a `Mutex`
//! if more than one thread needs it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bytes;
mod storage;
pub mod typed;

pub use bytes::ByteArray;
pub use typed::Array;
