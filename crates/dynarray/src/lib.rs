//! dynarray: growable arrays whose element width can be chosen at runtime.
//!
//! This is the facade crate that re-exports the public API from the
//! dynarray sub-crates. For most users, adding `dynarray` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dynarray::prelude::*;
//!
//! // Four-byte elements, width chosen at runtime.
//! let mut array = ByteArray::new(4).unwrap();
//! array.create(&10i32.to_le_bytes(), 0).unwrap();
//! array.create(&20i32.to_le_bytes(), 0).unwrap();
//! array.create(&30i32.to_le_bytes(), 1).unwrap();
//!
//! let mut out = [0u8; 4];
//! array.read(1, &mut out).unwrap();
//! assert_eq!(i32::from_le_bytes(out), 30);
//!
//! let at = array.search(&10i32.to_le_bytes(), |a, b| a == b).unwrap();
//! assert_eq!(at, 2);
//!
//! // Same policy, compile-time element type.
//! let mut typed: Array<i32> = Array::new().unwrap();
//! typed.create(7, 0).unwrap();
//! assert_eq!(typed.read(0), Ok(7));
//! assert_eq!(typed.read(1), Err(ArrayError::OutOfBounds { index: 1, len: 1 }));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buffer`] | `dynarray-buffer` | `ByteArray` and `Array<T>` |
//! | [`types`] | `dynarray-core` | Errors, configuration, capacity policy |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The containers (`dynarray-buffer`).
///
/// [`buffer::ByteArray`] stores opaque fixed-width byte elements;
/// [`buffer::Array`] stores `T` directly under the same policy.
pub use dynarray_buffer as buffer;

/// Errors, configuration, and capacity policy (`dynarray-core`).
pub use dynarray_core as types;

/// Common imports for typical usage.
///
/// ```rust
/// use dynarray::prelude::*;
/// ```
pub mod prelude {
    pub use dynarray_buffer::{Array, ByteArray};
    pub use dynarray_core::{ArrayConfig, ArrayError, DEFAULT_CAPACITY, MAX_WIDTH, MIN_WIDTH};
}
