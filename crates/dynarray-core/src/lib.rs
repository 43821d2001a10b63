//! Core types for the dynarray containers.
//!
//! This crate holds everything the containers agree on but do not own:
//! the error taxonomy, the construction-time configuration, and the
//! capacity/bounds policy. Both the erased `ByteArray` and the typed
//! `Array<T>` in `dynarray-buffer` route every decision about growth,
//! truncation, and index validity through [`policy`], so the two
//! containers cannot drift apart.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod policy;

pub use config::{ArrayConfig, DEFAULT_CAPACITY, MAX_WIDTH, MIN_WIDTH};
pub use error::ArrayError;
pub use policy::ResizePlan;
