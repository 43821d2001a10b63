//! Benchmark profiles for dynarray containers.
//!
//! - [`Profile::SMALL`]: 1K four-byte elements, fits in cache
//! - [`Profile::WIDE`]: 1K 256-byte elements, exercises the heap copy path
//! - [`Profile::LARGE`]: 100K four-byte elements, many doublings

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray_buffer::ByteArray;
use dynarray_test_utils::{filled_array, seeded_elements};

/// Shape of a benchmark array.
#[derive(Clone, Copy, Debug)]
pub struct Profile {
    /// Short name used in benchmark ids.
    pub name: &'static str,
    /// Number of elements.
    pub len: usize,
    /// Element width in bytes.
    pub width: usize,
}

impl Profile {
    /// 1K four-byte elements.
    pub const SMALL: Profile = Profile {
        name: "small",
        len: 1_000,
        width: 4,
    };

    /// 1K 256-byte elements.
    pub const WIDE: Profile = Profile {
        name: "wide",
        len: 1_000,
        width: 256,
    };

    /// 100K four-byte elements.
    pub const LARGE: Profile = Profile {
        name: "large",
        len: 100_000,
        width: 4,
    };

    /// Deterministic element payloads for this profile.
    pub fn elements(&self, seed: u64) -> Vec<Vec<u8>> {
        seeded_elements(seed, self.len, self.width)
    }

    /// A populated array for this profile.
    pub fn build(&self, seed: u64) -> ByteArray {
        filled_array(self.width, &self.elements(seed))
    }
}
