//! Fixtures shared by dynarray tests and benchmarks.
//!
//! Builders for populated [`ByteArray`]s, `u32` encode/decode helpers for
//! the common four-byte case, and deterministic element generation from a
//! seed so failures reproduce exactly.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray_buffer::ByteArray;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Byte-for-byte element equality, the predicate most tests want.
pub fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    a == b
}

/// A four-byte array holding `values` in order.
pub fn u32_array(values: &[u32]) -> ByteArray {
    let mut array = ByteArray::new(4).expect("width 4 is valid");
    for (i, v) in values.iter().enumerate() {
        array
            .create(&v.to_le_bytes(), i)
            .expect("append within bounds");
    }
    array
}

/// Decode every element of a four-byte array.
pub fn u32_values(array: &ByteArray) -> Vec<u32> {
    let mut out = [0u8; 4];
    (0..array.len())
        .map(|i| {
            array.read(i, &mut out).expect("index below len");
            u32::from_le_bytes(out)
        })
        .collect()
}

/// `count` pseudo-random elements of `width` bytes, fixed by `seed`.
pub fn seeded_elements(seed: u64, count: usize, width: usize) -> Vec<Vec<u8>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut element = vec![0u8; width];
            rng.fill_bytes(&mut element);
            element
        })
        .collect()
}

/// An array of `width`-byte elements appended in order.
///
/// # Panics
///
/// Panics if `width` is invalid or any element is not `width` bytes.
pub fn filled_array(width: usize, elements: &[Vec<u8>]) -> ByteArray {
    let mut array = ByteArray::new(width).expect("valid width");
    for (i, element) in elements.iter().enumerate() {
        array.create(element, i).expect("element of matching width");
    }
    array
}
