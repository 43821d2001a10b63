//! Fallibly allocated slot storage.
//!
//! [`Slots`] is a contiguous, zero-initialised `Vec<u8>` carved into
//! fixed-width slots. It knows nothing about logical length; the owning
//! container decides which slots are live.

use dynarray_core::{policy, ArrayError};

/// Contiguous storage for `capacity` slots of `width` bytes each.
#[derive(Clone, Debug)]
pub(crate) struct Slots {
    /// Backing bytes. Always exactly `capacity * width` long.
    data: Vec<u8>,
    width: usize,
}

impl Slots {
    /// Allocate `capacity` zeroed slots.
    ///
    /// Fails with `OutOfMemory` if the byte size overflows or the
    /// allocator refuses. Nothing is allocated on failure.
    pub fn zeroed(capacity: usize, width: usize) -> Result<Self, ArrayError> {
        let bytes = policy::slot_bytes(capacity, width)?;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| ArrayError::OutOfMemory { capacity })?;
        data.resize(bytes, 0);
        Ok(Self { data, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn capacity(&self) -> usize {
        self.data.len() / self.width
    }

    pub fn memory_bytes(&self) -> usize {
        self.data.len()
    }

    /// Shared view of slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn slot(&self, index: usize) -> &[u8] {
        let start = index * self.width;
        &self.data[start..start + self.width]
    }

    /// Mutable view of slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn slot_mut(&mut self, index: usize) -> &mut [u8] {
        let start = index * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Copy the first `count` slots of `src` into the front of `self`.
    pub fn copy_prefix(&mut self, src: &Slots, count: usize) {
        debug_assert_eq!(self.width, src.width);
        let bytes = count * self.width;
        self.data[..bytes].copy_from_slice(&src.data[..bytes]);
    }

    /// Move slots `[at, len)` one slot to the right. Slot `len` must exist.
    pub fn shift_right(&mut self, at: usize, len: usize) {
        let w = self.width;
        self.data.copy_within(at * w..len * w, (at + 1) * w);
    }

    /// Move slots `(at, len)` one slot to the left, overwriting slot `at`.
    pub fn shift_left(&mut self, at: usize, len: usize) {
        let w = self.width;
        self.data.copy_within((at + 1) * w..len * w, at * w);
    }
}

/// Reserve an empty `Vec<T>` with room for exactly `capacity` elements.
pub(crate) fn reserve_slots<T>(capacity: usize) -> Result<Vec<T>, ArrayError> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(capacity)
        .map_err(|_| ArrayError::OutOfMemory { capacity })?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_slots_are_zero() {
        let slots = Slots::zeroed(16, 4).unwrap();
        assert_eq!(slots.capacity(), 16);
        assert_eq!(slots.memory_bytes(), 64);
        assert!((0..16).all(|i| slots.slot(i) == [0, 0, 0, 0]));
    }

    #[test]
    fn byte_size_overflow_is_out_of_memory() {
        let result = Slots::zeroed(usize::MAX / 2, 4);
        assert!(matches!(result, Err(ArrayError::OutOfMemory { .. })));
    }

    #[test]
    fn shift_right_opens_gap() {
        let mut slots = Slots::zeroed(4, 1).unwrap();
        slots.slot_mut(0)[0] = 1;
        slots.slot_mut(1)[0] = 2;
        slots.slot_mut(2)[0] = 3;
        slots.shift_right(1, 3);
        assert_eq!(slots.slot(0), [1]);
        assert_eq!(slots.slot(2), [2]);
        assert_eq!(slots.slot(3), [3]);
    }

    #[test]
    fn shift_left_closes_gap() {
        let mut slots = Slots::zeroed(4, 2).unwrap();
        slots.slot_mut(0).copy_from_slice(&[1, 1]);
        slots.slot_mut(1).copy_from_slice(&[2, 2]);
        slots.slot_mut(2).copy_from_slice(&[3, 3]);
        slots.shift_left(0, 3);
        assert_eq!(slots.slot(0), [2, 2]);
        assert_eq!(slots.slot(1), [3, 3]);
    }

    #[test]
    fn copy_prefix_leaves_tail_zeroed() {
        let mut src = Slots::zeroed(4, 1).unwrap();
        for i in 0..4 {
            src.slot_mut(i)[0] = i as u8 + 1;
        }
        let mut dst = Slots::zeroed(8, 1).unwrap();
        dst.copy_prefix(&src, 2);
        assert_eq!(dst.slot(0), [1]);
        assert_eq!(dst.slot(1), [2]);
        assert_eq!(dst.slot(2), [0]);
    }

    #[test]
    fn reserve_slots_overflow_is_out_of_memory() {
        let result = reserve_slots::<u64>(usize::MAX / 2);
        assert!(matches!(result, Err(ArrayError::OutOfMemory { .. })));
    }
}
