//! Runtime-width array over erased byte storage.
//!
//! [`ByteArray`] stores elements as opaque `element_width`-byte slots. It
//! never interprets their contents; callers supply byte slices in and out,
//! and byte predicates for search and equality.

use dynarray_core::{policy, ArrayConfig, ArrayError, ResizePlan, DEFAULT_CAPACITY};
use smallvec::{smallvec, SmallVec};

use crate::storage::Slots;

/// Elements up to this many bytes are staged on the stack during copies.
const INLINE_ELEMENT: usize = 64;

/// A growable array of fixed-width byte elements.
///
/// The element width is chosen at construction and never changes. Every
/// slice passed in or out must be exactly that many bytes long.
///
/// `Clone` copies the full slot storage, stale tail bytes included. Use
/// [`try_clone`](ByteArray::try_clone) for an element-by-element copy that
/// reports allocation failure instead of aborting.
#[derive(Clone, Debug)]
pub struct ByteArray {
    slots: Slots,
    len: usize,
}

impl ByteArray {
    /// Create an empty array of `element_width`-byte elements.
    ///
    /// Allocates `DEFAULT_CAPACITY` zeroed slots.
    pub fn new(element_width: usize) -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::new(element_width))
    }

    /// Create an empty array from a config.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let slots = Slots::zeroed(DEFAULT_CAPACITY, config.element_width)?;
        Ok(Self { slots, len: 0 })
    }

    /// Size of one element in bytes.
    pub fn element_width(&self) -> usize {
        self.slots.width()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Not a byte count.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Bytes of slot storage currently allocated (`capacity * element_width`).
    pub fn memory_bytes(&self) -> usize {
        self.slots.memory_bytes()
    }

    /// Insert a copy of `element` at `at`, shifting later elements right.
    ///
    /// `at == len()` appends. Grows to double capacity when full. On any
    /// error the array is unchanged.
    pub fn create(&mut self, element: &[u8], at: usize) -> Result<(), ArrayError> {
        policy::check_insert(at, self.len)?;
        self.check_width(element.len())?;

        if self.len == self.capacity() {
            let grown = policy::grown_capacity(self.capacity())?;
            tracing::debug!(
                from = self.capacity(),
                to = grown,
                width = self.element_width(),
                "growing byte array"
            );
            self.reallocate(grown, self.len)?;
        }

        self.slots.shift_right(at, self.len);
        self.slots.slot_mut(at).copy_from_slice(element);
        self.len += 1;
        Ok(())
    }

    /// Copy the element at `at` into `out`.
    pub fn read(&self, at: usize, out: &mut [u8]) -> Result<(), ArrayError> {
        policy::check_access(at, self.len)?;
        self.check_width(out.len())?;
        out.copy_from_slice(self.slots.slot(at));
        Ok(())
    }

    /// Overwrite the element at `at` with a copy of `element`.
    pub fn update(&mut self, element: &[u8], at: usize) -> Result<(), ArrayError> {
        policy::check_access(at, self.len)?;
        self.check_width(element.len())?;
        self.slots.slot_mut(at).copy_from_slice(element);
        Ok(())
    }

    /// Remove the element at `at`, shifting later elements left.
    ///
    /// Capacity is kept. The vacated tail slot is not cleared.
    pub fn delete(&mut self, at: usize) -> Result<(), ArrayError> {
        policy::check_access(at, self.len)?;
        self.slots.shift_left(at, self.len);
        self.len -= 1;
        Ok(())
    }

    /// Reallocate to hold `new_capacity` slots.
    ///
    /// Capacity is floored at `DEFAULT_CAPACITY`. If `new_capacity` is less
    /// than `len()`, elements past it are dropped.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let plan = ResizePlan::new(new_capacity, self.len);
        tracing::debug!(
            requested = new_capacity,
            capacity = plan.capacity,
            len = plan.len,
            truncated = plan.truncated(self.len),
            "resizing byte array"
        );
        self.reallocate(plan.capacity, plan.len)
    }

    /// Index of the first element for which `eq(element, target)` holds.
    ///
    /// The predicate sees each live slot in index order. It must not hold
    /// on to the slices it is given. `target` must be exactly one element
    /// wide.
    pub fn search<F>(&self, target: &[u8], mut eq: F) -> Result<usize, ArrayError>
    where
        F: FnMut(&[u8], &[u8]) -> bool,
    {
        if self.is_empty() {
            return Err(ArrayError::Empty);
        }
        self.check_width(target.len())?;
        (0..self.len)
            .find(|&i| eq(self.slots.slot(i), target))
            .ok_or(ArrayError::NotFound)
    }

    /// Compare two arrays element by element.
    ///
    /// Preconditions are checked in order: matching width, both non-empty,
    /// matching length. Returns `Ok(false)` at the first pair for which
    /// `eq` fails.
    pub fn equals<F>(&self, other: &ByteArray, mut eq: F) -> Result<bool, ArrayError>
    where
        F: FnMut(&[u8], &[u8]) -> bool,
    {
        if self.element_width() != other.element_width() {
            return Err(ArrayError::WidthMismatch {
                expected: self.element_width(),
                actual: other.element_width(),
            });
        }
        if self.is_empty() || other.is_empty() {
            return Err(ArrayError::Empty);
        }
        if self.len != other.len {
            return Err(ArrayError::SizeMismatch {
                left: self.len,
                right: other.len,
            });
        }
        Ok((0..self.len).all(|i| eq(self.slots.slot(i), other.slots.slot(i))))
    }

    /// Deep-copy into a freshly constructed array.
    ///
    /// Elements are read out and created into the copy one at a time, so
    /// the copy starts at `DEFAULT_CAPACITY` and grows as needed rather than
    /// inheriting this array's capacity. A partially built copy is dropped
    /// on failure.
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        let mut copy = Self::new(self.element_width())?;
        if self.is_empty() {
            return Ok(copy);
        }

        let mut scratch: SmallVec<[u8; INLINE_ELEMENT]> = smallvec![0; self.element_width()];
        for i in 0..self.len {
            self.read(i, &mut scratch)?;
            copy.create(&scratch, i)?;
        }
        tracing::debug!(len = self.len, width = self.element_width(), "copied byte array");
        Ok(copy)
    }

    fn check_width(&self, actual: usize) -> Result<(), ArrayError> {
        if actual != self.element_width() {
            return Err(ArrayError::WidthMismatch {
                expected: self.element_width(),
                actual,
            });
        }
        Ok(())
    }

    /// Build replacement storage holding the first `keep` elements, then swap.
    fn reallocate(&mut self, capacity: usize, keep: usize) -> Result<(), ArrayError> {
        let mut next = Slots::zeroed(capacity, self.element_width())?;
        next.copy_prefix(&self.slots, keep);
        self.slots = next;
        self.len = keep;
        Ok(())
    }
}
