//! Typed array with the same growth and bounds policy as [`ByteArray`].
//!
//! [`Array<T>`] replaces the runtime width with the element type. The
//! element width is still `size_of::<T>()` and is validated against the
//! same limits, so a type that would not fit a [`ByteArray`] slot is
//! rejected here too.
//!
//! [`ByteArray`]: crate::ByteArray

use std::mem;

use dynarray_core::{policy, ArrayConfig, ArrayError, ResizePlan, DEFAULT_CAPACITY};

use crate::storage::reserve_slots;

/// A growable array of `T` with explicit capacity management.
///
/// Capacity is tracked here rather than read back from the `Vec`, which
/// is always reserved to at least this many slots.
#[derive(Debug)]
pub struct Array<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Clone> Array<T> {
    /// Create an empty array with `DEFAULT_CAPACITY` slots.
    ///
    /// Fails with `InvalidWidth` for zero-sized types and for types wider
    /// than `MAX_WIDTH` bytes.
    pub fn new() -> Result<Self, ArrayError> {
        ArrayConfig::new(mem::size_of::<T>()).validate()?;
        Ok(Self {
            items: reserve_slots(DEFAULT_CAPACITY)?,
            capacity: DEFAULT_CAPACITY,
        })
    }

    /// Size of one element in bytes.
    pub fn element_width(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert `element` at `at`, shifting later elements right.
    pub fn create(&mut self, element: T, at: usize) -> Result<(), ArrayError> {
        policy::check_insert(at, self.len())?;
        if self.len() == self.capacity {
            let grown = policy::grown_capacity(self.capacity)?;
            tracing::debug!(
                from = self.capacity,
                to = grown,
                width = self.element_width(),
                "growing typed array"
            );
            self.reallocate(grown, self.len())?;
        }
        self.items.insert(at, element);
        Ok(())
    }

    /// A copy of the element at `at`.
    pub fn read(&self, at: usize) -> Result<T, ArrayError> {
        policy::check_access(at, self.len())?;
        Ok(self.items[at].clone())
    }

    /// Replace the element at `at`.
    pub fn update(&mut self, element: T, at: usize) -> Result<(), ArrayError> {
        policy::check_access(at, self.len())?;
        self.items[at] = element;
        Ok(())
    }

    /// Remove the element at `at`, shifting later elements left.
    pub fn delete(&mut self, at: usize) -> Result<(), ArrayError> {
        policy::check_access(at, self.len())?;
        self.items.remove(at);
        Ok(())
    }

    /// Reallocate to hold `new_capacity` slots, floored at `DEFAULT_CAPACITY`.
    ///
    /// Elements past `new_capacity` are dropped.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let plan = ResizePlan::new(new_capacity, self.len());
        tracing::debug!(
            requested = new_capacity,
            capacity = plan.capacity,
            len = plan.len,
            truncated = plan.truncated(self.len()),
            "resizing typed array"
        );
        self.reallocate(plan.capacity, plan.len)
    }

    /// Index of the first element for which `eq(element, target)` holds.
    pub fn search<F>(&self, target: &T, mut eq: F) -> Result<usize, ArrayError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.is_empty() {
            return Err(ArrayError::Empty);
        }
        self.items
            .iter()
            .position(|item| eq(item, target))
            .ok_or(ArrayError::NotFound)
    }

    /// Compare two arrays element by element.
    ///
    /// Both arrays share `T`, so widths always agree; emptiness and length
    /// are checked in that order.
    pub fn equals<F>(&self, other: &Array<T>, mut eq: F) -> Result<bool, ArrayError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.is_empty() || other.is_empty() {
            return Err(ArrayError::Empty);
        }
        if self.len() != other.len() {
            return Err(ArrayError::SizeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self.items.iter().zip(&other.items).all(|(a, b)| eq(a, b)))
    }

    /// Clone every element into a freshly constructed array.
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        let mut copy = Self::new()?;
        for i in 0..self.len() {
            copy.create(self.read(i)?, i)?;
        }
        if !self.is_empty() {
            tracing::debug!(len = self.len(), width = self.element_width(), "copied typed array");
        }
        Ok(copy)
    }

    /// Reserve replacement storage first; only then move `keep` elements over.
    fn reallocate(&mut self, capacity: usize, keep: usize) -> Result<(), ArrayError> {
        let mut next = reserve_slots(capacity)?;
        self.items.truncate(keep);
        next.append(&mut self.items);
        self.items = next;
        self.capacity = capacity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[i32]) -> Array<i32> {
        let mut array = Array::new().unwrap();
        for (i, &v) in values.iter().enumerate() {
            array.create(v, i).unwrap();
        }
        array
    }

    fn values(array: &Array<i32>) -> Vec<i32> {
        (0..array.len()).map(|i| array.read(i).unwrap()).collect()
    }

    #[test]
    fn zero_sized_type_rejected() {
        assert_eq!(
            Array::<()>::new().unwrap_err(),
            ArrayError::InvalidWidth { width: 0 }
        );
    }

    #[test]
    fn oversized_type_rejected() {
        assert_eq!(
            Array::<[u8; 4096]>::new().unwrap_err(),
            ArrayError::InvalidWidth { width: 4096 }
        );
    }

    #[test]
    fn element_width_is_type_size() {
        let array: Array<u64> = Array::new().unwrap();
        assert_eq!(array.element_width(), 8);
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn insert_front_twice_then_middle() {
        let mut array = Array::new().unwrap();
        array.create(10, 0).unwrap();
        array.create(20, 0).unwrap();
        array.create(30, 1).unwrap();
        assert_eq!(values(&array), vec![20, 30, 10]);
    }

    #[test]
    fn growth_doubles_on_seventeenth_insert() {
        let array = filled(&(0..17).collect::<Vec<_>>());
        assert_eq!(array.capacity(), 32);
        assert_eq!(values(&array), (0..17).collect::<Vec<_>>());
    }

    #[test]
    fn bounds_and_emptiness() {
        let mut array: Array<i32> = Array::new().unwrap();
        assert_eq!(array.read(0), Err(ArrayError::Empty));
        assert_eq!(array.update(1, 0), Err(ArrayError::Empty));
        assert_eq!(array.delete(0), Err(ArrayError::Empty));
        assert_eq!(
            array.create(1, 1),
            Err(ArrayError::OutOfBounds { index: 1, len: 0 })
        );
        array.create(1, 0).unwrap();
        assert_eq!(
            array.read(1),
            Err(ArrayError::OutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn delete_preserves_order() {
        let mut array = filled(&[1, 2, 3, 4]);
        array.delete(1).unwrap();
        assert_eq!(values(&array), vec![1, 3, 4]);
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn resize_truncates_to_request() {
        let mut array = filled(&[1, 2, 3, 4, 5]);
        array.resize(2).unwrap();
        assert_eq!(values(&array), vec![1, 2]);
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn failed_resize_is_rolled_back() {
        let mut array = filled(&[1, 2, 3]);
        let err = array.resize(usize::MAX / 2).unwrap_err();
        assert!(matches!(err, ArrayError::OutOfMemory { .. }));
        assert_eq!(values(&array), vec![1, 2, 3]);
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn search_and_equals() {
        let a = filled(&[3, 5, 5]);
        assert_eq!(a.search(&5, |x, y| x == y), Ok(1));
        assert_eq!(a.search(&6, |x, y| x == y), Err(ArrayError::NotFound));

        let b = filled(&[3, 5, 5]);
        let c = filled(&[3, 5, 6]);
        assert_eq!(a.equals(&b, |x, y| x == y), Ok(true));
        assert_eq!(a.equals(&c, |x, y| x == y), Ok(false));
        assert_eq!(
            a.equals(&filled(&[3]), |x, y| x == y),
            Err(ArrayError::SizeMismatch { left: 3, right: 1 })
        );
    }

    #[test]
    fn owned_elements_are_cloned_out() {
        let mut array: Array<String> = Array::new().unwrap();
        array.create("alpha".to_string(), 0).unwrap();
        let mut out = array.read(0).unwrap();
        out.push_str("-mutated");
        assert_eq!(array.read(0).unwrap(), "alpha");
    }

    #[test]
    fn try_clone_is_independent() {
        let mut a = filled(&[1, 2, 3]);
        let c = a.try_clone().unwrap();
        a.update(100, 0).unwrap();
        assert_eq!(c.read(0), Ok(1));
        assert_eq!(values(&c), vec![1, 2, 3]);
    }
}
