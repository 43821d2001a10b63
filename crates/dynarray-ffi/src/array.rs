//! Array lifecycle and CRUD FFI.
//!
//! Element pointers passed in or out must cover exactly the array's
//! element width in bytes. Indices and capacities are `u64`; values that
//! do not fit `usize` saturate and are then rejected by the usual bounds
//! and allocation checks.
//!
//! Search and equality callbacks run while the table lock is held. They
//! must not call back into this API.

use std::ffi::c_void;
use std::slice;
use std::sync::Mutex;

use dynarray_buffer::ByteArray;
use dynarray_core::ArrayError;

use crate::handle::{HandleTable, NULL_HANDLE};
use crate::status::DynArrayStatus;

static ARRAYS: Mutex<HandleTable<ByteArray>> = Mutex::new(HandleTable::new());

/// Element comparison callback: receives two element pointers, returns
/// whether they are equal. Must not retain or write through the pointers.
pub type DynArrayEqFn = extern "C" fn(*const c_void, *const c_void) -> bool;

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn status_of(result: Result<(), ArrayError>) -> i32 {
    match result {
        Ok(()) => DynArrayStatus::Ok as i32,
        Err(e) => DynArrayStatus::from(&e) as i32,
    }
}

/// Create an empty array of `element_width`-byte elements.
///
/// On success writes the new handle to `out`. On failure writes the null
/// handle to `out` (if non-null) and returns `InvalidWidth` or `OutOfMemory`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_new(element_width: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return DynArrayStatus::InvalidArgument as i32;
        }
        let array = match ByteArray::new(to_usize(element_width)) {
            Ok(array) => array,
            Err(e) => {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = NULL_HANDLE };
                return DynArrayStatus::from(&e) as i32;
            }
        };
        let handle = ffi_lock!(ARRAYS).insert(array);
        // SAFETY: out is non-null and valid per caller contract.
        unsafe { *out = handle };
        DynArrayStatus::Ok as i32
    })
}

/// Destroy the array behind `*handle` and set `*handle` to the null handle.
///
/// A null `handle` pointer or a null `*handle` is a no-op returning `Ok`,
/// so destroying twice through the same variable is safe. A stale handle
/// held in another variable returns `InvalidHandle`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_destroy(handle: *mut u64) -> i32 {
    ffi_guard!({
        if handle.is_null() {
            return DynArrayStatus::Ok as i32;
        }
        // SAFETY: handle is non-null and valid per caller contract.
        let current = unsafe { *handle };
        if current == NULL_HANDLE {
            return DynArrayStatus::Ok as i32;
        }
        match ffi_lock!(ARRAYS).remove(current) {
            Some(_) => {
                // SAFETY: as above.
                unsafe { *handle = NULL_HANDLE };
                DynArrayStatus::Ok as i32
            }
            None => DynArrayStatus::InvalidHandle as i32,
        }
    })
}

/// Insert a copy of the element at `element` before index `at`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_create(handle: u64, element: *const u8, at: u64) -> i32 {
    ffi_guard!({
        if element.is_null() {
            return DynArrayStatus::InvalidArgument as i32;
        }
        let mut arrays = ffi_lock!(ARRAYS);
        let Some(array) = arrays.get_mut(handle) else {
            return DynArrayStatus::InvalidHandle as i32;
        };
        // SAFETY: element points to element_width readable bytes per caller contract.
        let element = unsafe { slice::from_raw_parts(element, array.element_width()) };
        status_of(array.create(element, to_usize(at)))
    })
}

/// Copy the element at `at` into the buffer at `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_read(handle: u64, out: *mut u8, at: u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return DynArrayStatus::InvalidArgument as i32;
        }
        let arrays = ffi_lock!(ARRAYS);
        let Some(array) = arrays.get(handle) else {
            return DynArrayStatus::InvalidHandle as i32;
        };
        // SAFETY: out points to element_width writable bytes per caller contract.
        let out = unsafe { slice::from_raw_parts_mut(out, array.element_width()) };
        status_of(array.read(to_usize(at), out))
    })
}

/// Overwrite the element at `at` with a copy of the element at `element`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_update(handle: u64, element: *const u8, at: u64) -> i32 {
    ffi_guard!({
        if element.is_null() {
            return DynArrayStatus::InvalidArgument as i32;
        }
        let mut arrays = ffi_lock!(ARRAYS);
        let Some(array) = arrays.get_mut(handle) else {
            return DynArrayStatus::InvalidHandle as i32;
        };
        // SAFETY: element points to element_width readable bytes per caller contract.
        let element = unsafe { slice::from_raw_parts(element, array.element_width()) };
        status_of(array.update(element, to_usize(at)))
    })
}

/// Remove the element at `at`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_delete(handle: u64, at: u64) -> i32 {
    ffi_guard!({
        let mut arrays = ffi_lock!(ARRAYS);
        let Some(array) = arrays.get_mut(handle) else {
            return DynArrayStatus::InvalidHandle as i32;
        };
        status_of(array.delete(to_usize(at)))
    })
}

/// Reallocate to `new_capacity` slots, truncating if needed.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_resize(handle: u64, new_capacity: u64) -> i32 {
    ffi_guard!({
        let mut arrays = ffi_lock!(ARRAYS);
        let Some(array) = arrays.get_mut(handle) else {
            return DynArrayStatus::InvalidHandle as i32;
        };
        status_of(array.resize(to_usize(new_capacity)))
    })
}

/// Find the first element equal to `target` under `eq`.
///
/// On success writes the index to `found_at`. Returns `Empty` or
/// `NotFound` otherwise, leaving `found_at` untouched.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_search(
    handle: u64,
    target: *const u8,
    eq: Option<DynArrayEqFn>,
    found_at: *mut u64,
) -> i32 {
    ffi_guard!({
        let Some(eq) = eq else {
            return DynArrayStatus::InvalidArgument as i32;
        };
        if target.is_null() || found_at.is_null() {
            return DynArrayStatus::InvalidArgument as i32;
        }
        let arrays = ffi_lock!(ARRAYS);
        let Some(array) = arrays.get(handle) else {
            return DynArrayStatus::InvalidHandle as i32;
        };
        // SAFETY: target points to element_width readable bytes per caller contract.
        let target = unsafe { slice::from_raw_parts(target, array.element_width()) };
        match array.search(target, |a, b| eq(a.as_ptr().cast(), b.as_ptr().cast())) {
            Ok(index) => {
                // SAFETY: found_at is non-null and valid per caller contract.
                unsafe { *found_at = index as u64 };
                DynArrayStatus::Ok as i32
            }
            Err(e) => DynArrayStatus::from(&e) as i32,
        }
    })
}

/// Compare two arrays element by element under `eq`.
///
/// Writes the verdict to `out_equal` when both arrays pass the width,
/// emptiness, and length checks.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_equals(
    a: u64,
    b: u64,
    eq: Option<DynArrayEqFn>,
    out_equal: *mut bool,
) -> i32 {
    ffi_guard!({
        let Some(eq) = eq else {
            return DynArrayStatus::InvalidArgument as i32;
        };
        if out_equal.is_null() {
            return DynArrayStatus::InvalidArgument as i32;
        }
        let arrays = ffi_lock!(ARRAYS);
        let (Some(left), Some(right)) = (arrays.get(a), arrays.get(b)) else {
            return DynArrayStatus::InvalidHandle as i32;
        };
        match left.equals(right, |x, y| eq(x.as_ptr().cast(), y.as_ptr().cast())) {
            Ok(equal) => {
                // SAFETY: out_equal is non-null and valid per caller contract.
                unsafe { *out_equal = equal };
                DynArrayStatus::Ok as i32
            }
            Err(e) => DynArrayStatus::from(&e) as i32,
        }
    })
}

/// Deep-copy the array behind `handle` into a new array, handle via `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_copy(handle: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return DynArrayStatus::InvalidArgument as i32;
        }
        let mut arrays = ffi_lock!(ARRAYS);
        let copy = match arrays.get(handle).map(ByteArray::try_clone) {
            Some(Ok(copy)) => copy,
            Some(Err(e)) => return DynArrayStatus::from(&e) as i32,
            None => return DynArrayStatus::InvalidHandle as i32,
        };
        let copy_handle = arrays.insert(copy);
        // SAFETY: out is non-null and valid per caller contract.
        unsafe { *out = copy_handle };
        DynArrayStatus::Ok as i32
    })
}

#[allow(unsafe_code)]
fn write_query(handle: u64, out: *mut u64, query: fn(&ByteArray) -> usize) -> i32 {
    if out.is_null() {
        return DynArrayStatus::InvalidArgument as i32;
    }
    let arrays = ffi_lock!(ARRAYS);
    let Some(array) = arrays.get(handle) else {
        return DynArrayStatus::InvalidHandle as i32;
    };
    // SAFETY: out is non-null and valid per caller contract.
    unsafe { *out = query(array) as u64 };
    DynArrayStatus::Ok as i32
}

/// Element width in bytes, via `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_element_width(handle: u64, out: *mut u64) -> i32 {
    ffi_guard!({ write_query(handle, out, ByteArray::element_width) })
}

/// Number of live elements, via `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_len(handle: u64, out: *mut u64) -> i32 {
    ffi_guard!({ write_query(handle, out, ByteArray::len) })
}

/// Number of allocated slots, via `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn dynarray_capacity(handle: u64, out: *mut u64) -> i32 {
    ffi_guard!({ write_query(handle, out, ByteArray::capacity) })
}
