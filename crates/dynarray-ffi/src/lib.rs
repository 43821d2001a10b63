//! C FFI bindings for dynarray byte arrays.
//!
//! Arrays live in a global generation-checked handle table behind a
//! `Mutex`; C code only ever holds opaque `u64` handles. The mutex is the
//! one lock in the system: the arrays themselves are unsynchronised, and
//! each call holds the table lock for its full duration.
//!
//! Every function returns a status code (see [`status::DynArrayStatus`])
//! and records it for [`status::dynarray_last_status`]. Panics are caught
//! and reported as `Panicked` rather than unwinding into C.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
// Pointer arguments are validated for null and otherwise trusted per the C contract.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

/// Run an FFI body, converting panics to `Panicked` and recording the status.
macro_rules! ffi_guard {
    ($body:block) => {{
        let result = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(
            || -> i32 { $body },
        ));
        let status = match result {
            Ok(status) => status,
            Err(_) => {
                ::tracing::error!("panic caught at dynarray FFI boundary");
                $crate::status::DynArrayStatus::Panicked as i32
            }
        };
        $crate::status::record(status)
    }};
}

/// Lock a mutex inside `ffi_guard!`, returning `InternalError` if poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $crate::status::DynArrayStatus::InternalError as i32,
        }
    };
}

pub mod array;
mod handle;
pub mod status;

pub use handle::NULL_HANDLE;
pub use status::DynArrayStatus;
