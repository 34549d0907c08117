//! Platform backends.
//!
//! One backend compiles in per target; the selection happens here, never at
//! run time. Both modules expose the same surface:
//!
//! - `open(path, flags) -> Result<NonNull<c_void>, String>` — native load,
//!   consuming the mask relevant to the platform; the error is the native
//!   diagnostic string.
//! - `close(handle)` — release the native handle.
//! - `symbol_checked(handle, name) -> Option<*mut c_void>` — lookup that
//!   consults the platform's error signal; `None` means the symbol is absent.
//! - `symbol_raw(handle, name) -> *mut c_void` — lookup with no error-channel
//!   interpretation; null is ambiguous on platforms where a present symbol
//!   can legitimately resolve to null.
//! - `SUFFIX` — the conventional shared-library filename suffix.

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::{SUFFIX, close, open, symbol_checked, symbol_raw};

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::{SUFFIX, close, open, symbol_checked, symbol_raw};
