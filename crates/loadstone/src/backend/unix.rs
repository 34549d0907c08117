//! Unix backend: `dlopen` / `dlsym` / `dlclose` via `libc`.
//!
//! `dlerror` is a per-thread message channel that reports the outcome of the
//! most recent loader call, so the discipline is always: drain any stale
//! message, make the call, then read the channel. For symbol lookup the
//! channel is the only reliable absence signal, since null is in principle a
//! valid address for a data symbol.

use std::ffi::{CStr, CString, c_void};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr::NonNull;

use loadstone_core::LoaderFlags;

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) const SUFFIX: &str = ".dylib";
#[cfg(not(any(target_os = "macos", target_os = "ios")))]
pub(crate) const SUFFIX: &str = ".so";

/// Drain the thread-local `dlerror` message, if one is pending.
fn take_error() -> Option<String> {
    let msg = unsafe { libc::dlerror() };
    if msg.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned())
}

pub(crate) fn open(path: &Path, flags: LoaderFlags) -> Result<NonNull<c_void>, String> {
    let cpath = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| format!("path contains an interior NUL byte: {}", path.display()))?;

    take_error();
    let handle = unsafe { libc::dlopen(cpath.as_ptr(), flags.unix_mask() as libc::c_int) };
    match NonNull::new(handle) {
        Some(handle) => Ok(handle),
        None => Err(take_error().unwrap_or_else(|| format!("dlopen failed: {}", path.display()))),
    }
}

pub(crate) fn close(handle: NonNull<c_void>) {
    unsafe {
        libc::dlclose(handle.as_ptr());
    }
}

/// Lookup with the `dlerror` absence check. `Some(ptr)` may still be null if
/// the symbol genuinely resolves to a null address.
pub(crate) fn symbol_checked(handle: NonNull<c_void>, name: &str) -> Option<*mut c_void> {
    let cname = CString::new(name).ok()?;

    take_error();
    let sym = unsafe { libc::dlsym(handle.as_ptr(), cname.as_ptr()) };
    if unsafe { libc::dlerror() }.is_null() {
        Some(sym)
    } else {
        None
    }
}

/// Lookup without touching the error channel; null means "absent, or present
/// with a null value".
pub(crate) fn symbol_raw(handle: NonNull<c_void>, name: &str) -> *mut c_void {
    let Ok(cname) = CString::new(name) else {
        return std::ptr::null_mut();
    };
    unsafe { libc::dlsym(handle.as_ptr(), cname.as_ptr()) }
}
