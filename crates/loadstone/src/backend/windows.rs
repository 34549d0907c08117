//! Windows backend: `LoadLibraryExW` / `GetProcAddress` / `FreeLibrary`
//! via `windows-sys`.
//!
//! `GetProcAddress` returns null exactly when the symbol is absent, so no
//! auxiliary error channel is needed; the checked and raw lookups coincide.
//! `LoadLibraryExW` surfaces no usable message either, so the load diagnostic
//! is the failing path.

use std::ffi::{CString, c_void};
use std::os::windows::ffi::OsStrExt;
use std::path::Path;
use std::ptr::NonNull;

use windows_sys::Win32::Foundation::FreeLibrary;
use windows_sys::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryExW};

use loadstone_core::LoaderFlags;

pub(crate) const SUFFIX: &str = ".dll";

fn wide(path: &Path) -> Vec<u16> {
    path.as_os_str().encode_wide().chain(Some(0)).collect()
}

pub(crate) fn open(path: &Path, flags: LoaderFlags) -> Result<NonNull<c_void>, String> {
    let wpath = wide(path);
    let handle =
        unsafe { LoadLibraryExW(wpath.as_ptr(), std::ptr::null_mut(), flags.windows_mask()) };
    NonNull::new(handle).ok_or_else(|| path.display().to_string())
}

pub(crate) fn close(handle: NonNull<c_void>) {
    unsafe {
        FreeLibrary(handle.as_ptr());
    }
}

pub(crate) fn symbol_checked(handle: NonNull<c_void>, name: &str) -> Option<*mut c_void> {
    let sym = symbol_raw(handle, name);
    if sym.is_null() { None } else { Some(sym) }
}

pub(crate) fn symbol_raw(handle: NonNull<c_void>, name: &str) -> *mut c_void {
    let Ok(cname) = CString::new(name) else {
        return std::ptr::null_mut();
    };
    match unsafe { GetProcAddress(handle.as_ptr(), cname.as_ptr().cast()) } {
        Some(proc) => proc as *mut c_void,
        None => std::ptr::null_mut(),
    }
}
