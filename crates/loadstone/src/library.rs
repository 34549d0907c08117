//! The [`SharedLibrary`] resource handle.

use std::ffi::c_void;
use std::path::{Path, PathBuf};
use std::ptr::NonNull;

use parking_lot::Mutex;

use loadstone_core::{Error, LoaderFlags, Result};

use crate::backend;

/// A handle owning at most one runtime-loaded shared library.
///
/// The handle starts empty, becomes loaded through [`load`](Self::load) or
/// [`load_with`](Self::load_with), and returns to empty through
/// [`unload`](Self::unload) or by being dropped; the native resource is
/// released on every exit path. Loading into an already-loaded handle is
/// rejected, not replaced.
///
/// The native handle is exclusively owned: the type is deliberately neither
/// `Clone` nor `Copy`, so duplicating ownership is a compile-time error.
/// All operations are synchronized through a per-instance lock, making the
/// handle safe to share across threads behind an `Arc`.
pub struct SharedLibrary {
    inner: Mutex<Inner>,
}

struct Inner {
    /// Path of the loaded library; empty while unloaded.
    path: PathBuf,
    /// Native loader handle; `None` while unloaded.
    handle: Option<NonNull<c_void>>,
}

// SAFETY: the native handle is an opaque process-wide loader token, not tied
// to the thread that produced it, and every access to the handle state goes
// through the instance mutex.
unsafe impl Send for SharedLibrary {}
unsafe impl Sync for SharedLibrary {}

impl SharedLibrary {
    /// Create an empty handle.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                path: PathBuf::new(),
                handle: None,
            }),
        }
    }

    /// Load a shared library with the default flags (lazy binding on Unix,
    /// no flags on Windows).
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyLoaded`] if this handle already owns a library;
    /// [`Error::Loading`] if the native loader fails.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<()> {
        self.load_with(path, LoaderFlags::default())
    }

    /// Load a shared library, passing the mask relevant to the compiled-in
    /// backend from `flags`.
    ///
    /// On failure the handle is left unloaded with no native resource. The
    /// call blocks for as long as the operating system's loader takes; no
    /// timeout is provided.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyLoaded`] if this handle already owns a library;
    /// [`Error::Loading`] if the native loader fails, carrying the native
    /// diagnostic where the platform provides one.
    pub fn load_with(&self, path: impl AsRef<Path>, flags: LoaderFlags) -> Result<()> {
        let path = path.as_ref();
        let mut inner = self.inner.lock();

        if inner.handle.is_some() {
            return Err(Error::AlreadyLoaded(inner.path.clone()));
        }

        let handle = backend::open(path, flags).map_err(Error::Loading)?;
        inner.handle = Some(handle);
        inner.path = path.to_path_buf();
        tracing::debug!(path = %path.display(), "loaded shared library");
        Ok(())
    }

    /// Release the loaded library, if any. A no-op on an empty handle.
    pub fn unload(&self) {
        let mut inner = self.inner.lock();
        if let Some(handle) = inner.handle.take() {
            backend::close(handle);
            tracing::debug!(path = %inner.path.display(), "unloaded shared library");
            inner.path.clear();
        }
    }

    /// Whether a library is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.inner.lock().handle.is_some()
    }

    /// Resolve a symbol, consulting the backend's error signal.
    ///
    /// On Unix a null lookup result is not by itself proof of absence, so
    /// this checks the `dlerror` channel; the returned address can therefore
    /// in principle be null for a present symbol.
    ///
    /// The caller must know the symbol's real type out of band and cast
    /// accordingly; no type checking is performed.
    ///
    /// # Errors
    ///
    /// [`Error::NotLoaded`] on an empty handle; [`Error::SymbolNotFound`]
    /// when the backend reports the symbol absent.
    pub fn get_symbol(&self, name: &str) -> Result<*mut c_void> {
        let inner = self.inner.lock();
        let handle = inner.handle.ok_or(Error::NotLoaded)?;
        backend::symbol_checked(handle, name)
            .ok_or_else(|| Error::SymbolNotFound(name.to_owned()))
    }

    /// Resolve a symbol without the error-signal check. Never fails.
    ///
    /// Returns null on an empty handle. On a loaded handle this is the raw
    /// backend lookup: a null result is ambiguous between "absent" and
    /// "present with a null value", in exchange for skipping the error-path
    /// overhead of [`get_symbol`](Self::get_symbol).
    pub fn get_symbol_fast(&self, name: &str) -> *mut c_void {
        let inner = self.inner.lock();
        match inner.handle {
            Some(handle) => backend::symbol_raw(handle, name),
            None => std::ptr::null_mut(),
        }
    }

    /// Whether the loaded library exports `name`. Never fails; `false` on an
    /// empty handle.
    pub fn has_symbol(&self, name: &str) -> bool {
        !self.get_symbol_fast(name).is_null()
    }

    /// Path of the loaded library, or an empty path while unloaded.
    pub fn path(&self) -> PathBuf {
        self.inner.lock().path.clone()
    }

    /// The raw native handle, or null while unloaded.
    pub fn native_handle(&self) -> *mut c_void {
        self.inner
            .lock()
            .handle
            .map_or(std::ptr::null_mut(), NonNull::as_ptr)
    }

    /// The conventional shared-library filename suffix for the compiled
    /// target: `.dll` on Windows, `.dylib` on Apple platforms, `.so`
    /// otherwise.
    pub fn platform_suffix() -> &'static str {
        backend::SUFFIX
    }
}

impl Default for SharedLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SharedLibrary {
    fn drop(&mut self) {
        // Exclusive access here, so no lock is re-acquired during teardown.
        let inner = self.inner.get_mut();
        if let Some(handle) = inner.handle.take() {
            backend::close(handle);
            tracing::trace!(path = %inner.path.display(), "released shared library on drop");
        }
    }
}

impl std::fmt::Debug for SharedLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("SharedLibrary")
            .field("path", &inner.path)
            .field("loaded", &inner.handle.is_some())
            .finish()
    }
}
