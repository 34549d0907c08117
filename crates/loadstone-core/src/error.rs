//! Loader error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by shared-library operations.
///
/// All failures are synchronous and exact: a failed load leaves the handle
/// unloaded with no dangling native resource, and none of these conditions
/// is transient enough to merit a retry.
#[derive(Debug, Error)]
pub enum Error {
    /// A load was attempted on a handle that already owns a library.
    ///
    /// Carries the currently loaded path. Recoverable: unload first, or use
    /// a fresh handle.
    #[error("a library is already loaded from {}", .0.display())]
    AlreadyLoaded(PathBuf),

    /// An operation requiring a loaded library was invoked on an empty handle.
    #[error("no library has been loaded into this handle")]
    NotLoaded,

    /// The native loader failed to load the library.
    ///
    /// Carries the native diagnostic where the platform provides one
    /// (`dlerror` text on Unix), otherwise the failing path.
    #[error("failed to load library: {0}")]
    Loading(String),

    /// Symbol resolution failed on a loaded library.
    ///
    /// Carries the requested symbol name.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_payloads() {
        let err = Error::AlreadyLoaded(PathBuf::from("/lib/libx.so"));
        assert_eq!(err.to_string(), "a library is already loaded from /lib/libx.so");

        let err = Error::SymbolNotFound("frobnicate".into());
        assert_eq!(err.to_string(), "symbol not found: frobnicate");

        let err = Error::Loading("libx.so: cannot open shared object file".into());
        assert!(err.to_string().contains("cannot open shared object file"));

        assert_eq!(
            Error::NotLoaded.to_string(),
            "no library has been loaded into this handle"
        );
    }
}
