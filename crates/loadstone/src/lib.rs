//! # loadstone
//!
//! Runtime loading of shared libraries, for programs that want plugin-style
//! extensibility without static linkage.
//!
//! The [`SharedLibrary`] handle owns at most one native library at a time and
//! dispatches load/unload/symbol lookups to the platform backend selected at
//! build time (the Unix dynamic loader or the Windows library loader). The
//! [`LoaderFlags`] container carries both native flag vocabularies so the
//! same configuration value works on either platform.
//!
//! ```no_run
//! use loadstone::SharedLibrary;
//!
//! # fn main() -> loadstone::Result<()> {
//! let lib = SharedLibrary::new();
//! lib.load(format!("libdumb{}", SharedLibrary::platform_suffix()))?;
//!
//! if lib.has_symbol("add") {
//!     let add: extern "C" fn(i32, i32) -> i32 =
//!         unsafe { std::mem::transmute(lib.get_symbol("add")?) };
//!     assert_eq!(add(2, 2), 4);
//! }
//!
//! lib.unload();
//! # Ok(())
//! # }
//! ```

mod backend;
mod library;

pub use library::SharedLibrary;
pub use loadstone_core::{Error, LoaderFlags, Result, UnixFlag, WindowsFlag};
