//! # loadstone-core
//!
//! Pure-logic types for the loadstone shared-library loader.
//!
//! This crate holds everything that needs no platform calls: the portable
//! [`LoaderFlags`] container over the two native flag vocabularies, and the
//! [`Error`] taxonomy. The actual dlopen/LoadLibrary invocations live in the
//! `loadstone` crate. No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod error;
pub mod flags;

pub use error::{Error, Result};
pub use flags::{LoaderFlags, UnixFlag, WindowsFlag};
