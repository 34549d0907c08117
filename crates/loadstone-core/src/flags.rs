//! Loader flags — the portable flag container.
//!
//! Each native loader has its own flag vocabulary: `RTLD_*` on Unix
//! (`dlopen(3)`), `LOAD_LIBRARY_*` / `DONT_RESOLVE_*` on Windows
//! (`LoadLibraryExW`). A [`LoaderFlags`] value carries one mask per
//! vocabulary so the same configuration object works on either platform;
//! the backend consults only the mask it understands.

/// `dlopen(3)` mode flags.
///
/// Numeric values match the Linux `RTLD_*` constants.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnixFlag {
    /// Defer symbol resolution until first use (`RTLD_LAZY`).
    Lazy = 0x0000_0001,
    /// Resolve all symbols at load time (`RTLD_NOW`).
    Now = 0x0000_0002,
    /// Symbols are not made available to later loads (`RTLD_LOCAL`).
    ///
    /// This is the loader's default and has no bit of its own, so a
    /// membership test for it is always true.
    Local = 0x0000_0000,
    /// Symbols are made available to later loads (`RTLD_GLOBAL`).
    Global = 0x0000_0100,
    /// Prefer the library's own symbols over global ones (`RTLD_DEEPBIND`).
    Deepbind = 0x0000_0008,
    /// Never unload the library during `dlclose` (`RTLD_NODELETE`).
    Nodelete = 0x0000_1000,
    /// Do not load; only probe whether the library is resident (`RTLD_NOLOAD`).
    Noload = 0x0000_0004,
}

/// `LoadLibraryExW` flags.
///
/// Numeric values match the Win32 `libloaderapi.h` constants.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowsFlag {
    DontResolveReferences = 0x0000_0001,
    IgnoreCodeAuthzLevel = 0x0000_0010,
    RequireSignedTarget = 0x0000_0080,
    SafeCurrentDirs = 0x0000_2000,
    LoadAsDatafile = 0x0000_0002,
    LoadAsExclusiveDatafile = 0x0000_0040,
    LoadAsImageResource = 0x0000_0020,
    SearchApplicationDir = 0x0000_0200,
    SearchDefaultDirs = 0x0000_1000,
    SearchDllLoadDir = 0x0000_0100,
    SearchSystem32 = 0x0000_0800,
    SearchUserDirs = 0x0000_0400,
    SearchWithAlteredPath = 0x0000_0008,
}

/// A portable container of native loader flags.
///
/// Carries one mask per platform vocabulary regardless of the compiled-in
/// backend; only the relevant mask is consulted at load time. The Unix mask
/// upholds the `dlopen` binding rule at all times: exactly one of
/// [`UnixFlag::Lazy`] and [`UnixFlag::Now`] is set, with lazy binding as the
/// default. The Windows mask has no exclusivity rules and defaults to empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderFlags {
    unix: u32,
    windows: u32,
}

impl Default for LoaderFlags {
    fn default() -> Self {
        Self {
            unix: UnixFlag::Lazy as u32,
            windows: 0,
        }
    }
}

impl LoaderFlags {
    /// The default configuration: lazy binding on Unix, no flags on Windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a container from ordered flag lists, one per vocabulary.
    ///
    /// Flags are added in sequence order starting from the default state,
    /// so when a list names both `Lazy` and `Now` the later entry wins.
    pub fn from_flags(unix: &[UnixFlag], windows: &[WindowsFlag]) -> Self {
        let mut flags = Self::default();
        for &flag in unix {
            flags.add_unix(flag);
        }
        for &flag in windows {
            flags.add_windows(flag);
        }
        flags
    }

    /// Set a Unix flag.
    ///
    /// Setting one of the binding pair clears the other.
    pub fn add_unix(&mut self, flag: UnixFlag) {
        match flag {
            UnixFlag::Lazy => self.unix &= !(UnixFlag::Now as u32),
            UnixFlag::Now => self.unix &= !(UnixFlag::Lazy as u32),
            _ => {}
        }
        self.unix |= flag as u32;
    }

    /// Set a Windows flag.
    pub fn add_windows(&mut self, flag: WindowsFlag) {
        self.windows |= flag as u32;
    }

    /// Clear a Unix flag.
    ///
    /// Removing one of the binding pair asserts the other, so the mask stays
    /// valid for `dlopen` (which requires exactly one binding mode; lazy is
    /// its implicit default).
    pub fn remove_unix(&mut self, flag: UnixFlag) {
        self.unix &= !(flag as u32);
        match flag {
            UnixFlag::Lazy => self.unix |= UnixFlag::Now as u32,
            UnixFlag::Now => self.unix |= UnixFlag::Lazy as u32,
            _ => {}
        }
    }

    /// Clear a Windows flag.
    pub fn remove_windows(&mut self, flag: WindowsFlag) {
        self.windows &= !(flag as u32);
    }

    /// Whether a Unix flag is set.
    ///
    /// [`UnixFlag::Local`] has no bit of its own (it is the loader default),
    /// so this always reports it as present.
    pub fn has_unix(&self, flag: UnixFlag) -> bool {
        self.unix & flag as u32 == flag as u32
    }

    /// Whether a Windows flag is set.
    pub fn has_windows(&self, flag: WindowsFlag) -> bool {
        self.windows & flag as u32 == flag as u32
    }

    /// Raw Unix mask, for backend consumption.
    pub fn unix_mask(&self) -> u32 {
        self.unix
    }

    /// Raw Windows mask, for backend consumption.
    pub fn windows_mask(&self) -> u32 {
        self.windows
    }

    /// Reset the Unix mask to its default (exactly `{Lazy}`).
    pub fn clear_unix(&mut self) {
        self.unix = UnixFlag::Lazy as u32;
    }

    /// Reset the Windows mask to empty.
    pub fn clear_windows(&mut self) {
        self.windows = 0;
    }
}
