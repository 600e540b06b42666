//! The library capability interface.

use thirdparty_toolchain::Toolchain;

use crate::error::Result;
use crate::id::LibraryId;

/// A third-party library that can be checked for and built into a prefix.
pub trait Library {
    /// Which library this is.
    fn id(&self) -> LibraryId;

    /// Whether the library is already present in the toolchain's install
    /// prefix. Must be a cheap filesystem check with no side effects.
    fn is_installed(&self, toolchain: &Toolchain) -> bool;

    /// Configure, compile and install the library.
    ///
    /// Only called after [`Library::is_installed`] returned `false`. On
    /// success a later `is_installed` must return `true`.
    fn build(&self, toolchain: &Toolchain) -> Result<()>;
}
