//! Cross toolchain description for the third-party library build.
//!
//! A [`Toolchain`] is assembled once per invocation from the twelve raw
//! configuration values ([`ToolchainArgs`]) and carries everything a build
//! recipe needs:
//! - **Paths:** tarball cache, extracted sources, build scratch, install prefix
//! - **Target:** the host triplet and its [`TargetClass`]
//! - **Flags and tools:** compiler/linker flags and tool paths
//! - **Environment:** the [`EnvOverlay`] applied to every child process

pub mod args;
pub mod env;
pub mod error;
pub mod flags;
pub mod target;
pub mod toolchain;

pub use args::{usage, ToolchainArgs, ARG_COUNT, ARG_NAMES};
pub use env::{EnvOverlay, SUPPRESSED_VARS};
pub use error::{Result, ToolchainError};
pub use flags::{apply_overrides, FlagOverride};
pub use target::TargetClass;
pub use toolchain::Toolchain;
