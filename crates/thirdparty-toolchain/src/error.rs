//! Error types for toolchain construction.

use std::path::PathBuf;

/// Errors that can occur while building a [`crate::Toolchain`].
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    /// Wrong number of raw configuration values.
    #[error("expected {expected} arguments, got {actual}")]
    Arity {
        /// Number of values the toolchain needs.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// The host triplet matches none of the known target families.
    #[error(
        "unrecognized target '{triplet}' (build: {}, prefix: {})",
        build_path.display(),
        install_prefix.display()
    )]
    UnrecognizedTarget {
        /// The offending triplet.
        triplet: String,
        /// Build scratch directory that would have been used.
        build_path: PathBuf,
        /// Install prefix that would have been used.
        install_prefix: PathBuf,
    },

    /// The install prefix cannot be put on `PATH`, usually because it
    /// contains the path-list separator.
    #[error("install prefix {} cannot be added to PATH", path.display())]
    InvalidPrefix {
        /// The offending `<prefix>/bin` directory.
        path: PathBuf,
    },
}

/// Result type for toolchain operations.
pub type Result<T> = std::result::Result<T, ToolchainError>;
