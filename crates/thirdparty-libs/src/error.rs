//! Error types for library builds.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors raised while building a library.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// Source tarball absent from the tarball cache.
    #[error("source tarball not found: {} (fetch it into the tarball cache first)", path.display())]
    MissingTarball {
        /// Where the tarball was expected.
        path: PathBuf,
    },

    /// Extraction finished but the expected top-level directory is missing.
    #[error("{} did not unpack to {}", tarball.display(), expected.display())]
    BadArchive { tarball: PathBuf, expected: PathBuf },

    /// Filesystem error while preparing a build.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A build step could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A build step exited unsuccessfully.
    #[error("{program} failed with {status}")]
    CommandFailed { program: String, status: ExitStatus },
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, LibraryError>;
