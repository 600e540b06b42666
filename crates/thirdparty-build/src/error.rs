//! Error types for orchestrated builds.

use thirdparty_libs::{LibraryError, LibraryId};

/// Errors that end an orchestrated run.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The sequence names a library the catalog does not provide.
    #[error("no recipe registered for {0}")]
    Unregistered(LibraryId),

    /// A library failed to build; later libraries were not attempted.
    #[error("failed to build {id}")]
    Failed {
        id: LibraryId,
        #[source]
        source: LibraryError,
    },
}

/// Result type for orchestrated builds.
pub type Result<T> = std::result::Result<T, BuildError>;
