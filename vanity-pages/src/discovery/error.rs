//! Path discovery error types.

use thiserror::Error;

/// Errors that can occur while discovering the package paths of a repository.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The listing did not include a clone URL.
    #[error("Repository '{repository}' has no clone URL")]
    MissingCloneUrl { repository: String },

    /// Failed to create the scratch directory.
    #[error("Failed to create scratch directory: {0}")]
    ScratchDir(#[source] std::io::Error),

    /// Failed to clone the repository.
    #[error("Failed to clone '{repository}': {message}")]
    CloneFailed { repository: String, message: String },

    /// The directory walk task panicked or was cancelled.
    #[error("Directory walk of '{repository}' did not complete: {source}")]
    WalkTask {
        repository: String,
        #[source]
        source: tokio::task::JoinError,
    },
}
