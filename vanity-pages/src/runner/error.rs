//! Runner error types.

use crate::config::ConfigError;
use crate::discovery::DiscoveryError;
use crate::package::InvalidPackagePath;
use crate::pages::PageError;
use crate::repositories::ListingError;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Repository listing errors.
    #[error(transparent)]
    Listing(#[from] ListingError),

    /// Clone and discovery errors.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Template and page writing errors.
    #[error(transparent)]
    Page(#[from] PageError),

    /// A repository name that cannot be used as a package path.
    #[error(transparent)]
    InvalidPackage(#[from] InvalidPackagePath),

    /// Failed to create the output directory.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
