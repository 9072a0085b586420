//! Repository listing error types.

use thiserror::Error;

/// Errors that can occur while listing an account's repositories.
#[derive(Debug, Error)]
pub enum ListingError {
    /// GitHub API error.
    #[error("Failed to list repositories of '{account}': {source}")]
    GitHubError {
        account: String,
        #[source]
        source: octocrab::Error,
    },
}
