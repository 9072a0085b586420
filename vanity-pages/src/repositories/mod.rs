//! Repository enumeration using the GitHub REST API.
//!
//! Lists the public repositories of an account in a single request and keeps
//! the ones whose primary language is Go.

mod descriptor;
mod error;

pub use descriptor::{RepositoryDescriptor, GO_LANGUAGE};
pub use error::ListingError;

use octocrab::models::Repository;
use octocrab::Octocrab;
use tracing::{info, info_span, Instrument};

/// Lists the repositories of a GitHub account.
///
/// Issues exactly one request (`GET /users/{account}/repos`). There is no
/// pagination and no retry; the order is whatever GitHub returns.
///
/// # Errors
///
/// Returns [`ListingError`] on any transport, authentication or API failure.
pub async fn list_repositories(
    octocrab: &Octocrab,
    account: &str,
) -> Result<Vec<RepositoryDescriptor>, ListingError> {
    let span = info_span!("list_repositories", account = %account);

    async {
        info!("Listing repositories");

        let route = format!("/users/{account}/repos");
        let repos: Vec<Repository> = octocrab
            .get(route, None::<&()>)
            .await
            .map_err(|e| ListingError::GitHubError {
                account: account.to_string(),
                source: e,
            })?;

        info!(count = repos.len(), "Found repositories");
        Ok(repos.into_iter().map(RepositoryDescriptor::from).collect())
    }
    .instrument(span)
    .await
}

/// Splits repositories into Go repositories and everything else, keeping the
/// listing order within each half.
#[must_use]
pub fn split_by_language(
    repositories: Vec<RepositoryDescriptor>,
) -> (Vec<RepositoryDescriptor>, Vec<RepositoryDescriptor>) {
    repositories.into_iter().partition(RepositoryDescriptor::is_go)
}
