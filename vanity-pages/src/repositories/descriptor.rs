//! Listed repository information.

use serde::Serialize;

/// Primary language a repository must have to get pages.
pub const GO_LANGUAGE: &str = "Go";

/// A repository returned by the listing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDescriptor {
    /// Repository name (e.g., "tool").
    pub name: String,

    /// HTTPS clone URL, when GitHub reports one.
    pub clone_url: Option<String>,

    /// Primary language as detected by GitHub.
    pub language: Option<String>,
}

impl RepositoryDescriptor {
    /// Returns true if the primary language is exactly `"Go"`.
    #[must_use]
    pub fn is_go(&self) -> bool {
        self.language.as_deref() == Some(GO_LANGUAGE)
    }
}

impl From<octocrab::models::Repository> for RepositoryDescriptor {
    fn from(repo: octocrab::models::Repository) -> Self {
        Self {
            name: repo.name,
            clone_url: repo.clone_url.map(|url| url.to_string()),
            language: repo
                .language
                .as_ref()
                .and_then(|value| value.as_str())
                .map(str::to_string),
        }
    }
}
