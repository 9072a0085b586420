//! Site configuration and its two loading modes.

use crate::config::{ConfigError, ConfigFile, ACCOUNT_ENV, DOMAIN_ENV};
use crate::package::PackagePath;
use std::path::Path;
use tracing::{debug, info};

/// Where the package paths of a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSource {
    /// Enumerate the Go repositories of a GitHub account.
    Account(String),

    /// Use an explicit, ordered list of packages.
    Packages(Vec<PackagePath>),
}

/// Configuration for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Custom domain the packages are served under. Never empty.
    pub domain: String,

    /// Account hosting the repositories, exposed to the template as `Account`.
    pub account: Option<String>,

    /// Source of the package paths.
    pub source: PackageSource,
}

impl SiteConfig {
    /// Loads the account-driven configuration from `DOMAIN_NAME` and
    /// `GITHUB_ACTOR`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let domain = required_env(DOMAIN_ENV)?;
        let account = required_env(ACCOUNT_ENV)?;
        info!(domain = %domain, account = %account, "Loaded configuration from environment");

        Ok(Self {
            domain,
            account: Some(account.clone()),
            source: PackageSource::Account(account),
        })
    }

    /// Loads the file-driven configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, not valid
    /// JSON, has an empty domain, or lists an invalid package path.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let file: ConfigFile =
            serde_json::from_str(&content).map_err(|e| ConfigError::JsonError {
                path: path.display().to_string(),
                source: e,
            })?;

        Self::from_file(file, path)
    }

    /// Validates a parsed config file.
    fn from_file(file: ConfigFile, path: &Path) -> Result<Self, ConfigError> {
        if file.domain.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "domain cannot be empty".to_string(),
            });
        }

        let packages = file
            .packages
            .into_iter()
            .map(PackagePath::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::ValidationError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        info!(
            domain = %file.domain,
            packages = packages.len(),
            "Loaded configuration from file"
        );

        Ok(Self {
            domain: file.domain,
            account: file.account.filter(|account| !account.is_empty()),
            source: PackageSource::Packages(packages),
        })
    }
}

fn required_env(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv { name }),
    }
}
