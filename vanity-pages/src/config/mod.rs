//! Site configuration loading.
//!
//! The domain and the package source come either from the environment (a
//! GitHub account whose repositories are enumerated) or from a JSON config
//! file listing the packages explicitly.

mod error;
mod file;
mod site;

pub use error::ConfigError;
pub use file::ConfigFile;
pub use site::{PackageSource, SiteConfig};

/// Environment variable holding the custom domain.
pub const DOMAIN_ENV: &str = "DOMAIN_NAME";

/// Environment variable holding the GitHub account to enumerate.
pub const ACCOUNT_ENV: &str = "GITHUB_ACTOR";
