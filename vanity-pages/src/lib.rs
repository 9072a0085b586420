#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod discovery;
pub mod package;
pub mod pages;
pub mod repositories;
pub mod runner;
pub mod summary;

pub use config::{ConfigError, ConfigFile, PackageSource, SiteConfig, ACCOUNT_ENV, DOMAIN_ENV};
pub use discovery::{discover_package_paths, list_package_dirs, DiscoveryError};
pub use package::{InvalidPackagePath, PackagePath};
pub use pages::{
    create_handlebars_registry, emit_page, emit_pages, page_path, PageError, PageRenderer,
};
pub use repositories::{
    list_repositories, split_by_language, ListingError, RepositoryDescriptor, GO_LANGUAGE,
};
pub use runner::{Runner, RunnerConfig, RunnerError, DEFAULT_OUT_DIR, DEFAULT_TEMPLATE_PATH};
pub use summary::RunSummary;
