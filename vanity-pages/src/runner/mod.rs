//! Orchestrates a page generation run.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_OUT_DIR, DEFAULT_TEMPLATE_PATH};
pub use error::RunnerError;

use crate::config::{PackageSource, SiteConfig};
use crate::discovery::discover_package_paths;
use crate::package::PackagePath;
use crate::pages::{emit_pages, PageRenderer};
use crate::repositories::{list_repositories, split_by_language, RepositoryDescriptor};
use crate::summary::RunSummary;
use octocrab::Octocrab;
use tracing::info;

/// Runs the listing, discovery and emission steps for one site.
///
/// Every step is sequential and the first error ends the run; pages written
/// before it stay on disk.
pub struct Runner {
    config: RunnerConfig,
    site: SiteConfig,
    renderer: PageRenderer,
}

impl Runner {
    /// Builds a runner, loading the page template.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Page`] if the template is missing or malformed.
    /// Nothing is written in that case.
    pub fn new(config: RunnerConfig, site: SiteConfig) -> Result<Self, RunnerError> {
        let renderer =
            PageRenderer::from_file(config.template_path())?.with_account(site.account.as_deref());
        Ok(Self {
            config,
            site,
            renderer,
        })
    }

    /// Executes the full generation flow.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new();
        let out_dir = self.config.out_dir();
        info!(out_dir = %out_dir.display(), domain = %self.site.domain, "Generating pages");

        std::fs::create_dir_all(out_dir).map_err(|e| RunnerError::OutputDir {
            path: out_dir.display().to_string(),
            source: e,
        })?;

        match &self.site.source {
            PackageSource::Account(account) => {
                self.generate_for_account(account, &mut summary).await?;
            }
            PackageSource::Packages(packages) => {
                let pages = emit_pages(&self.renderer, out_dir, &self.site.domain, packages)?;
                summary.record_pages(pages);
            }
        }

        Ok(summary)
    }

    async fn generate_for_account(
        &self,
        account: &str,
        summary: &mut RunSummary,
    ) -> Result<(), RunnerError> {
        let octocrab = self.github_client()?;
        let repositories = list_repositories(&octocrab, account).await?;
        let listed = repositories.len();

        let (go_repositories, others) = split_by_language(repositories);
        for repository in &others {
            info!(
                repo = %repository.name,
                language = repository.language.as_deref().unwrap_or("none"),
                "Primary language is not Go, skipping"
            );
        }
        summary.record_listing(listed, others.len());

        for repository in &go_repositories {
            info!(repo = %repository.name, "Found Go repository, generating pages");
            let packages = self.package_paths(repository).await?;
            let pages = emit_pages(
                &self.renderer,
                self.config.out_dir(),
                &self.site.domain,
                &packages,
            )?;
            summary.record_repository(pages);
        }

        Ok(())
    }

    /// Resolves the package paths of one Go repository.
    async fn package_paths(
        &self,
        repository: &RepositoryDescriptor,
    ) -> Result<Vec<PackagePath>, RunnerError> {
        if self.config.discover() {
            Ok(discover_package_paths(repository, self.config.scratch_root()).await?)
        } else {
            Ok(vec![PackagePath::new(repository.name.as_str())?])
        }
    }

    fn github_client(&self) -> Result<Octocrab, RunnerError> {
        let mut builder = Octocrab::builder();
        if let Some(api_base) = self.config.api_base() {
            builder = builder.base_uri(api_base)?;
        }
        if let Some(token) = self.config.token() {
            builder = builder.personal_token(token.to_string());
        }
        Ok(builder.build()?)
    }
}
