//! Package path discovery from a shallow clone.
//!
//! Each Go repository is cloned into a scratch directory that only lives for
//! the duration of [`discover_package_paths`]. Every directory of the working
//! tree becomes one package path.

mod clone;
mod error;
mod walk;

pub use error::DiscoveryError;
pub use walk::list_package_dirs;

use crate::package::PackagePath;
use crate::repositories::RepositoryDescriptor;
use clone::shallow_clone;
use std::path::Path;
use tempfile::TempDir;
use tracing::{info, info_span, Instrument};

/// Prefix of the per-repository scratch directories.
const SCRATCH_PREFIX: &str = "vanity-pages-";

/// Discovers the package paths of a repository.
///
/// The repository is shallow-cloned to `<scratch>/<name>`, where `<scratch>`
/// is a fresh directory under `scratch_root` (or the system temp directory).
/// The returned paths are relative to `<scratch>`, so they all start with the
/// repository name. The scratch directory is removed before this returns,
/// whether or not the clone succeeded.
///
/// # Errors
///
/// Returns [`DiscoveryError`] if the repository has no clone URL, the scratch
/// directory cannot be created, the clone fails, or the walk task dies. Walk
/// errors are logged and only shorten the result.
pub async fn discover_package_paths(
    repository: &RepositoryDescriptor,
    scratch_root: Option<&Path>,
) -> Result<Vec<PackagePath>, DiscoveryError> {
    let span = info_span!("discover", repo = %repository.name);

    async {
        let clone_url =
            repository
                .clone_url
                .as_deref()
                .ok_or_else(|| DiscoveryError::MissingCloneUrl {
                    repository: repository.name.clone(),
                })?;

        let scratch = create_scratch_dir(scratch_root).map_err(DiscoveryError::ScratchDir)?;
        let repo_root = scratch.path().join(&repository.name);

        shallow_clone(&repository.name, clone_url, &repo_root).await?;

        let scratch_path = scratch.path().to_path_buf();
        let paths =
            tokio::task::spawn_blocking(move || list_package_dirs(&repo_root, &scratch_path))
                .await
                .map_err(|e| DiscoveryError::WalkTask {
                    repository: repository.name.clone(),
                    source: e,
                })?;
        info!(count = paths.len(), "Discovered package paths");

        Ok(paths)
    }
    .instrument(span)
    .await
}

/// Creates a uniquely named scratch directory, removed when dropped.
fn create_scratch_dir(scratch_root: Option<&Path>) -> std::io::Result<TempDir> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(SCRATCH_PREFIX);

    match scratch_root {
        Some(root) => {
            std::fs::create_dir_all(root)?;
            builder.tempdir_in(root)
        }
        None => builder.tempdir(),
    }
}
