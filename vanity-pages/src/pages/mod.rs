//! Page emission.
//!
//! Every package path becomes one HTML file at `<out_dir>/<package>.html`,
//! rendered from a single Handlebars template.

mod error;
mod renderer;

pub use error::PageError;
pub use renderer::{create_handlebars_registry, PageRenderer};

use crate::package::PackagePath;
use std::path::{Path, PathBuf};
use tracing::info;

/// Returns the file a package's page is written to.
#[must_use]
pub fn page_path(out_dir: &Path, package: &PackagePath) -> PathBuf {
    out_dir.join(format!("{package}.html"))
}

/// Renders and writes the page for one package.
///
/// Missing parent directories are created. An existing page is overwritten.
///
/// # Errors
///
/// Returns [`PageError`] if a directory cannot be created, the template fails
/// to render, or the file cannot be written.
pub fn emit_page(
    renderer: &PageRenderer,
    out_dir: &Path,
    domain: &str,
    package: &PackagePath,
) -> Result<PathBuf, PageError> {
    let path = page_path(out_dir, package);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PageError::IoError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let page = renderer.render(domain, package)?;
    std::fs::write(&path, page).map_err(|e| PageError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    info!(page = %format!("{package}.html"), "Wrote page");
    Ok(path)
}

/// Emits the pages for `packages` in order, stopping at the first failure.
///
/// Pages written before the failure stay on disk; later packages are not
/// attempted.
///
/// # Errors
///
/// Returns the first [`PageError`] encountered.
pub fn emit_pages(
    renderer: &PageRenderer,
    out_dir: &Path,
    domain: &str,
    packages: &[PackagePath],
) -> Result<usize, PageError> {
    for package in packages {
        emit_page(renderer, out_dir, domain, package)?;
    }
    Ok(packages.len())
}
