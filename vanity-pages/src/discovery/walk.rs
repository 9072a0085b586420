//! Directory walking over a cloned working tree.

use crate::package::PackagePath;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Marker contained in version-control metadata directory names (`.git`, `.github`, `mirror.git`).
const VCS_MARKER: &str = ".git";

/// Lists every directory under `repo_root`, the root included, as a package
/// path relative to `scratch_root`.
///
/// Metadata directories are pruned along with everything beneath them. The
/// walk is sorted by file name. A walk error is logged and ends the walk; the
/// paths gathered up to that point are returned.
pub fn list_package_dirs(repo_root: &Path, scratch_root: &Path) -> Vec<PackagePath> {
    let mut dirs = Vec::new();

    let walker = WalkDir::new(repo_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_vcs_metadata(entry.path(), scratch_root));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %repo_root.display(), error = %e, "Directory walk stopped early");
                break;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(scratch_root) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }

        match PackagePath::from_relative(relative) {
            Ok(path) => {
                debug!(path = %path, "Found package directory");
                dirs.push(path);
            }
            Err(e) => warn!(error = %e, "Skipping directory"),
        }
    }

    dirs
}

/// Returns true if any segment of `path` below `scratch_root` contains the
/// version-control metadata marker.
fn is_vcs_metadata(path: &Path, scratch_root: &Path) -> bool {
    path.strip_prefix(scratch_root)
        .unwrap_or(path)
        .components()
        .any(|segment| segment.as_os_str().to_string_lossy().contains(VCS_MARKER))
}
