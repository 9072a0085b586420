//! Shallow cloning through the `git` command line.

use crate::discovery::DiscoveryError;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Clones the working tree of `clone_url` into `dest` with a depth of one.
///
/// `dest` must not exist yet or be empty.
pub(crate) async fn shallow_clone(
    repository: &str,
    clone_url: &str,
    dest: &Path,
) -> Result<(), DiscoveryError> {
    debug!(repo = %repository, dest = %dest.display(), "Cloning repository");

    let output = Command::new("git")
        .args(["clone", "--depth", "1", "--quiet"])
        .arg(clone_url)
        .arg(dest)
        // Never block on a credential prompt for private or missing repositories.
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| DiscoveryError::CloneFailed {
            repository: repository.to_string(),
            message: format!("Failed to execute git clone: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DiscoveryError::CloneFailed {
            repository: repository.to_string(),
            message: format!("git clone failed: {}", stderr.trim()),
        });
    }

    Ok(())
}
