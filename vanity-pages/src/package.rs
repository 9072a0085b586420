//! Package paths.
//!
//! A package path is the slash-separated identifier of one generated page. It
//! doubles as the page's location under the output directory, so it is
//! validated to stay inside that directory.

use serde::Serialize;
use std::fmt;
use std::path::{Component, Path};
use thiserror::Error;

/// A package path failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid package path '{path}': {reason}")]
pub struct InvalidPackagePath {
    /// The rejected input.
    pub path: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

/// Relative, slash-separated path identifying one generated page.
///
/// Always non-empty, never absolute, and free of empty, `.` and `..` segments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PackagePath(String);

impl PackagePath {
    /// Validates a slash-separated package path.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPackagePath`] if the path is empty, absolute, contains
    /// backslashes, or has an empty, `.` or `..` segment.
    pub fn new(path: impl Into<String>) -> Result<Self, InvalidPackagePath> {
        let path = path.into();
        let reject = |reason: &'static str| {
            Err(InvalidPackagePath {
                path: path.clone(),
                reason,
            })
        };

        if path.is_empty() {
            return reject("path is empty");
        }
        if path.starts_with('/') {
            return reject("path must be relative");
        }
        if path.contains('\\') {
            return reject("backslashes are not allowed");
        }
        for segment in path.split('/') {
            match segment {
                "" => return reject("path contains an empty segment"),
                "." | ".." => return reject("relative segments are not allowed"),
                _ => {}
            }
        }

        Ok(Self(path))
    }

    /// Builds a package path from a relative filesystem path, joining its
    /// components with `/` regardless of the platform separator.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPackagePath`] if the path is not relative, is not valid
    /// UTF-8, or fails [`PackagePath::new`].
    pub fn from_relative(path: &Path) -> Result<Self, InvalidPackagePath> {
        let mut segments = Vec::new();
        for component in path.components() {
            let Component::Normal(segment) = component else {
                return Err(InvalidPackagePath {
                    path: path.display().to_string(),
                    reason: "path must be relative and normalized",
                });
            };
            let Some(segment) = segment.to_str() else {
                return Err(InvalidPackagePath {
                    path: path.display().to_string(),
                    reason: "path is not valid UTF-8",
                });
            };
            segments.push(segment);
        }

        Self::new(segments.join("/"))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the repository this package lives in: the first segment.
    #[must_use]
    pub fn repository(&self) -> &str {
        self.0.split('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for PackagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackagePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PackagePath {
    type Error = InvalidPackagePath;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PackagePath {
    type Error = InvalidPackagePath;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
