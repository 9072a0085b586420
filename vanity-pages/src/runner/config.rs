//! Runner configuration.

use std::path::{Path, PathBuf};

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = "./out";

/// Default template file.
pub const DEFAULT_TEMPLATE_PATH: &str = "template.html";

/// Configuration for a page generation run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory the pages are written to.
    out_dir: PathBuf,
    /// Handlebars template rendered for every page.
    template_path: PathBuf,
    /// GitHub token used for the listing call.
    token: Option<String>,
    /// Whether to clone Go repositories and emit one page per directory.
    discover: bool,
    /// Directory scratch clones are created under.
    scratch_root: Option<PathBuf>,
    /// Base URI of a GitHub-compatible API.
    api_base: Option<String>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run, with discovery enabled.
    pub fn new(out_dir: PathBuf, template_path: PathBuf) -> Self {
        Self {
            out_dir,
            template_path,
            token: None,
            discover: true,
            scratch_root: None,
            api_base: None,
        }
    }

    /// Authenticates the listing call with a token.
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Enables or disables directory discovery.
    pub fn with_discovery(mut self, discover: bool) -> Self {
        self.discover = discover;
        self
    }

    /// Creates scratch clones under `scratch_root` instead of the system temp directory.
    pub fn with_scratch_root(mut self, scratch_root: PathBuf) -> Self {
        self.scratch_root = Some(scratch_root);
        self
    }

    /// Points the listing client at another GitHub-compatible API.
    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = Some(api_base);
        self
    }

    /// Returns the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Returns the template path.
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether directory discovery is enabled.
    pub fn discover(&self) -> bool {
        self.discover
    }

    /// Returns the scratch root, if one was set.
    pub fn scratch_root(&self) -> Option<&Path> {
        self.scratch_root.as_deref()
    }

    /// Returns the API base URI, if one was set.
    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_OUT_DIR),
            PathBuf::from(DEFAULT_TEMPLATE_PATH),
        )
    }
}
