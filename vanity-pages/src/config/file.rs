//! Config file deserialization.

use serde::Deserialize;

/// Parsed contents of a JSON config file.
///
/// ```json
/// { "domain": "go.example.com", "account": "octo", "packages": ["tool", "tool/cmd/tool"] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Custom domain the packages are served under.
    pub domain: String,

    /// Account hosting the repositories, exposed to the template.
    #[serde(default)]
    pub account: Option<String>,

    /// Package paths to generate pages for, in output order.
    pub packages: Vec<String>,
}
