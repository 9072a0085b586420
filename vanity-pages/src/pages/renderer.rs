//! Page template renderer.

use crate::pages::PageError;
use crate::package::PackagePath;
use handlebars::Handlebars;
use serde_json::json;
use std::path::Path;
use tracing::debug;

/// Name the page template is registered under.
const PAGE_TEMPLATE: &str = "page";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - Strict mode (a field the page context lacks fails the render)
/// - The default HTML escaping, since pages are HTML
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs
}

/// Renders the page template for one package.
///
/// The template sees four fields:
/// - `Domain`: the custom domain
/// - `Package`: the package path
/// - `Repository`: the first segment of the package path
/// - `Account`: the account hosting the repositories, empty if unknown
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
    account: String,
}

impl PageRenderer {
    /// Reads and registers the template at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError`] if the file cannot be read or is not a valid
    /// template.
    pub fn from_file(path: &Path) -> Result<Self, PageError> {
        debug!(path = %path.display(), "Loading page template");

        let template = std::fs::read_to_string(path).map_err(|e| PageError::TemplateRead {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_template_str(&template)
    }

    /// Registers a template given as a string.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::RegistrationError`] if the template does not parse.
    pub fn from_template_str(template: &str) -> Result<Self, PageError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(PAGE_TEMPLATE, template)?;
        Ok(Self {
            handlebars,
            account: String::new(),
        })
    }

    /// Sets the account exposed to the template.
    #[must_use]
    pub fn with_account(mut self, account: Option<&str>) -> Self {
        self.account = account.unwrap_or_default().to_string();
        self
    }

    /// Renders the page for `package` under `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::RenderError`] if rendering fails.
    pub fn render(&self, domain: &str, package: &PackagePath) -> Result<String, PageError> {
        let data = json!({
            "Domain": domain,
            "Package": package.as_str(),
            "Repository": package.repository(),
            "Account": self.account,
        });

        Ok(self.handlebars.render(PAGE_TEMPLATE, &data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(path: &str) -> PackagePath {
        PackagePath::new(path).unwrap()
    }

    #[test]
    fn test_render_substitutes_fields() {
        let renderer =
            PageRenderer::from_template_str("{{Domain}}/{{Package}} in {{Repository}}").unwrap();

        let result = renderer
            .render("go.example.com", &package("tool/cmd/tool"))
            .unwrap();

        assert_eq!(result, "go.example.com/tool/cmd/tool in tool");
    }

    #[test]
    fn test_go_import_meta_tag() {
        let template = r#"<meta name="go-import" content="{{Domain}}/{{Repository}} git https://github.com/octo/{{Repository}}">"#;
        let renderer = PageRenderer::from_template_str(template).unwrap();

        let result = renderer.render("go.example.com", &package("tool/sub")).unwrap();

        assert_eq!(
            result,
            r#"<meta name="go-import" content="go.example.com/tool git https://github.com/octo/tool">"#
        );
    }

    #[test]
    fn test_account_field() {
        let template = "https://github.com/{{Account}}/{{Repository}}";
        let renderer = PageRenderer::from_template_str(template)
            .unwrap()
            .with_account(Some("gopher"));

        let result = renderer.render("go.example.com", &package("tool/sub")).unwrap();

        assert_eq!(result, "https://github.com/gopher/tool");
    }

    #[test]
    fn test_account_defaults_to_empty() {
        let renderer = PageRenderer::from_template_str("[{{Account}}]").unwrap();

        let result = renderer.render("go.example.com", &package("tool")).unwrap();

        assert_eq!(result, "[]");
    }

    #[test]
    fn test_html_escaping() {
        let renderer = PageRenderer::from_template_str("{{Domain}}").unwrap();

        let result = renderer.render("<b>&</b>", &package("tool")).unwrap();

        assert_eq!(result, "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn test_strict_mode_rejects_unknown_field() {
        let renderer = PageRenderer::from_template_str("{{Version}}").unwrap();

        let result = renderer.render("go.example.com", &package("tool"));

        assert!(matches!(result, Err(PageError::RenderError(_))));
    }

    #[test]
    fn test_malformed_template() {
        let result = PageRenderer::from_template_str("{{#if Domain}}unclosed");
        assert!(matches!(result, Err(PageError::RegistrationError(_))));
    }

    #[test]
    fn test_missing_template_file() {
        let temp = tempfile::tempdir().unwrap();
        let result = PageRenderer::from_file(&temp.path().join("template.html"));
        assert!(matches!(result, Err(PageError::TemplateRead { .. })));
    }
}
