//! Page rendering and emission error types.

/// Errors that can occur while loading the template or writing pages.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Failed to read the template file.
    #[error("Failed to read template '{path}': {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template registration (parsing) error.
    #[error("Template registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),

    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Failed to create a directory or write a page.
    #[error("Failed to write '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
