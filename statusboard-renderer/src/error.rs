//! Error types for statusboard-renderer.

use std::path::PathBuf;

use thiserror::Error;

use statusboard_core::HtmlError;

/// All errors that can arise from page rendering and local page writes.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template pattern substitution error.
    #[error("template error: {0}")]
    Html(#[from] HtmlError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`RenderError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}
