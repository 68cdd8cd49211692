//! CLI error types.

use doctree_config::ConfigError;
use doctree_render::{BuildError, RenderError};
use doctree_site::{NavError, TreeError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0} page(s) failed to build")]
    PageFailures(usize),

    #[error("{0}")]
    Validation(String),
}
