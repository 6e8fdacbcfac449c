//! Error types for pybake-bake.

use std::path::{Path, PathBuf};

use thiserror::Error;

use pybake_core::ContextError;
use pybake_renderer::RenderError;

/// All errors that can arise while materializing a baked project.
#[derive(Debug, Error)]
pub enum BakeError {
    /// Context resolution failed (unknown variable, bad choice value, ...).
    #[error(transparent)]
    Context(#[from] ContextError),

    /// Template rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Filesystem error at a specific path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project directory already exists and overwriting was not allowed.
    #[error("project directory already exists: {path}")]
    ProjectDirExists { path: PathBuf },
}

pub(crate) fn io_err(path: &Path, source: std::io::Error) -> BakeError {
    BakeError::Io {
        path: path.to_path_buf(),
        source,
    }
}
