//! Tree writer — materializes a rendered plan onto the filesystem.
//!
//! Baking always targets a fresh `<parent>/<slug>/` directory; an existing
//! one is an error unless [`OverwriteMode::Force`] is given. Content is
//! normalized to LF line endings before writing.

use std::path::{Path, PathBuf};

use pybake_core::BakeContext;
use pybake_renderer::Renderer;

use crate::error::{io_err, BakeError};

/// Whether an existing project directory may be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Refuse to touch an existing project directory.
    #[default]
    Refuse,
    /// Remove and re-create an existing project directory.
    Force,
}

/// A successfully materialized project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakedProject {
    /// Absolute path of the project root (`<parent>/<slug>`).
    pub root: PathBuf,
    /// Paths of every written file, relative to `root`, in plan order.
    pub files: Vec<PathBuf>,
}

/// Bake a project beneath `parent_dir`, refusing to overwrite.
pub fn bake(ctx: &BakeContext, parent_dir: &Path) -> Result<BakedProject, BakeError> {
    bake_with(ctx, parent_dir, OverwriteMode::Refuse)
}

/// Bake a project beneath `parent_dir` with an explicit overwrite policy.
pub fn bake_with(
    ctx: &BakeContext,
    parent_dir: &Path,
    overwrite: OverwriteMode,
) -> Result<BakedProject, BakeError> {
    let root = parent_dir.join(ctx.project_slug.as_str());
    if root.exists() {
        match overwrite {
            OverwriteMode::Refuse => {
                return Err(BakeError::ProjectDirExists { path: root });
            }
            OverwriteMode::Force => {
                tracing::warn!("removing existing project dir: {}", root.display());
                std::fs::remove_dir_all(&root).map_err(|e| io_err(&root, e))?;
            }
        }
    }

    let renderer = Renderer::new()?;
    let rendered = renderer.render(ctx)?;

    std::fs::create_dir_all(&root).map_err(|e| io_err(&root, e))?;

    let mut files = Vec::with_capacity(rendered.len());
    for (rel, content) in rendered {
        let target = root.join(&rel);
        if let Some(dir) = target.parent() {
            std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
        }
        // Normalise line endings to LF before writing.
        let normalized = content.replace("\r\n", "\n");
        std::fs::write(&target, normalized).map_err(|e| io_err(&target, e))?;
        tracing::debug!("wrote: {}", target.display());
        files.push(rel);
    }

    tracing::info!(
        "baked '{}' ({} files) at {}",
        ctx.project_slug,
        files.len(),
        root.display()
    );
    Ok(BakedProject { root, files })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
