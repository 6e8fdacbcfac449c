//! `pybake new [DIR] [-c key=value]... [-f overrides.yaml] [--force]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use pybake_bake::{bake_with, OverwriteMode};
use pybake_core::{BakeContext, ContextOverrides};

/// Bake a new project beneath a directory.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Parent directory the project is created under.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Override a template variable (repeatable), e.g. -c project_name="My Tool".
    #[arg(long = "context", short = 'c', value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// YAML file of overrides; -c values take precedence over it.
    #[arg(long = "file", short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Replace the project directory if it already exists.
    #[arg(long)]
    pub force: bool,
}

impl NewArgs {
    pub fn run(self) -> Result<()> {
        let base = match &self.file {
            Some(path) => ContextOverrides::load(path)
                .with_context(|| format!("cannot load overrides from '{}'", path.display()))?,
            None => ContextOverrides::new(),
        };
        let overrides = super::collect_overrides(base, &self.overrides)?;

        let ctx = BakeContext::resolve(&overrides).context("invalid template context")?;

        let mode = if self.force {
            OverwriteMode::Force
        } else {
            OverwriteMode::Refuse
        };
        let baked = bake_with(&ctx, &self.dir, mode).with_context(|| {
            format!(
                "failed to bake '{}' under '{}'",
                ctx.project_slug,
                self.dir.display()
            )
        })?;

        println!(
            "{} Baked '{}' ({} files)",
            "✓".green(),
            ctx.project_slug,
            baked.files.len()
        );
        println!("  Location: {}", baked.root.display());
        Ok(())
    }
}
