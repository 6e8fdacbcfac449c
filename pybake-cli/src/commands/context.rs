//! `pybake context [-c key=value]...`

use anyhow::{Context, Result};
use clap::Args;

use pybake_core::{BakeContext, ContextOverrides};

/// Show the resolved template context as YAML.
#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Override a template variable before resolving (repeatable).
    #[arg(long = "context", short = 'c', value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

impl ContextArgs {
    pub fn run(self) -> Result<()> {
        let overrides = super::collect_overrides(ContextOverrides::new(), &self.overrides)?;
        let ctx = BakeContext::resolve(&overrides).context("invalid template context")?;
        let yaml = serde_yaml::to_string(&ctx).context("cannot serialize context")?;
        print!("{yaml}");
        Ok(())
    }
}
