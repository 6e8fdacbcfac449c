pub mod context;
pub mod licenses;
pub mod new;

use anyhow::{bail, Result};

use pybake_core::ContextOverrides;

/// Parse repeated `-c key=value` arguments into overrides.
pub(crate) fn collect_overrides(
    mut overrides: ContextOverrides,
    pairs: &[String],
) -> Result<ContextOverrides> {
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                overrides.insert(key.to_string(), value.to_string());
            }
            _ => bail!("invalid context override '{pair}'; expected key=value"),
        }
    }
    Ok(overrides)
}
