//! Render context — serializable rendering payload built from [`BakeContext`].

use serde::{Deserialize, Serialize};

use pybake_core::BakeContext;

use crate::error::RenderError;

/// Flat rendering payload handed to tera.
///
/// Enum-typed fields from [`BakeContext`] are flattened into the display
/// strings and booleans the templates actually branch on, so template logic
/// never re-parses choice strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderContext {
    pub full_name: String,
    pub email: String,
    pub github_username: String,
    pub project_name: String,
    /// `=` underline matching `project_name`, for RST section titles.
    pub project_name_underline: String,
    pub project_slug: String,
    pub project_short_description: String,
    pub version: String,
    /// Display string of the chosen license ("MIT", "Not open source", ...).
    pub open_source_license: String,
    /// SPDX identifier, absent for proprietary projects.
    pub license_spdx: Option<String>,
    pub is_open_source: bool,
    /// Display string of the chosen CLI framework.
    pub command_line_interface: String,
    pub has_cli: bool,
    pub create_author_file: bool,
    pub use_ci_deployment: bool,
    pub year: i32,
}

impl RenderContext {
    /// Build a [`RenderContext`] from a resolved [`BakeContext`].
    pub fn from_bake(ctx: &BakeContext) -> Self {
        RenderContext {
            full_name: ctx.full_name.clone(),
            email: ctx.email.clone(),
            github_username: ctx.github_username.clone(),
            project_name: ctx.project_name.clone(),
            project_name_underline: "=".repeat(ctx.project_name.chars().count().max(3)),
            project_slug: ctx.project_slug.as_str().to_string(),
            project_short_description: ctx.project_short_description.clone(),
            version: ctx.version.clone(),
            open_source_license: ctx.open_source_license.to_string(),
            license_spdx: ctx
                .open_source_license
                .spdx_id()
                .map(|id| id.to_string()),
            is_open_source: ctx.open_source_license.is_open_source(),
            command_line_interface: ctx.command_line_interface.to_string(),
            has_cli: ctx.command_line_interface.has_entry_point(),
            create_author_file: ctx.create_author_file,
            use_ci_deployment: ctx.use_ci_deployment,
            year: ctx.year,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
