//! Context resolution — string overrides into a typed [`BakeContext`].
//!
//! Callers customise a subset of the template variables; everything else
//! falls back to the defaults below. Keys outside the fixed schema are a
//! hard error so typos never silently render a default tree.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ContextError;
use crate::types::{CliFramework, LicenseKind, ProjectSlug};

/// The fixed set of override keys the template recognises.
pub const VARIABLE_NAMES: &[&str] = &[
    "full_name",
    "email",
    "github_username",
    "project_name",
    "project_short_description",
    "version",
    "open_source_license",
    "command_line_interface",
    "create_author_file",
    "use_ci_deployment",
];

// ---------------------------------------------------------------------------
// ContextOverrides
// ---------------------------------------------------------------------------

/// Caller-supplied subset of template variables, as raw strings.
///
/// `BTreeMap` keeps iteration (and YAML serialisation) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextOverrides(pub BTreeMap<String, String>);

impl ContextOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion; handy in tests and CLI arg collection.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Load overrides from a YAML mapping file.
    pub fn load(path: &Path) -> Result<Self, ContextError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ContextError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_yaml::from_str(&raw).map_err(|e| ContextError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ContextOverrides {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut overrides = ContextOverrides::new();
        for (k, v) in pairs {
            overrides.insert(k.to_string(), v.to_string());
        }
        overrides
    }
}

// ---------------------------------------------------------------------------
// BakeContext
// ---------------------------------------------------------------------------

/// Fully-resolved, typed rendering context for one bake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BakeContext {
    pub full_name: String,
    pub email: String,
    pub github_username: String,
    pub project_name: String,
    pub project_slug: ProjectSlug,
    pub project_short_description: String,
    pub version: String,
    pub open_source_license: LicenseKind,
    pub command_line_interface: CliFramework,
    pub create_author_file: bool,
    pub use_ci_deployment: bool,
    /// Copyright year stamped into license and docs.
    pub year: i32,
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ContextError> {
    match value {
        "y" => Ok(true),
        "n" => Ok(false),
        other => Err(ContextError::InvalidFlag {
            name: name.to_string(),
            value: other.to_string(),
        }),
    }
}

impl BakeContext {
    /// Resolve overrides against the defaults using the current wall clock.
    pub fn resolve(overrides: &ContextOverrides) -> Result<Self, ContextError> {
        Self::resolve_at(overrides, Utc::now())
    }

    /// Resolve overrides against the defaults with an explicit clock.
    ///
    /// Tests pass a fixed instant so year-stamped assertions cannot break at
    /// a calendar rollover mid-run.
    pub fn resolve_at(
        overrides: &ContextOverrides,
        now: DateTime<Utc>,
    ) -> Result<Self, ContextError> {
        for key in overrides.0.keys() {
            if !VARIABLE_NAMES.contains(&key.as_str()) {
                return Err(ContextError::UnknownVariable { name: key.clone() });
            }
        }

        let get = |key: &str, default: &str| -> String {
            overrides
                .0
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        let full_name = get("full_name", "Jane Doe");
        let email = get("email", "jane.doe@example.com");
        let github_username = get("github_username", "janedoe");
        let project_name = get("project_name", "Python Boilerplate");
        let project_short_description = get(
            "project_short_description",
            "Python Boilerplate contains all the boilerplate you need to create a Python package.",
        );
        let version = get("version", "0.1.0");

        let open_source_license = LicenseKind::from_str(&get("open_source_license", "MIT"))?;
        let command_line_interface =
            CliFramework::from_str(&get("command_line_interface", "click"))?;
        let create_author_file = parse_flag(
            "create_author_file",
            &get("create_author_file", "y"),
        )?;
        let use_ci_deployment = parse_flag(
            "use_ci_deployment",
            &get("use_ci_deployment", "y"),
        )?;

        let project_slug = ProjectSlug::derive(&project_name)?;

        Ok(BakeContext {
            full_name,
            email,
            github_username,
            project_name,
            project_slug,
            project_short_description,
            version,
            open_source_license,
            command_line_interface,
            create_author_file,
            use_ci_deployment,
            year: now.year(),
        })
    }

    /// The default context (no overrides) at an explicit instant.
    pub fn default_at(now: DateTime<Utc>) -> Self {
        // Empty overrides cannot fail validation.
        Self::resolve_at(&ContextOverrides::new(), now)
            .unwrap_or_else(|e| unreachable!("default context must resolve: {e}"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
