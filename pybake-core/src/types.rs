//! Domain types for the template variable schema.
//!
//! All enum choices parse from the exact strings callers supply as overrides;
//! `Display` round-trips to the same strings so rendered output (README,
//! pyproject) shows what the user chose.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContextError;

// ---------------------------------------------------------------------------
// ProjectSlug
// ---------------------------------------------------------------------------

/// A strongly-typed Python package name derived from `project_name`.
///
/// Lowercased, with spaces and hyphens mapped to underscores. Guaranteed
/// non-empty and importable (starts with a letter or underscore).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectSlug(String);

impl ProjectSlug {
    /// Derive a slug from a human-readable project name.
    pub fn derive(project_name: &str) -> Result<Self, ContextError> {
        let slug: String = project_name
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();

        let starts_ok = slug
            .chars()
            .next()
            .map(|c| c.is_ascii_alphabetic() || c == '_')
            .unwrap_or(false);
        if !starts_ok {
            return Err(ContextError::EmptyProjectName {
                name: project_name.to_string(),
            });
        }
        Ok(ProjectSlug(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// LicenseKind
// ---------------------------------------------------------------------------

/// Supported `open_source_license` choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LicenseKind {
    #[default]
    Mit,
    Bsd4Clause,
    Apache2,
    Gpl3OrLater,
    NotOpenSource,
}

impl LicenseKind {
    /// All license variants in a stable order.
    pub fn all() -> &'static [LicenseKind] {
        &[
            LicenseKind::Mit,
            LicenseKind::Bsd4Clause,
            LicenseKind::Apache2,
            LicenseKind::Gpl3OrLater,
            LicenseKind::NotOpenSource,
        ]
    }

    /// SPDX identifier written into `pyproject.toml` (open licenses only).
    pub fn spdx_id(&self) -> Option<&'static str> {
        match self {
            LicenseKind::Mit => Some("MIT"),
            LicenseKind::Bsd4Clause => Some("BSD-4-Clause"),
            LicenseKind::Apache2 => Some("Apache-2.0"),
            LicenseKind::Gpl3OrLater => Some("GPL-3.0-or-later"),
            LicenseKind::NotOpenSource => None,
        }
    }

    /// Whether a LICENSE file is generated at all.
    pub fn is_open_source(&self) -> bool {
        !matches!(self, LicenseKind::NotOpenSource)
    }
}

impl fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseKind::NotOpenSource => write!(f, "Not open source"),
            open => write!(f, "{}", open.spdx_id().unwrap_or_default()),
        }
    }
}

impl FromStr for LicenseKind {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MIT" => Ok(LicenseKind::Mit),
            "BSD-4-Clause" => Ok(LicenseKind::Bsd4Clause),
            "Apache-2.0" => Ok(LicenseKind::Apache2),
            "GPL-3.0-or-later" => Ok(LicenseKind::Gpl3OrLater),
            "Not open source" => Ok(LicenseKind::NotOpenSource),
            other => Err(ContextError::InvalidLicense {
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// CliFramework
// ---------------------------------------------------------------------------

/// Supported `command_line_interface` choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CliFramework {
    #[default]
    Click,
    Argparse,
    None,
}

impl CliFramework {
    /// Whether a `cli.py` module and console-script entry are generated.
    pub fn has_entry_point(&self) -> bool {
        !matches!(self, CliFramework::None)
    }

    /// Fixed phrase this framework prints in its `--help` output.
    ///
    /// click renders "Show this message and exit."; argparse renders
    /// "show this help message and exit".
    pub fn help_marker(&self) -> Option<&'static str> {
        match self {
            CliFramework::Click => Some("Show this message"),
            CliFramework::Argparse => Some("show this help message"),
            CliFramework::None => None,
        }
    }
}

impl fmt::Display for CliFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliFramework::Click => write!(f, "click"),
            CliFramework::Argparse => write!(f, "argparse"),
            CliFramework::None => write!(f, "No command-line interface"),
        }
    }
}

impl FromStr for CliFramework {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "click" => Ok(CliFramework::Click),
            "argparse" => Ok(CliFramework::Argparse),
            "No command-line interface" | "none" => Ok(CliFramework::None),
            other => Err(ContextError::InvalidCliFramework {
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
