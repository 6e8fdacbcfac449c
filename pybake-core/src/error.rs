//! Error types for pybake-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from context resolution.
#[derive(Debug, Error)]
pub enum ContextError {
    /// An override key is not part of the template variable schema.
    #[error("unknown template variable '{name}'")]
    UnknownVariable { name: String },

    /// `open_source_license` is not one of the supported choices.
    #[error("unknown license '{value}'; expected: MIT, BSD-4-Clause, Apache-2.0, GPL-3.0-or-later, Not open source")]
    InvalidLicense { value: String },

    /// `command_line_interface` is not one of the supported choices.
    #[error("unknown command-line interface '{value}'; expected: click, argparse, No command-line interface")]
    InvalidCliFramework { value: String },

    /// A y/n flag received something other than `y` or `n`.
    #[error("invalid value '{value}' for flag '{name}'; expected 'y' or 'n'")]
    InvalidFlag { name: String, value: String },

    /// `project_name` resolved to an empty slug (e.g. only punctuation).
    #[error("project name '{name}' does not yield a usable package name")]
    EmptyProjectName { name: String },

    /// I/O failure while reading an overrides file.
    #[error("cannot read overrides file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error in an overrides file.
    #[error("failed to parse overrides at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
