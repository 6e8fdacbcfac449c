//! Pybake core library — template variable schema, typed context, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and enums for the template variables
//! - [`context`] — [`ContextOverrides`] → [`BakeContext`] resolution
//! - [`error`] — [`ContextError`]

pub mod context;
pub mod error;
pub mod types;

pub use context::{BakeContext, ContextOverrides};
pub use error::ContextError;
pub use types::{CliFramework, LicenseKind, ProjectSlug};
