//! # pybake-bake
//!
//! Materializer: renders a [`BakeContext`](pybake_core::BakeContext) and
//! writes the resulting project tree beneath a parent directory. Also home
//! of [`tree_digest`], the byte-identity check used to verify that baking
//! is deterministic.

pub mod digest;
pub mod error;
pub mod writer;

pub use digest::tree_digest;
pub use error::BakeError;
pub use writer::{bake, bake_with, BakedProject, OverwriteMode};
