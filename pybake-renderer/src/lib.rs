//! # pybake-renderer
//!
//! Tera-based template engine that renders a complete Python package tree
//! from a resolved [`BakeContext`](pybake_core::BakeContext).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pybake_core::{BakeContext, ContextOverrides};
//! use pybake_renderer::Renderer;
//!
//! fn render_default() {
//!     let ctx = BakeContext::resolve(&ContextOverrides::new()).unwrap();
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(files) = renderer.render(&ctx) {
//!             for (path, content) in files {
//!                 println!("{}: {} bytes", path.display(), content.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::RenderContext;
pub use engine::Renderer;
pub use error::RenderError;
