//! # pybake-testkit
//!
//! Acceptance-test harness for template baking: bake into a scoped temp
//! directory, assert on the materialized tree, and run commands inside it.
//!
//! Two deliberate departures from the classic harness shape:
//! - No process-global state. Commands get their working directory and
//!   `PYTHONPATH` as per-child [`std::process::Command`] settings, so the
//!   runner is safe under the default multi-threaded test harness.
//! - Generated CLIs are smoke-tested by spawning a real interpreter
//!   subprocess, never by loading generated source in-process.

pub mod runner;
pub mod session;

pub use runner::{output_in_dir, python3, python_module, run_in_dir, CommandOutput, RunError};
pub use session::{BakeOutcome, BakeSession};
