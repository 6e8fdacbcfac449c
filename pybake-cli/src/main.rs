//! Pybake — Python package scaffolding CLI.
//!
//! # Usage
//!
//! ```text
//! pybake new [DIR] [-c key=value]... [-f overrides.yaml] [--force]
//! pybake context [-c key=value]...
//! pybake licenses
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{context::ContextArgs, licenses::LicensesArgs, new::NewArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "pybake",
    version,
    about = "Bake ready-to-use Python package skeletons from a small set of variables",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bake a new project beneath a directory.
    New(NewArgs),

    /// Show the resolved template context as YAML.
    Context(ContextArgs),

    /// List the supported license choices.
    Licenses(LicensesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::New(args) => args.run(),
        Commands::Context(args) => args.run(),
        Commands::Licenses(args) => args.run(),
    }
}
