//! CLI argument definitions for reqgate.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "reqgate",
    version,
    about = "Inspect and validate pip-style requirements manifests",
    long_about = "reqgate parses ordered requirements manifests (name, version \
                  constraints, license tag), checks them for structural problems, \
                  and answers constraint queries. Record order is preserved \
                  everywhere: the consuming installer processes records in file \
                  order, and reordering can wedge the integration gate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a manifest for structural problems
    Check {
        /// Path to the requirements file
        #[arg(default_value = "test-requirements.txt")]
        path: PathBuf,
    },

    /// Rewrite a manifest in canonical form
    Fmt {
        /// Path to the requirements file
        #[arg(default_value = "test-requirements.txt")]
        path: PathBuf,
        /// Check formatting without modifying the file
        #[arg(long)]
        check: bool,
    },

    /// Print records in file order
    List {
        /// Path to the requirements file
        #[arg(default_value = "test-requirements.txt")]
        path: PathBuf,
        /// Include license tags
        #[arg(long)]
        licenses: bool,
        /// Emit records as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Test whether a version satisfies a record's constraint
    Verify {
        /// Package name
        name: String,
        /// Candidate version
        version: String,
        /// Path to the requirements file
        #[arg(default_value = "test-requirements.txt")]
        path: PathBuf,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
