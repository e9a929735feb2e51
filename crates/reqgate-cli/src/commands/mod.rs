//! Command dispatch and handler modules.

mod check;
mod fmt;
mod list;
mod verify;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Check { path } => check::exec(&path, cli.verbose),
        Command::Fmt { path, check } => fmt::exec(&path, check),
        Command::List {
            path,
            licenses,
            json,
        } => list::exec(&path, licenses, json),
        Command::Verify {
            name,
            version,
            path,
        } => verify::exec(&path, &name, &version),
    }
}
