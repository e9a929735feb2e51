//! Check command implementation.

use std::path::Path;

use miette::Result;

pub fn exec(path: &Path, verbose: bool) -> Result<()> {
    reqgate_ops::ops_check::check(path, verbose)
}
