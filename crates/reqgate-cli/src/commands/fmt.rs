//! Fmt command implementation.

use std::path::Path;

use miette::Result;

pub fn exec(path: &Path, check_only: bool) -> Result<()> {
    reqgate_ops::ops_fmt::fmt(path, check_only)
}
