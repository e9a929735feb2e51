//! Verify command implementation.

use std::path::Path;

use miette::Result;

pub fn exec(path: &Path, name: &str, version: &str) -> Result<()> {
    reqgate_ops::ops_verify::verify(path, name, version)
}
