//! List command implementation.

use std::path::Path;

use miette::Result;

pub fn exec(path: &Path, licenses: bool, json: bool) -> Result<()> {
    reqgate_ops::ops_list::list(path, licenses, json)
}
