//! Operation: canonical re-rendering of a manifest.
//!
//! Record spacing is normalized to `name<specs> # license`; blank lines
//! and full-line comments pass through untouched, and line order is
//! never altered.

use std::path::Path;

use reqgate_core::manifest::Manifest;
use reqgate_util::errors::ReqgateError;
use reqgate_util::progress;

/// Rewrite a manifest in canonical form, or with `check_only` just
/// report whether it already is canonical.
pub fn fmt(path: &Path, check_only: bool) -> miette::Result<()> {
    let original = std::fs::read_to_string(path).map_err(|e| ReqgateError::Manifest {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    let manifest = Manifest::parse(&original)?;
    let rendered = manifest.render();

    // trailing whitespace never changes what the installer sees
    let changed = normalize(&original) != normalize(&rendered);

    if check_only {
        if changed {
            return Err(ReqgateError::Generic {
                message: format!("{} is not canonically formatted", path.display()),
            }
            .into());
        }
        progress::status_info("Unchanged", &path.display().to_string());
        return Ok(());
    }

    if changed {
        std::fs::write(path, rendered).map_err(ReqgateError::Io)?;
        progress::status("Formatted", &path.display().to_string());
    } else {
        progress::status_info("Unchanged", &path.display().to_string());
    }
    Ok(())
}

fn normalize(content: &str) -> String {
    let mut out = String::new();
    for line in content.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
