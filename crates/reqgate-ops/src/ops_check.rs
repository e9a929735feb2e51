//! Operation: structural self-consistency check.
//!
//! Validates every line of the manifest against the record grammar,
//! collecting problems instead of stopping at the first one: malformed
//! lines, unknown operators, unparseable versions, and duplicate package
//! names are all reported with their 1-based line numbers.

use std::path::Path;

use reqgate_core::requirement::Requirement;
use reqgate_util::errors::ReqgateError;
use reqgate_util::progress;

/// Check a requirements manifest for structural problems.
pub fn check(path: &Path, verbose: bool) -> miette::Result<()> {
    let content = std::fs::read_to_string(path).map_err(|e| ReqgateError::Manifest {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    progress::status("Checking", &path.display().to_string());

    let mut problems: Vec<String> = Vec::new();
    let mut records: Vec<(usize, Requirement)> = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match Requirement::parse(raw) {
            Ok(req) => records.push((idx + 1, req)),
            Err(message) => problems.push(format!("line {}: {message}", idx + 1)),
        }
    }

    for (line, req) in &records {
        if records
            .iter()
            .any(|(other, r)| other < line && r.name == req.name)
        {
            problems.push(format!(
                "line {line}: duplicate record for `{}`",
                req.name
            ));
        }
    }

    if verbose {
        for (_, req) in &records {
            let license = req.license.as_deref().unwrap_or("-");
            let constraint = req.specifiers.to_string();
            println!("{:<24} {constraint:<20} {license}", req.name);
        }
    }

    if problems.is_empty() {
        tracing::debug!(records = records.len(), "manifest check passed");
        progress::status(
            "Finished",
            &format!("{} record(s), no problems", records.len()),
        );
        Ok(())
    } else {
        for problem in &problems {
            eprintln!("error: {problem}");
        }
        Err(ReqgateError::Generic {
            message: format!(
                "{} problem(s) found in {}",
                problems.len(),
                path.display()
            ),
        }
        .into())
    }
}
