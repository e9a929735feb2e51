//! Operation: print the manifest's records in file order.
//!
//! File order is the installer's processing order, so the listing never
//! sorts.

use std::path::Path;

use reqgate_core::manifest::Manifest;
use reqgate_util::errors::ReqgateError;

/// List the records of a manifest, optionally with license tags or as
/// a JSON array.
pub fn list(path: &Path, licenses: bool, json: bool) -> miette::Result<()> {
    let manifest = Manifest::from_path(path)?;
    let records: Vec<_> = manifest.requirements().collect();

    if json {
        let out = serde_json::to_string_pretty(&records).map_err(|e| ReqgateError::Generic {
            message: format!("Failed to serialize records: {e}"),
        })?;
        println!("{out}");
        return Ok(());
    }

    for req in records {
        if licenses {
            let license = req.license.as_deref().unwrap_or("-");
            let constraint = req.specifiers.to_string();
            println!("{:<24} {constraint:<20} {license}", req.name);
        } else {
            println!("{}{}", req.name, req.specifiers);
        }
    }
    Ok(())
}
