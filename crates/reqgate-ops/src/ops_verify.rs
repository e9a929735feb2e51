//! Operation: test one candidate version against a record's constraint.
//!
//! This is the resolver-side filtering step exposed as a query: given a
//! package name and a concrete version, does the manifest's constraint
//! expression for that package accept it? Nothing is installed and no
//! package index is contacted.

use std::path::Path;

use reqgate_core::manifest::Manifest;
use reqgate_core::version::PackageVersion;
use reqgate_util::errors::ReqgateError;
use reqgate_util::progress;

/// Check whether `version` of `name` satisfies the manifest's constraint.
pub fn verify(path: &Path, name: &str, version: &str) -> miette::Result<()> {
    let manifest = Manifest::from_path(path)?;

    let req = manifest.get(name).ok_or_else(|| ReqgateError::Generic {
        message: format!("No record for `{name}` in {}", path.display()),
    })?;

    let candidate = PackageVersion::parse(version).ok_or_else(|| ReqgateError::Generic {
        message: format!("Invalid version `{version}`"),
    })?;

    if req.specifiers.matches(&candidate) {
        if req.specifiers.is_empty() {
            progress::status("Verified", &format!("{name} {candidate} (unconstrained)"));
        } else {
            progress::status(
                "Verified",
                &format!("{name} {candidate} satisfies {}", req.specifiers),
            );
        }
        Ok(())
    } else {
        Err(ReqgateError::Generic {
            message: format!(
                "{name} {candidate} does not satisfy {}",
                req.specifiers
            ),
        }
        .into())
    }
}
