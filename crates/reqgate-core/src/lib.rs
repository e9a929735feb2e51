//! Core data types for the reqgate requirements-manifest toolkit.
//!
//! A requirements manifest is a line-oriented list of dependency records,
//! each naming a package, a constraint expression, and a license tag
//! carried as a trailing comment. Record order is semantically significant:
//! the consuming installer processes records in file order, so the manifest
//! is modeled as an ordered sequence of lines, never a keyed map.

pub mod manifest;
pub mod requirement;
pub mod specifier;
pub mod version;
