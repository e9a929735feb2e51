//! High-level operations over requirements manifests.
//!
//! Each module implements one CLI command against the core types:
//! structural checking, canonical formatting, ordered listing, and
//! constraint queries.

pub mod ops_check;
pub mod ops_fmt;
pub mod ops_list;
pub mod ops_verify;
