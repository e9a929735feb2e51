//! Shared utilities for the reqgate requirements-manifest toolkit.
//!
//! This crate provides the cross-cutting concerns used by the other
//! reqgate crates: the unified error type and terminal status output.

pub mod errors;
pub mod progress;
