//! Dropkit Core
//!
//! Shared utilities for the dropkit crates: hash collections, logging setup
//! and profiling scopes.

pub mod alloc;
pub mod logging;
pub mod profiling;
