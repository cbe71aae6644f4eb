//! Hash collection aliases used across dropkit.
//!
//! All maps and sets use AHash. Ordered storage is left to `indexmap` where
//! iteration order matters.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
