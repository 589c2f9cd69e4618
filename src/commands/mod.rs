//! Command implementations
//!
//! This module contains all command implementations, organized into two categories
//! following Git's architecture:
//!
//! - `plumbing`: Low-level commands for direct object manipulation (cat-file, hash-object, ls-tree, write-tree)
//! - `porcelain`: User-facing commands (init)
//!
//! Commands only parse their arguments into core types, call into the object
//! model, and print; every failure comes back as an `anyhow::Error` for `main`.

pub mod plumbing;
pub mod porcelain;
