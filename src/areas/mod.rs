//! Core repository components
//!
//! - `database`: Object database, content-addressed storage of blobs and trees
//! - `repository`: Explicit repository root tying the other areas together
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod repository;
pub mod workspace;
