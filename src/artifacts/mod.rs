//! Object model
//!
//! - `compression`: zlib codec applied to objects at rest
//! - `error`: error kinds shared by every object operation
//! - `objects`: blob and tree types, their framing, and tree building

pub mod compression;
pub mod error;
pub mod objects;
