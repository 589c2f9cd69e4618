//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes. There are two types:
//!
//! - **Blob**: File content (raw bytes) or a symlink's target
//! - **Tree**: Directory listing (modes, names, and object IDs)
//!
//! All objects share the framing `<type> <size>\0<content>` (see `codec`).

pub mod blob;
pub mod codec;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;
pub mod tree_builder;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw bytes, as embedded in tree entries
pub const RAW_OBJECT_ID_LENGTH: usize = 20;
