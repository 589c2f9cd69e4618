//! Plumbing commands (low-level object operations)
//!
//! Plumbing commands provide direct access to the object database. They're
//! primarily used for scripting and as building blocks for other tools.
//!
//! ## Commands
//!
//! - `cat-file`: Print an object's content, type, or size
//! - `hash-object`: Compute object ID and optionally store in database
//! - `ls-tree`: List contents of a tree object
//! - `write-tree`: Snapshot the working directory as a tree

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
pub mod write_tree;
