//! Tree object
//!
//! Trees represent directory snapshots. They contain entries for files (blobs)
//! and subdirectories (other trees), along with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! Entries keep the order in which the directory listing produced them; they
//! are never sorted by name. An entry only names its child by digest, the
//! child object itself lives in the database (or in the `ObjectTable` of a
//! build that has not been persisted yet).

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::error::{ObjectError, ObjectResult};
use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::codec::{self, ObjectHeader};
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree_builder::{Snapshot, TreeBuilder};
use bytes::Bytes;
use derive_new::new;
use std::fmt::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub mode: EntryMode,
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    pub fn object_type(&self) -> ObjectType {
        self.mode.object_type()
    }

    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }

    /// Bytes this entry occupies in the tree payload
    fn encoded_len(&self) -> usize {
        self.mode.as_str().len() + 1 + self.name.len() + 1 + RAW_OBJECT_ID_LENGTH
    }
}

impl std::fmt::Display for TreeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}    {}",
            self.mode,
            self.object_type(),
            self.oid,
            self.name
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Snapshot a directory of the workspace, recursively
    ///
    /// Nothing is written; persist the returned snapshot to store it.
    pub fn build_from_directory(workspace: &Workspace, path: &Path) -> ObjectResult<Snapshot> {
        TreeBuilder::new(workspace).build(path)
    }

    pub fn from_digest(database: &Database, oid: &ObjectId) -> ObjectResult<Self> {
        database
            .parse_object_as_tree(oid)?
            .ok_or_else(|| ObjectError::InvalidObject {
                oid: oid.clone(),
                reason: "expected a tree".to_string(),
            })
    }

    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One entry name per line, in stored order, without descending into subtrees
    pub fn render_names_only(&self) -> String {
        self.entries.iter().fold(String::new(), |mut output, entry| {
            let _ = writeln!(output, "{}", entry.name);
            output
        })
    }
}

impl Packable for Tree {
    fn serialize(&self) -> ObjectResult<Bytes> {
        codec::encode_tree(&self.entries)
    }
}

impl Unpackable for Tree {
    fn deserialize(header: &ObjectHeader, encoded: &Bytes) -> ObjectResult<Self> {
        Ok(Self::new(codec::decode_tree_payload(header, encoded)?))
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn size(&self) -> usize {
        self.entries.iter().map(TreeEntry::encoded_len).sum()
    }

    /// `<mode> <kind> <oid>    <name>` per entry, single level
    fn render(&self) -> Bytes {
        self.entries
            .iter()
            .fold(String::new(), |mut output, entry| {
                let _ = writeln!(output, "{entry}");
                output
            })
            .into()
    }
}
