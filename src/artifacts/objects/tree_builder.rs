//! Recursive tree construction from a directory
//!
//! Building a tree never touches the database. Every blob and subtree the build
//! produces is collected in an `ObjectTable` keyed by digest, in the order the
//! objects must be persisted: a child is always inserted before the tree that
//! names it, so persisting the table front to back never stores a tree whose
//! entries cannot be resolved.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::error::{ObjectError, ObjectResult};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use tracing::{debug, trace};

/// Flat table of objects keyed by digest, iterated in insertion order
#[derive(Debug, Default)]
pub struct ObjectTable {
    order: Vec<ObjectId>,
    objects: HashMap<ObjectId, ObjectBox>,
}

impl ObjectTable {
    /// Identical content hashes to the same key, so a repeated object is kept once
    fn insert(&mut self, oid: ObjectId, object: ObjectBox) {
        if let Entry::Vacant(slot) = self.objects.entry(oid.clone()) {
            slot.insert(object);
            self.order.push(oid);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Objects in persist order, children before parents
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &ObjectBox)> {
        self.order
            .iter()
            .filter_map(|oid| self.objects.get(oid).map(|object| (oid, object)))
    }
}

/// A built but not yet persisted directory tree
#[derive(Debug)]
pub struct Snapshot {
    root: Tree,
    root_id: ObjectId,
    objects: ObjectTable,
}

impl Snapshot {
    pub fn root(&self) -> &Tree {
        &self.root
    }

    pub fn root_id(&self) -> &ObjectId {
        &self.root_id
    }

    pub fn objects(&self) -> &ObjectTable {
        &self.objects
    }

    /// Store every object depth-first, the root last
    ///
    /// Not atomic: on failure, the objects already written stay in the
    /// database and the root is absent.
    pub fn persist(&self, database: &Database) -> ObjectResult<ObjectId> {
        for (oid, object) in self.objects.iter() {
            trace!(%oid, kind = %object.object_type(), "persisting object");
            database.store(object)?;
        }

        debug!(root = %self.root_id, objects = self.objects.len(), "persisted tree");
        Ok(self.root_id.clone())
    }
}

pub struct TreeBuilder<'w> {
    workspace: &'w Workspace,
    objects: ObjectTable,
}

impl<'w> TreeBuilder<'w> {
    pub fn new(workspace: &'w Workspace) -> Self {
        TreeBuilder {
            workspace,
            objects: ObjectTable::default(),
        }
    }

    pub fn build(mut self, dir_path: &Path) -> ObjectResult<Snapshot> {
        let (root, root_id) = self.build_tree(dir_path)?;

        Ok(Snapshot {
            root,
            root_id,
            objects: self.objects,
        })
    }

    fn build_tree(&mut self, dir_path: &Path) -> ObjectResult<(Tree, ObjectId)> {
        let mut entries = Vec::new();

        for entry_path in self.workspace.list_dir(dir_path)? {
            let name = entry_path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| ObjectError::InvalidFileName(entry_path.clone()))?
                .to_string();
            let mode = self.workspace.stat_entry(&entry_path)?;

            let oid = match mode {
                EntryMode::Directory => self.build_tree(&entry_path)?.1,
                EntryMode::File(_) | EntryMode::Symlink => {
                    let blob = Blob::from_path(self.workspace, &entry_path)?;
                    let oid = blob.object_id()?;
                    self.objects.insert(oid.clone(), ObjectBox::Blob(Box::new(blob)));
                    oid
                }
            };

            entries.push(TreeEntry::new(mode, name, oid));
        }

        let tree = Tree::new(entries);
        let oid = tree.object_id()?;
        trace!(path = %dir_path.display(), %oid, entries = tree.len(), "built tree");
        self.objects
            .insert(oid.clone(), ObjectBox::Tree(Box::new(tree.clone())));

        Ok((tree, oid))
    }
}
