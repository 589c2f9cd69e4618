//! Blob object
//!
//! Blobs store file content. They contain only the raw bytes, without any
//! metadata like filename or permissions (those are stored in trees). For a
//! symbolic link the content is the link target, not the file it points at.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::error::{ObjectError, ObjectResult};
use crate::artifacts::objects::codec::{self, ObjectHeader};
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    /// Read a file (or a symlink's target) from the workspace
    pub fn from_path(workspace: &Workspace, path: &Path) -> ObjectResult<Self> {
        Ok(Self::new(workspace.read_content(path)?))
    }

    pub fn from_digest(database: &Database, oid: &ObjectId) -> ObjectResult<Self> {
        database
            .parse_object_as_blob(oid)?
            .ok_or_else(|| ObjectError::InvalidObject {
                oid: oid.clone(),
                reason: "expected a blob".to_string(),
            })
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn persist(&self, database: &Database) -> ObjectResult<ObjectId> {
        database.store(self)
    }
}

impl Packable for Blob {
    fn serialize(&self) -> ObjectResult<Bytes> {
        Ok(codec::encode_blob(&self.content))
    }
}

impl Unpackable for Blob {
    fn deserialize(header: &ObjectHeader, encoded: &Bytes) -> ObjectResult<Self> {
        Ok(Self::new(codec::decode_blob_payload(header, encoded)?))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn size(&self) -> usize {
        self.content.len()
    }

    fn render(&self) -> Bytes {
        self.content.clone()
    }
}
