use crate::artifacts::compression;
use crate::artifacts::error::{ObjectError, ObjectResult};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::codec;
use crate::artifacts::objects::object::{Object, ObjectBox, ObjectMetadata};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;
use fake::rand;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Content-addressed object database rooted at `.git/objects`
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).exists()
    }

    /// Hash, compress and write an object; returns its ID
    pub fn store(&self, object: &impl Object) -> ObjectResult<ObjectId> {
        let object_content = object.serialize()?;
        let object_id = ObjectId::hash(&object_content);

        if !self.exists(&object_id) {
            let compressed = compression::compress(&object_content)?;
            self.write(&object_id, &compressed)?;
        }

        Ok(object_id)
    }

    /// Write already compressed bytes under the given ID, unless present
    ///
    /// An existing file is never rewritten: same ID means same bytes.
    pub fn write(&self, object_id: &ObjectId, compressed: &[u8]) -> ObjectResult<()> {
        let object_path = self.object_path(object_id);
        if object_path.exists() {
            trace!(%object_id, "object already stored");
            return Ok(());
        }

        let (dir_name, _) = object_id.as_ref().split_at(2);
        let object_dir = self.path.join(dir_name);
        std::fs::create_dir_all(&object_dir)?;

        let temp_object_path = object_dir.join(Self::generate_temp_name());
        Self::write_object(&temp_object_path, &object_path, compressed)?;

        debug!(%object_id, bytes = compressed.len(), "stored object");
        Ok(())
    }

    /// Raw (still compressed) bytes of a stored object
    pub fn read(&self, object_id: &ObjectId) -> ObjectResult<Bytes> {
        match std::fs::read(self.object_path(object_id)) {
            Ok(content) => Ok(content.into()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(ObjectError::ObjectNotFound(object_id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Decompressed bytes of a stored object, checked against the ID they were requested by
    pub fn load(&self, object_id: &ObjectId) -> ObjectResult<Bytes> {
        let object_content = compression::decompress(&self.read(object_id)?)
            .inspect_err(|err| warn!(%object_id, %err, "unable to decompress object"))?;

        let actual_id = ObjectId::hash(&object_content);
        if &actual_id != object_id {
            warn!(%object_id, %actual_id, "object content does not match its id");
            return Err(ObjectError::corrupt(format!(
                "object {object_id} hashes to {actual_id}"
            )));
        }

        trace!(%object_id, bytes = object_content.len(), "loaded object");
        Ok(object_content)
    }

    /// Kind and size from the header only; the payload is not validated
    pub fn read_metadata(&self, object_id: &ObjectId) -> ObjectResult<ObjectMetadata> {
        let object_content = self.load(object_id)?;
        let header =
            codec::decode_header(&object_content).map_err(|err| ObjectError::InvalidObject {
                oid: object_id.clone(),
                reason: err.to_string(),
            })?;

        Ok(ObjectMetadata {
            object_type: header.object_type,
            size: header.size,
        })
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> ObjectResult<ObjectBox> {
        ObjectBox::decode(&self.load(object_id)?)
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> ObjectResult<Option<Blob>> {
        match self.parse_object(object_id)? {
            ObjectBox::Blob(blob) => Ok(Some(*blob)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> ObjectResult<Option<Tree>> {
        match self.parse_object(object_id)? {
            ObjectBox::Tree(tree) => Ok(Some(*tree)),
            _ => Ok(None),
        }
    }

    // written to a temp file first, then renamed into place, so a concurrent
    // reader sees either no object or the complete one
    fn write_object(temp_path: &Path, object_path: &Path, content: &[u8]) -> io::Result<()> {
        // a name collision fails here, before this writer owns any file
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp_path)?;

        let result = Self::fill_and_rename(file, temp_path, object_path, content);
        if result.is_err() {
            let _ = std::fs::remove_file(temp_path);
        }

        match result {
            // another writer renamed the same object into place first
            Err(_) if object_path.exists() => Ok(()),
            result => result,
        }
    }

    fn fill_and_rename(
        mut file: std::fs::File,
        temp_path: &Path,
        object_path: &Path,
        content: &[u8],
    ) -> io::Result<()> {
        file.write_all(content)?;
        drop(file);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(temp_path, std::fs::Permissions::from_mode(0o444))?;
        }

        std::fs::rename(temp_path, object_path)
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
