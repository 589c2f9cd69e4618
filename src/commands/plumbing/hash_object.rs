use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use std::path::Path;

impl Repository {
    pub fn hash_object(&mut self, object_path: &Path, write: bool) -> anyhow::Result<()> {
        let object = Blob::from_path(self.workspace(), object_path)
            .with_context(|| format!("Unable to read {}", object_path.display()))?;

        // write (if write is true) as compressed object file
        let object_id = if write {
            object.persist(self.database())?
        } else {
            object.object_id()?
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
