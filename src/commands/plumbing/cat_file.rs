use crate::areas::repository::Repository;
use crate::artifacts::objects::object::{Object, ObjectMetadata};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// Print the content, a blob's bytes or a tree's listing
    Pretty,
    Type,
    Size,
}

impl Repository {
    pub fn cat_file(&mut self, object_id: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_id)?;

        match mode {
            CatFileMode::Pretty => {
                let object = self
                    .database()
                    .parse_object(&oid)
                    .with_context(|| format!("Unable to read object {oid}"))?;
                self.writer().write_all(&object.render())?;
            }
            CatFileMode::Type => {
                let metadata = self.object_metadata(&oid)?;
                writeln!(self.writer(), "{}", metadata.object_type)?;
            }
            CatFileMode::Size => {
                let metadata = self.object_metadata(&oid)?;
                writeln!(self.writer(), "{}", metadata.size)?;
            }
        }

        Ok(())
    }

    fn object_metadata(&self, oid: &ObjectId) -> anyhow::Result<ObjectMetadata> {
        self.database()
            .read_metadata(oid)
            .with_context(|| format!("Unable to read object {oid}"))
    }
}
