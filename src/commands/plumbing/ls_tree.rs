use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;

impl Repository {
    /// List a single level of a tree; subtrees are shown, not descended into
    pub fn ls_tree(&mut self, object_id: &str, name_only: bool) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_id)?;
        let tree = Tree::from_digest(self.database(), &oid)
            .with_context(|| format!("Unable to read tree {oid}"))?;

        if name_only {
            write!(self.writer(), "{}", tree.render_names_only())?;
        } else {
            self.writer().write_all(&tree.render())?;
        }

        Ok(())
    }
}
