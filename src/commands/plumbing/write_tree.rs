use crate::areas::repository::Repository;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use std::path::Path;

impl Repository {
    pub fn write_tree(&mut self) -> anyhow::Result<()> {
        let snapshot = Tree::build_from_directory(self.workspace(), Path::new(""))
            .with_context(|| format!("Unable to snapshot {}", self.path().display()))?;
        let tree_id = snapshot
            .persist(self.database())
            .context("Unable to store tree objects")?;

        writeln!(self.writer(), "{}", tree_id)?;

        Ok(())
    }
}
