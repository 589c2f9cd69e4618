use crate::artifacts::error::{ObjectError, ObjectResult};
use crate::artifacts::objects::entry_mode::{EntryMode, FileMode};
use bytes::Bytes;
use is_executable::IsExecutable;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Reserved metadata directory, never recorded in a tree
pub const GIT_DIR: &str = ".git";

/// Working directory file system access
///
/// All paths are resolved against the workspace root, so callers pass paths
/// relative to it.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Entries of a directory in the order the file system lists them
    ///
    /// Returned paths are `dir_path` joined with each entry name.
    pub fn list_dir(&self, dir_path: &Path) -> ObjectResult<Vec<PathBuf>> {
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(self.path.join(dir_path))? {
            let name = entry?.file_name();
            if name == GIT_DIR {
                trace!(dir = %dir_path.display(), "skipping metadata directory");
                continue;
            }
            entries.push(dir_path.join(name));
        }

        Ok(entries)
    }

    /// Classify an entry without following symlinks
    pub fn stat_entry(&self, file_path: &Path) -> ObjectResult<EntryMode> {
        let full_path = self.path.join(file_path);
        let file_type = std::fs::symlink_metadata(&full_path)?.file_type();

        if file_type.is_dir() {
            Ok(EntryMode::Directory)
        } else if file_type.is_symlink() {
            Ok(EntryMode::Symlink)
        } else if file_type.is_file() {
            match full_path.is_executable() {
                true => Ok(EntryMode::File(FileMode::Executable)),
                false => Ok(EntryMode::File(FileMode::Regular)),
            }
        } else {
            Err(ObjectError::UnsupportedFileType(file_path.to_path_buf()))
        }
    }

    /// File bytes, or the link target itself when the path is a symlink
    pub fn read_content(&self, file_path: &Path) -> ObjectResult<Bytes> {
        match self.stat_entry(file_path)? {
            EntryMode::Symlink => {
                let target = std::fs::read_link(self.path.join(file_path))?;
                Ok(target.into_os_string().into_encoded_bytes().into())
            }
            EntryMode::File(_) => Ok(std::fs::read(self.path.join(file_path))?.into()),
            EntryMode::Directory => Err(ObjectError::UnsupportedFileType(file_path.to_path_buf())),
        }
    }
}
