#![allow(dead_code)]

pub mod command;
pub mod file;

use bit::areas::database::Database;
use bit::areas::workspace::Workspace;
use std::path::Path;

/// Object database and workspace of an initialized repository at `dir`
pub fn open_store(dir: &Path) -> (Database, Workspace) {
    let database = Database::new(dir.join(".git").join("objects").into_boxed_path());
    let workspace = Workspace::new(dir.to_path_buf().into_boxed_path());
    (database, workspace)
}

/// Expected SHA-1 of an encoded object, computed independently of the crate
pub fn sha1_hex(encoded: &[u8]) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(encoded);
    format!("{:x}", hasher.finalize())
}

pub fn sha1_raw(encoded: &[u8]) -> Vec<u8> {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(encoded);
    hasher.finalize().to_vec()
}

/// Frame a tree payload as `tree <len>\0<payload>`
pub fn encoded_tree(payload: &[u8]) -> Vec<u8> {
    let mut encoded = format!("tree {}\0", payload.len()).into_bytes();
    encoded.extend_from_slice(payload);
    encoded
}

/// Encoded tree of a directory holding a single regular file `c` = "world"
pub fn world_subtree() -> Vec<u8> {
    let mut payload = b"100644 c\0".to_vec();
    payload.extend(sha1_raw(b"blob 5\0world"));
    encoded_tree(&payload)
}

/// Entry names of a directory in the order the file system lists them
pub fn listing_order(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .expect("Failed to list directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .to_string()
        })
        .filter(|name| name != ".git")
        .collect()
}

/// Make a stored (read-only) object writable again so a test can tamper with it
#[cfg(unix)]
pub fn make_writable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o644))
        .unwrap_or_else(|e| panic!("Failed to change permissions of {:?}: {}", path, e));
}
