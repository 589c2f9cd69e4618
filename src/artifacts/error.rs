//! Object store errors
//!
//! Every operation of the object model either succeeds completely or returns one
//! of these kinds. None of them is transient, so nothing here is ever retried.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// No file exists at the path derived from the digest.
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// The stored stream could not be decompressed or does not hash to its key.
    #[error("corrupt object: {0}")]
    CorruptObject(String),

    /// The `<kind> <size>` header, or a tree entry's `<mode> <name>`, is malformed.
    #[error("invalid object header: {0}")]
    InvalidHeader(String),

    #[error("object size mismatch: header declares {declared} bytes, payload has {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("truncated tree: expected 20 digest bytes for entry {name:?}, found {remaining}")]
    TruncatedTree { name: String, remaining: usize },

    /// Devices, sockets, FIFOs and anything else a tree cannot record.
    #[error("unsupported file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    /// Header of a stored object could not be interpreted when reading metadata.
    #[error("invalid object {oid}: {reason}")]
    InvalidObject { oid: ObjectId, reason: String },

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("file name is not valid UTF-8: {}", .0.display())]
    InvalidFileName(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ObjectError {
    pub fn corrupt(reason: impl Into<String>) -> Self {
        ObjectError::CorruptObject(reason.into())
    }

    pub fn invalid_header(reason: impl Into<String>) -> Self {
        ObjectError::InvalidHeader(reason.into())
    }
}

pub type ObjectResult<T> = Result<T, ObjectError>;
