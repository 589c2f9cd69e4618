//! Object identifier (SHA-1 digest)
//!
//! Object IDs are 40-character lowercase hexadecimal strings representing the
//! SHA-1 of an object's full encoded bytes, header included.
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::error::{ObjectError, ObjectResult};
use crate::artifacts::objects::{OBJECT_ID_LENGTH, RAW_OBJECT_ID_LENGTH};
use sha1::{Digest, Sha1};
use std::io;
use std::path::PathBuf;

/// Object identifier (SHA-1 hash)
///
/// Only ever built from a validated hex string, raw digest bytes, or by hashing
/// encoded object bytes, so it is always exactly 40 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Uppercase hex digits are accepted and normalized, since the on-disk
    /// path is always lowercase.
    pub fn try_parse(id: impl Into<String>) -> ObjectResult<Self> {
        let id = id.into();
        if id.len() != OBJECT_ID_LENGTH {
            return Err(ObjectError::InvalidObjectId(format!(
                "expected {OBJECT_ID_LENGTH} hex characters, got {}",
                id.len()
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ObjectError::InvalidObjectId(format!(
                "invalid characters in {id}"
            )));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Digest of the given encoded object bytes
    pub fn hash(encoded: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(encoded);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Build an object ID from its 20 raw bytes, as found inside tree payloads
    pub fn from_raw(raw: &[u8; RAW_OBJECT_ID_LENGTH]) -> Self {
        Self(raw.iter().map(|byte| format!("{byte:02x}")).collect())
    }

    /// Write the object ID in binary format (20 bytes)
    ///
    /// Used when serializing tree entries.
    pub fn write_h40_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        let hex40 = self.as_ref();

        for i in (0..OBJECT_ID_LENGTH).step_by(2) {
            let byte = u8::from_str_radix(&hex40[i..i + 2], 16)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Invalid hex digit"))?;
            writer.write_all(&[byte])?;
        }

        Ok(())
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
