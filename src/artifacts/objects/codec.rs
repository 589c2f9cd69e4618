//! Object framing
//!
//! Every object is stored as `<kind> <size>\0<payload>`, where `size` is the
//! decimal byte length of the payload.
//!
//! A blob payload is the raw content. A tree payload is the concatenation of its
//! entries, each one `<mode> <name>\0` followed by the child's 20 raw digest
//! bytes, in entry order.

use crate::artifacts::error::{ObjectError, ObjectResult};
use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::TreeEntry;
use bytes::Bytes;
use std::io::Write;

/// Parsed `<kind> <size>\0` prefix of an encoded object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectHeader {
    pub object_type: ObjectType,
    /// Payload length as declared by the header
    pub size: usize,
    /// Index of the first payload byte
    pub payload_offset: usize,
}

pub fn encode_blob(content: &[u8]) -> Bytes {
    frame(ObjectType::Blob, content)
}

pub fn encode_tree(entries: &[TreeEntry]) -> ObjectResult<Bytes> {
    let mut payload = Vec::new();
    for entry in entries {
        write!(payload, "{} {}\0", entry.mode.as_str(), entry.name)?;
        entry.oid.write_h40_to(&mut payload)?;
    }

    Ok(frame(ObjectType::Tree, &payload))
}

fn frame(object_type: ObjectType, payload: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), payload.len());

    let mut encoded = Vec::with_capacity(header.len() + payload.len());
    encoded.extend_from_slice(header.as_bytes());
    encoded.extend_from_slice(payload);
    encoded.into()
}

pub fn decode_header(encoded: &[u8]) -> ObjectResult<ObjectHeader> {
    let (header, _) = split_once(encoded, b'\0')
        .ok_or_else(|| ObjectError::invalid_header("missing NUL after header"))?;
    let (kind, size) = split_once(header, b' ')
        .ok_or_else(|| ObjectError::invalid_header("header is not `<kind> <size>`"))?;

    Ok(ObjectHeader {
        object_type: ObjectType::try_from(kind)?,
        size: parse_size(size)?,
        payload_offset: header.len() + 1,
    })
}

pub fn decode_blob_payload(header: &ObjectHeader, encoded: &Bytes) -> ObjectResult<Bytes> {
    let payload = encoded.slice(header.payload_offset..);
    check_size(header, payload.len())?;

    Ok(payload)
}

pub fn decode_tree_payload(header: &ObjectHeader, encoded: &[u8]) -> ObjectResult<Vec<TreeEntry>> {
    let payload = &encoded[header.payload_offset..];
    let mut entries = Vec::new();
    let mut rest = payload;

    while !rest.is_empty() {
        let (mode, after_mode) = split_once(rest, b' ')
            .ok_or_else(|| ObjectError::invalid_header("tree entry has no mode"))?;
        let mode = std::str::from_utf8(mode)
            .map_err(|_| ObjectError::invalid_header("tree entry mode is not ASCII"))
            .and_then(EntryMode::try_from)?;

        let (name, after_name) = split_once(after_mode, b'\0')
            .ok_or_else(|| ObjectError::invalid_header("tree entry name is not NUL-terminated"))?;
        let name = std::str::from_utf8(name)
            .map_err(|_| ObjectError::invalid_header("tree entry name is not valid UTF-8"))?
            .to_owned();

        let Some((raw_oid, remaining)) = after_name.split_first_chunk::<RAW_OBJECT_ID_LENGTH>()
        else {
            return Err(ObjectError::TruncatedTree {
                name,
                remaining: after_name.len(),
            });
        };

        entries.push(TreeEntry::new(mode, name, ObjectId::from_raw(raw_oid)));
        rest = remaining;
    }

    check_size(header, payload.len())?;

    Ok(entries)
}

fn parse_size(token: &[u8]) -> ObjectResult<usize> {
    let invalid = || {
        ObjectError::invalid_header(format!(
            "size {:?} is not a non-negative integer",
            String::from_utf8_lossy(token)
        ))
    };

    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }

    std::str::from_utf8(token)
        .ok()
        .and_then(|size| size.parse().ok())
        .ok_or_else(invalid)
}

fn check_size(header: &ObjectHeader, actual: usize) -> ObjectResult<()> {
    if header.size != actual {
        return Err(ObjectError::SizeMismatch {
            declared: header.size,
            actual,
        });
    }

    Ok(())
}

fn split_once(bytes: &[u8], delimiter: u8) -> Option<(&[u8], &[u8])> {
    let at = bytes.iter().position(|&byte| byte == delimiter)?;
    Some((&bytes[..at], &bytes[at + 1..]))
}
