use crate::artifacts::error::ObjectResult;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::codec::{self, ObjectHeader};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;

pub trait Packable {
    /// Full encoded form, header included; this is what gets hashed and stored
    fn serialize(&self) -> ObjectResult<Bytes>;
}

pub trait Unpackable {
    fn deserialize(header: &ObjectHeader, encoded: &Bytes) -> ObjectResult<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// Payload length, excluding the header
    fn size(&self) -> usize;

    /// Pretty-printed form, as shown by `cat-file -p`
    fn render(&self) -> Bytes;

    fn object_id(&self) -> ObjectResult<ObjectId> {
        Ok(ObjectId::hash(&self.serialize()?))
    }
}

/// Kind and payload size of a stored object, read from its header alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectMetadata {
    pub object_type: ObjectType,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
}

impl ObjectBox {
    /// Decode a full `<kind> <size>\0<payload>` byte string, dispatching on its kind
    pub fn decode(encoded: &Bytes) -> ObjectResult<Self> {
        let header = codec::decode_header(encoded)?;

        match header.object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(
                &header, encoded,
            )?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(
                &header, encoded,
            )?))),
        }
    }
}

impl Packable for ObjectBox {
    fn serialize(&self) -> ObjectResult<Bytes> {
        match self {
            ObjectBox::Blob(blob) => blob.serialize(),
            ObjectBox::Tree(tree) => tree.serialize(),
        }
    }
}

impl Object for ObjectBox {
    fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(_) => ObjectType::Blob,
            ObjectBox::Tree(_) => ObjectType::Tree,
        }
    }

    fn size(&self) -> usize {
        match self {
            ObjectBox::Blob(blob) => blob.size(),
            ObjectBox::Tree(tree) => tree.size(),
        }
    }

    fn render(&self) -> Bytes {
        match self {
            ObjectBox::Blob(blob) => blob.render(),
            ObjectBox::Tree(tree) => tree.render(),
        }
    }
}
