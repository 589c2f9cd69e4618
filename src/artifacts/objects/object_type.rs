use crate::artifacts::error::{ObjectError, ObjectResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
        }
    }
}

impl TryFrom<&[u8]> for ObjectType {
    type Error = ObjectError;

    fn try_from(value: &[u8]) -> ObjectResult<Self> {
        match value {
            b"blob" => Ok(ObjectType::Blob),
            b"tree" => Ok(ObjectType::Tree),
            _ => Err(ObjectError::invalid_header(format!(
                "unknown object kind {:?}",
                String::from_utf8_lossy(value)
            ))),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
