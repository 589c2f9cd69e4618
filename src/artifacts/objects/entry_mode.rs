use crate::artifacts::error::{ObjectError, ObjectResult};
use crate::artifacts::objects::object_type::ObjectType;

#[derive(Debug, Clone, Copy, Eq, Ord, Default, PartialEq, PartialOrd)]
pub enum FileMode {
    #[default]
    Regular,
    Executable,
}

/// File-kind tag recorded for every tree entry
#[derive(Debug, Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub enum EntryMode {
    File(FileMode),
    Symlink,
    Directory,
}

impl EntryMode {
    /// Mode as written inside tree payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::File(FileMode::Regular) => "100644",
            EntryMode::File(FileMode::Executable) => "100755",
            EntryMode::Symlink => "120000",
            EntryMode::Directory => "40000",
        }
    }

    pub fn as_u32(&self) -> u32 {
        match self {
            EntryMode::File(FileMode::Regular) => 0o100644,
            EntryMode::File(FileMode::Executable) => 0o100755,
            EntryMode::Symlink => 0o120000,
            EntryMode::Directory => 0o40000,
        }
    }

    /// Kind of the object an entry with this mode points at
    pub fn object_type(&self) -> ObjectType {
        match self {
            EntryMode::Directory => ObjectType::Tree,
            EntryMode::File(_) | EntryMode::Symlink => ObjectType::Blob,
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, EntryMode::Directory)
    }
}

impl From<FileMode> for EntryMode {
    fn from(mode: FileMode) -> Self {
        EntryMode::File(mode)
    }
}

impl TryFrom<&str> for EntryMode {
    type Error = ObjectError;

    // only the stored forms; the zero-padded "040000" is display-only
    fn try_from(value: &str) -> ObjectResult<Self> {
        match value {
            "100644" => Ok(EntryMode::File(FileMode::Regular)),
            "100755" => Ok(EntryMode::File(FileMode::Executable)),
            "120000" => Ok(EntryMode::Symlink),
            "40000" => Ok(EntryMode::Directory),
            _ => Err(ObjectError::invalid_header(format!(
                "unknown entry mode {value:?}"
            ))),
        }
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06o}", self.as_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EntryMode::Directory, "40000", "040000")]
    #[case(EntryMode::File(FileMode::Regular), "100644", "100644")]
    #[case(EntryMode::File(FileMode::Executable), "100755", "100755")]
    #[case(EntryMode::Symlink, "120000", "120000")]
    fn stored_and_displayed_forms(
        #[case] mode: EntryMode,
        #[case] stored: &str,
        #[case] displayed: &str,
    ) {
        pretty_assertions::assert_eq!(mode.as_str(), stored);
        pretty_assertions::assert_eq!(mode.to_string(), displayed);
        pretty_assertions::assert_eq!(EntryMode::try_from(stored).unwrap(), mode);
    }

    #[test]
    fn only_directories_point_at_trees() {
        assert_eq!(EntryMode::Directory.object_type(), ObjectType::Tree);
        assert_eq!(EntryMode::Symlink.object_type(), ObjectType::Blob);
        assert_eq!(
            EntryMode::File(FileMode::Executable).object_type(),
            ObjectType::Blob
        );
    }

    #[rstest]
    #[case::unknown("160000")]
    #[case::padded_dir_mode("040000")]
    fn unknown_mode_is_an_invalid_header(#[case] mode: &str) {
        assert!(matches!(
            EntryMode::try_from(mode),
            Err(ObjectError::InvalidHeader(_))
        ));
    }
}
