//! Remote file and folder entry types.

use chrono::NaiveDateTime;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Size reported for folders.
pub const FOLDER_SIZE: &str = "0";

/// A single file or folder discovered on the remote tree.
///
/// Entries are produced by a line parser and never mutated afterwards; the
/// crawler only adds them to and removes them from its accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Full remote path: the listed address followed by the entry name.
    pub path: String,

    /// Creation timestamp, when the listing line carried a parseable one.
    pub created_at: Option<NaiveDateTime>,

    /// Size token as it appeared in the listing ("0" for folders).
    pub size_bytes: CompactString,

    /// Whether the listing flagged this entry as a folder.
    pub is_folder: bool,
}

impl Entry {
    /// Create a file entry.
    pub fn new_file(
        path: impl Into<String>,
        created_at: Option<NaiveDateTime>,
        size_bytes: impl Into<CompactString>,
    ) -> Self {
        Self {
            path: path.into(),
            created_at,
            size_bytes: size_bytes.into(),
            is_folder: false,
        }
    }

    /// Create a folder entry. Folders always report a size of "0".
    pub fn new_folder(path: impl Into<String>, created_at: Option<NaiveDateTime>) -> Self {
        Self {
            path: path.into(),
            created_at,
            size_bytes: CompactString::new(FOLDER_SIZE),
            is_folder: true,
        }
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        !self.is_folder
    }

    /// Numeric size, if the size token is a plain integer.
    pub fn size(&self) -> Option<u64> {
        self.size_bytes.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_entry_size_is_zero() {
        let entry = Entry::new_folder("ftp://host/docs", None);
        assert!(entry.is_folder);
        assert!(!entry.is_file());
        assert_eq!(entry.size_bytes.as_str(), "0");
        assert_eq!(entry.size(), Some(0));
    }

    #[test]
    fn test_non_numeric_size() {
        let entry = Entry::new_file("ftp://host/a", None, "08-15-23");
        assert_eq!(entry.size(), None);
    }
}
