use serde::{Deserialize, Serialize};

/// Status-mode bit marking a directory.
pub const MODE_DIR: u32 = 0x4000;
/// Status-mode bit marking a regular file.
pub const MODE_FILE: u32 = 0x8000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Classify a raw status mode by bit tests, directory bit first.
    ///
    /// Modes that carry neither bit yield `None`. These are bit tests, not an
    /// `S_IFMT` comparison, so e.g. a block device (`0x6000`) reads as a
    /// directory.
    pub fn from_mode(mode: u32) -> Option<Self> {
        if mode & MODE_DIR != 0 {
            Some(Self::Directory)
        } else if mode & MODE_FILE != 0 {
            Some(Self::File)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(rename = "isDir")]
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            is_dir: kind == EntryKind::Directory,
        }
    }

    pub fn kind(&self) -> EntryKind {
        if self.is_dir {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }
}
