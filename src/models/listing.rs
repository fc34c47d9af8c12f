use serde::{Deserialize, Serialize};

use super::{DirectoryEntry, EntryKind};

/// Classified entries of one directory, in enumeration order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectoryListing {
    pub entries: Vec<DirectoryEntry>,
}

impl DirectoryListing {
    pub fn push(&mut self, entry: DirectoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DirectoryEntry> {
        self.entries.iter()
    }

    pub fn files(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.iter().filter(|entry| entry.kind() == EntryKind::File)
    }

    pub fn dirs(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.iter().filter(|entry| entry.kind() == EntryKind::Directory)
    }
}

impl From<Vec<DirectoryEntry>> for DirectoryListing {
    fn from(entries: Vec<DirectoryEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a DirectoryListing {
    type Item = &'a DirectoryEntry;
    type IntoIter = std::slice::Iter<'a, DirectoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
