mod entry;
mod listing;

pub use entry::{DirectoryEntry, EntryKind, MODE_DIR, MODE_FILE};
pub use listing::DirectoryListing;
