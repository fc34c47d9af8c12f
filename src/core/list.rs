use std::ffi::OsString;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, trace};

use crate::core::encode::to_wire_string;
use crate::fs::FileSystem;
use crate::models::{DirectoryEntry, DirectoryListing, EntryKind};
use crate::normalize_path;

/// List the direct children of `path`, classified by status mode.
///
/// Entries come back in enumeration order. Entries whose mode carries
/// neither the directory nor the file bit are left out. A failed
/// enumeration or a failed stat on any entry aborts the whole listing.
pub async fn list_dir<F: FileSystem>(fs: &F, path: &str) -> anyhow::Result<DirectoryListing> {
    let normalized = normalize_path(path)?;
    let dir = if normalized.is_empty() { "/" } else { normalized };

    let names = fs
        .list_names(Path::new(dir))
        .await
        .with_context(|| format!("failed to read directory {dir}"))?;
    debug!(dir, count = names.len(), "enumerated directory");

    let mut listing = DirectoryListing::default();
    for name in names {
        let mut child = OsString::from(normalized);
        child.push("/");
        child.push(&name);
        let child = Path::new(&child);

        let mode = fs
            .stat_mode(child)
            .await
            .with_context(|| format!("failed to stat {}", child.display()))?;

        match EntryKind::from_mode(mode) {
            Some(kind) => {
                trace!(path = %child.display(), ?kind, "classified entry");
                listing.push(DirectoryEntry::new(name.to_string_lossy(), kind));
            }
            None => {
                debug!(
                    path = %child.display(),
                    mode = format_args!("{mode:#x}"),
                    "skipping unclassifiable entry"
                );
            }
        }
    }

    Ok(listing)
}

/// List `path` and encode the result as a single wire line.
pub async fn list<F: FileSystem>(fs: &F, path: &str) -> anyhow::Result<String> {
    let listing = list_dir(fs, path).await?;
    to_wire_string(&listing)
}
