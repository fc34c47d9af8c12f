use anyhow::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use tokio::task;

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn list_names(&self, dir: &Path) -> Result<Vec<OsString>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut names = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                names.push(entry?.file_name());
            }
            Ok(names)
        })
        .await?
    }

    async fn stat_mode(&self, path: &Path) -> Result<u32> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || {
            let metadata = std::fs::metadata(&path)?;
            Ok(mode_of(&metadata))
        })
        .await?
    }
}

#[cfg(unix)]
fn mode_of(metadata: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    metadata.mode()
}

#[cfg(not(unix))]
fn mode_of(metadata: &std::fs::Metadata) -> u32 {
    use crate::models::{MODE_DIR, MODE_FILE};

    let file_type = metadata.file_type();
    if file_type.is_dir() {
        MODE_DIR
    } else if file_type.is_file() {
        MODE_FILE
    } else {
        0
    }
}
