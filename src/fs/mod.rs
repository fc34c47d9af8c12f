mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{Call, MockFileSystem};

use anyhow::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Raw base names of the direct children of `dir`, in enumeration order.
    async fn list_names(&self, dir: &Path) -> Result<Vec<OsString>>;

    /// Raw status mode of `path`, following symlinks.
    async fn stat_mode(&self, path: &Path) -> Result<u32>;
}
