use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response<T> {
    Ok(T),
    Err(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    ListNames(PathBuf),
    StatMode(PathBuf),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    dirs: HashMap<PathBuf, Response<Vec<OsString>>>,
    modes: HashMap<PathBuf, Response<u32>>,
    calls: Vec<Call>,
}

impl MockFileSystem {
    pub fn set_dir_names(&self, dir: impl Into<PathBuf>, names: &[&str]) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        let names = names.iter().map(OsString::from).collect();
        inner.dirs.insert(dir.into(), Response::Ok(names));
    }

    pub fn set_dir_os_names(&self, dir: impl Into<PathBuf>, names: Vec<OsString>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.dirs.insert(dir.into(), Response::Ok(names));
    }

    pub fn set_dir_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.dirs.insert(dir.into(), Response::Err(message.into()));
    }

    pub fn set_mode(&self, path: impl Into<PathBuf>, mode: u32) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.modes.insert(path.into(), Response::Ok(mode));
    }

    pub fn set_stat_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.modes.insert(path.into(), Response::Err(message.into()));
    }

    pub fn calls(&self) -> Vec<Call> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn list_names(&self, dir: &Path) -> Result<Vec<OsString>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(Call::ListNames(dir.to_path_buf()));

        match inner.dirs.get(dir) {
            Some(Response::Ok(names)) => Ok(names.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock directory for {}", dir.display())),
        }
    }

    async fn stat_mode(&self, path: &Path) -> Result<u32> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(Call::StatMode(path.to_path_buf()));

        match inner.modes.get(path) {
            Some(Response::Ok(mode)) => Ok(*mode),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock mode for {}", path.display())),
        }
    }
}
