pub mod cli;
pub mod core;
pub mod fs;
pub mod logging;
pub mod models;

use anyhow::bail;

/// Strip one trailing `/` from a non-empty path.
///
/// `"/sd/"` becomes `"/sd"`, and `"/"` becomes `""`; callers join children
/// as `normalized + "/" + name` either way.
pub fn normalize_path(path: &str) -> anyhow::Result<&str> {
    if path.is_empty() {
        bail!("path must not be empty");
    }

    Ok(path.strip_suffix('/').unwrap_or(path))
}
