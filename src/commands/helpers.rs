//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::error::{InstallerError, Result, fs as fs_error};

/// Resolve the package directory from an optional argument
///
/// If a path is provided, use it. Otherwise, resolve to the current directory.
pub fn resolve_package_dir(package_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = match package_dir {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| InstallerError::IoError {
            message: format!("Failed to get current directory: {}", e),
        })?,
    };

    if !path.is_dir() {
        return Err(fs_error::read_failed(&path, "not a directory"));
    }
    std::path::absolute(&path).map_err(|e| fs_error::read_failed(&path, e))
}

/// Install location used when none is configured: the directory containing
/// `node_modules`, i.e. the grandparent of the package directory
pub fn default_location(package_dir: &Path) -> PathBuf {
    package_dir
        .parent()
        .and_then(Path::parent)
        .unwrap_or(package_dir)
        .to_path_buf()
}

/// Package name for the user agent and usage text
pub fn package_name() -> String {
    std::env::var("npm_package_name")
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
