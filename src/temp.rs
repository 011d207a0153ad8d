//! Scratch space for downloads and extraction, never created under the current working
//! directory (e.g. when TMPDIR=tmp or TMPDIR=./tmp).

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::{Result, fs as fs_error};

/// Returns a directory path suitable for creating temporary directories.
/// Never returns a relative path, so a relative TMPDIR does not leave scratch
/// directories inside the package.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Create a fresh scratch directory, removed when the returned guard is dropped
pub fn scratch_dir(prefix: &str) -> Result<TempDir> {
    let base = temp_dir_base();
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(&base)
        .map_err(|e| fs_error::write_failed(&base, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_is_absolute() {
        assert!(temp_dir_base().is_absolute());
    }

    #[test]
    fn test_scratch_dir_cleans_up() {
        let scratch = scratch_dir("scinstall-test-").unwrap();
        let path = scratch.path().to_path_buf();
        assert!(path.is_dir());
        assert!(
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("scinstall-test-"))
        );
        drop(scratch);
        assert!(!path.exists());
    }
}
