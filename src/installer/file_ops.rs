//! Basic file operations for runtime installation
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_parent_dir)
//! - Tree removal and copying (remove_tree, copy_tree, apply_filtered_copy)
//! - Top-level script copying for module archives (copy_scripts)

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, fs as fs_error};

use super::filter::{FilterPolicy, should_include};

/// Files and directories created by a copy
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    pub files: usize,
    pub dirs: usize,
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| fs_error::write_failed(parent, e))?;
    }
    Ok(())
}

/// Remove a file or directory tree; a missing path is not an error.
///
/// Returns whether anything was removed.
pub fn remove_tree(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(fs_error::remove_failed(path, e)),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| fs_error::remove_failed(path, e))?;
    Ok(true)
}

/// Replace `destination` with the parts of `source` the policy admits.
///
/// Excluded directories are pruned without being descended into.
pub fn apply_filtered_copy(
    source: &Path,
    destination: &Path,
    policy: &FilterPolicy,
) -> Result<CopyReport> {
    remove_tree(destination)?;
    fs::create_dir_all(destination).map_err(|e| fs_error::write_failed(destination, e))?;

    let walker = WalkDir::new(source)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| match entry.path().strip_prefix(source) {
            Ok(relative) => should_include(relative, policy),
            Err(_) => false,
        });

    let mut report = CopyReport::default();
    for entry in walker {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        copy_entry(entry.path(), &destination.join(relative), entry.file_type().is_dir(), &mut report)?;
    }

    Ok(report)
}

/// Copy every file under `source` into `destination`, overwriting files already there
pub fn copy_tree(source: &Path, destination: &Path) -> Result<CopyReport> {
    let mut report = CopyReport::default();
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        copy_entry(entry.path(), &destination.join(relative), entry.file_type().is_dir(), &mut report)?;
    }
    Ok(report)
}

/// Copy the top-level `*.js` and `*.js.gz` files of `source` into `destination`
pub fn copy_scripts(source: &Path, destination: &Path) -> Result<usize> {
    fs::create_dir_all(destination).map_err(|e| fs_error::write_failed(destination, e))?;

    let entries = fs::read_dir(source).map_err(|e| fs_error::read_failed(source, e))?;
    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|e| fs_error::read_failed(source, e))?;
        let path = entry.path();
        let is_script = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".js") || name.ends_with(".js.gz"));
        if !is_script || !path.is_file() {
            continue;
        }

        let target = destination.join(entry.file_name());
        fs::copy(&path, &target).map_err(|e| fs_error::write_failed(&target, e))?;
        copied += 1;
    }
    Ok(copied)
}

fn copy_entry(source: &Path, target: &Path, is_dir: bool, report: &mut CopyReport) -> Result<()> {
    if is_dir {
        fs::create_dir_all(target).map_err(|e| fs_error::write_failed(target, e))?;
        report.dirs += 1;
    } else {
        ensure_parent_dir(target)?;
        fs::copy(source, target).map_err(|e| fs_error::write_failed(target, e))?;
        report.files += 1;
    }
    Ok(())
}
