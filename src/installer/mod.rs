//! Runtime installation on disk
//!
//! This module handles:
//! - Extracting downloaded archives into a scratch directory
//! - Copying the runtime tree into place under the filter policy
//! - Adding and removing optional module files

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Runtime;
use crate::error::{Result, fs as fs_error};
use crate::product::{
    ComponentSpec, DEBUG_MODULES, ISOMORPHIC_DIR, MODULE_DEBUG_DIR, RELEASE_MODULES, RUNTIME_DIR,
};

pub mod extract;
pub mod file_ops;
pub mod filter;


pub use extract::{extract_archive, find_package_dir};
pub use file_ops::{CopyReport, remove_tree};
pub use filter::FilterPolicy;

/// The installed runtime tree under an install location
pub fn runtime_root(location: &Path) -> PathBuf {
    location.join(ISOMORPHIC_DIR)
}

/// Create `location` if needed (owner-only on unix) and check it can be read and written
pub fn prepare_location(location: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder
        .create(location)
        .map_err(|e| fs_error::destination_inaccessible(location, e))?;

    fs::read_dir(location).map_err(|e| fs_error::destination_inaccessible(location, e))?;
    tempfile::tempfile_in(location).map_err(|e| fs_error::destination_inaccessible(location, e))?;
    Ok(())
}

/// Install a downloaded core runtime archive at `location`.
///
/// The archive is unpacked into `scratch`, the runtime tree of a different
/// `previous_location` is removed, and the filtered runtime replaces whatever is
/// at `<location>/isomorphic`.
pub fn install_core(
    archive: &Path,
    scratch: &Path,
    previous_location: Option<&Path>,
    location: &Path,
    policy: &FilterPolicy,
) -> Result<CopyReport> {
    extract_archive(archive, scratch)?;
    let package = find_package_dir(scratch)?;
    let source = package.join(RUNTIME_DIR).join(ISOMORPHIC_DIR);
    if !source.is_dir() {
        return Err(fs_error::archive_invalid(
            archive,
            format!("missing {RUNTIME_DIR}/{ISOMORPHIC_DIR}"),
        ));
    }

    if let Some(previous) = previous_location.filter(|previous| *previous != location) {
        let old_root = runtime_root(previous);
        if remove_tree(&old_root)? {
            tracing::debug!(path = %old_root.display(), "removed previous installation");
        }
    }

    let destination = runtime_root(location);
    let report = file_ops::apply_filtered_copy(&source, &destination, policy)?;
    tracing::debug!(
        path = %destination.display(),
        files = report.files,
        dirs = report.dirs,
        "runtime copied"
    );
    Ok(report)
}

/// Install a downloaded optional module archive into the runtime at `location`.
///
/// Release gets the archive's top-level scripts, debug gets its `modules-debug`
/// directory. Existing files are overwritten. Returns the number of files copied.
pub fn install_module(
    archive: &Path,
    scratch: &Path,
    location: &Path,
    runtime: Runtime,
) -> Result<usize> {
    extract_archive(archive, scratch)?;
    let root = runtime_root(location);
    let mut copied = 0;

    if runtime.includes_release() {
        copied += file_ops::copy_scripts(scratch, &root.join(RELEASE_MODULES))?;
    }

    if runtime.includes_debug() {
        let debug_source = scratch.join(MODULE_DEBUG_DIR);
        if !debug_source.is_dir() {
            return Err(fs_error::archive_invalid(
                archive,
                format!("missing {MODULE_DEBUG_DIR}"),
            ));
        }
        copied += file_ops::copy_tree(&debug_source, &root.join(DEBUG_MODULES))?.files;
    }

    Ok(copied)
}

/// Delete an optional module's files from the runtime at `location`.
///
/// Only the module's own script (and its gzipped release twin) is touched.
/// Returns the paths that were actually removed.
pub fn remove_module(location: &Path, component: &ComponentSpec) -> Result<Vec<PathBuf>> {
    let root = runtime_root(location);
    let candidates = [
        root.join(RELEASE_MODULES).join(component.file),
        root.join(RELEASE_MODULES).join(format!("{}.gz", component.file)),
        root.join(DEBUG_MODULES).join(component.file),
    ];

    let mut removed = Vec::new();
    for path in candidates {
        if remove_tree(&path)? {
            removed.push(path);
        }
    }
    Ok(removed)
}
