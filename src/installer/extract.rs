//! Zip extraction

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{InstallerError, Result, fs as fs_error};
use crate::product::PACKAGE_DIR_PREFIX;

/// Unpack `archive` into `into`, returning the number of entries written.
///
/// Entries whose names would escape `into` are skipped.
pub fn extract_archive(archive: &Path, into: &Path) -> Result<usize> {
    let file = File::open(archive).map_err(|e| fs_error::read_failed(archive, e))?;
    let mut zip = ZipArchive::new(file).map_err(|e| fs_error::archive_invalid(archive, e))?;

    fs::create_dir_all(into).map_err(|e| fs_error::write_failed(into, e))?;

    let mut written = 0;
    for index in 0..zip.len() {
        let mut entry = zip
            .by_index(index)
            .map_err(|e| fs_error::archive_invalid(archive, e))?;

        let Some(relative) = entry.enclosed_name().map(|name| name.to_path_buf()) else {
            tracing::warn!(name = entry.name(), "skipping archive entry outside extraction root");
            continue;
        };
        let out_path = into.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| fs_error::write_failed(&out_path, e))?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(|e| fs_error::write_failed(parent, e))?;
            }
            let mut out = File::create(&out_path).map_err(|e| fs_error::write_failed(&out_path, e))?;
            io::copy(&mut entry, &mut out).map_err(|e| fs_error::write_failed(&out_path, e))?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode))
                    .map_err(|e| fs_error::write_failed(&out_path, e))?;
            }
        }

        written += 1;
    }

    tracing::debug!(archive = %archive.display(), entries = written, "archive extracted");
    Ok(written)
}

/// The top-level `SmartClient_*` directory of an extracted runtime archive
pub fn find_package_dir(extracted: &Path) -> Result<PathBuf> {
    let entries = fs::read_dir(extracted).map_err(|e| fs_error::read_failed(extracted, e))?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(PACKAGE_DIR_PREFIX))
        })
        .map(|entry| entry.path())
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| InstallerError::PackageDirMissing {
            path: extracted.display().to_string(),
        })
}
