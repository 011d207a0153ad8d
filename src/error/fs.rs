//! File system and configuration persistence errors

use std::path::Path;

use super::InstallerError;

/// Creates a destination-inaccessible error
pub fn destination_inaccessible(path: impl AsRef<Path>, reason: impl ToString) -> InstallerError {
    InstallerError::DestinationInaccessible {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file read error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> InstallerError {
    InstallerError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> InstallerError {
    InstallerError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a removal error
pub fn remove_failed(path: impl AsRef<Path>, reason: impl ToString) -> InstallerError {
    InstallerError::RemoveFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a config write error
pub fn config_write_failed(path: impl AsRef<Path>, reason: impl ToString) -> InstallerError {
    InstallerError::ConfigWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an archive error
pub fn archive_invalid(path: impl AsRef<Path>, reason: impl ToString) -> InstallerError {
    InstallerError::ArchiveInvalid {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}
