//! Download and directory listing errors

use super::InstallerError;

/// Creates a download failure for a non-200 response
pub fn download_failed(what: impl Into<String>, url: impl Into<String>, status: u16) -> InstallerError {
    InstallerError::DownloadFailed {
        what: what.into(),
        url: url.into(),
        status,
    }
}

/// Creates a failure for a request that never produced a response
pub fn request_failed(url: impl Into<String>, reason: impl ToString) -> InstallerError {
    InstallerError::RequestFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates a directory listing failure for a non-200 response
pub fn listing_failed(url: impl Into<String>, status: u16) -> InstallerError {
    InstallerError::ListingFailed {
        url: url.into(),
        status,
    }
}

/// Creates an empty directory listing error
pub fn listing_empty(url: impl Into<String>) -> InstallerError {
    InstallerError::ListingEmpty { url: url.into() }
}

/// Creates an error for a listing that names no zip archive
pub fn no_archive(url: impl Into<String>) -> InstallerError {
    InstallerError::NoArchiveInListing { url: url.into() }
}
