//! Error types and handling for scinstall
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every error is fatal for the run. Components return them as values and only
//! `main` turns them into a process exit code via [`InstallerError::exit_code`].
//!
//! Constructor helpers are grouped by domain:
//! - [`fs`]: file system and configuration persistence errors
//! - [`transport`]: download and directory listing errors

pub mod fs;
pub mod transport;

use miette::Diagnostic;
use thiserror::Error;

/// Exit code used for failures outside the documented set (I/O, archives, prompts).
pub const GENERIC_FAILURE: i32 = -1;

/// Main error type for scinstall operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallerError {
    // Request validation errors
    #[error("Invalid date: {date}")]
    #[diagnostic(
        code(scinstall::request::invalid_date),
        help("Use a build date in YYYY-MM-DD format, or 'latest'")
    )]
    InvalidDate { date: String },

    #[error("Invalid branch: {branch}")]
    #[diagnostic(
        code(scinstall::request::invalid_branch),
        help("Supported branches range from 10.1 through 13.0, e.g. 12.1")
    )]
    InvalidBranch { branch: String },

    #[error("Invalid runtime: {runtime}")]
    #[diagnostic(
        code(scinstall::request::invalid_runtime),
        help("Use one of 'release', 'debug' or 'both'")
    )]
    InvalidRuntime { runtime: String },

    // Credential errors
    #[error("No username provided")]
    #[diagnostic(
        code(scinstall::credentials::missing_username),
        help("Pass --username or set npm_config_username")
    )]
    MissingUsername,

    #[error("No password provided")]
    #[diagnostic(
        code(scinstall::credentials::missing_password),
        help("Pass --password or set npm_config_password")
    )]
    MissingPassword,

    // Destination errors
    #[error("Can not access destination directory: {path}")]
    #[diagnostic(
        code(scinstall::fs::destination_inaccessible),
        help("The install location must be readable and writable by the current user")
    )]
    DestinationInaccessible { path: String, reason: String },

    // Transport errors
    #[error("Failed to download {what} from: {url} (HTTP {status})")]
    #[diagnostic(code(scinstall::transport::download_failed))]
    DownloadFailed {
        what: String,
        url: String,
        status: u16,
    },

    #[error("Request to {url} failed: {reason}")]
    #[diagnostic(
        code(scinstall::transport::request_failed),
        help("Check your network connection; downloads are not retried")
    )]
    RequestFailed { url: String, reason: String },

    #[error("Failed to get SmartClient directory listing from: {url} (HTTP {status})")]
    #[diagnostic(code(scinstall::transport::listing_failed))]
    ListingFailed { url: String, status: u16 },

    #[error("Got empty SmartClient directory listing from: {url}")]
    #[diagnostic(code(scinstall::transport::listing_empty))]
    ListingEmpty { url: String },

    #[error("No SmartClient runtimes available from: {url}")]
    #[diagnostic(
        code(scinstall::transport::no_archive),
        help("Try a specific --date, or another --branch")
    )]
    NoArchiveInListing { url: String },

    #[error("No build date found in download link: {url}")]
    #[diagnostic(code(scinstall::transport::no_build_date))]
    UnresolvedBuildDate { url: String },

    // Archive errors
    #[error("Invalid archive {path}: {reason}")]
    #[diagnostic(code(scinstall::archive::invalid))]
    ArchiveInvalid { path: String, reason: String },

    #[error("No SmartClient package directory found in {path}")]
    #[diagnostic(
        code(scinstall::archive::package_missing),
        help("The downloaded archive does not look like a SmartClient runtime")
    )]
    PackageDirMissing { path: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(scinstall::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(scinstall::config::parse_failed),
        help("Fix or delete the file; it is recreated on the next install")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to write configuration file: {path}: {reason}")]
    #[diagnostic(code(scinstall::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(scinstall::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(scinstall::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(code(scinstall::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(scinstall::fs::io_error))]
    IoError { message: String },

    // Prompt errors
    #[error("Failed to read answer: {message}")]
    #[diagnostic(code(scinstall::prompt::failed))]
    PromptFailed { message: String },
}

impl InstallerError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDate { .. } => 1,
            Self::InvalidBranch { .. } => 2,
            Self::InvalidRuntime { .. } => 3,
            Self::MissingUsername => 4,
            Self::MissingPassword => 5,
            Self::DestinationInaccessible { .. } => -100,
            Self::DownloadFailed { .. } | Self::RequestFailed { .. } => -101,
            Self::ListingFailed { .. } => -102,
            Self::ListingEmpty { .. } => -103,
            Self::NoArchiveInListing { .. } => -104,
            _ => GENERIC_FAILURE,
        }
    }

    /// Whether the error comes from request validation, which warrants printing usage
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. } | Self::InvalidBranch { .. } | Self::InvalidRuntime { .. }
        )
    }
}

impl From<std::io::Error> for InstallerError {
    fn from(err: std::io::Error) -> Self {
        InstallerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for InstallerError {
    fn from(err: serde_json::Error) -> Self {
        InstallerError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for InstallerError {
    fn from(err: walkdir::Error) -> Self {
        InstallerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for InstallerError {
    fn from(err: zip::result::ZipError) -> Self {
        InstallerError::ArchiveInvalid {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for InstallerError {
    fn from(err: inquire::InquireError) -> Self {
        InstallerError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallerError>;
