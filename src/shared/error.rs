use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the advisory mirror was updated
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (feed error, decode error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the advisory sync pipeline.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to fetch {resource}\nDetails: {details}\n\n💡 Hint: Please verify your network connection and the feed base URL")]
    Fetch { resource: String, details: String },

    #[error("Failed to fetch Photon advisory for version {version} after {attempts} attempts")]
    FetchExhausted { version: String, attempts: u32 },

    #[error("Failed to decode {resource}\nDetails: {details}")]
    Decode { resource: String, details: String },

    #[error("Invalid CVE-ID format: {cve_id}")]
    InvalidIdentifier { cve_id: String },

    #[error("Failed to write advisory file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    Write { path: PathBuf, details: String },
}
