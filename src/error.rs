use crate::models::ApiError;
use crate::utils::{bytes_to_mib, millis_to_seconds};
use std::io;
use thiserror::Error;

/// Custom result type for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classes of failure, so callers can branch without matching messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any network call
    Validation,
    /// The network call itself failed or timed out
    Transport,
    /// The backend answered with a failure status
    Backend,
    /// Anything else (malformed success bodies, I/O)
    Unexpected,
}

/// Error types for the MitraVerify SDK
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Upload is larger than the configured limit
    #[error("File size exceeds {}MB limit", bytes_to_mib(*.max_file_size))]
    FileTooLarge { size: u64, max_file_size: u64 },

    /// Upload MIME type is not an accepted image format
    #[error("Unsupported file type. Please use JPEG, PNG, GIF, or WebP images.")]
    UnsupportedFileType { mime_type: String },

    /// Text submitted for verification was empty or whitespace
    #[error("Text content cannot be empty")]
    EmptyInput,

    /// Neither text nor file was supplied
    #[error("Either text or file must be provided")]
    MissingInput,

    /// The request deadline elapsed before the backend responded
    #[error("Request timeout after {} seconds", millis_to_seconds(*.timeout_ms))]
    RequestTimeout { timeout_ms: u64 },

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The backend rejected the request; detail is passed through verbatim
    #[error("{}", .0.detail)]
    ApiRequestFailed(ApiError),

    /// The backend failed and its body could not be read as JSON
    #[error("API Error: {status} (unparseable response body)")]
    UnparseableBackendError { status: u16, body: String },

    /// Health endpoint answered with a non-success status
    #[error("Health check failed: {status}")]
    HealthCheckFailed { status: u16 },

    /// Stats endpoint answered with a non-success status
    #[error("Stats request failed: {status}")]
    StatsRequestFailed { status: u16 },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IOError(#[from] io::Error),
}

impl Error {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidConfig(_)
            | Error::FileTooLarge { .. }
            | Error::UnsupportedFileType { .. }
            | Error::EmptyInput
            | Error::MissingInput => ErrorKind::Validation,
            Error::RequestTimeout { .. } | Error::RequestError(_) => ErrorKind::Transport,
            Error::ApiRequestFailed(_)
            | Error::UnparseableBackendError { .. }
            | Error::HealthCheckFailed { .. }
            | Error::StatsRequestFailed { .. } => ErrorKind::Backend,
            Error::JsonError(_) | Error::IOError(_) => ErrorKind::Unexpected,
        }
    }

    /// HTTP status reported by the backend, if the failure came from one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::ApiRequestFailed(api_error) => Some(api_error.status_code),
            Error::UnparseableBackendError { status, .. }
            | Error::HealthCheckFailed { status }
            | Error::StatsRequestFailed { status } => Some(*status),
            Error::RequestError(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
