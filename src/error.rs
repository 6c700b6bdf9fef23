//! Error taxonomy for talking to the remote note store.

use std::net::AddrParseError;

use thiserror::Error;

use crate::url_validator::UrlValidationError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Note ID is missing")]
    MissingNoteId,

    #[error("Invalid note: {0}")]
    Validation(String),

    #[error(transparent)]
    InvalidUrl(#[from] UrlValidationError),
}

/// Startup configuration that cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid note store URL: {0}")]
    ApiUrl(#[from] UrlValidationError),

    #[error("Invalid bind address: {0}")]
    BindAddr(#[from] AddrParseError),
}
