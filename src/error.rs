// src/error.rs
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read token file {}: {source}", .path.display())]
    TokenRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Token file {} is empty", .0.display())]
    EmptyToken(PathBuf),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Malformed response from {endpoint}: {source}")]
    ResponseParse {
        endpoint: String,
        source: serde_json::Error,
    },

    #[error("Failed to list local directory {}: {source}", .path.display())]
    LocalList {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Config(String),
}

/// A listing call that did not produce a successful HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed: [{code}] {reason}")]
    Status { code: u16, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
