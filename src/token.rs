// src/token.rs
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_TOKEN_FILE: &str = "token";

/// Reads a bearer token from a file holding nothing but the token.
/// Surrounding whitespace, such as a trailing newline, is dropped.
pub fn read_token<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| Error::TokenRead {
        path: path.to_path_buf(),
        source,
    })?;

    let token = raw.trim();
    if token.is_empty() {
        return Err(Error::EmptyToken(path.to_path_buf()));
    }
    Ok(token.to_string())
}
