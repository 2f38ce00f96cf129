// src/error.rs

use std::fmt;

/// Crate error enum.
/// The formatters are deliberately permissive (missing record fields become
/// empty segments, never errors); only the edges can fail when parsing a
/// base URL or loading a field map file.
#[derive(Debug)]
pub enum ViewError {
    InvalidBaseUrl(String),

    Io(String),

    Decode(String),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ViewError {}

/// Converts `url::ParseError` into `ViewError::InvalidBaseUrl`.
/// Allows using `?` operator when constructing a route table.
impl From<url::ParseError> for ViewError {
    fn from(err: url::ParseError) -> Self {
        ViewError::InvalidBaseUrl(err.to_string())
    }
}

impl From<std::io::Error> for ViewError {
    fn from(err: std::io::Error) -> Self {
        ViewError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ViewError {
    fn from(err: serde_json::Error) -> Self {
        ViewError::Decode(err.to_string())
    }
}
