//! Fetch error type.

use std::fmt;
use std::io;

/// Error returned by a single fetch (bad URL, curl failure, HTTP error, or sink failure).
#[derive(Debug)]
pub enum FetchError {
    /// URL did not parse.
    InvalidUrl(String),
    /// Curl reported an error (timeout, connection, etc.).
    Curl(curl::Error),
    /// HTTP response had a non-2xx status.
    Http(u32),
    /// Writing the body to disk failed (e.g. disk full, permission denied).
    Write(io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(reason) => write!(f, "invalid URL: {}", reason),
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Write(e) => write!(f, "write: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Write(e) => Some(e),
            FetchError::InvalidUrl(_) | FetchError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}
