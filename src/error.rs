use std::fmt;

/// Errors from the bookstore API boundary.
///
/// Commands need to tell "the book does not exist" apart from "the request
/// failed", so the client returns this instead of a bare anyhow error.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (connect, timeout, body read).
    Network(reqwest::Error),
    /// Non-success HTTP status; `detail` is the API's error body if it sent one.
    Status { status: u16, detail: String },
    /// 404 for a specific resource.
    NotFound { resource: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "API request failed: {}", e),
            ApiError::Status { status, detail } => {
                write!(f, "API returned status {}: {}", status, detail)
            }
            ApiError::NotFound { resource } => write!(f, "{} not found", resource),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e)
    }
}
