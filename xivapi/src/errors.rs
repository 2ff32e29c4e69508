//! Error types for the API client.

/// Errors that can occur when talking to XIVAPI.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be sent or its body could not be read
    /// (connection failure, timeout).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the JSON shape we expected.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// The base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The query was rejected before being sent.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl Error {
    /// The HTTP status code, if the API answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
