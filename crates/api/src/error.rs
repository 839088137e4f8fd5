use thiserror::Error;

/// Failure modes of a profile fetch. Every variant renders to a single
/// message; the store records that message verbatim on its envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request produced no usable response: DNS or connect failure,
    /// timeout, or an aborted body read.
    #[error("Profile request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status. `body` carries the
    /// response text so upstream error details are not lost.
    #[error("Profile endpoint returned {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not valid JSON or not the expected shape.
    #[error("Malformed profile response: {0}")]
    Parse(#[from] serde_json::Error),
}
