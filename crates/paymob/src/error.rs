use thiserror::Error;

/// Errors returned by [`PaymobClient`](crate::PaymobClient) operations.
///
/// A response the gateway rejected with a non-2xx status but a JSON body is
/// not an error: the body is handed back for the caller to interpret.
#[derive(Debug, Error)]
pub enum PaymobError {
    /// The request never produced a readable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("failed to decode response body (status {status}): {source}")]
    Decode {
        status: reqwest::StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The authentication response carried no `token` string.
    #[error("authentication response did not contain a token")]
    MissingToken,
}

pub type Result<T> = std::result::Result<T, PaymobError>;
