//! Profile lookup error type.

/// Message shown for any non-2xx lookup response.
pub const NOT_FOUND_MESSAGE: &str = "Usuario no encontrado";

/// Failure while fetching or parsing a profile. Every variant ends up as a
/// single message string in the search state; the variants exist for logs.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The proxy answered with a non-success status.
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound { status: u32 },
    /// Curl reported an error (DNS, connect, timeout, TLS...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// The response body is not UTF-8.
    #[error("{0}")]
    Body(String),
    /// The response body is not a profile record.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// The task running the request died before producing a result.
    #[error("lookup aborted: {0}")]
    Aborted(String),
}
