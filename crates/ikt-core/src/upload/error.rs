//! Failure categories of the upload flow.

/// Every way an upload can fail. None of them is retried automatically;
/// the user starts a new upload instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The auth endpoint refused or returned something unusable.
    #[error("authentication request failed: {0}")]
    Auth(String),
    /// The user cancelled the transfer.
    #[error("upload aborted: {0}")]
    Aborted(String),
    /// The upload service rejected the request as malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server error: {0}")]
    Server(String),
}

impl UploadError {
    /// Short category name for logs.
    pub fn category(&self) -> &'static str {
        match self {
            UploadError::Auth(_) => "auth",
            UploadError::Aborted(_) => "aborted",
            UploadError::InvalidRequest(_) => "invalid_request",
            UploadError::Network(_) => "network",
            UploadError::Server(_) => "server",
        }
    }
}
