//! Upload authentication: the signed parameters the upload service expects.

use serde::{Deserialize, Serialize};

use super::UploadError;

/// Short-lived credentials for one upload, as returned by the auth endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthParams {
    pub signature: String,
    /// Unix timestamp (seconds) after which the signature is rejected.
    pub expire: u64,
    pub token: String,
    pub public_key: String,
}

/// Source of upload credentials (typically an HTTP endpoint of the host app).
pub trait Authenticator {
    fn authenticate(&self) -> Result<AuthParams, UploadError>;
}

/// Interpret an auth endpoint response. Non-2xx statuses and bodies that
/// are not valid credentials become [`UploadError::Auth`].
pub fn parse_auth_response(status: u16, body: &str) -> Result<AuthParams, UploadError> {
    if !(200..300).contains(&status) {
        return Err(UploadError::Auth(format!(
            "request failed with status {status}: {body}"
        )));
    }
    serde_json::from_str(body)
        .map_err(|e| UploadError::Auth(format!("malformed auth response: {e}")))
}
