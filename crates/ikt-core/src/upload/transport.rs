//! Upload transport: moves file bytes to the upload service.

use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{AuthParams, UploadError};

/// Bytes sent so far for one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl UploadProgress {
    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.loaded as f64 / self.total as f64).min(1.0)
    }

    /// Percent complete in [0.0, 100.0], as shown on the progress bar.
    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

/// Everything a transport needs for one upload.
#[derive(Debug, Clone)]
pub struct UploadRequest<'a> {
    pub file_name: &'a str,
    pub bytes: &'a [u8],
    pub auth: &'a AuthParams,
    /// Set to true to cancel; transports check it between chunks and
    /// return [`UploadError::Aborted`].
    pub abort: Arc<AtomicBool>,
}

impl UploadRequest<'_> {
    pub fn is_aborted(&self) -> bool {
        self.abort.load(Ordering::Relaxed)
    }
}

/// What the upload service reports back on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
}

pub trait UploadTransport {
    /// Send `request`, reporting progress through `on_progress`.
    fn upload(
        &self,
        request: &UploadRequest<'_>,
        on_progress: &mut dyn FnMut(UploadProgress),
    ) -> Result<UploadResponse, UploadError>;
}
