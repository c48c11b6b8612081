//! Upload flow: authenticate, send the file, hand back the image URL.
//!
//! The HTTP side is supplied by the embedding application through the
//! [`Authenticator`] and [`UploadTransport`] traits. This module only
//! sequences them and classifies failures; it never retries.

mod auth;
mod error;
mod transport;

pub use auth::{parse_auth_response, AuthParams, Authenticator};
pub use error::UploadError;
pub use transport::{UploadProgress, UploadRequest, UploadResponse, UploadTransport};

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Upload `bytes` as `file_name` and return the resulting image URL.
///
/// The URL is empty when the service reported success without one, which
/// the caller treats like "no image selected".
pub fn upload_image(
    authenticator: &dyn Authenticator,
    transport: &dyn UploadTransport,
    file_name: &str,
    bytes: &[u8],
    abort: Arc<AtomicBool>,
    on_progress: &mut dyn FnMut(UploadProgress),
) -> Result<String, UploadError> {
    let auth = authenticator.authenticate().map_err(|e| {
        tracing::error!(category = e.category(), "failed to authenticate for upload: {e}");
        e
    })?;

    let request = UploadRequest {
        file_name,
        bytes,
        auth: &auth,
        abort,
    };
    if request.is_aborted() {
        let err = UploadError::Aborted("cancelled before transfer".to_string());
        tracing::error!(category = err.category(), file_name, "{err}");
        return Err(err);
    }

    let response = transport.upload(&request, on_progress).map_err(|e| {
        tracing::error!(category = e.category(), file_name, "upload failed: {e}");
        e
    })?;

    let url = response.url.unwrap_or_default();
    if url.is_empty() {
        tracing::warn!(file_name, "upload succeeded without a URL");
    } else {
        tracing::info!(file_name, url = %url, "upload complete");
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::atomic::Ordering;

    struct FixedAuth(Result<AuthParams, UploadError>);

    impl Authenticator for FixedAuth {
        fn authenticate(&self) -> Result<AuthParams, UploadError> {
            self.0.clone()
        }
    }

    fn good_auth() -> FixedAuth {
        FixedAuth(Ok(AuthParams {
            signature: "sig".to_string(),
            expire: 42,
            token: "tok".to_string(),
            public_key: "pk".to_string(),
        }))
    }

    /// Sends in fixed chunks, honoring the abort flag between chunks.
    struct ChunkedTransport {
        chunk: usize,
        result: Result<UploadResponse, UploadError>,
        abort_after_chunks: Option<usize>,
        calls: Cell<usize>,
    }

    impl ChunkedTransport {
        fn ok(url: &str) -> Self {
            Self {
                chunk: 4,
                result: Ok(UploadResponse {
                    url: Some(url.to_string()),
                    file_id: None,
                }),
                abort_after_chunks: None,
                calls: Cell::new(0),
            }
        }
    }

    impl UploadTransport for ChunkedTransport {
        fn upload(
            &self,
            request: &UploadRequest<'_>,
            on_progress: &mut dyn FnMut(UploadProgress),
        ) -> Result<UploadResponse, UploadError> {
            self.calls.set(self.calls.get() + 1);
            assert_eq!(request.auth.token, "tok");
            let total = request.bytes.len() as u64;
            let mut loaded = 0u64;
            for (i, chunk) in request.bytes.chunks(self.chunk).enumerate() {
                if self.abort_after_chunks == Some(i) {
                    request.abort.store(true, Ordering::Relaxed);
                }
                if request.is_aborted() {
                    return Err(UploadError::Aborted("user cancelled".to_string()));
                }
                loaded += chunk.len() as u64;
                on_progress(UploadProgress { loaded, total });
            }
            self.result.clone()
        }
    }

    #[test]
    fn successful_upload_reports_progress_and_url() {
        let transport = ChunkedTransport::ok("https://ik.example/u/cat.jpg");
        let mut seen = Vec::new();
        let url = upload_image(
            &good_auth(),
            &transport,
            "cat.jpg",
            &[0u8; 10],
            Arc::new(AtomicBool::new(false)),
            &mut |p| seen.push(p.loaded),
        )
        .unwrap();
        assert_eq!(url, "https://ik.example/u/cat.jpg");
        assert_eq!(seen, vec![4, 8, 10]);
    }

    #[test]
    fn auth_failure_skips_transport() {
        let transport = ChunkedTransport::ok("unused");
        let auth = FixedAuth(Err(UploadError::Auth("denied".to_string())));
        let err = upload_image(
            &auth,
            &transport,
            "a.png",
            b"data",
            Arc::new(AtomicBool::new(false)),
            &mut |_| {},
        )
        .unwrap_err();
        assert_eq!(err.category(), "auth");
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn cancel_mid_transfer() {
        let transport = ChunkedTransport {
            abort_after_chunks: Some(1),
            ..ChunkedTransport::ok("unused")
        };
        let err = upload_image(
            &good_auth(),
            &transport,
            "a.png",
            &[1u8; 12],
            Arc::new(AtomicBool::new(false)),
            &mut |_| {},
        )
        .unwrap_err();
        assert!(matches!(err, UploadError::Aborted(_)));
    }

    #[test]
    fn already_cancelled_never_sends() {
        let transport = ChunkedTransport::ok("unused");
        let err = upload_image(
            &good_auth(),
            &transport,
            "a.png",
            b"data",
            Arc::new(AtomicBool::new(true)),
            &mut |_| {},
        )
        .unwrap_err();
        assert_eq!(err.category(), "aborted");
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn transport_failures_pass_through_without_retry() {
        for failure in [
            UploadError::InvalidRequest("bad file".to_string()),
            UploadError::Network("reset".to_string()),
            UploadError::Server("502".to_string()),
        ] {
            let transport = ChunkedTransport {
                result: Err(failure.clone()),
                ..ChunkedTransport::ok("unused")
            };
            let err = upload_image(
                &good_auth(),
                &transport,
                "a.png",
                b"data",
                Arc::new(AtomicBool::new(false)),
                &mut |_| {},
            )
            .unwrap_err();
            assert_eq!(err, failure);
            assert_eq!(transport.calls.get(), 1);
        }
    }

    #[test]
    fn missing_url_is_empty_string() {
        let transport = ChunkedTransport {
            result: Ok(UploadResponse::default()),
            ..ChunkedTransport::ok("unused")
        };
        let url = upload_image(
            &good_auth(),
            &transport,
            "a.png",
            b"data",
            Arc::new(AtomicBool::new(false)),
            &mut |_| {},
        )
        .unwrap();
        assert_eq!(url, "");
    }
}
