use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::errors::{ApiFailure, FailureKind, ObjectLoadFailure, Result, VimeoError};

/// The view of an HTTP response that failure construction needs.
///
/// Implement this for whatever transport type your client uses; the crate
/// ships [`CapturedResponse`] as an owned implementation backed by reqwest.
pub trait ApiResponse {
    /// HTTP status code, passed through verbatim.
    fn status_code(&self) -> i32;

    /// Header lookup. Names must match case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;

    /// Raw response body.
    fn text(&self) -> &str;

    /// Structured body. Fails when the body is not well-formed JSON.
    fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(self.text())
    }
}

/// An owned, immutable snapshot of an HTTP response.
#[derive(Debug, Clone)]
pub struct CapturedResponse {
    status_code: i32,
    headers: HeaderMap,
    text: String,
}

impl CapturedResponse {
    /// Build a snapshot with no headers.
    pub fn new(status_code: i32, text: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: HeaderMap::new(),
            text: text.into(),
        }
    }

    /// Add a header to the snapshot.
    ///
    /// Returns an [`ObjectLoadFailure`] if the name or value is not a legal
    /// HTTP header.
    pub fn with_header(
        mut self,
        name: &str,
        value: &str,
    ) -> std::result::Result<Self, ObjectLoadFailure> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ObjectLoadFailure::new(format!("invalid header name {name:?}: {e}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            ObjectLoadFailure::new(format!("invalid value for header {name:?}: {e}"))
        })?;

        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Read status, headers and body out of a live reqwest response.
    ///
    /// # Errors
    ///
    /// - [`VimeoError::Http`] if the body cannot be read.
    pub async fn capture(response: reqwest::Response) -> Result<Self> {
        let status_code = i32::from(response.status().as_u16());
        let headers = response.headers().clone();
        let text = response.text().await.map_err(VimeoError::Http)?;

        tracing::debug!(status_code, body_len = text.len(), "captured API response");

        Ok(Self {
            status_code,
            headers,
            text,
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl ApiResponse for CapturedResponse {
    fn status_code(&self) -> i32 {
        self.status_code
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Pass a 2xx response through, or turn anything else into an [`ApiFailure`]
/// tagged with `kind`.
///
/// `default_message` is forwarded to [`ApiFailure::new`], which ignores it.
pub fn ensure_success<R: ApiResponse>(
    response: R,
    kind: FailureKind,
    default_message: &str,
) -> std::result::Result<R, ApiFailure> {
    if (200..300).contains(&response.status_code()) {
        return Ok(response);
    }
    Err(ApiFailure::new(kind, &response, default_message))
}
