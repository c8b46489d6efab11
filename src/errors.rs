use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::{derive_message, rate_limit_message};
use crate::response::ApiResponse;

/// Which step of an upload or activation workflow produced a failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Requesting an upload ticket.
    UploadTicketCreation,
    /// Creating the video resource.
    VideoCreation,
    /// Sending the video file itself.
    VideoUpload,
    /// Initial request to upload a picture.
    PictureCreation,
    /// Sending the picture file.
    PictureUpload,
    /// Activating an uploaded picture.
    PictureActivation,
    /// Initial request to upload a text track.
    TexttrackCreation,
    /// Sending the text track file.
    TexttrackUpload,
    /// The caller exceeded the API rate limit.
    ApiRateLimitExceeded,
}

impl FailureKind {
    pub const ALL: [FailureKind; 9] = [
        FailureKind::UploadTicketCreation,
        FailureKind::VideoCreation,
        FailureKind::VideoUpload,
        FailureKind::PictureCreation,
        FailureKind::PictureUpload,
        FailureKind::PictureActivation,
        FailureKind::TexttrackCreation,
        FailureKind::TexttrackUpload,
        FailureKind::ApiRateLimitExceeded,
    ];

    /// Message derivation for this kind. Rate-limit failures carry reset
    /// guidance; everything else uses the plain body message.
    pub fn derive_message<R: ApiResponse + ?Sized>(self, response: &R) -> String {
        match self {
            FailureKind::ApiRateLimitExceeded => rate_limit_message(response),
            _ => derive_message(response),
        }
    }

    /// Shorthand for [`ApiFailure::new`].
    pub fn failure<R: ApiResponse + ?Sized>(
        self,
        response: &R,
        default_message: &str,
    ) -> ApiFailure {
        ApiFailure::new(self, response, default_message)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::UploadTicketCreation => "upload ticket creation",
            FailureKind::VideoCreation => "video creation",
            FailureKind::VideoUpload => "video upload",
            FailureKind::PictureCreation => "picture creation",
            FailureKind::PictureUpload => "picture upload",
            FailureKind::PictureActivation => "picture activation",
            FailureKind::TexttrackCreation => "text track creation",
            FailureKind::TexttrackUpload => "text track upload",
            FailureKind::ApiRateLimitExceeded => "API rate limit exceeded",
        };
        f.write_str(name)
    }
}

/// A failed API response, tagged with the workflow step it came from.
///
/// Match on [`kind`](Self::kind) to branch on the scenario; `message` and
/// `status_code` are available for every kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiFailure {
    kind: FailureKind,
    message: String,
    status_code: i32,
}

impl ApiFailure {
    /// Build a failure from a response.
    ///
    /// The message always comes from the response (see
    /// [`FailureKind::derive_message`]). `default_message` is accepted but
    /// not used, so don't expect to see it in the result.
    pub fn new<R: ApiResponse + ?Sized>(
        kind: FailureKind,
        response: &R,
        _default_message: &str,
    ) -> Self {
        Self {
            kind,
            message: kind.derive_message(response),
            status_code: response.status_code(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status code of the originating response, unmodified.
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind == FailureKind::ApiRateLimitExceeded
    }
}

/// Local object construction failed before any request was made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ObjectLoadFailure {
    message: String,
}

impl ObjectLoadFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// All errors that can occur when using the Vimeo SDK.
#[derive(Error, Debug)]
pub enum VimeoError {
    /// The API answered with a non-2xx status.
    #[error("{} failed ({}): {}", .0.kind(), .0.status_code(), .0)]
    Api(#[from] ApiFailure),

    /// Caller-supplied data could not be turned into an object.
    #[error("object load failed: {0}")]
    ObjectLoad(#[from] ObjectLoadFailure),

    /// A transport-level HTTP error from reqwest.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl VimeoError {
    /// Status code of the failed response, if this error came from one.
    pub fn status_code(&self) -> Option<i32> {
        match self {
            VimeoError::Api(failure) => Some(failure.status_code()),
            VimeoError::Http(e) => e.status().map(|s| i32::from(s.as_u16())),
            VimeoError::ObjectLoad(_) => None,
        }
    }

    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            VimeoError::Api(failure) => Some(failure.kind()),
            _ => None,
        }
    }
}

/// A convenience alias for `Result<T, VimeoError>`.
pub type Result<T> = std::result::Result<T, VimeoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::CapturedResponse;

    #[test]
    fn rate_limit_without_json_or_header() {
        let resp = CapturedResponse::new(429, "Too Many Requests");
        let failure = ApiFailure::new(FailureKind::ApiRateLimitExceeded, &resp, "rate limited");

        assert_eq!(failure.message(), "Too Many Requests");
        assert_eq!(failure.status_code(), 429);
        assert!(failure.is_rate_limited());
    }

    #[test]
    fn video_creation_uses_error_field() {
        let resp = CapturedResponse::new(400, r#"{"error": "Invalid title"}"#);
        let failure = FailureKind::VideoCreation.failure(&resp, "could not create video");

        assert_eq!(failure.kind(), FailureKind::VideoCreation);
        assert_eq!(failure.message(), "Invalid title");
        assert_eq!(failure.status_code(), 400);
    }

    #[test]
    fn picture_upload_uses_description() {
        let resp = CapturedResponse::new(403, r#"{"Description": "Forbidden"}"#);
        let failure = FailureKind::PictureUpload.failure(&resp, "picture upload failed");

        assert_eq!(failure.message(), "Forbidden");
        assert_eq!(failure.status_code(), 403);
    }

    #[test]
    fn default_message_is_ignored() {
        let resp = CapturedResponse::new(500, "");
        let failure = FailureKind::VideoUpload.failure(&resp, "upload failed");

        assert_eq!(failure.message(), "");
    }

    #[test]
    fn status_code_is_copied_verbatim() {
        for status in [0, -1, 200, 418, 999] {
            let resp = CapturedResponse::new(status, "x");
            assert_eq!(FailureKind::TexttrackUpload.failure(&resp, "").status_code(), status);
        }
    }

    #[test]
    fn only_rate_limit_kind_appends_guidance() {
        let resp = CapturedResponse::new(429, "Too Many Requests")
            .with_header("x-ratelimit-reset", "60")
            .unwrap();

        for kind in FailureKind::ALL {
            let failure = kind.failure(&resp, "");
            if kind == FailureKind::ApiRateLimitExceeded {
                assert_eq!(
                    failure.message(),
                    "Too Many Requests \n limit will reset on: 60.\n About this limit: \
                     https://developer.vimeo.com/guidelines/rate-limiting"
                );
            } else {
                assert_eq!(failure.message(), "Too Many Requests");
            }
        }
    }

    #[test]
    fn object_load_failure_has_no_status() {
        let failure = ObjectLoadFailure::new("missing required field 'name'");
        assert_eq!(failure.message(), "missing required field 'name'");
        assert_eq!(failure.to_string(), "missing required field 'name'");

        let err = VimeoError::from(failure);
        assert_eq!(err.status_code(), None);
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn vimeo_error_exposes_api_fields() {
        let resp = CapturedResponse::new(401, r#"{"error": "Bad token"}"#);
        let err: VimeoError = FailureKind::UploadTicketCreation.failure(&resp, "").into();

        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.kind(), Some(FailureKind::UploadTicketCreation));
        assert_eq!(err.to_string(), "upload ticket creation failed (401): Bad token");
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&FailureKind::TexttrackCreation).unwrap();
        assert_eq!(json, r#""texttrack_creation""#);

        let kind: FailureKind = serde_json::from_str(r#""api_rate_limit_exceeded""#).unwrap();
        assert_eq!(kind, FailureKind::ApiRateLimitExceeded);
    }

    #[test]
    fn failures_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiFailure>();
        assert_send_sync::<ObjectLoadFailure>();
        assert_send_sync::<VimeoError>();
    }
}
