//! Shows how failed responses turn into typed failures.
//!
//! Run with:
//!   cargo run --example failure_messages
//!
//! No network access is needed; responses are built locally.

use vimeo::{ensure_success, CapturedResponse, FailureKind, ObjectLoadFailure, VimeoError};

fn report(err: &VimeoError) {
    match err {
        VimeoError::Api(failure) if failure.is_rate_limited() => {
            println!("  rate limited: {}", failure.message());
        }
        VimeoError::Api(failure) => {
            println!(
                "  {} failed with {}: {}",
                failure.kind(),
                failure.status_code(),
                failure.message()
            );
        }
        other => println!("  {other}"),
    }
}

fn main() -> Result<(), ObjectLoadFailure> {
    let responses = [
        (
            FailureKind::VideoCreation,
            CapturedResponse::new(400, r#"{"error": "Invalid title"}"#),
        ),
        (
            FailureKind::PictureUpload,
            CapturedResponse::new(403, r#"{"Description": "Forbidden"}"#),
        ),
        (
            FailureKind::VideoUpload,
            CapturedResponse::new(500, "upstream exploded"),
        ),
        (
            FailureKind::ApiRateLimitExceeded,
            CapturedResponse::new(429, "Too Many Requests")
                .with_header("x-ratelimit-reset", "60")?,
        ),
    ];

    println!("Failures:");
    for (kind, resp) in responses {
        if let Err(failure) = ensure_success(resp, kind, "request failed") {
            report(&VimeoError::from(failure));
        }
    }

    println!("Local failure:");
    report(&VimeoError::from(ObjectLoadFailure::new(
        "missing required field 'name'",
    )));

    Ok(())
}
