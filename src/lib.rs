//! # Vimeo SDK errors
//!
//! Typed failures for the [Vimeo](https://developer.vimeo.com) API upload and
//! activation workflows. A failed HTTP response becomes an [`ApiFailure`]
//! tagged with the [`FailureKind`] of the step that produced it, carrying a
//! ready-to-display message and the status code.
//!
//! ## Quick start
//!
//! ```no_run
//! use vimeo::{ensure_success, ApiResponse, CapturedResponse, FailureKind};
//!
//! # async fn example(http: reqwest::Client) -> vimeo::Result<()> {
//! let resp = http.post("https://api.vimeo.com/me/videos").send().await?;
//! let resp = CapturedResponse::capture(resp).await?;
//!
//! match ensure_success(resp, FailureKind::UploadTicketCreation, "ticket failed") {
//!     Ok(ticket) => println!("ticket: {}", ticket.status_code()),
//!     Err(failure) if failure.is_rate_limited() => eprintln!("{}", failure.message()),
//!     Err(failure) => return Err(failure.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Message policy
//!
//! The message is the body's `error` field, else its `Description` field,
//! else the raw body text. Rate-limit failures also mention when the limit
//! resets, taken from the `x-ratelimit-reset` header.

mod errors;
mod message;
mod response;

pub use errors::{ApiFailure, FailureKind, ObjectLoadFailure, Result, VimeoError};
pub use message::{
    derive_message, rate_limit_message, RATE_LIMIT_GUIDELINES, RATE_LIMIT_RESET_HEADER,
};
pub use response::{ensure_success, ApiResponse, CapturedResponse};
