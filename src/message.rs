use crate::response::ApiResponse;

/// Where to read about the API rate limit.
pub const RATE_LIMIT_GUIDELINES: &str = "https://developer.vimeo.com/guidelines/rate-limiting";

/// Header carrying the time at which the rate limit resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Pull a non-empty string out of a JSON object, or `None`.
fn json_message<'a>(val: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    val.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
}

/// Derive a human-readable message from a failed response.
///
/// Prefers the body's `error` field, then its `Description` field, and falls
/// back to the raw body text. A body that is not JSON is not an error here;
/// it just goes straight to the fallback.
pub fn derive_message<R: ApiResponse + ?Sized>(response: &R) -> String {
    let parsed_body = response.json().ok();

    parsed_body
        .as_ref()
        .and_then(|b| json_message(b, "error").or_else(|| json_message(b, "Description")))
        .unwrap_or_else(|| response.text())
        .to_string()
}

/// [`derive_message`], plus the reset time and guidelines link when the
/// response carries an `x-ratelimit-reset` header.
pub fn rate_limit_message<R: ApiResponse + ?Sized>(response: &R) -> String {
    let message = derive_message(response);

    match response
        .header(RATE_LIMIT_RESET_HEADER)
        .filter(|v| !v.is_empty())
    {
        Some(reset) => format!(
            "{message} \n limit will reset on: {reset}.\n About this limit: {RATE_LIMIT_GUIDELINES}"
        ),
        None => message,
    }
}
