//! Failure taxonomy for gateway calls.

use serde::Deserialize;
use thiserror::Error;

/// What a backend call can fail with.
///
/// `Display` is the user-facing message; views render errors with
/// `to_string()` and nothing else.
#[derive(Clone, Debug, Error)]
pub enum ApiError {
    /// Transport failure, no response received.
    #[error("Could not reach the server. Check your connection and try again.")]
    Network(String),
    /// The backend rejected the credentials or the bearer token. Observed
    /// globally by the bootstrap hook, and still returned to the caller.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    /// The backend answered with an error payload.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("The server returned an unexpected response.")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Error payloads carry the message in an `error` field.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Map a non-success response to an [`ApiError`].
///
/// 4xx keeps the server-provided message when one is present; 5xx is
/// always reduced to a generic message.
pub(crate) fn failure_from_status(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let server_message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.is_empty());
    let message = if status >= 500 {
        "Something went wrong on our end. Please try again later.".to_string()
    } else {
        server_message.unwrap_or_else(|| format!("Request failed ({status})"))
    };
    ApiError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_tagged_regardless_of_body() {
        assert!(failure_from_status(401, r#"{"error":"Token has expired"}"#).is_unauthorized());
        assert!(failure_from_status(401, "").is_unauthorized());
    }

    #[test]
    fn validation_failures_keep_the_server_message() {
        let error = failure_from_status(400, r#"{"error":"Only 3 tickets available"}"#);
        assert_eq!(error.to_string(), "Only 3 tickets available");
    }

    #[test]
    fn malformed_error_bodies_fall_back_to_a_generic_message() {
        let error = failure_from_status(404, "<html>not json</html>");
        assert_eq!(error.to_string(), "Request failed (404)");
    }

    #[test]
    fn server_errors_never_leak_the_body() {
        let error = failure_from_status(500, r#"{"error":"traceback: ..."}"#);
        assert!(error.to_string().contains("try again later"));
    }
}
