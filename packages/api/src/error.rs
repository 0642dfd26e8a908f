//! # Error taxonomy for backend requests
//!
//! The backend reports failures as JSON `{code, message}` payloads, either
//! bare or wrapped in a `detail` field. Known codes become dedicated
//! variants so forms can map them to field-specific messages; everything
//! else degrades to a generic backend or network error. There is no retry
//! anywhere — a failed request is terminal for that attempt.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend code `INVALID_CREDENTIALS` (wrong email or password).
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Backend code `EMAIL_EXISTS` (registration with a taken email).
    #[error("Email already registered")]
    EmailExists,

    /// The requested record does not exist (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// Any other backend rejection.
    #[error("{message}")]
    Backend {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// The backend error code, when one was provided.
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::InvalidCredentials => Some("INVALID_CREDENTIALS"),
            ApiError::EmailExists => Some("EMAIL_EXISTS"),
            ApiError::Backend { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Map a non-success HTTP response to a typed error.
    pub fn from_response(status: u16, body: &str) -> Self {
        let (code, message) = parse_error_body(body);

        match code.as_deref() {
            Some("INVALID_CREDENTIALS") => return ApiError::InvalidCredentials,
            Some("EMAIL_EXISTS") => return ApiError::EmailExists,
            _ => {}
        }

        let message = message.unwrap_or_else(|| format!("request failed with status {status}"));
        if status == 404 {
            ApiError::NotFound(message)
        } else {
            ApiError::Backend {
                status,
                code,
                message,
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Extract `code` and `message` from an error body.
///
/// Accepts `{code, message}`, `{detail: {code, message}}`, and
/// `{detail: "message"}` shapes; anything else yields neither.
fn parse_error_body(body: &str) -> (Option<String>, Option<String>) {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return (None, None);
    };

    let payload = match value.get("detail") {
        Some(detail @ serde_json::Value::Object(_)) => detail,
        Some(serde_json::Value::String(s)) => return (None, Some(s.clone())),
        _ => &value,
    };

    let code = payload
        .get("code")
        .and_then(|c| c.as_str())
        .map(str::to_string);
    let message = payload
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string);
    (code, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_code_payload() {
        let err = ApiError::from_response(
            401,
            r#"{"code":"INVALID_CREDENTIALS","message":"Invalid email or password"}"#,
        );
        assert!(matches!(err, ApiError::InvalidCredentials));
        assert_eq!(err.code(), Some("INVALID_CREDENTIALS"));
    }

    #[test]
    fn test_detail_wrapped_payload() {
        let err = ApiError::from_response(
            409,
            r#"{"detail":{"code":"EMAIL_EXISTS","message":"An account with this email already exists"}}"#,
        );
        assert!(matches!(err, ApiError::EmailExists));
    }

    #[test]
    fn test_detail_string_payload() {
        let err = ApiError::from_response(422, r#"{"detail":"title must not be empty"}"#);
        match err {
            ApiError::Backend { status, code, message } => {
                assert_eq!(status, 422);
                assert!(code.is_none());
                assert_eq!(message, "title must not be empty");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_code_stays_generic() {
        let err = ApiError::from_response(
            403,
            r#"{"detail":{"code":"SOMETHING_ELSE","message":"no"}}"#,
        );
        match &err {
            ApiError::Backend { code, .. } => assert_eq!(code.as_deref(), Some("SOMETHING_ELSE")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "no");
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let err = ApiError::from_response(
            404,
            r#"{"detail":{"code":"TASK_NOT_FOUND","message":"Task not found"}}"#,
        );
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_non_json_body_falls_back_to_status() {
        let err = ApiError::from_response(500, "Internal Server Error");
        assert_eq!(err.to_string(), "request failed with status 500");
    }
}
