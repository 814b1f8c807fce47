//! Translation of non-2xx responses into [`CampusError`].

use campus_core::error::CampusError;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Error envelope used by the API: `message` is a string or, for
/// validation failures, a list of strings.
#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Extracts a human-readable message from an error body.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
    let from_json = parsed.and_then(|envelope| {
        let message = match envelope.message {
            Some(Value::String(s)) => Some(s),
            Some(Value::Array(items)) => {
                let parts: Vec<String> = items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect();
                (!parts.is_empty()).then(|| parts.join("; "))
            }
            _ => None,
        };
        message.or(envelope.error)
    });

    match from_json {
        Some(message) if !message.trim().is_empty() => message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string(),
    }
}

/// Maps an HTTP status and body to the client's error taxonomy.
pub(crate) fn map_http_error(status: StatusCode, resource: &str, body: &str) -> CampusError {
    let message = error_message(status, body);
    match status {
        StatusCode::UNAUTHORIZED => CampusError::authentication(message),
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            CampusError::validation(message)
        }
        StatusCode::NOT_FOUND => CampusError::not_found(resource),
        other => CampusError::request(Some(other.as_u16()), message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_is_authentication() {
        let err = map_http_error(StatusCode::UNAUTHORIZED, "/auth/me", r#"{"message":"Unauthorized"}"#);
        assert_eq!(err, CampusError::authentication("Unauthorized"));
    }

    #[test]
    fn test_validation_statuses() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::CONFLICT,
            StatusCode::UNPROCESSABLE_ENTITY,
        ] {
            assert!(map_http_error(status, "/users", "{}").is_validation());
        }
    }

    #[test]
    fn test_not_found_names_resource() {
        let err = map_http_error(StatusCode::NOT_FOUND, "/courses/99", "");
        assert_eq!(err, CampusError::not_found("/courses/99"));
    }

    #[test]
    fn test_other_statuses_are_request_errors() {
        let err = map_http_error(StatusCode::FORBIDDEN, "/courses", r#"{"message":"Forbidden resource"}"#);
        assert_eq!(err, CampusError::request(Some(403), "Forbidden resource"));

        let err = map_http_error(StatusCode::INTERNAL_SERVER_ERROR, "/courses", "");
        assert_eq!(err, CampusError::request(Some(500), "Internal Server Error"));
    }

    #[test]
    fn test_message_list_is_joined() {
        let body = r#"{"statusCode":400,"message":["email must be an email","password is too short"],"error":"Bad Request"}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, body),
            "email must be an email; password is too short"
        );
    }

    #[test]
    fn test_falls_back_to_error_field_then_raw_body() {
        assert_eq!(
            error_message(StatusCode::CONFLICT, r#"{"error":"Conflict"}"#),
            "Conflict"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream timed out\n"),
            "upstream timed out"
        );
    }
}
