//! Error types for the Campus console.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Campus workspace.
///
/// The first four variants form the taxonomy surfaced by the API client.
/// The remaining variants cover local concerns (token storage, configuration,
/// role checks) that never come from the remote API.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampusError {
    /// Missing, expired or rejected credential (HTTP 401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Request body rejected by the API (HTTP 400, 409, 422)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The identifier does not resolve on the API (HTTP 404)
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Any other non-2xx response or network failure
    #[error(
        "Request failed{}: {message}",
        .status.map(|s| format!(" with status {s}")).unwrap_or_default()
    )]
    Request { status: Option<u16>, message: String },

    /// Durable token storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The signed-in viewer lacks the role required for an action
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CampusError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates a Request error
    pub fn request(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a PermissionDenied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an Authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Request error
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request { .. })
    }

    /// HTTP status attached to the error, when one is known.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication(_) => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Request { status, .. } => *status,
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CampusError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for CampusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CampusError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CampusError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Transport-level failures (connection refused, timeout, body decoding).
///
/// Status-bearing responses are mapped by the API client before they reach
/// this conversion, so anything arriving here is a `Request` error.
impl From<reqwest::Error> for CampusError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CampusError>`.
pub type Result<T> = std::result::Result<T, CampusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_display_with_status() {
        let err = CampusError::request(Some(503), "upstream unavailable");
        assert_eq!(
            err.to_string(),
            "Request failed with status 503: upstream unavailable"
        );
    }

    #[test]
    fn test_request_error_display_without_status() {
        let err = CampusError::request(None, "connection refused");
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }

    #[test]
    fn test_predicates() {
        assert!(CampusError::authentication("expired").is_authentication());
        assert!(CampusError::validation("email taken").is_validation());
        assert!(CampusError::not_found("/courses/9").is_not_found());
        assert!(CampusError::request(Some(500), "boom").is_request());
        assert!(!CampusError::storage("disk full").is_request());
    }

    #[test]
    fn test_status_lookup() {
        assert_eq!(CampusError::authentication("x").status(), Some(401));
        assert_eq!(CampusError::not_found("/x").status(), Some(404));
        assert_eq!(CampusError::request(Some(502), "x").status(), Some(502));
        assert_eq!(CampusError::validation("x").status(), None);
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let converted: CampusError = err.into();
        assert!(matches!(
            converted,
            CampusError::Serialization { ref format, .. } if format == "JSON"
        ));
    }
}
