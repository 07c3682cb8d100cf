//! Error types for the panel.

use hospitality_seeker::SeekerError;
use thiserror::Error;

use crate::views::ValidationError;

/// Errors that can occur while talking to the API or driving a screen.
#[derive(Debug, Error)]
pub enum PanelError {
    /// No valid session; the user has to log in first.
    #[error("not logged in: run `hospitality login`")]
    Unauthenticated,

    /// The server answered with a non-success status.
    #[error("{method} {url} returned {status}{}", body_suffix(.body))]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    /// The response body did not have the documented shape.
    #[error("unexpected response from {endpoint}: {message}")]
    Envelope { endpoint: String, message: String },

    /// Transport-level failure (connection, timeout, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A record looked up by id does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    /// Client-side form validation failed.
    #[error("validation failed: {}", join_validation(.0))]
    Validation(Vec<ValidationError>),

    #[error("{0}")]
    Seeker(#[from] SeekerError),

    #[error("render failed: {0}")]
    Render(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PanelError {
    /// Returns `true` if the error means the session is missing or expired.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, PanelError::Unauthenticated)
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_unauthenticated() {
            2
        } else {
            1
        }
    }
}

impl From<minijinja::Error> for PanelError {
    fn from(err: minijinja::Error) -> Self {
        PanelError::Render(err.to_string())
    }
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

fn join_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for panel operations.
pub type Result<T> = std::result::Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_body() {
        let err = PanelError::Status {
            method: "GET".into(),
            url: "http://localhost/api/v1/accommodation/panel".into(),
            status: 500,
            body: "boom\n".into(),
        };
        assert_eq!(
            err.to_string(),
            "GET http://localhost/api/v1/accommodation/panel returned 500: boom"
        );
    }

    #[test]
    fn status_display_without_body() {
        let err = PanelError::Status {
            method: "DELETE".into(),
            url: "u".into(),
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "DELETE u returned 404");
    }

    #[test]
    fn not_found_names_record() {
        let err = PanelError::NotFound {
            kind: "hostel",
            id: "h9".into(),
        };
        assert_eq!(err.to_string(), "hostel 'h9' not found");
    }

    #[test]
    fn exit_codes() {
        assert_eq!(PanelError::Unauthenticated.exit_code(), 2);
        assert_eq!(PanelError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn validation_lists_fields() {
        let err = PanelError::Validation(vec![
            ValidationError::new("room_count", "must be at least 1"),
            ValidationError::new("warden_email", "invalid email address"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: room_count: must be at least 1; warden_email: invalid email address"
        );
    }
}
