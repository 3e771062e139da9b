//! API error types

use std::time::Duration;

use super::FieldValidationError;

/// Errors returned by a resource API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the backend.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message supplied by the server, if any.
        message: Option<String>,
        /// Field-level validation messages supplied by the server.
        field_errors: Vec<FieldValidationError>,
    },

    /// Rejection that did not come from an HTTP response (e.g. a test double).
    #[error("{message}")]
    Rejected {
        /// Message supplied by the collaborator.
        message: String,
    },

    /// Network error during the API call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse the API response.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates a new HTTP error without server details.
    pub fn http(status: u16) -> Self {
        Self::Http {
            status,
            message: None,
            field_errors: Vec::new(),
        }
    }

    /// Creates a new HTTP error carrying a server message.
    pub fn http_with_message(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: Some(message.into()),
            field_errors: Vec::new(),
        }
    }

    /// Creates a rejection carrying only a message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: None,
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the message the server attached to the failure, if any.
    ///
    /// Transport failures never carry a server message; callers fall back to
    /// a generic message for them.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http {
                message: Some(message),
                ..
            } => Some(message),
            Self::Http { field_errors, .. } => field_errors.first().map(|e| e.message.as_str()),
            Self::Rejected { message } => Some(message),
            _ => None,
        }
    }

    /// Returns the field-level validation messages, if any.
    pub fn field_errors(&self) -> &[FieldValidationError] {
        match self {
            Self::Http { field_errors, .. } => field_errors,
            _ => &[],
        }
    }

    /// Returns `true` if this error came from the transport rather than the server.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }
}
