use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::uber::actionable::{lookup_by_signature, ActionableError};

/// Custom error type for Uber API operations
#[derive(Debug)]
pub enum UberError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned a non-success status without a structured body
    Api { status: u16, message: String },
    /// API returned a structured `{"errors": [...]}` body
    Structured(ApiError),
    /// Locally classified error with remediation guidance
    Actionable(&'static ActionableError),
    /// Request rejected before any network activity
    InvalidInput(String),
    /// Request URL could not be constructed
    InvalidUrl(String),
    /// No credential configured
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl UberError {
    /// Decode a non-success response into an error
    ///
    /// Bodies too short to be meaningful JSON produce a generic coded error
    /// carrying the status line. Bodies that decode to a non-empty
    /// `{"meta", "errors"}` document produce [`UberError::Structured`];
    /// anything else keeps the raw body text as the message.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if body.len() < api::MIN_STRUCTURED_ERROR_LEN {
            return UberError::Api {
                status: status.as_u16(),
                message: status_line(status),
            };
        }

        match serde_json::from_slice::<ApiError>(body) {
            Ok(structured) if !structured.is_empty() => UberError::Structured(structured),
            _ => UberError::Api {
                status: status.as_u16(),
                message: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }

    /// HTTP status associated with the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            UberError::Http(e) => e.status().map(|s| s.as_u16()),
            UberError::Api { status, .. } => Some(*status),
            UberError::Structured(e) => e.errors.first().map(|entry| entry.status),
            UberError::Actionable(ae) => Some(ae.status),
            _ => None,
        }
    }

    /// Pre-classified guidance for this error, if its signature is known
    pub fn actionable(&self) -> Option<&'static ActionableError> {
        match self {
            UberError::Structured(e) => e.actionable(),
            UberError::Actionable(ae) => Some(ae),
            _ => None,
        }
    }

    /// Whether the failed call may succeed if issued again unchanged
    pub fn is_retryable(&self) -> bool {
        self.actionable().map(|ae| ae.retryable).unwrap_or(false)
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

impl fmt::Display for UberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UberError::Http(e) => write!(f, "HTTP request failed: {}", e),
            UberError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            UberError::Structured(e) => write!(f, "{}", e),
            UberError::Actionable(ae) => write!(f, "{}", ae),
            UberError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            UberError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            UberError::TokenNotFound(msg) => write!(f, "{}", msg),
            UberError::Credentials(msg) => write!(f, "{}", msg),
            UberError::Json(msg) => write!(f, "JSON error: {}", msg),
            UberError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for UberError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UberError::Http(e) => Some(e),
            UberError::Structured(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UberError {
    fn from(err: reqwest::Error) -> Self {
        UberError::Http(err)
    }
}

impl From<serde_json::Error> for UberError {
    fn from(err: serde_json::Error) -> Self {
        UberError::Json(err.to_string())
    }
}

impl From<std::io::Error> for UberError {
    fn from(err: std::io::Error) -> Self {
        UberError::Credentials(err.to_string())
    }
}

/// Structured error body returned by the API
///
/// ```json
/// {"meta": {}, "errors": [{"status": 404, "code": "unknown_place_id", "title": "..."}]}
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ApiError {
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<StatusCodedError>,
}

impl ApiError {
    /// True when the body decoded to nothing useful
    fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.meta.as_ref().map_or(true, |m| m.is_null())
    }

    /// First entry whose code is a known signature
    pub fn actionable(&self) -> Option<&'static ActionableError> {
        self.errors
            .iter()
            .find_map(|entry| lookup_by_signature(&entry.code))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// One `(status, code, title)` entry of a structured error body
///
/// In the wire format `status` is the numeric HTTP status and `code` is
/// the machine-readable signature.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCodedError {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub title: String,
}

impl fmt::Display for StatusCodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Result type alias for Uber operations
pub type Result<T> = std::result::Result<T, UberError>;
