//! Failure taxonomy for remote calls.
//!
//! DESIGN
//! ======
//! Callers must be able to tell a transport failure (no response at all)
//! from an HTTP error response, because only the latter carries a
//! server-provided message suitable for inline display.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Error returned by every function in the `net` modules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, aborted, ...).
    Network(String),
    /// A response was received with a non-2xx status.
    Http { status: u16, message: String },
}

impl ApiError {
    /// True when the response signaled an invalid or expired session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }

    /// Error used on non-browser builds where no HTTP stack is available.
    pub(crate) fn unavailable() -> Self {
        ApiError::Network("not available outside the browser".to_owned())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "network error: {detail}"),
            ApiError::Http { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Failure convention: non-2xx bodies carry a JSON `message` field.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extract the display message from an error response body, falling back
/// to a generic status line when the body has no usable `message`.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("request failed with status {status}"))
}
