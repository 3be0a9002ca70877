//! Error model for calls against the school backend.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports failures as JSON `{ "message": ... }` (sometimes
//! `{ "error": ... }`). Anything else is an unexpected failure and only the
//! status code is kept. Screens render the `Display` text directly.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single request against the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx with a readable JSON message from the backend.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Non-2xx without a usable message.
    #[error("request failed with status {status}")]
    Status { status: u16 },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Caller tried to reach an endpoint that needs a session without one.
    #[error("not signed in")]
    Unauthenticated,
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body text.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match extract_message(body) {
            Some(message) => Self::Server { status, message },
            None => Self::Status { status },
        }
    }

    /// HTTP status, when the failure came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Status { status } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Unauthenticated => None,
        }
    }

    /// True for 401/403 responses.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401 | 403)) || matches!(self, Self::Unauthenticated)
    }
}

/// Pull a human-readable message out of a JSON error body.
#[must_use]
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .into_iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}
