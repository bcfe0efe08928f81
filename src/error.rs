//! Error type shared by the login form, its transport and its reporters.

/// Errors produced while binding the form or performing a login attempt.
///
/// Only [`LoginError::MissingElement`] and [`LoginError::Config`] surface to
/// callers during setup. Every other variant ends its journey in a
/// [`Reporter`](crate::domain::Reporter): it is reported and swallowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid JSON response: {0}")]
    Parse(String),

    #[error("Failed to encode login payload: {0}")]
    Encode(String),

    #[error("Invalid transport configuration: {0}")]
    Config(String),
}

impl LoginError {
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement(id.into())
    }

    /// Returns true for failures that happen after the click, i.e. the ones
    /// the handler swallows.
    pub fn is_attempt_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Parse(_) | Self::Encode(_))
    }
}

impl From<reqwest::Error> for LoginError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            Self::Config(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// Decoding direction only; payload encoding maps to [`LoginError::Encode`]
/// explicitly.
impl From<serde_json::Error> for LoginError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
