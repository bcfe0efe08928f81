//! Credential input and the login request payload built from it.

use serde::Serialize;
use std::fmt;

/// The identifier/secret pair read from the two form fields at click time.
///
/// Values are taken verbatim: no trimming, no validation. Empty strings are
/// valid input and are sent as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialInput {
    pub identifier: String,
    pub secret: String,
}

impl CredentialInput {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for CredentialInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialInput")
            .field("identifier", &self.identifier)
            .field("secret", &"***")
            .finish()
    }
}

/// JSON body posted to the login endpoint.
///
/// Serializes to exactly `{"username": ..., "password": ...}`, in that order.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Renders the payload for logs with the password replaced by `***`.
    pub fn masked(&self) -> String {
        serde_json::json!({
            "username": self.username,
            "password": "***",
        })
        .to_string()
    }
}

impl From<CredentialInput> for LoginRequest {
    fn from(input: CredentialInput) -> Self {
        Self {
            username: input.identifier,
            password: input.secret,
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
