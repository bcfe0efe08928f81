//! Login response as seen by the form handler.

use serde_json::Value;

/// A parsed response from the login endpoint.
///
/// The body is an arbitrary JSON value; no field is read or validated. The
/// status is kept for logging only and does not affect how the response is
/// treated: a 401 with a JSON error body is still a response, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub status: u16,
    pub body: Value,
}

impl LoginResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Compact JSON rendering of the body, keys in the order the server sent them.
    pub fn to_json_string(&self) -> String {
        self.body.to_string()
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
