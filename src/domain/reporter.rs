//! Diagnostic log the login form reports outcomes to.

use crate::domain::entities::LoginResponse;
use crate::error::LoginError;

/// Outcome of a single login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Response(LoginResponse),
    Failure(LoginError),
}

impl Report {
    /// Compact JSON body for responses, the error message for failures.
    pub fn message(&self) -> String {
        match self {
            Report::Response(response) => response.to_json_string(),
            Report::Failure(error) => error.to_string(),
        }
    }
}

/// Receives the outcome of every login attempt.
///
/// Exactly one method is called per attempt. Implementations must not panic
/// or block; nothing they do is observed by the handler.
///
/// # Implementations
///
/// - [`crate::infrastructure::report::TracingReporter`] - writes to `tracing`
/// - [`crate::infrastructure::report::ChannelReporter`] - forwards to a channel
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    fn response(&self, response: &LoginResponse);

    fn failure(&self, error: &LoginError);
}
