//! Click handler that turns form input into one login request.

use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::entities::{CredentialInput, LoginRequest, LoginResponse};
use crate::domain::{LOGIN_PATH, LoginTransport, Reporter, TextField};
use crate::error::LoginError;

/// Reads the two credential fields and posts them to the login endpoint.
///
/// Every click is independent: there is no in-flight guard, no debouncing and
/// no retry. The outcome of each attempt goes to the [`Reporter`] and is
/// otherwise dropped.
pub struct LoginFormHandler<T: LoginTransport, R: Reporter> {
    identifier: Arc<dyn TextField>,
    secret: Arc<dyn TextField>,
    transport: Arc<T>,
    reporter: Arc<R>,
}

impl<T: LoginTransport, R: Reporter> Clone for LoginFormHandler<T, R> {
    fn clone(&self) -> Self {
        Self {
            identifier: Arc::clone(&self.identifier),
            secret: Arc::clone(&self.secret),
            transport: Arc::clone(&self.transport),
            reporter: Arc::clone(&self.reporter),
        }
    }
}

impl<T, R> LoginFormHandler<T, R>
where
    T: LoginTransport + 'static,
    R: Reporter + 'static,
{
    /// Creates a handler over explicit element handles.
    ///
    /// # Arguments
    ///
    /// - `identifier` - the email/username input
    /// - `secret` - the password input
    /// - `transport` - sends the request
    /// - `reporter` - receives the outcome of every attempt
    pub fn new(
        identifier: Arc<dyn TextField>,
        secret: Arc<dyn TextField>,
        transport: Arc<T>,
        reporter: Arc<R>,
    ) -> Self {
        Self {
            identifier,
            secret,
            transport,
            reporter,
        }
    }

    /// Reads the current field values verbatim.
    pub fn read_credentials(&self) -> CredentialInput {
        CredentialInput::new(self.identifier.value(), self.secret.value())
    }

    /// Handles one click.
    ///
    /// Field values are read immediately; the request runs on a spawned task
    /// so the caller never waits on the network. The returned handle may be
    /// dropped. Must be called from within a Tokio runtime.
    pub fn on_click(&self) -> JoinHandle<()> {
        let input = self.read_credentials();
        let handler = self.clone();

        tokio::spawn(async move {
            // Already reported
            let _ = handler.submit(input).await;
        })
    }

    /// Performs one login attempt and reports its outcome.
    ///
    /// The HTTP status is not checked: any response with a JSON body is
    /// reported as a response.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Network`] if the request fails,
    /// [`LoginError::Parse`] if the body is not JSON, and
    /// [`LoginError::Encode`] if the payload cannot be serialized. The error
    /// has already been passed to the reporter when this returns.
    pub async fn submit(&self, input: CredentialInput) -> Result<LoginResponse, LoginError> {
        let result = self.attempt(input).await;

        match &result {
            Ok(response) => self.reporter.response(response),
            Err(e) => self.reporter.failure(e),
        }

        result
    }

    async fn attempt(&self, input: CredentialInput) -> Result<LoginResponse, LoginError> {
        let payload = LoginRequest::from(input);
        let body =
            serde_json::to_string(&payload).map_err(|e| LoginError::Encode(e.to_string()))?;

        debug!(payload = %payload.masked(), path = LOGIN_PATH, "Sending login request");

        let raw = self.transport.post_json(LOGIN_PATH, body).await?;

        debug!(status = raw.status, bytes = raw.body.len(), "Login response received");

        let body: Value = serde_json::from_slice(&raw.body)?;

        Ok(LoginResponse::new(raw.status, body))
    }
}
