//! Outbound HTTP seam used by the login form.

use crate::error::LoginError;
use async_trait::async_trait;

/// Path the login payload is posted to.
pub const LOGIN_PATH: &str = "/oauth2/login";

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a JSON body to the server and hands back whatever came back.
///
/// Implementations must send `Accept: application/json` and
/// `Content-Type: application/json`, include ambient cookies and follow
/// redirects. They must not interpret the status code.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpLoginTransport`] - reqwest client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginTransport: Send + Sync {
    /// Posts `body` to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Network`] if the request cannot be completed or
    /// the body cannot be read.
    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, LoginError>;
}
