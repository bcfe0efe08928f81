//! reqwest-backed login transport.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::redirect::Policy;
use tracing::debug;
use url::Url;

use crate::domain::{LoginTransport, RawResponse};
use crate::error::LoginError;

const APPLICATION_JSON: &str = "application/json";

/// Redirect limit browsers apply to `fetch` with `redirect: "follow"`.
pub const DEFAULT_MAX_REDIRECTS: usize = 20;

/// Posts JSON the way a browser `fetch` with `credentials: "include"` and
/// `redirect: "follow"` would.
///
/// - Cookies set by any response are kept in a jar and sent on later requests
/// - Redirects are followed up to the configured limit
/// - No request timeout is configured
#[derive(Debug, Clone)]
pub struct HttpLoginTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpLoginTransport {
    /// Creates a transport resolving paths against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Config`] if the HTTP client cannot be built.
    pub fn new(base_url: Url, max_redirects: usize) -> Result<Self, LoginError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(Policy::limited(max_redirects))
            .build()?;

        debug!(base_url = %base_url, max_redirects, "HTTP login transport created");

        Ok(Self { client, base_url })
    }

    /// Parses `base_url` and creates a transport with the default redirect limit.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Config`] if the URL is invalid.
    pub fn from_base_url(base_url: &str) -> Result<Self, LoginError> {
        let base_url = Url::parse(base_url).map_err(|e| LoginError::Config(e.to_string()))?;
        Self::new(base_url, DEFAULT_MAX_REDIRECTS)
    }

    fn endpoint(&self, path: &str) -> Result<Url, LoginError> {
        self.base_url
            .join(path)
            .map_err(|e| LoginError::Config(format!("cannot resolve {path}: {e}")))
    }
}

#[async_trait]
impl LoginTransport for HttpLoginTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, LoginError> {
        let url = self.endpoint(path)?;

        let response = self
            .client
            .post(url)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        debug!(status, url = %response.url(), "Login endpoint answered");

        let bytes = response.bytes().await?;

        Ok(RawResponse::new(status, bytes.to_vec()))
    }
}
