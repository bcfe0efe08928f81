//! # Login Form
//!
//! Client-side login form handler: reads an identifier and a secret from two
//! input fields, posts them as JSON to `/oauth2/login` and reports whatever
//! comes back.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Payload/response types and the page, transport and reporter traits
//! - **Application Layer** ([`application`]) - The click handler and its page binding
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest transport, in-memory page, reporters
//!
//! ## Behavior
//!
//! - One request per click, no in-flight guard, no retry
//! - Cookies included, redirects followed
//! - Responses are reported regardless of HTTP status; network and JSON
//!   failures are reported and swallowed
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use login_form::prelude::*;
//!
//! let page = MemoryDocument::new()
//!     .with_button(BUTTON_ID)
//!     .with_input(IDENTIFIER_INPUT_ID, "alice@example.com")
//!     .with_input(SECRET_INPUT_ID, "hunter2");
//!
//! let transport = HttpLoginTransport::from_base_url("http://localhost:8080")?;
//! bind_login_form(&page, Arc::new(transport), Arc::new(TracingReporter::new()))?;
//!
//! page.button(BUTTON_ID).unwrap().click();
//! ```
//!
//! ## Configuration
//!
//! The CLI reads its settings from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LoginError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{LoginFormHandler, bind_login_form};
    pub use crate::domain::entities::{CredentialInput, LoginRequest, LoginResponse};
    pub use crate::domain::{
        BUTTON_ID, Document, IDENTIFIER_INPUT_ID, LOGIN_PATH, LoginTransport, RawResponse,
        Report, Reporter, SECRET_INPUT_ID, TextField,
    };
    pub use crate::error::LoginError;
    pub use crate::infrastructure::http::HttpLoginTransport;
    pub use crate::infrastructure::page::{MemoryButton, MemoryDocument, MemoryInput};
    pub use crate::infrastructure::report::{ChannelReporter, TracingReporter};
}
