//! Data exchanged between the form, the transport and the reporters.
//!
//! - [`CredentialInput`] - Values read from the form fields on click
//! - [`LoginRequest`] - JSON payload posted to the login endpoint
//! - [`LoginResponse`] - Parsed response body plus HTTP status

pub mod credentials;
pub mod response;

pub use credentials::{CredentialInput, LoginRequest};
pub use response::LoginResponse;
