//! HTTP transport implementations.

pub mod reqwest_transport;

pub use reqwest_transport::{DEFAULT_MAX_REDIRECTS, HttpLoginTransport};
