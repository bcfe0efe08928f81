//! Infrastructure layer for external integrations.
//!
//! This layer implements the traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest transport for the login endpoint
//! - [`page`] - in-memory page elements
//! - [`report`] - tracing and channel reporters

pub mod http;
pub mod page;
pub mod report;
