//! Application layer: the login form handler and its page binding.
//!
//! - [`form_handler::LoginFormHandler`] - reads the fields and submits one request per click
//! - [`binding::bind_login_form`] - resolves element ids and wires the click listener

pub mod binding;
pub mod form_handler;

pub use binding::bind_login_form;
pub use form_handler::LoginFormHandler;
