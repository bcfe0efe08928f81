//! Domain layer: login data and the seams the form handler talks through.
//!
//! - [`entities`] - Credentials, payload and response
//! - [`page`] - Element traits and the fixed element ids
//! - [`transport`] - Outbound HTTP trait and the login path
//! - [`reporter`] - Diagnostic log trait
//!
//! Nothing here depends on the infrastructure layer. Mock implementations of
//! the traits are generated with `mockall` under `cfg(test)`.

pub mod entities;
pub mod page;
pub mod reporter;
pub mod transport;

pub use page::{
    BUTTON_ID, ClickListener, Clickable, Document, IDENTIFIER_INPUT_ID, SECRET_INPUT_ID,
    TextField,
};
pub use reporter::{Report, Reporter};
pub use transport::{LOGIN_PATH, LoginTransport, RawResponse};

#[cfg(test)]
pub use page::MockTextField;
#[cfg(test)]
pub use reporter::MockReporter;
#[cfg(test)]
pub use transport::MockLoginTransport;
