//! Element abstractions the login form binds to.
//!
//! The handler never looks elements up on its own; it receives handles. A
//! [`Document`] is only consulted once, when the form is bound.

use std::sync::Arc;

/// Id of the submit control.
pub const BUTTON_ID: &str = "button";

/// Id of the identifier (email) input.
pub const IDENTIFIER_INPUT_ID: &str = "email-input";

/// Id of the secret (password) input.
pub const SECRET_INPUT_ID: &str = "password-input";

/// Listener invoked on every click of a [`Clickable`].
pub type ClickListener = Arc<dyn Fn() + Send + Sync>;

/// A text input whose current value can be read at any time.
#[cfg_attr(test, mockall::automock)]
pub trait TextField: Send + Sync {
    /// Returns the current text, exactly as entered.
    fn value(&self) -> String;
}

/// A control that dispatches click events to registered listeners.
pub trait Clickable: Send + Sync {
    fn add_click_listener(&self, listener: ClickListener);
}

/// Element lookup by id.
///
/// Both lookups return `None` when the id is absent or names an element of
/// another kind.
pub trait Document {
    fn text_field(&self, id: &str) -> Option<Arc<dyn TextField>>;

    fn clickable(&self, id: &str) -> Option<Arc<dyn Clickable>>;
}
