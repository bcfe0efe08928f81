//! Binds a [`LoginFormHandler`] to the elements of a page.

use std::sync::Arc;

use tracing::info;

use super::form_handler::LoginFormHandler;
use crate::domain::{
    BUTTON_ID, Document, IDENTIFIER_INPUT_ID, LoginTransport, Reporter, SECRET_INPUT_ID,
};
use crate::error::LoginError;

/// Looks up the login elements once and registers the click listener.
///
/// Elements are resolved in the order button, identifier input, secret input.
/// The returned handler is the same one the button dispatches to, so callers
/// may also drive it directly.
///
/// # Errors
///
/// Returns [`LoginError::MissingElement`] naming the first id that could not
/// be resolved. No listener is registered in that case.
pub fn bind_login_form<D, T, R>(
    document: &D,
    transport: Arc<T>,
    reporter: Arc<R>,
) -> Result<LoginFormHandler<T, R>, LoginError>
where
    D: Document + ?Sized,
    T: LoginTransport + 'static,
    R: Reporter + 'static,
{
    let button = document
        .clickable(BUTTON_ID)
        .ok_or_else(|| LoginError::missing_element(BUTTON_ID))?;
    let identifier = document
        .text_field(IDENTIFIER_INPUT_ID)
        .ok_or_else(|| LoginError::missing_element(IDENTIFIER_INPUT_ID))?;
    let secret = document
        .text_field(SECRET_INPUT_ID)
        .ok_or_else(|| LoginError::missing_element(SECRET_INPUT_ID))?;

    let handler = LoginFormHandler::new(identifier, secret, transport, reporter);

    let on_click = handler.clone();
    button.add_click_listener(Arc::new(move || {
        on_click.on_click();
    }));

    info!(
        button = BUTTON_ID,
        identifier = IDENTIFIER_INPUT_ID,
        secret = SECRET_INPUT_ID,
        "Login form bound"
    );

    Ok(handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockLoginTransport, MockReporter};
    use crate::infrastructure::page::MemoryDocument;

    fn bind(document: &MemoryDocument) -> Result<(), LoginError> {
        bind_login_form(
            document,
            Arc::new(MockLoginTransport::new()),
            Arc::new(MockReporter::new()),
        )
        .map(|_| ())
    }

    #[test]
    fn test_missing_button() {
        let document = MemoryDocument::new()
            .with_input(IDENTIFIER_INPUT_ID, "")
            .with_input(SECRET_INPUT_ID, "");

        assert_eq!(bind(&document), Err(LoginError::missing_element("button")));
    }

    #[test]
    fn test_missing_identifier_input() {
        let document = MemoryDocument::new()
            .with_button(BUTTON_ID)
            .with_input(SECRET_INPUT_ID, "");

        assert_eq!(
            bind(&document),
            Err(LoginError::missing_element("email-input"))
        );
    }

    #[test]
    fn test_missing_secret_input() {
        let document = MemoryDocument::new()
            .with_button(BUTTON_ID)
            .with_input(IDENTIFIER_INPUT_ID, "");

        assert_eq!(
            bind(&document),
            Err(LoginError::missing_element("password-input"))
        );
    }

    #[test]
    fn test_wrong_element_kind_counts_as_missing() {
        let document = MemoryDocument::new()
            .with_input(BUTTON_ID, "")
            .with_input(IDENTIFIER_INPUT_ID, "")
            .with_input(SECRET_INPUT_ID, "");

        assert_eq!(bind(&document), Err(LoginError::missing_element("button")));
    }

    #[test]
    fn test_bind_registers_one_listener() {
        let document = MemoryDocument::new()
            .with_button(BUTTON_ID)
            .with_input(IDENTIFIER_INPUT_ID, "")
            .with_input(SECRET_INPUT_ID, "");

        assert!(bind(&document).is_ok());
        assert_eq!(document.button(BUTTON_ID).unwrap().listener_count(), 1);
    }
}
