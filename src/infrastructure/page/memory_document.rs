//! In-memory page used by the CLI driver and by tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use tracing::debug;

use crate::domain::{ClickListener, Clickable, Document, TextField};

/// A text input holding its value in memory.
#[derive(Debug, Default)]
pub struct MemoryInput {
    value: RwLock<String>,
}

impl MemoryInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(value.into()),
        }
    }

    /// Replaces the current value, as typing into the field would.
    pub fn set_value(&self, value: impl Into<String>) {
        let mut current = self.value.write().unwrap_or_else(|e| e.into_inner());
        *current = value.into();
    }
}

impl TextField for MemoryInput {
    fn value(&self) -> String {
        self.value
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

/// A button that dispatches clicks to its listeners synchronously.
#[derive(Default)]
pub struct MemoryButton {
    listeners: Mutex<Vec<ClickListener>>,
}

impl MemoryButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires every registered listener once, in registration order.
    pub fn click(&self) {
        // Listeners run outside the lock so they may register more listeners.
        let listeners: Vec<ClickListener> = self
            .listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        debug!(listeners = listeners.len(), "Button clicked");

        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl Clickable for MemoryButton {
    fn add_click_listener(&self, listener: ClickListener) {
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(listener);
    }
}

enum Element {
    Input(Arc<MemoryInput>),
    Button(Arc<MemoryButton>),
}

/// A page of elements keyed by id.
///
/// ```ignore
/// let page = MemoryDocument::new()
///     .with_button("button")
///     .with_input("email-input", "alice@example.com")
///     .with_input("password-input", "hunter2");
/// ```
#[derive(Default)]
pub struct MemoryDocument {
    elements: HashMap<String, Element>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text input. An existing element with the same id is replaced.
    pub fn with_input(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.elements
            .insert(id.into(), Element::Input(Arc::new(MemoryInput::new(value))));
        self
    }

    /// Adds a button. An existing element with the same id is replaced.
    pub fn with_button(mut self, id: impl Into<String>) -> Self {
        self.elements
            .insert(id.into(), Element::Button(Arc::new(MemoryButton::new())));
        self
    }

    pub fn input(&self, id: &str) -> Option<Arc<MemoryInput>> {
        match self.elements.get(id) {
            Some(Element::Input(input)) => Some(Arc::clone(input)),
            _ => None,
        }
    }

    pub fn button(&self, id: &str) -> Option<Arc<MemoryButton>> {
        match self.elements.get(id) {
            Some(Element::Button(button)) => Some(Arc::clone(button)),
            _ => None,
        }
    }
}

impl Document for MemoryDocument {
    fn text_field(&self, id: &str) -> Option<Arc<dyn TextField>> {
        self.input(id).map(|input| input as Arc<dyn TextField>)
    }

    fn clickable(&self, id: &str) -> Option<Arc<dyn Clickable>> {
        self.button(id).map(|button| button as Arc<dyn Clickable>)
    }
}
