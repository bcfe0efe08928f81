//! Page implementations.

pub mod memory_document;

pub use memory_document::{MemoryButton, MemoryDocument, MemoryInput};
