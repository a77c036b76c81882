//! Confirmation dialog error types

use std::fmt;
use wasm_bindgen::JsValue;

/// Error type for dialog and form-binding operations
#[derive(Debug, Clone, PartialEq)]
pub enum DialogError {
    /// No usable window/document/body; the dialog cannot render
    Environment(String),
    /// A request is already open; concurrent requests are rejected
    AlreadyOpen,
    /// A DOM call failed (element creation, listener registration, submit)
    Dom(String),
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment(msg) => write!(f, "Rendering environment unavailable: {}", msg),
            Self::AlreadyOpen => write!(f, "A confirmation dialog is already open"),
            Self::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for DialogError {}

impl From<JsValue> for DialogError {
    fn from(value: JsValue) -> Self {
        Self::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

/// Result type alias for dialog operations
pub type DialogResult<T> = Result<T, DialogError>;

impl DialogError {
    /// Shorthand for a missing window/document/body
    pub fn environment(what: &str) -> Self {
        Self::Environment(format!("no {} available", what))
    }
}
