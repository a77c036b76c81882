//! Dialog request and resolved content
//!
//! A `DialogRequest` is what callers hand to the controller. Every field is
//! optional; `DialogContent` is the same request with defaults applied and is
//! what actually gets rendered.

use serde::Deserialize;

/// Caller-supplied dialog options
///
/// Field names deserialize from the JS-style option object
/// (`confirmText`, `cancelText`) so page-embedded JSON can be reused as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogRequest {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(alias = "confirmLabel")]
    pub confirm_text: Option<String>,
    #[serde(alias = "cancelLabel")]
    pub cancel_text: Option<String>,
}

impl DialogRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    /// Apply defaults to every unspecified field
    ///
    /// Empty strings count as unspecified.
    pub fn resolve(&self, defaults: &DialogDefaults) -> DialogContent {
        DialogContent {
            icon: pick(&self.icon, &defaults.icon),
            title: pick(&self.title, &defaults.title),
            message: pick(&self.message, &defaults.message),
            confirm_text: pick(&self.confirm_text, &defaults.confirm_text),
            cancel_text: pick(&self.cancel_text, &defaults.cancel_text),
        }
    }
}

fn pick(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Fallback text for unspecified request fields
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogDefaults {
    pub icon: String,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

impl Default for DialogDefaults {
    fn default() -> Self {
        Self {
            icon: "⚠️".to_string(),
            title: "Confirm Action".to_string(),
            message: "Are you sure?".to_string(),
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
        }
    }
}

/// Fully resolved dialog text, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct DialogContent {
    pub icon: String,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
}
