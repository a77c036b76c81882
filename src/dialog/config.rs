//! Dialog configuration
//!
//! Defaults match the stock stylesheet. A page can override any subset by
//! embedding `<script type="application/json" id="confirm-dialog-config">`.

use serde::Deserialize;

use super::request::DialogDefaults;

/// Id of the optional page-embedded JSON config element
pub const CONFIG_ELEMENT_ID: &str = "confirm-dialog-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogConfig {
    /// Id of the singleton overlay element
    pub overlay_id: String,
    pub overlay_class: String,
    pub panel_class: String,
    pub icon_class: String,
    pub title_class: String,
    pub message_class: String,
    pub actions_class: String,
    pub confirm_class: String,
    pub cancel_class: String,
    /// Class toggled on the overlay while a request is open
    pub active_class: String,
    pub defaults: DialogDefaults,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            overlay_id: "confirmModalOverlay".to_string(),
            overlay_class: "confirm-modal-overlay".to_string(),
            panel_class: "confirm-modal".to_string(),
            icon_class: "confirm-modal-icon".to_string(),
            title_class: "confirm-modal-title".to_string(),
            message_class: "confirm-modal-message".to_string(),
            actions_class: "confirm-modal-actions".to_string(),
            confirm_class: "confirm-modal-confirm".to_string(),
            cancel_class: "confirm-modal-cancel".to_string(),
            active_class: "active".to_string(),
            defaults: DialogDefaults::default(),
        }
    }
}

impl DialogConfig {
    /// Parse a JSON override, falling back to defaults on malformed input
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<DialogConfig>(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed dialog config: {}", e);
                Self::default()
            }
        }
    }

    /// Load the page-embedded config, if any
    pub fn from_page() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => {
                log::info!("Loaded dialog config from #{}", CONFIG_ELEMENT_ID);
                Self::from_json(&raw)
            }
            _ => Self::default(),
        }
    }
}
