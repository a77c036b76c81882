//! Declarative confirmation markers on forms
//!
//! ```html
//! <form method="post" action="/projects/1/delete/"
//!       data-confirm="delete-project" data-confirm-message="Alpha">
//! ```

use crate::dialog::presets;
use crate::dialog::DialogRequest;

pub const KIND_ATTR: &str = "data-confirm";
pub const MESSAGE_ATTR: &str = "data-confirm-message";
pub const TITLE_ATTR: &str = "data-confirm-title";
pub const ICON_ATTR: &str = "data-confirm-icon";
/// Set on a form once its submit listener is attached
pub const BOUND_ATTR: &str = "data-confirm-bound";

pub const FORM_SELECTOR: &str = "form[data-confirm]";

/// Raw marker attribute values as read from a form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormMarker {
    pub kind: Option<String>,
    pub message: Option<String>,
    pub title: Option<String>,
    pub icon: Option<String>,
}

impl FormMarker {
    /// Read the marker attributes through any attribute getter
    pub fn read(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            kind: get(KIND_ATTR),
            message: get(MESSAGE_ATTR),
            title: get(TITLE_ATTR),
            icon: get(ICON_ATTR),
        }
    }

    pub fn kind(&self) -> ConfirmKind {
        ConfirmKind::parse(self.kind.as_deref(), self.title.clone(), self.icon.clone())
    }

    /// Build the dialog request this form asks for
    pub fn to_request(&self) -> DialogRequest {
        self.kind().request(self.message.as_deref().unwrap_or(""))
    }
}

/// Known confirmation presets plus a caller-configured fallback
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmKind {
    DeleteProject,
    RemoveMember,
    DeleteTransaction,
    Custom {
        title: Option<String>,
        icon: Option<String>,
    },
}

impl ConfirmKind {
    /// Parse a `data-confirm` value
    ///
    /// Empty or `custom` selects `Custom`. Unknown values also select
    /// `Custom` but are logged so a misspelled kind does not go unnoticed.
    pub fn parse(kind: Option<&str>, title: Option<String>, icon: Option<String>) -> Self {
        match kind.map(str::trim).unwrap_or("") {
            "delete-project" => ConfirmKind::DeleteProject,
            "remove-member" => ConfirmKind::RemoveMember,
            "delete-transaction" => ConfirmKind::DeleteTransaction,
            "" | "custom" => ConfirmKind::Custom { title, icon },
            other => {
                log::warn!(
                    "Unrecognized {} kind {:?}, using a generic confirmation",
                    KIND_ATTR,
                    other
                );
                ConfirmKind::Custom { title, icon }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmKind::DeleteProject => "delete-project",
            ConfirmKind::RemoveMember => "remove-member",
            ConfirmKind::DeleteTransaction => "delete-transaction",
            ConfirmKind::Custom { .. } => "custom",
        }
    }

    /// Build the request; `subject` is the form's marker message
    pub fn request(&self, subject: &str) -> DialogRequest {
        match self {
            ConfirmKind::DeleteProject => presets::delete_project(subject),
            ConfirmKind::RemoveMember => presets::remove_member(subject),
            ConfirmKind::DeleteTransaction => presets::delete_item(subject, "transaction"),
            ConfirmKind::Custom { title, icon } => DialogRequest {
                icon: icon.clone(),
                title: title.clone(),
                message: Some(subject.to_string()),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::request::DialogDefaults;
    use std::collections::HashMap;

    fn marker(attrs: &[(&str, &str)]) -> FormMarker {
        let map: HashMap<String, String> = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        FormMarker::read(|name| map.get(name).cloned())
    }

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!(
            ConfirmKind::parse(Some("delete-project"), None, None),
            ConfirmKind::DeleteProject
        );
        assert_eq!(
            ConfirmKind::parse(Some("remove-member"), None, None),
            ConfirmKind::RemoveMember
        );
        assert_eq!(
            ConfirmKind::parse(Some("delete-transaction"), None, None),
            ConfirmKind::DeleteTransaction
        );
    }

    #[test]
    fn test_unknown_and_empty_kinds_are_custom() {
        for kind in [None, Some(""), Some("custom"), Some("delete-projcet")] {
            assert_eq!(
                ConfirmKind::parse(kind, Some("Archive?".to_string()), None),
                ConfirmKind::Custom {
                    title: Some("Archive?".to_string()),
                    icon: None,
                }
            );
        }
    }

    #[test]
    fn test_read_marker_attributes() {
        let m = marker(&[
            ("data-confirm", "remove-member"),
            ("data-confirm-message", "alice"),
        ]);
        assert_eq!(m.kind(), ConfirmKind::RemoveMember);
        assert_eq!(m.message.as_deref(), Some("alice"));
        assert_eq!(m.title, None);
        assert_eq!(m.kind().as_str(), "remove-member");
    }

    #[test]
    fn test_preset_ignores_title_override() {
        let m = marker(&[
            ("data-confirm", "delete-transaction"),
            ("data-confirm-message", "Groceries"),
            ("data-confirm-title", "Ignored"),
        ]);
        let request = m.to_request();
        assert_eq!(request.title.as_deref(), Some("Delete transaction?"));
        assert_eq!(request.confirm_text.as_deref(), Some("Delete"));
    }

    #[test]
    fn test_custom_uses_overrides_then_defaults() {
        let m = marker(&[
            ("data-confirm", ""),
            ("data-confirm-message", "Archive this project?"),
            ("data-confirm-icon", "📦"),
        ]);
        let content = m.to_request().resolve(&DialogDefaults::default());
        assert_eq!(content.icon, "📦");
        assert_eq!(content.title, "Confirm Action");
        assert_eq!(content.message, "Archive this project?");
        assert_eq!(content.confirm_text, "Confirm");
        assert_eq!(content.cancel_text, "Cancel");
    }

    #[test]
    fn test_custom_without_message_uses_default_message() {
        let m = marker(&[("data-confirm", "custom")]);
        let content = m.to_request().resolve(&DialogDefaults::default());
        assert_eq!(content.message, "Are you sure?");
        assert_eq!(content.icon, "⚠️");
    }
}
