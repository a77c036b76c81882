//! use_confirm hook - ask the page dialog for a yes/no decision
//!
//! Any failure to show the dialog (no document, another request still open)
//! is logged and treated as "not confirmed".

use dioxus::prelude::*;

use crate::context::DialogContext;
use crate::dialog::{DialogRequest, PageDialog};

#[derive(Clone)]
pub struct UseConfirm {
    controller: Option<PageDialog>,
}

impl UseConfirm {
    /// Show `request` and wait for the user's decision
    pub async fn ask(&self, request: DialogRequest) -> bool {
        let Some(controller) = self.controller.as_ref() else {
            log::warn!("Confirmation requested but no dialog is available");
            return false;
        };
        match controller.confirm(&request).await {
            Ok(confirmed) => confirmed,
            Err(e) => {
                log::warn!("Confirmation request failed: {}", e);
                false
            }
        }
    }
}

/// Access the page controller provided by `DialogContext`
pub fn use_dialog_controller() -> Option<PageDialog> {
    use_context::<DialogContext>().controller()
}

pub fn use_confirm() -> UseConfirm {
    UseConfirm {
        controller: use_dialog_controller(),
    }
}
