//! Dialog Context
//!
//! Owns the page's single confirmation overlay and the form binder, and is
//! provided once at the app root. Components reach the controller through
//! `use_confirm()` instead of a global.
//!
//! # Example
//! ```rust
//! #[component]
//! pub fn App() -> Element {
//!     let dialog = use_context_provider(DialogContext::init);
//!     use_effect(move || dialog.bind_forms());
//!     rsx! { /* ... */ }
//! }
//! ```

use crate::dialog::{DialogConfig, DialogController, DomSurface, PageDialog};
use crate::forms::FormBinder;

#[derive(Clone)]
pub struct DialogContext {
    controller: Option<PageDialog>,
    binder: Option<FormBinder>,
}

impl DialogContext {
    /// Build the controller from the page config
    ///
    /// Without a document there is nothing to render into; the context is
    /// still provided but every confirmation resolves as declined.
    pub fn init() -> Self {
        let config = DialogConfig::from_page();
        match DomSurface::new(config.clone()) {
            Ok(surface) => {
                let controller = DialogController::new(surface, config.defaults);
                log::info!("Confirmation dialog ready");
                Self {
                    binder: Some(FormBinder::new(controller.clone())),
                    controller: Some(controller),
                }
            }
            Err(e) => {
                log::error!("Confirmation dialog unavailable: {}", e);
                Self {
                    controller: None,
                    binder: None,
                }
            }
        }
    }

    pub fn controller(&self) -> Option<PageDialog> {
        self.controller.clone()
    }

    /// Attach confirmation to every `form[data-confirm]` in the page
    pub fn bind_forms(&self) {
        let Some(binder) = self.binder.as_ref() else {
            return;
        };
        if let Err(e) = binder.bind_when_ready() {
            log::error!("Failed to bind confirmable forms: {}", e);
        }
    }
}
