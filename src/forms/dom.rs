//! Binding marked forms in the live document

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement};

use crate::dialog::dom::document;
use crate::dialog::{DialogResult, DomListener, PageDialog};

use super::binder::{confirm_and_submit, ConfirmableForm};
use super::marker::{FormMarker, BOUND_ATTR, FORM_SELECTOR};

/// `document.readyState` is `"loading"` until the markup has been parsed
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

impl ConfirmableForm for HtmlFormElement {
    fn marker(&self) -> FormMarker {
        FormMarker::read(|name| self.get_attribute(name))
    }

    // `HTMLFormElement.submit()` does not dispatch a submit event
    fn submit(&self) -> DialogResult<()> {
        HtmlFormElement::submit(self)?;
        Ok(())
    }
}

/// Attaches submit interception to every marked form
///
/// Listener handles live as long as the binder (and its clones).
#[derive(Clone)]
pub struct FormBinder {
    controller: PageDialog,
    listeners: Rc<RefCell<Vec<DomListener>>>,
}

impl FormBinder {
    pub fn new(controller: PageDialog) -> Self {
        Self {
            controller,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Bind every marked form not bound yet; returns how many were bound
    pub fn bind_all(&self) -> DialogResult<usize> {
        let forms = document()?.query_selector_all(FORM_SELECTOR)?;
        let mut bound = 0;

        for index in 0..forms.length() {
            let Some(form) = forms
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlFormElement>().ok())
            else {
                continue;
            };
            if form.has_attribute(BOUND_ATTR) {
                continue;
            }

            let listener = self.intercept(&form)?;
            form.set_attribute(BOUND_ATTR, "true")?;
            self.listeners.borrow_mut().push(listener);
            bound += 1;
        }

        log::info!("Bound confirmation to {} form(s)", bound);
        Ok(bound)
    }

    /// Bind now if the document has parsed, otherwise on `DOMContentLoaded`
    pub fn bind_when_ready(&self) -> DialogResult<()> {
        let document = document()?;
        if !still_loading(&document.ready_state()) {
            self.bind_all()?;
            return Ok(());
        }

        let controller = self.controller.clone();
        let listeners = Rc::downgrade(&self.listeners);
        let on_ready = DomListener::new(document.as_ref(), "DOMContentLoaded", move |_| {
            let Some(listeners) = listeners.upgrade() else {
                return;
            };
            let binder = FormBinder {
                controller: controller.clone(),
                listeners,
            };
            if let Err(e) = binder.bind_all() {
                log::error!("Failed to bind confirmable forms: {}", e);
            }
        })?;
        self.listeners.borrow_mut().push(on_ready);
        Ok(())
    }

    fn intercept(&self, form: &HtmlFormElement) -> DialogResult<DomListener> {
        let controller = self.controller.clone();
        let target = form.clone();

        DomListener::new(form.as_ref(), "submit", move |event: Event| {
            event.prevent_default();

            let controller = controller.clone();
            let form = target.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = confirm_and_submit(&controller, &form).await {
                    log::warn!("Form confirmation failed: {}", e);
                }
            });
        })
    }
}
