//! Browser implementation of the dialog surface
//!
//! Builds the overlay with `web-sys` the first time it is needed (or adopts
//! one already present in the page markup), and wraps every event listener
//! in a `DomListener` that removes itself on drop. No `Closure::forget()`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent};

use super::config::DialogConfig;
use super::error::{DialogError, DialogResult};
use super::request::DialogContent;
use super::surface::{DialogInput, DialogSurface, InputHandler, ListenerSource};

/// Get the page document, failing fast when there is none
pub fn document() -> DialogResult<Document> {
    web_sys::window()
        .ok_or_else(|| DialogError::environment("window"))?
        .document()
        .ok_or_else(|| DialogError::environment("document"))
}

/// An event listener registration that is removed when dropped
pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> DialogResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

/// Handles to the overlay's parts
struct OverlayNodes {
    overlay: HtmlElement,
    icon: Element,
    title: Element,
    message: Element,
    confirm: HtmlElement,
    cancel: HtmlElement,
}

pub struct DomSurface {
    document: Document,
    config: DialogConfig,
    nodes: Option<OverlayNodes>,
}

impl DomSurface {
    pub fn new(config: DialogConfig) -> DialogResult<Self> {
        Ok(Self {
            document: document()?,
            config,
            nodes: None,
        })
    }

    fn nodes(&self) -> DialogResult<&OverlayNodes> {
        self.nodes
            .as_ref()
            .ok_or_else(|| DialogError::Dom("overlay not mounted".to_string()))
    }

    /// Adopt an overlay already in the page, if it has every part we need
    fn adopt_existing(&self) -> Option<OverlayNodes> {
        let existing = self.document.get_element_by_id(&self.config.overlay_id)?;
        let part = |class: &str| {
            existing
                .query_selector(&format!(".{}", class))
                .ok()
                .flatten()
        };

        let nodes = (|| {
            Some(OverlayNodes {
                icon: part(&self.config.icon_class)?,
                title: part(&self.config.title_class)?,
                message: part(&self.config.message_class)?,
                confirm: part(&self.config.confirm_class)?.dyn_into().ok()?,
                cancel: part(&self.config.cancel_class)?.dyn_into().ok()?,
                overlay: existing.clone().dyn_into().ok()?,
            })
        })();

        if nodes.is_none() {
            log::warn!(
                "Replacing incomplete #{} overlay found in page",
                self.config.overlay_id
            );
            existing.remove();
        }
        nodes
    }

    fn element(&self, tag: &str, class: &str) -> DialogResult<Element> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        Ok(element)
    }

    fn html_element(&self, tag: &str, class: &str) -> DialogResult<HtmlElement> {
        self.element(tag, class)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DialogError::Dom(format!("<{}> is not an HtmlElement", tag)))
    }

    fn create(&self) -> DialogResult<OverlayNodes> {
        let body = self
            .document
            .body()
            .ok_or_else(|| DialogError::environment("document body"))?;
        let config = &self.config;

        let overlay = self.html_element("div", &config.overlay_class)?;
        overlay.set_id(&config.overlay_id);

        let panel = self.element("div", &config.panel_class)?;
        panel.set_attribute("role", "dialog")?;
        panel.set_attribute("aria-modal", "true")?;

        let icon = self.element("div", &config.icon_class)?;
        let title = self.element("h2", &config.title_class)?;
        let message = self.element("p", &config.message_class)?;
        let actions = self.element("div", &config.actions_class)?;

        let cancel = self.html_element("button", &config.cancel_class)?;
        cancel.set_attribute("type", "button")?;
        let confirm = self.html_element("button", &config.confirm_class)?;
        confirm.set_attribute("type", "button")?;

        actions.append_child(&cancel)?;
        actions.append_child(&confirm)?;
        panel.append_child(&icon)?;
        panel.append_child(&title)?;
        panel.append_child(&message)?;
        panel.append_child(&actions)?;
        overlay.append_child(&panel)?;
        body.append_child(&overlay)?;

        log::info!("Created confirmation overlay #{}", config.overlay_id);

        Ok(OverlayNodes {
            overlay,
            icon,
            title,
            message,
            confirm,
            cancel,
        })
    }
}

impl DialogSurface for DomSurface {
    type Listener = DomListener;

    fn mount(&mut self) -> DialogResult<()> {
        if self.nodes.is_some() {
            return Ok(());
        }
        let nodes = match self.adopt_existing() {
            Some(nodes) => nodes,
            None => self.create()?,
        };
        self.nodes = Some(nodes);
        Ok(())
    }

    fn render(&mut self, content: &DialogContent) -> DialogResult<()> {
        let nodes = self.nodes()?;
        nodes.icon.set_text_content(Some(&content.icon));
        nodes.title.set_text_content(Some(&content.title));
        nodes.message.set_text_content(Some(&content.message));
        nodes.confirm.set_text_content(Some(&content.confirm_text));
        nodes.cancel.set_text_content(Some(&content.cancel_text));
        Ok(())
    }

    fn set_open(&mut self, open: bool) {
        let Some(nodes) = self.nodes.as_ref() else {
            return;
        };
        let classes = nodes.overlay.class_list();
        let result = if open {
            classes.add_1(&self.config.active_class)
        } else {
            classes.remove_1(&self.config.active_class)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle overlay visibility: {:?}", e);
        }
    }

    fn focus_confirm(&mut self) {
        if let Some(nodes) = self.nodes.as_ref() {
            if let Err(e) = nodes.confirm.focus() {
                log::warn!("Failed to focus confirm button: {:?}", e);
            }
        }
    }

    fn listen(
        &mut self,
        source: ListenerSource,
        handler: InputHandler,
    ) -> DialogResult<Self::Listener> {
        let nodes = self.nodes()?;
        match source {
            ListenerSource::ConfirmButton => {
                DomListener::new(nodes.confirm.as_ref(), "click", move |_| {
                    handler(DialogInput::ConfirmClicked)
                })
            }
            ListenerSource::CancelButton => {
                DomListener::new(nodes.cancel.as_ref(), "click", move |_| {
                    handler(DialogInput::CancelClicked)
                })
            }
            ListenerSource::Overlay => {
                let overlay: JsValue = nodes.overlay.clone().into();
                DomListener::new(nodes.overlay.as_ref(), "click", move |event: Event| {
                    let on_backdrop = event
                        .target()
                        .map(|target| JsValue::from(target) == overlay)
                        .unwrap_or(false);
                    handler(DialogInput::OverlayClicked { on_backdrop })
                })
            }
            ListenerSource::Document => {
                DomListener::new(self.document.as_ref(), "keydown", move |event: Event| {
                    if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                        handler(DialogInput::KeyDown(key_event.key()))
                    }
                })
            }
        }
    }
}
