//! Rendering seam between the controller and whatever draws the overlay
//!
//! The controller owns the one-shot logic; a surface only knows how to draw
//! the overlay, toggle it, and report raw input from four listener sources.
//! Listeners are handles: dropping one unregisters it.

use std::rc::Rc;

use super::error::DialogResult;
use super::request::DialogContent;

/// Callback invoked by a surface listener with the raw input it observed
pub type InputHandler = Rc<dyn Fn(DialogInput)>;

/// Where a per-request listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerSource {
    ConfirmButton,
    CancelButton,
    /// The full-viewport backdrop (clicks on the panel bubble here too)
    Overlay,
    /// Document-level keydown
    Document,
}

impl ListenerSource {
    pub const ALL: [ListenerSource; 4] = [
        ListenerSource::ConfirmButton,
        ListenerSource::CancelButton,
        ListenerSource::Overlay,
        ListenerSource::Document,
    ];
}

/// Raw input reported by a surface
#[derive(Debug, Clone, PartialEq)]
pub enum DialogInput {
    ConfirmClicked,
    CancelClicked,
    /// `on_backdrop` is true only when the click target is the overlay itself
    OverlayClicked { on_backdrop: bool },
    KeyDown(String),
}

/// The input that settled a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Confirm,
    Cancel,
    Backdrop,
    Escape,
}

impl Trigger {
    /// Map raw input to a settling trigger; `None` leaves the dialog open
    pub fn from_input(input: &DialogInput) -> Option<Self> {
        match input {
            DialogInput::ConfirmClicked => Some(Trigger::Confirm),
            DialogInput::CancelClicked => Some(Trigger::Cancel),
            DialogInput::OverlayClicked { on_backdrop: true } => Some(Trigger::Backdrop),
            DialogInput::OverlayClicked { on_backdrop: false } => None,
            DialogInput::KeyDown(key) if key == "Escape" => Some(Trigger::Escape),
            DialogInput::KeyDown(_) => None,
        }
    }

    /// Only an explicit confirm yields `true`
    pub fn outcome(self) -> bool {
        matches!(self, Trigger::Confirm)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Confirm => "confirm",
            Trigger::Cancel => "cancel",
            Trigger::Backdrop => "backdrop",
            Trigger::Escape => "escape",
        }
    }
}

/// Something that can draw the singleton overlay
pub trait DialogSurface {
    /// Registration handle; dropping it must unregister the listener
    type Listener;

    /// Create (or adopt) the overlay. Idempotent.
    fn mount(&mut self) -> DialogResult<()>;

    fn render(&mut self, content: &DialogContent) -> DialogResult<()>;

    fn set_open(&mut self, open: bool);

    fn focus_confirm(&mut self);

    fn listen(
        &mut self,
        source: ListenerSource,
        handler: InputHandler,
    ) -> DialogResult<Self::Listener>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory surface that records what the controller asked it to do

    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::*;
    use crate::dialog::error::DialogError;

    #[derive(Default)]
    pub struct SurfaceLog {
        /// Number of times an overlay was actually created
        pub overlays_created: usize,
        pub open: bool,
        pub content: Option<DialogContent>,
        pub focus_count: usize,
        pub fail_mount: bool,
        /// 1-based `listen` call that should fail
        pub fail_listen_at: Option<usize>,
        listen_calls: usize,
        next_id: u64,
        listeners: Vec<(u64, ListenerSource, InputHandler)>,
    }

    #[derive(Clone, Default)]
    pub struct RecordingSurface {
        log: Rc<RefCell<SurfaceLog>>,
    }

    pub struct RecordedListener {
        id: u64,
        log: Weak<RefCell<SurfaceLog>>,
    }

    impl Drop for RecordedListener {
        fn drop(&mut self) {
            if let Some(log) = self.log.upgrade() {
                log.borrow_mut().listeners.retain(|(id, _, _)| *id != self.id);
            }
        }
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            let surface = Self::default();
            surface.log.borrow_mut().fail_mount = true;
            surface
        }

        pub fn failing_listen_at(call: usize) -> Self {
            let surface = Self::default();
            surface.log.borrow_mut().fail_listen_at = Some(call);
            surface
        }

        /// Deliver input to every listener attached at `source`
        pub fn fire(&self, source: ListenerSource, input: DialogInput) {
            let handlers: Vec<InputHandler> = self
                .log
                .borrow()
                .listeners
                .iter()
                .filter(|(_, s, _)| *s == source)
                .map(|(_, _, h)| h.clone())
                .collect();
            for handler in handlers {
                handler(input.clone());
            }
        }

        pub fn click_confirm(&self) {
            self.fire(ListenerSource::ConfirmButton, DialogInput::ConfirmClicked);
        }

        pub fn click_cancel(&self) {
            self.fire(ListenerSource::CancelButton, DialogInput::CancelClicked);
        }

        pub fn click_backdrop(&self) {
            self.fire(
                ListenerSource::Overlay,
                DialogInput::OverlayClicked { on_backdrop: true },
            );
        }

        pub fn click_panel(&self) {
            self.fire(
                ListenerSource::Overlay,
                DialogInput::OverlayClicked { on_backdrop: false },
            );
        }

        pub fn press(&self, key: &str) {
            self.fire(ListenerSource::Document, DialogInput::KeyDown(key.to_string()));
        }

        pub fn listener_count(&self) -> usize {
            self.log.borrow().listeners.len()
        }

        pub fn is_open(&self) -> bool {
            self.log.borrow().open
        }

        pub fn overlays_created(&self) -> usize {
            self.log.borrow().overlays_created
        }

        pub fn focus_count(&self) -> usize {
            self.log.borrow().focus_count
        }

        pub fn content(&self) -> Option<DialogContent> {
            self.log.borrow().content.clone()
        }
    }

    impl DialogSurface for RecordingSurface {
        type Listener = RecordedListener;

        fn mount(&mut self) -> DialogResult<()> {
            let mut log = self.log.borrow_mut();
            if log.fail_mount {
                return Err(DialogError::environment("document"));
            }
            if log.overlays_created == 0 {
                log.overlays_created = 1;
            }
            Ok(())
        }

        fn render(&mut self, content: &DialogContent) -> DialogResult<()> {
            self.log.borrow_mut().content = Some(content.clone());
            Ok(())
        }

        fn set_open(&mut self, open: bool) {
            self.log.borrow_mut().open = open;
        }

        fn focus_confirm(&mut self) {
            self.log.borrow_mut().focus_count += 1;
        }

        fn listen(
            &mut self,
            source: ListenerSource,
            handler: InputHandler,
        ) -> DialogResult<Self::Listener> {
            let mut log = self.log.borrow_mut();
            log.listen_calls += 1;
            if log.fail_listen_at == Some(log.listen_calls) {
                return Err(DialogError::Dom("listener registration failed".to_string()));
            }
            log.next_id += 1;
            let id = log.next_id;
            log.listeners.push((id, source, handler));
            Ok(RecordedListener {
                id,
                log: Rc::downgrade(&self.log),
            })
        }
    }
}
