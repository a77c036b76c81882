//! Dialog controller - one-shot confirmation requests over a single overlay
//!
//! The controller is an explicit owned handle (cheap to clone, single
//! threaded) rather than module-level state. Each request arms four
//! listeners; whichever settling input arrives first takes the pending
//! request, drops every listener, hides the overlay, and only then sends the
//! outcome. A second input after that finds nothing to settle.
//!
//! Requests do not queue: `show` while one is open returns
//! `DialogError::AlreadyOpen` and leaves the open request untouched.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use super::error::{DialogError, DialogResult};
use super::request::{DialogDefaults, DialogRequest};
use super::surface::{DialogInput, DialogSurface, InputHandler, ListenerSource, Trigger};

struct Pending<L> {
    sender: oneshot::Sender<bool>,
    listeners: Vec<L>,
}

struct Inner<S: DialogSurface> {
    surface: S,
    defaults: DialogDefaults,
    pending: Option<Pending<S::Listener>>,
}

/// Owns the overlay surface and the currently open request, if any
pub struct DialogController<S: DialogSurface> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: DialogSurface> Clone for DialogController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: DialogSurface + 'static> DialogController<S> {
    pub fn new(surface: S, defaults: DialogDefaults) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                surface,
                defaults,
                pending: None,
            })),
        }
    }

    /// Open the dialog for `request` and return its pending outcome
    ///
    /// Fails with `Environment` if the overlay cannot be mounted and with
    /// `AlreadyOpen` if another request has not settled yet.
    pub fn show(&self, request: &DialogRequest) -> DialogResult<Confirmation> {
        let mut inner = self.inner.borrow_mut();
        if inner.pending.is_some() {
            log::warn!("Rejected confirmation request: dialog already open");
            return Err(DialogError::AlreadyOpen);
        }

        inner.surface.mount()?;
        let content = request.resolve(&inner.defaults);
        inner.surface.render(&content)?;

        let mut listeners = Vec::with_capacity(ListenerSource::ALL.len());
        for source in ListenerSource::ALL {
            let weak = Rc::downgrade(&self.inner);
            let handler: InputHandler = Rc::new(move |input: DialogInput| {
                if let Some(inner) = weak.upgrade() {
                    Self::settle(&inner, input);
                }
            });
            // An error here drops the listeners registered so far
            listeners.push(inner.surface.listen(source, handler)?);
        }

        let (sender, receiver) = oneshot::channel();
        inner.pending = Some(Pending { sender, listeners });
        inner.surface.set_open(true);
        inner.surface.focus_confirm();

        log::debug!("Confirmation dialog opened: {}", content.title);
        Ok(Confirmation { receiver })
    }

    /// Open the dialog and wait for the user's decision
    pub async fn confirm(&self, request: &DialogRequest) -> DialogResult<bool> {
        let confirmation = self.show(request)?;
        Ok(confirmation.await)
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    /// Listeners armed for the open request (0 when idle)
    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner
            .borrow()
            .pending
            .as_ref()
            .map(|p| p.listeners.len())
            .unwrap_or(0)
    }

    fn settle(inner: &Rc<RefCell<Inner<S>>>, input: DialogInput) {
        let Some(trigger) = Trigger::from_input(&input) else {
            return;
        };

        let pending = {
            let Ok(mut guard) = inner.try_borrow_mut() else {
                log::warn!("Ignoring dialog input delivered while the controller is busy");
                return;
            };
            let Some(pending) = guard.pending.take() else {
                return;
            };
            guard.surface.set_open(false);
            pending
        };

        let Pending { sender, listeners } = pending;
        drop(listeners);

        log::debug!("Confirmation dialog settled by {}", trigger.as_str());
        if sender.send(trigger.outcome()).is_err() {
            log::debug!("Confirmation outcome dropped: nobody is waiting");
        }
    }
}

/// Pending outcome of a request
///
/// Resolves to `true` only on confirm. If the controller is dropped before
/// any input settles the request, resolves to `false`.
#[must_use = "a confirmation does nothing unless awaited"]
pub struct Confirmation {
    receiver: oneshot::Receiver<bool>,
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.unwrap_or(false))
    }
}
