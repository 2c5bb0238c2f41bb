//! In-memory windows for running both parties in one process.
//!
//! Mimics the parts of browser postMessage semantics the protocol depends
//! on: posts to a window whose origin differs from the requested target
//! origin are silently discarded, posts to a window that has not loaded
//! fail, and messages arriving while nobody listens are lost.

use std::{
    cell::RefCell,
    collections::VecDeque,
    rc::{Rc, Weak},
};

use log::trace;

use crate::transport::{error::TransportError, MessageData, MessageReceiver, PeerHandle, RawMessage};

type Inbox = Rc<RefCell<VecDeque<RawMessage>>>;

struct WindowInner {
    origin: String,
    loaded: bool,
    listener: Option<Inbox>,
    received: usize,
    refused: usize,
}

/// A simulated browsing context
#[derive(Clone)]
pub struct LocalWindow {
    inner: Rc<RefCell<WindowInner>>,
}

impl LocalWindow {
    pub fn new<S: Into<String>>(origin: S, loaded: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(WindowInner {
                origin: origin.into(),
                loaded,
                listener: None,
                received: 0,
                refused: 0,
            })),
        }
    }

    pub fn origin(&self) -> String {
        self.inner.borrow().origin.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.borrow().loaded
    }

    /// The document finished loading
    pub fn load(&self) {
        self.inner.borrow_mut().loaded = true;
    }

    /// The document was torn down. Its listener goes with it.
    pub fn unload(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.loaded = false;
        inner.listener = None;
    }

    /// Registers a `message` listener on this window, replacing any
    /// previous one
    pub fn listen(&self) -> LocalListener {
        let inbox: Inbox = Rc::new(RefCell::new(VecDeque::new()));
        self.inner.borrow_mut().listener = Some(inbox.clone());
        LocalListener {
            window: Rc::downgrade(&self.inner),
            inbox,
        }
    }

    pub fn has_listener(&self) -> bool {
        self.inner.borrow().listener.is_some()
    }

    /// Number of messages the transport accepted for this window
    pub fn received_count(&self) -> usize {
        self.inner.borrow().received
    }

    /// Number of posts discarded because the target origin did not match
    pub fn refused_count(&self) -> usize {
        self.inner.borrow().refused
    }

    /// Delivers a message as if posted by a document at `source_origin`.
    /// Useful for simulating foreign documents.
    pub fn deliver_from(&self, source_origin: &str, data: MessageData) {
        let mut inner = self.inner.borrow_mut();
        inner.received += 1;
        match &inner.listener {
            Some(inbox) => inbox.borrow_mut().push_back(RawMessage {
                origin: source_origin.to_string(),
                data,
            }),
            None => trace!("no listener on {}, message lost", inner.origin),
        }
    }

    /// A handle through which `source` can post into this window
    pub fn handle_from(&self, source: &LocalWindow) -> LocalPeerHandle {
        LocalPeerHandle {
            target: self.clone(),
            source_origin: source.origin(),
        }
    }
}

/// Posts into a [`LocalWindow`] on behalf of another window
pub struct LocalPeerHandle {
    target: LocalWindow,
    source_origin: String,
}

impl PeerHandle for LocalPeerHandle {
    fn is_available(&self) -> bool {
        self.target.is_loaded()
    }

    fn post_message(&self, data: &str, target_origin: &str) -> Result<(), TransportError> {
        if !self.target.is_loaded() {
            return Err(TransportError::WindowUnavailable);
        }
        if self.target.origin() != target_origin {
            trace!(
                "post to {} refused, target origin was {}",
                self.target.origin(),
                target_origin
            );
            self.target.inner.borrow_mut().refused += 1;
            return Ok(());
        }
        self.target
            .deliver_from(&self.source_origin, MessageData::Text(data.to_string()));
        Ok(())
    }
}

/// A registered listener on a [`LocalWindow`]. Dropping it deregisters.
pub struct LocalListener {
    window: Weak<RefCell<WindowInner>>,
    inbox: Inbox,
}

impl MessageReceiver for LocalListener {
    fn receive(&mut self) -> Option<RawMessage> {
        self.inbox.borrow_mut().pop_front()
    }
}

impl Drop for LocalListener {
    fn drop(&mut self) {
        let Some(window) = self.window.upgrade() else {
            return;
        };
        let mut inner = window.borrow_mut();
        let is_current = inner
            .listener
            .as_ref()
            .is_some_and(|current| Rc::ptr_eq(current, &self.inbox));
        if is_current {
            inner.listener = None;
        }
    }
}

/// A host page and the window of the iframe it embeds.
///
/// The host window is always loaded; the embedded window starts unloaded,
/// like a freshly inserted iframe.
pub struct LocalWindowPair {
    pub host: LocalWindow,
    pub embedded: LocalWindow,
}

impl LocalWindowPair {
    pub fn new<H: Into<String>, E: Into<String>>(host_origin: H, embedded_origin: E) -> Self {
        Self {
            host: LocalWindow::new(host_origin, true),
            embedded: LocalWindow::new(embedded_origin, false),
        }
    }

    /// Handle the host uses to reach the iframe's content window
    pub fn frame_handle(&self) -> Box<dyn PeerHandle> {
        Box::new(self.embedded.handle_from(&self.host))
    }

    /// Handle the embedded document uses to reach `window.parent`
    pub fn parent_handle(&self) -> Box<dyn PeerHandle> {
        Box::new(self.host.handle_from(&self.embedded))
    }
}
