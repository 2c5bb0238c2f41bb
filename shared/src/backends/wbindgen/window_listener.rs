use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use log::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{MessageEvent, Window};

use super::js_reason;
use crate::transport::{error::TransportError, MessageData, MessageReceiver, RawMessage};

const MESSAGE_EVENT: &str = "message";

/// A `message` listener on the current window.
///
/// The listener is removed from the window when this value is dropped, so
/// tying it to the owning reconciler guarantees deregistration on teardown.
pub struct WindowListener {
    window: Window,
    queue: Rc<RefCell<VecDeque<RawMessage>>>,
    callback: Closure<dyn FnMut(MessageEvent)>,
}

impl WindowListener {
    pub fn register() -> Result<Self, TransportError> {
        let window = web_sys::window().ok_or(TransportError::WindowUnavailable)?;
        let queue = Rc::new(RefCell::new(VecDeque::new()));

        let sink = queue.clone();
        let callback = Closure::wrap(Box::new(move |event: MessageEvent| {
            let value = event.data();
            let data = match value.as_string() {
                Some(text) => MessageData::Text(text),
                None => MessageData::NonText {
                    kind: value.js_typeof().as_string().unwrap_or_default(),
                },
            };
            sink.borrow_mut().push_back(RawMessage {
                origin: event.origin(),
                data,
            });
        }) as Box<dyn FnMut(MessageEvent)>);

        window
            .add_event_listener_with_callback(MESSAGE_EVENT, callback.as_ref().unchecked_ref())
            .map_err(|error| TransportError::ListenerRegistration {
                reason: js_reason(&error),
            })?;

        Ok(Self {
            window,
            queue,
            callback,
        })
    }
}

impl MessageReceiver for WindowListener {
    fn receive(&mut self) -> Option<RawMessage> {
        self.queue.borrow_mut().pop_front()
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let result = self.window.remove_event_listener_with_callback(
            MESSAGE_EVENT,
            self.callback.as_ref().unchecked_ref(),
        );
        if let Err(error) = result {
            warn!("failed to remove message listener: {}", js_reason(&error));
        }
    }
}
