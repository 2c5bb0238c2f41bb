use wasm_bindgen::JsValue;
use web_sys::Window;

use super::js_reason;
use crate::transport::{error::TransportError, PeerHandle};

/// Embedded-side handle to the host page through `window.parent`
pub struct ParentHandle {
    parent: Window,
}

impl ParentHandle {
    pub fn new() -> Result<Self, TransportError> {
        let window = web_sys::window().ok_or(TransportError::WindowUnavailable)?;
        let parent = window
            .parent()
            .map_err(|error| TransportError::PostFailed {
                target_origin: String::new(),
                reason: js_reason(&error),
            })?
            .ok_or(TransportError::WindowUnavailable)?;
        Ok(Self { parent })
    }
}

impl PeerHandle for ParentHandle {
    fn is_available(&self) -> bool {
        true
    }

    fn post_message(&self, data: &str, target_origin: &str) -> Result<(), TransportError> {
        self.parent
            .post_message(&JsValue::from_str(data), target_origin)
            .map_err(|error| TransportError::PostFailed {
                target_origin: target_origin.to_string(),
                reason: js_reason(&error),
            })
    }
}
