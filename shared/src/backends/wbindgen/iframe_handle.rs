use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlIFrameElement;

use super::js_reason;
use crate::transport::{error::TransportError, PeerHandle};

/// Host-side handle to an embedded document through its `<iframe>` element
pub struct IframeHandle {
    element: HtmlIFrameElement,
}

impl IframeHandle {
    pub fn new(element: HtmlIFrameElement) -> Self {
        Self { element }
    }

    /// Looks up an `<iframe>` in the current document by its `id`
    pub fn from_element_id(id: &str) -> Result<Self, TransportError> {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
            .ok_or(TransportError::WindowUnavailable)?;
        let element = element
            .dyn_into::<HtmlIFrameElement>()
            .map_err(|_| TransportError::PostFailed {
                target_origin: String::new(),
                reason: format!("element '{}' is not an iframe", id),
            })?;
        Ok(Self::new(element))
    }

    pub fn element(&self) -> &HtmlIFrameElement {
        &self.element
    }
}

impl PeerHandle for IframeHandle {
    fn is_available(&self) -> bool {
        self.element.content_window().is_some()
    }

    fn post_message(&self, data: &str, target_origin: &str) -> Result<(), TransportError> {
        let window = self
            .element
            .content_window()
            .ok_or(TransportError::WindowUnavailable)?;
        window
            .post_message(&JsValue::from_str(data), target_origin)
            .map_err(|error| TransportError::PostFailed {
                target_origin: target_origin.to_string(),
                reason: js_reason(&error),
            })
    }
}
