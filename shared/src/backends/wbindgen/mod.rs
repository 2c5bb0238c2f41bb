//! Browser transport built on `window.postMessage`.
//!
//! Call [`Reconciler::receive`](crate::Reconciler::receive) from the page's
//! event handlers or animation frame loop; the listener only queues.

mod iframe_handle;
mod parent_handle;
mod window_listener;

pub use iframe_handle::IframeHandle;
pub use parent_handle::ParentHandle;
pub use window_listener::WindowListener;

use wasm_bindgen::{JsCast, JsValue};

pub(crate) fn js_reason(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
