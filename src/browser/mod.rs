//! Browser-backed collaborators, wired through `web-sys`.

use wasm_bindgen::{JsCast, JsValue};

mod console;
mod dom;
mod fetch;
mod store;
mod timer;

pub use console::ConsoleSink;
pub use dom::BrowserPage;
pub use fetch::FetchTransport;
pub use store::LocalStore;
pub use timer::TimeoutScheduler;

/// Readable text for a thrown JS value.
pub(crate) fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
