//! Collaborator traits behind the page-facing helpers.
//!
//! Everything the helpers touch in a live page (DOM, console, timers,
//! localStorage, fetch) is reached through one of these traits, so the same
//! logic runs natively against the in-memory fakes used by the test suite.
//! `wasm32` builds get ready-made implementations in the `browser` module.

use std::future::Future;

use crate::error::{StoreError, TransportError};
use crate::http::{HttpRequest, HttpResponse};

/// DOM surface of the current page.
///
/// `Element` is an opaque handle; equality means element identity, which the
/// modal backdrop check relies on.
pub trait Page {
    type Element: Clone + PartialEq;

    /// Look up an element by id, like `document.getElementById`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Every element matching `selector`, like `document.querySelectorAll`.
    fn select_all(&self, selector: &str) -> Vec<Self::Element>;

    /// First descendant of `root` matching `selector`.
    fn select_within(&self, root: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Create a `<div>` with the given id and inline CSS and append it to the
    /// document body. `None` when the page has no body to append to.
    fn create_overlay(&self, id: &str, css_text: &str) -> Option<Self::Element>;

    fn add_class(&self, el: &Self::Element, class: &str);

    fn remove_class(&self, el: &Self::Element, class: &str);

    /// Set one inline style property, CSS-cased (`border-left`).
    fn set_style(&self, el: &Self::Element, property: &str, value: &str);

    /// Replace the element's inner HTML.
    fn set_html(&self, el: &Self::Element, html: &str);

    /// Vertical scroll offset of the page, in pixels.
    fn scroll_offset(&self) -> f64;

    /// Query string of the current location, including any leading `?`.
    fn query_string(&self) -> String;

    /// Register a page scroll listener. Listeners stay registered for the
    /// page lifetime; there is no unregistration path.
    fn on_scroll(&self, handler: Box<dyn FnMut()>);

    /// Register a click listener on one element. When `prevent_default` is
    /// set the default action is suppressed before the handler runs.
    fn on_click(&self, el: &Self::Element, prevent_default: bool, handler: Box<dyn FnMut()>);

    /// Register a document-level click listener. The handler receives the
    /// event target when the target is an element.
    fn on_document_click(&self, handler: Box<dyn FnMut(Self::Element)>);
}

/// Console-shaped logging sink.
///
/// `data` mirrors the optional second console argument and is rendered
/// alongside the message when present.
pub trait LogSink {
    fn log(&self, message: &str, data: Option<&str>);
    fn warn(&self, message: &str, data: Option<&str>);
    fn error(&self, message: &str, data: Option<&str>);
}

/// One-shot timer source, setTimeout/clearTimeout shaped.
pub trait Scheduler {
    type Handle;

    /// Run `f` once after `delay_ms`. Handles stay valid after firing;
    /// canceling a fired handle is a no-op.
    fn schedule(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

/// Per-origin persistent string store, localStorage shaped.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// HTTP primitive under the API wrapper.
///
/// Transports only move bytes; interpreting the status and body is the
/// wrapper's job.
pub trait HttpTransport {
    fn execute(
        &self,
        url: &str,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}
