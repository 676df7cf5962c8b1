//! Page chrome wiring: navbar scroll state and modal open/close behavior.

use std::rc::Rc;

use crate::traits::{LogSink, Page};

/// Default navbar element id.
pub const DEFAULT_NAVBAR_ID: &str = "navbar";
/// Default scroll threshold in pixels.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;
/// Default close-button selector inside a modal.
pub const DEFAULT_CLOSE_SELECTOR: &str = ".close";

const SCROLLED_CLASS: &str = "scrolled";

/// Toggle the `scrolled` class on the element `navbar_id` as the page scroll
/// offset crosses `threshold` (strictly greater than).
///
/// The element is looked up on every scroll event, so a navbar rendered
/// after this call still gets picked up; events with no matching element are
/// skipped. The listener stays registered for the page lifetime.
pub fn init_navbar_scroll<P>(page: &P, navbar_id: &str, threshold: f64)
where
    P: Page + Clone + 'static,
{
    let page_at_event = page.clone();
    let navbar_id = navbar_id.to_string();
    page.on_scroll(Box::new(move || {
        let Some(navbar) = page_at_event.element_by_id(&navbar_id) else {
            return;
        };
        if page_at_event.scroll_offset() > threshold {
            page_at_event.add_class(&navbar, SCROLLED_CLASS);
        } else {
            page_at_event.remove_class(&navbar, SCROLLED_CLASS);
        }
    }));
}

/// Wiring description for [`init_modal`].
pub struct ModalConfig<E> {
    modal_id: String,
    trigger_selector: String,
    close_selector: String,
    on_open: Option<Rc<dyn Fn(&E)>>,
    on_close: Option<Rc<dyn Fn(&E)>>,
}

impl<E> ModalConfig<E> {
    pub fn new(modal_id: impl Into<String>, trigger_selector: impl Into<String>) -> Self {
        ModalConfig {
            modal_id: modal_id.into(),
            trigger_selector: trigger_selector.into(),
            close_selector: DEFAULT_CLOSE_SELECTOR.to_string(),
            on_open: None,
            on_close: None,
        }
    }

    /// Override the close-button selector (default `.close`).
    pub fn close_selector(mut self, selector: impl Into<String>) -> Self {
        self.close_selector = selector.into();
        self
    }

    /// Callback invoked with the modal element right after it is shown.
    pub fn on_open(mut self, callback: impl Fn(&E) + 'static) -> Self {
        self.on_open = Some(Rc::new(callback));
        self
    }

    /// Callback invoked with the modal element right after it is hidden.
    pub fn on_close(mut self, callback: impl Fn(&E) + 'static) -> Self {
        self.on_close = Some(Rc::new(callback));
        self
    }
}

/// Wire open and close behavior for one modal.
///
/// Clicking any element matching the trigger selector (collected once, here)
/// suppresses its default action and shows the modal with `display: flex`.
/// Clicking the close button inside the modal, or the modal backdrop itself
/// (the event target must be the modal element, not a descendant), hides it
/// with `display: none`. When the modal id matches nothing, a warning is
/// logged and nothing is wired. Listeners stay registered for the page
/// lifetime.
pub fn init_modal<P, L>(page: &P, sink: &L, config: ModalConfig<P::Element>)
where
    P: Page + Clone + 'static,
    L: LogSink,
{
    let Some(modal) = page.element_by_id(&config.modal_id) else {
        sink.warn(
            &format!("Modal with ID \"{}\" not found", config.modal_id),
            None,
        );
        return;
    };

    for trigger in page.select_all(&config.trigger_selector) {
        let page_open = page.clone();
        let modal_open = modal.clone();
        let on_open = config.on_open.clone();
        page.on_click(
            &trigger,
            true,
            Box::new(move || {
                page_open.set_style(&modal_open, "display", "flex");
                if let Some(callback) = &on_open {
                    callback(&modal_open);
                }
            }),
        );
    }

    if let Some(close_button) = page.select_within(&modal, &config.close_selector) {
        let page_close = page.clone();
        let modal_close = modal.clone();
        let on_close = config.on_close.clone();
        page.on_click(
            &close_button,
            false,
            Box::new(move || {
                page_close.set_style(&modal_close, "display", "none");
                if let Some(callback) = &on_close {
                    callback(&modal_close);
                }
            }),
        );
    }

    let page_backdrop = page.clone();
    let on_close = config.on_close.clone();
    page.on_document_click(Box::new(move |target| {
        if target == modal {
            page_backdrop.set_style(&modal, "display", "none");
            if let Some(callback) = &on_close {
                callback(&modal);
            }
        }
    }));
}
