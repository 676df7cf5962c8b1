use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement};

use crate::traits::Page;

/// DOM surface of the live page.
///
/// Listener closures registered here are leaked on purpose; the contract is
/// page-lifetime listeners with no unregistration path.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPage;

fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

fn as_html(el: web_sys::Element) -> Option<HtmlElement> {
    el.dyn_into::<HtmlElement>().ok()
}

impl Page for BrowserPage {
    type Element = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        document()?.get_element_by_id(id).and_then(as_html)
    }

    fn select_all(&self, selector: &str) -> Vec<HtmlElement> {
        let Some(doc) = document() else {
            return Vec::new();
        };
        let Ok(list) = doc.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn select_within(&self, root: &HtmlElement, selector: &str) -> Option<HtmlElement> {
        root.query_selector(selector).ok().flatten().and_then(as_html)
    }

    fn create_overlay(&self, id: &str, css_text: &str) -> Option<HtmlElement> {
        let doc = document()?;
        let el = doc.create_element("div").ok().and_then(as_html)?;
        el.set_id(id);
        el.style().set_css_text(css_text);
        doc.body()?.append_child(&el).ok()?;
        Some(el)
    }

    fn add_class(&self, el: &HtmlElement, class: &str) {
        let _ = el.class_list().add_1(class);
    }

    fn remove_class(&self, el: &HtmlElement, class: &str) {
        let _ = el.class_list().remove_1(class);
    }

    fn set_style(&self, el: &HtmlElement, property: &str, value: &str) {
        let _ = el.style().set_property(property, value);
    }

    fn set_html(&self, el: &HtmlElement, html: &str) {
        el.set_inner_html(html);
    }

    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|win| win.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn query_string(&self) -> String {
        web_sys::window()
            .and_then(|win| win.location().search().ok())
            .unwrap_or_default()
    }

    fn on_scroll(&self, mut handler: Box<dyn FnMut()>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| handler()) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    fn on_click(&self, el: &HtmlElement, prevent_default: bool, mut handler: Box<dyn FnMut()>) {
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            if prevent_default {
                e.prevent_default();
            }
            handler();
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    fn on_document_click(&self, mut handler: Box<dyn FnMut(HtmlElement)>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            let Some(target) = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            handler(target);
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}
