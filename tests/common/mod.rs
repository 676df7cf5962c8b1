//! In-memory fakes implementing the collaborator traits.
//!
//! Each test binary uses a subset of these.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use hoflix_utils::error::{StoreError, TransportError};
use hoflix_utils::http::{HttpRequest, HttpResponse};
use hoflix_utils::traits::{HttpTransport, KeyValueStore, LogSink, Page, Scheduler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
    Error,
}

#[derive(Clone, Debug)]
pub struct Entry {
    pub level: Level,
    pub message: String,
    pub data: Option<String>,
}

/// Sink capturing every line for assertions.
#[derive(Clone, Default)]
pub struct RecordingSink {
    entries: Rc<RefCell<Vec<Entry>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str, data: Option<&str>) {
        self.entries.borrow_mut().push(Entry {
            level,
            message: message.to_string(),
            data: data.map(str::to_string),
        });
    }
}

impl LogSink for RecordingSink {
    fn log(&self, message: &str, data: Option<&str>) {
        self.push(Level::Log, message, data);
    }

    fn warn(&self, message: &str, data: Option<&str>) {
        self.push(Level::Warn, message, data);
    }

    fn error(&self, message: &str, data: Option<&str>) {
        self.push(Level::Error, message, data);
    }
}

struct Task {
    id: u32,
    due_ms: u64,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct SchedulerInner {
    now_ms: u64,
    next_id: u32,
    pending: Vec<Task>,
}

/// Manually advanced timer source.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        ManualScheduler::default()
    }

    /// Advance the clock by `ms`, firing due tasks in due order. Tasks run
    /// outside the internal borrow, so they may schedule or cancel freely.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now_ms + ms;
        loop {
            let task = {
                let mut inner = self.inner.borrow_mut();
                let next = inner
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due_ms <= target)
                    .min_by_key(|(_, task)| (task.due_ms, task.id))
                    .map(|(index, _)| index);
                match next {
                    Some(index) => {
                        let task = inner.pending.remove(index);
                        inner.now_ms = task.due_ms;
                        task
                    }
                    None => {
                        inner.now_ms = target;
                        break;
                    }
                }
            };
            (task.run)();
        }
    }

    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u32;

    fn schedule(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> u32 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due_ms = inner.now_ms + u64::from(delay_ms);
        inner.pending.push(Task {
            id,
            due_ms,
            run: f,
        });
        id
    }

    fn cancel(&self, handle: u32) {
        self.inner.borrow_mut().pending.retain(|task| task.id != handle);
    }
}

/// Element handle used by [`FakePage`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FakeElement(usize);

type ClickHandler = Rc<RefCell<Box<dyn FnMut()>>>;
type ScrollHandler = Rc<RefCell<Box<dyn FnMut()>>>;
type TargetHandler = Rc<RefCell<Box<dyn FnMut(FakeElement)>>>;

#[derive(Default)]
struct ElementState {
    id: Option<String>,
    classes: Vec<String>,
    styles: HashMap<String, String>,
    html: String,
    click_handlers: Vec<(bool, ClickHandler)>,
}

#[derive(Default)]
struct PageInner {
    elements: Vec<ElementState>,
    selector_matches: HashMap<String, Vec<FakeElement>>,
    scoped_matches: HashMap<(usize, String), FakeElement>,
    overlay_css: HashMap<usize, String>,
    scroll_y: f64,
    query: String,
    scroll_handlers: Vec<ScrollHandler>,
    document_click_handlers: Vec<TargetHandler>,
    prevented_defaults: usize,
}

/// In-memory DOM stand-in.
///
/// Selector matching is by registration, not by parsing CSS: tests declare
/// which elements a selector finds. Clicks run the element's own handlers
/// first and then the document-level ones, like a bubbling event.
#[derive(Clone, Default)]
pub struct FakePage {
    inner: Rc<RefCell<PageInner>>,
}

impl FakePage {
    pub fn new() -> Self {
        FakePage::default()
    }

    /// Add an element, optionally reachable by id.
    pub fn add_element(&self, id: Option<&str>) -> FakeElement {
        let mut inner = self.inner.borrow_mut();
        let index = inner.elements.len();
        inner.elements.push(ElementState {
            id: id.map(str::to_string),
            ..ElementState::default()
        });
        FakeElement(index)
    }

    pub fn register_selector(&self, selector: &str, matches: &[FakeElement]) {
        self.inner
            .borrow_mut()
            .selector_matches
            .insert(selector.to_string(), matches.to_vec());
    }

    pub fn register_scoped(&self, root: &FakeElement, selector: &str, target: &FakeElement) {
        self.inner
            .borrow_mut()
            .scoped_matches
            .insert((root.0, selector.to_string()), target.clone());
    }

    pub fn set_scroll(&self, y: f64) {
        self.inner.borrow_mut().scroll_y = y;
    }

    pub fn set_query(&self, query: &str) {
        self.inner.borrow_mut().query = query.to_string();
    }

    /// Fire every scroll handler once.
    pub fn fire_scroll(&self) {
        let handlers: Vec<ScrollHandler> = self.inner.borrow().scroll_handlers.clone();
        for handler in handlers {
            (handler.borrow_mut())();
        }
    }

    /// Click an element: its own handlers run first, then the document-level
    /// handlers see it as the event target.
    pub fn click(&self, el: &FakeElement) {
        let element_handlers: Vec<(bool, ClickHandler)> =
            self.inner.borrow().elements[el.0].click_handlers.clone();
        for (prevent_default, handler) in element_handlers {
            if prevent_default {
                self.inner.borrow_mut().prevented_defaults += 1;
            }
            (handler.borrow_mut())();
        }
        let document_handlers: Vec<TargetHandler> =
            self.inner.borrow().document_click_handlers.clone();
        for handler in document_handlers {
            (handler.borrow_mut())(el.clone());
        }
    }

    pub fn classes(&self, el: &FakeElement) -> Vec<String> {
        self.inner.borrow().elements[el.0].classes.clone()
    }

    pub fn style(&self, el: &FakeElement, property: &str) -> Option<String> {
        self.inner.borrow().elements[el.0]
            .styles
            .get(property)
            .cloned()
    }

    pub fn html(&self, el: &FakeElement) -> String {
        self.inner.borrow().elements[el.0].html.clone()
    }

    pub fn element_count(&self) -> usize {
        self.inner.borrow().elements.len()
    }

    pub fn prevented_defaults(&self) -> usize {
        self.inner.borrow().prevented_defaults
    }

    pub fn overlay_css(&self, el: &FakeElement) -> Option<String> {
        self.inner.borrow().overlay_css.get(&el.0).cloned()
    }
}

impl Page for FakePage {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.inner
            .borrow()
            .elements
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
            .map(FakeElement)
    }

    fn select_all(&self, selector: &str) -> Vec<FakeElement> {
        self.inner
            .borrow()
            .selector_matches
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }

    fn select_within(&self, root: &FakeElement, selector: &str) -> Option<FakeElement> {
        self.inner
            .borrow()
            .scoped_matches
            .get(&(root.0, selector.to_string()))
            .cloned()
    }

    fn create_overlay(&self, id: &str, css_text: &str) -> Option<FakeElement> {
        let el = self.add_element(Some(id));
        self.inner
            .borrow_mut()
            .overlay_css
            .insert(el.0, css_text.to_string());
        Some(el)
    }

    fn add_class(&self, el: &FakeElement, class: &str) {
        let mut inner = self.inner.borrow_mut();
        let classes = &mut inner.elements[el.0].classes;
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, el: &FakeElement, class: &str) {
        self.inner.borrow_mut().elements[el.0]
            .classes
            .retain(|existing| existing != class);
    }

    fn set_style(&self, el: &FakeElement, property: &str, value: &str) {
        self.inner.borrow_mut().elements[el.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn set_html(&self, el: &FakeElement, html: &str) {
        self.inner.borrow_mut().elements[el.0].html = html.to_string();
    }

    fn scroll_offset(&self) -> f64 {
        self.inner.borrow().scroll_y
    }

    fn query_string(&self) -> String {
        self.inner.borrow().query.clone()
    }

    fn on_scroll(&self, handler: Box<dyn FnMut()>) {
        self.inner
            .borrow_mut()
            .scroll_handlers
            .push(Rc::new(RefCell::new(handler)));
    }

    fn on_click(&self, el: &FakeElement, prevent_default: bool, handler: Box<dyn FnMut()>) {
        self.inner.borrow_mut().elements[el.0]
            .click_handlers
            .push((prevent_default, Rc::new(RefCell::new(handler))));
    }

    fn on_document_click(&self, handler: Box<dyn FnMut(FakeElement)>) {
        self.inner
            .borrow_mut()
            .document_click_handlers
            .push(Rc::new(RefCell::new(handler)));
    }
}

/// Store whose every operation fails, for the degradation paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError("store offline".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError("store offline".to_string()))
    }
}

#[derive(Default)]
struct TransportInner {
    script: Vec<Result<HttpResponse, TransportError>>,
    seen: Vec<(String, HttpRequest)>,
}

/// Transport that replays queued responses and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    inner: Rc<RefCell<TransportInner>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        ScriptedTransport::default()
    }

    pub fn push_response(&self, status: u16, status_text: &str, body: &str) {
        self.inner.borrow_mut().script.push(Ok(HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }));
    }

    pub fn push_failure(&self, message: &str) {
        self.inner
            .borrow_mut()
            .script
            .push(Err(TransportError(message.to_string())));
    }

    pub fn requests(&self) -> Vec<(String, HttpRequest)> {
        self.inner.borrow().seen.clone()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn execute(&self, url: &str, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut inner = self.inner.borrow_mut();
        inner.seen.push((url.to_string(), request));
        if inner.script.is_empty() {
            return Err(TransportError("no scripted response".to_string()));
        }
        inner.script.remove(0)
    }
}
