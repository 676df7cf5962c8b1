//! Shared browser-side helpers for the Hoflix pages.
//!
//! The login, gallery, and player pages all need the same small pieces:
//! duration formatting, navbar and modal wiring, form validation, a JSON
//! fetch wrapper, query-string access, debouncing, localStorage helpers, and
//! a toast overlay. This crate collects them behind one flat API.
//!
//! Everything browser-shaped (DOM, console, timers, storage, fetch) is
//! reached through the traits in [`traits`], so the logic also runs natively
//! against in-memory fakes. `wasm32` builds additionally get ready-made
//! backends in `browser` and a page-facing `#[wasm_bindgen]` surface in
//! `exports`.

pub mod api;
pub mod debounce;
pub mod error;
pub mod http;
pub mod logging;
pub mod notify;
pub mod query;
pub mod storage;
pub mod time;
pub mod traits;
pub mod ui;
pub mod validation;

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(target_arch = "wasm32")]
pub mod exports;

pub use api::{api_delete, api_post, api_request};
pub use debounce::{DEFAULT_DEBOUNCE_MS, Debouncer};
pub use error::{ApiError, StoreError, TransportError};
pub use http::{Credentials, HttpRequest, HttpResponse, Method, RequestOptions};
pub use logging::{NoopSink, log, log_error};
pub use notify::{
    DEFAULT_NOTIFICATION_MS, NOTIFICATION_ID, NotificationType, show_notification,
};
pub use query::{get_all_url_params, get_url_param, parse_query};
pub use storage::{MemoryStore, get_storage, remove_storage, set_storage};
pub use time::{format_duration, format_time};
pub use traits::{HttpTransport, KeyValueStore, LogSink, Page, Scheduler};
pub use ui::{
    DEFAULT_CLOSE_SELECTOR, DEFAULT_NAVBAR_ID, DEFAULT_SCROLL_THRESHOLD, ModalConfig,
    init_modal, init_navbar_scroll,
};
pub use validation::{
    ValidationResult, validate_password, validate_password_match, validate_username,
};
