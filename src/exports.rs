//! `#[wasm_bindgen]` surface for plain HTML pages.
//!
//! Exported names keep the camelCase spelling the page scripts already use
//! and are wired to the [`browser`](crate::browser) collaborators. Rust
//! callers should prefer the crate functions with explicit collaborators.

use std::cell::RefCell;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::browser::{
    BrowserPage, ConsoleSink, FetchTransport, LocalStore, TimeoutScheduler, js_error_message,
};
use crate::debounce::{DEFAULT_DEBOUNCE_MS, Debouncer};
use crate::http::{Credentials, Method, RequestOptions};
use crate::notify::{DEFAULT_NOTIFICATION_MS, NotificationType};
use crate::storage::warn_failed;
use crate::traits::{KeyValueStore, LogSink};
use crate::ui::{DEFAULT_NAVBAR_ID, DEFAULT_SCROLL_THRESHOLD, ModalConfig};
use crate::validation::ValidationResult;

#[wasm_bindgen(js_name = formatTime)]
pub fn format_time(seconds: f64) -> String {
    crate::time::format_time(seconds)
}

#[wasm_bindgen(js_name = formatDuration)]
pub fn format_duration(seconds: f64) -> String {
    crate::time::format_duration(seconds)
}

/// Wire the navbar scroll effect; both arguments are optional on the JS
/// side (`navbar`, 50).
#[wasm_bindgen(js_name = initNavbarScroll)]
pub fn init_navbar_scroll(navbar_id: Option<String>, threshold: Option<f64>) {
    crate::ui::init_navbar_scroll(
        &BrowserPage,
        navbar_id.as_deref().unwrap_or(DEFAULT_NAVBAR_ID),
        threshold.unwrap_or(DEFAULT_SCROLL_THRESHOLD),
    );
}

/// Wire a modal's open and close behavior. `on_open` and `on_close` receive
/// the modal element.
#[wasm_bindgen(js_name = initModal)]
pub fn init_modal(
    modal_id: &str,
    trigger_selector: &str,
    close_selector: Option<String>,
    on_open: Option<Function>,
    on_close: Option<Function>,
) {
    let mut config: ModalConfig<web_sys::HtmlElement> =
        ModalConfig::new(modal_id, trigger_selector);
    if let Some(selector) = close_selector {
        config = config.close_selector(selector);
    }
    if let Some(callback) = on_open {
        config = config.on_open(move |modal: &web_sys::HtmlElement| {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from(modal.clone())) {
                web_sys::console::error_1(&err);
            }
        });
    }
    if let Some(callback) = on_close {
        config = config.on_close(move |modal: &web_sys::HtmlElement| {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from(modal.clone())) {
                web_sys::console::error_1(&err);
            }
        });
    }
    crate::ui::init_modal(&BrowserPage, &ConsoleSink, config);
}

fn validation_to_js(result: &ValidationResult) -> JsValue {
    let out = Object::new();
    let _ = Reflect::set(
        &out,
        &JsValue::from_str("valid"),
        &JsValue::from_bool(result.valid),
    );
    let _ = Reflect::set(
        &out,
        &JsValue::from_str("message"),
        &JsValue::from_str(&result.message),
    );
    out.into()
}

/// Returns `{ valid, message }`.
#[wasm_bindgen(js_name = validateUsername)]
pub fn validate_username(username: &str) -> JsValue {
    validation_to_js(&crate::validation::validate_username(username))
}

/// Returns `{ valid, message }`.
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password(password: &str) -> JsValue {
    validation_to_js(&crate::validation::validate_password(password))
}

/// Returns `{ valid, message }`.
#[wasm_bindgen(js_name = validatePasswordMatch)]
pub fn validate_password_match(password: &str, confirm: &str) -> JsValue {
    validation_to_js(&crate::validation::validate_password_match(password, confirm))
}

/// Bridge a JS value into `serde_json::Value` through `JSON.stringify`.
/// Values JSON cannot represent (circular structures, BigInt) surface as the
/// thrown error.
fn js_to_json(value: &JsValue) -> Result<serde_json::Value, JsValue> {
    let raw = js_sys::JSON::stringify(value)?;
    let Some(raw) = raw.as_string() else {
        // stringify yields undefined for functions, symbols, and undefined.
        return Err(js_sys::Error::new("value has no JSON representation").into());
    };
    serde_json::from_str(&raw).map_err(|err| js_sys::Error::new(&err.to_string()).into())
}

fn json_to_js(value: &serde_json::Value) -> JsValue {
    js_sys::JSON::parse(&value.to_string()).unwrap_or(JsValue::NULL)
}

fn api_error(err: crate::error::ApiError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn parse_options(raw: &JsValue) -> RequestOptions {
    let mut options = RequestOptions::default();
    if !raw.is_object() {
        return options;
    }
    if let Some(method) = get_string(raw, "method") {
        match Method::parse(&method) {
            Some(method) => options.method = Some(method),
            // Leaves the GET default in place.
            None => ConsoleSink.warn(&format!("Unknown request method: {}", method), None),
        }
    }
    if let Some(body) = get_string(raw, "body") {
        options.body = Some(body);
    }
    if let Some(credentials) = get_string(raw, "credentials") {
        options.credentials = Some(Credentials::parse(&credentials));
    }
    if let Ok(headers) = Reflect::get(raw, &JsValue::from_str("headers")) {
        if headers.is_object() {
            for key in Object::keys(headers.unchecked_ref()).iter() {
                let Some(name) = key.as_string() else {
                    continue;
                };
                if let Ok(value) = Reflect::get(&headers, &key) {
                    if let Some(value) = value.as_string() {
                        options.headers.push((name, value));
                    }
                }
            }
        }
    }
    options
}

fn get_string(obj: &JsValue, key: &str) -> Option<String> {
    Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}

/// Fetch `url` and resolve with the parsed JSON body, or reject with an
/// `Error` whose message follows the API error rules.
///
/// `options` takes the fetch-like shape `{ method, headers, body,
/// credentials }`; anything else is ignored.
#[wasm_bindgen(js_name = apiRequest)]
pub async fn api_request(url: String, options: JsValue) -> Result<JsValue, JsValue> {
    let options = parse_options(&options);
    crate::api::api_request(&FetchTransport, &ConsoleSink, &url, options)
        .await
        .map(|value| json_to_js(&value))
        .map_err(api_error)
}

/// POST `body` (any JSON-serializable value) to `url`. Rejects without
/// sending anything when `body` cannot be serialized.
#[wasm_bindgen(js_name = apiPost)]
pub async fn api_post(url: String, body: JsValue) -> Result<JsValue, JsValue> {
    let body = js_to_json(&body)?;
    crate::api::api_post(&FetchTransport, &ConsoleSink, &url, &body)
        .await
        .map(|value| json_to_js(&value))
        .map_err(api_error)
}

/// DELETE `url`.
#[wasm_bindgen(js_name = apiDelete)]
pub async fn api_delete(url: String) -> Result<JsValue, JsValue> {
    crate::api::api_delete(&FetchTransport, &ConsoleSink, &url)
        .await
        .map(|value| json_to_js(&value))
        .map_err(api_error)
}

/// First occurrence of `name` in the current query string, or `null`.
#[wasm_bindgen(js_name = getUrlParam)]
pub fn get_url_param(name: &str) -> Option<String> {
    crate::query::get_url_param(&BrowserPage, name)
}

/// Every query parameter as a plain object; repeated names keep the last
/// value.
#[wasm_bindgen(js_name = getAllUrlParams)]
pub fn get_all_url_params() -> JsValue {
    let out = Object::new();
    for (name, value) in crate::query::get_all_url_params(&BrowserPage) {
        let _ = Reflect::set(
            &out,
            &JsValue::from_str(&name),
            &JsValue::from_str(&value),
        );
    }
    out.into()
}

/// Debounced wrapper around a JS function; see [`debounce`].
#[wasm_bindgen]
pub struct Debounced {
    inner: RefCell<Debouncer<TimeoutScheduler, Array>>,
}

#[wasm_bindgen]
impl Debounced {
    /// Invoke the wrapped function with `args` (spread as arguments) once
    /// the quiet period ends.
    pub fn call(&self, args: Array) {
        self.inner.borrow_mut().call(args);
    }
}

/// Build a debounced handle for `callback`; `delay_ms` defaults to 300.
///
/// Call sites invoke `handle.call([...])` with the arguments the wrapped
/// function should receive.
#[wasm_bindgen]
pub fn debounce(callback: Function, delay_ms: Option<u32>) -> Debounced {
    let debouncer = Debouncer::new(
        TimeoutScheduler,
        delay_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
        move |args: Array| {
            if let Err(err) = callback.apply(&JsValue::NULL, &args) {
                web_sys::console::error_1(&err);
            }
        },
    );
    Debounced {
        inner: RefCell::new(debouncer),
    }
}

/// Read a JSON value from localStorage. The default comes back untouched
/// when the key is absent or its value cannot be read or parsed.
#[wasm_bindgen(js_name = getStorage)]
pub fn get_storage(key: &str, default_value: JsValue) -> JsValue {
    let raw = match LocalStore.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default_value,
        Err(err) => {
            warn_failed(&ConsoleSink, "get", key, &err.to_string());
            return default_value;
        }
    };
    match js_sys::JSON::parse(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn_failed(&ConsoleSink, "get", key, &js_error_message(&err));
            default_value
        }
    }
}

/// Write a JSON-serializable value to localStorage; returns whether the
/// write succeeded. A value that cannot be serialized warns and leaves the
/// store untouched.
#[wasm_bindgen(js_name = setStorage)]
pub fn set_storage(key: &str, value: JsValue) -> bool {
    let value = match js_to_json(&value) {
        Ok(value) => value,
        Err(err) => {
            warn_failed(&ConsoleSink, "set", key, &js_error_message(&err));
            return false;
        }
    };
    crate::storage::set_storage(&LocalStore, &ConsoleSink, key, &value)
}

/// Remove a localStorage key.
#[wasm_bindgen(js_name = removeStorage)]
pub fn remove_storage(key: &str) {
    crate::storage::remove_storage(&LocalStore, &ConsoleSink, key);
}

/// Show a toast. `kind` is `"success"`, `"error"`, or `"info"` (default
/// success); `duration_ms` defaults to 2000.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>, duration_ms: Option<u32>) {
    let kind = kind
        .map(|raw| NotificationType::parse(&raw))
        .unwrap_or_default();
    crate::notify::show_notification(
        &BrowserPage,
        &TimeoutScheduler,
        message,
        kind,
        duration_ms.unwrap_or(DEFAULT_NOTIFICATION_MS),
    );
}

/// Console log with the `[Hoflix]` tag. `data` may be any value and is
/// passed through as a second console argument, so objects stay inspectable.
#[wasm_bindgen(js_name = log)]
pub fn log(message: &str, data: JsValue) {
    let line = JsValue::from_str(&format!("{} {}", crate::logging::TAG, message));
    if data.is_undefined() {
        web_sys::console::log_1(&line);
    } else {
        web_sys::console::log_2(&line, &data);
    }
}

/// Console error with the `[Hoflix Error]` tag.
#[wasm_bindgen(js_name = logError)]
pub fn log_error(message: &str, data: JsValue) {
    let line = JsValue::from_str(&format!("{} {}", crate::logging::ERROR_TAG, message));
    if data.is_undefined() {
        web_sys::console::error_1(&line);
    } else {
        web_sys::console::error_2(&line, &data);
    }
}
