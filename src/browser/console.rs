use wasm_bindgen::JsValue;

use crate::traits::LogSink;

/// Sink forwarding to the devtools console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn log(&self, message: &str, data: Option<&str>) {
        match data {
            Some(data) => web_sys::console::log_2(
                &JsValue::from_str(message),
                &JsValue::from_str(data),
            ),
            None => web_sys::console::log_1(&JsValue::from_str(message)),
        }
    }

    fn warn(&self, message: &str, data: Option<&str>) {
        match data {
            Some(data) => web_sys::console::warn_2(
                &JsValue::from_str(message),
                &JsValue::from_str(data),
            ),
            None => web_sys::console::warn_1(&JsValue::from_str(message)),
        }
    }

    fn error(&self, message: &str, data: Option<&str>) {
        match data {
            Some(data) => web_sys::console::error_2(
                &JsValue::from_str(message),
                &JsValue::from_str(data),
            ),
            None => web_sys::console::error_1(&JsValue::from_str(message)),
        }
    }
}
