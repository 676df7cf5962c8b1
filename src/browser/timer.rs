use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::traits::Scheduler;

/// setTimeout-backed one-shot scheduler.
///
/// Handles are the browser's timeout ids; clearing an id that already fired
/// is a no-op, which is exactly the contract [`Scheduler`] asks for.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = i32;

    fn schedule(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> i32 {
        let Some(window) = web_sys::window() else {
            return 0;
        };
        let cb = Closure::once_into_js(f);
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.unchecked_ref(),
                delay_ms as i32,
            )
            .unwrap_or(0)
    }

    fn cancel(&self, handle: i32) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle);
        }
    }
}
