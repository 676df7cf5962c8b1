//! Trailing-edge debounce over an injected timer source.

use std::rc::Rc;

use crate::traits::Scheduler;

/// Default quiet period in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Defers calls to a wrapped function until a quiet period has passed.
///
/// Every [`call`](Debouncer::call) cancels the previously scheduled run and
/// schedules a fresh one, so during a burst only the most recent arguments
/// reach the function, one quiet period after the burst ends. There is no
/// leading-edge mode and no way to cancel a run once its delay elapses.
pub struct Debouncer<S: Scheduler, A> {
    scheduler: S,
    delay_ms: u32,
    func: Rc<dyn Fn(A)>,
    pending: Option<S::Handle>,
}

impl<S: Scheduler, A: 'static> Debouncer<S, A> {
    pub fn new(scheduler: S, delay_ms: u32, func: impl Fn(A) + 'static) -> Self {
        Debouncer {
            scheduler,
            delay_ms,
            func: Rc::new(func),
            pending: None,
        }
    }

    /// Schedule the wrapped function with `args`, replacing any pending run.
    ///
    /// The handle of a run that already fired may still be canceled here;
    /// the scheduler treats that as a no-op.
    pub fn call(&mut self, args: A) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        let func = Rc::clone(&self.func);
        self.pending = Some(
            self.scheduler
                .schedule(self.delay_ms, Box::new(move || func(args))),
        );
    }
}
