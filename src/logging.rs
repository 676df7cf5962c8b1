//! Tagged console logging.
//!
//! Pages log through these helpers so every line carries the app tag and can
//! be grepped apart from third-party noise. The sink is injected, which also
//! lets tests capture output.

use crate::traits::LogSink;

pub(crate) const TAG: &str = "[Hoflix]";
pub(crate) const ERROR_TAG: &str = "[Hoflix Error]";

/// Informational line with the `[Hoflix]` tag and an optional detail value.
pub fn log<L: LogSink>(sink: &L, message: &str, data: Option<&str>) {
    sink.log(&format!("{} {}", TAG, message), data);
}

/// Error line with the `[Hoflix Error]` tag and an optional detail value.
pub fn log_error<L: LogSink>(sink: &L, message: &str, data: Option<&str>) {
    sink.error(&format!("{} {}", ERROR_TAG, message), data);
}

/// Sink that drops everything. Useful where no console exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn log(&self, _message: &str, _data: Option<&str>) {}
    fn warn(&self, _message: &str, _data: Option<&str>) {}
    fn error(&self, _message: &str, _data: Option<&str>) {}
}
