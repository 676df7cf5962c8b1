//! Playback time formatting shared by the gallery and player pages.

/// Format a duration in seconds as `M:SS`.
///
/// Minutes are unbounded (an hour and a minute renders as `61:01`), seconds
/// are zero-padded to two digits. Zero, negative, and non-finite inputs all
/// render as `0:00`, which keeps a missing duration from showing as `NaN:NaN`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}

/// Alias of [`format_time`] for call sites that read as durations rather
/// than positions.
pub fn format_duration(seconds: f64) -> String {
    format_time(seconds)
}
