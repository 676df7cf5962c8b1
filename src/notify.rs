//! Transient toast notifications rendered into a shared overlay.

use crate::traits::{Page, Scheduler};

/// DOM id of the shared overlay element.
pub const NOTIFICATION_ID: &str = "hoflix-notification";

/// Default visible duration in milliseconds.
pub const DEFAULT_NOTIFICATION_MS: u32 = 2000;

const BASE_CSS: &str = "position: fixed; bottom: 30px; right: 30px; \
    background: rgba(0, 0, 0, 0.9); color: #fff; padding: 12px 20px; \
    border-radius: 4px; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.4); \
    opacity: 0; transition: opacity 0.3s; z-index: 9999; font-size: 14px; \
    display: flex; align-items: center; gap: 10px;";

/// Visual category of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationType {
    #[default]
    Success,
    Error,
    Info,
}

impl NotificationType {
    /// Accent color used for the left border and the glyph.
    pub fn color(self) -> &'static str {
        match self {
            NotificationType::Success => "#46d369",
            NotificationType::Error => "#E50914",
            NotificationType::Info => "#0071eb",
        }
    }

    /// Glyph shown before the message.
    pub fn glyph(self) -> &'static str {
        match self {
            NotificationType::Success => "✓",
            NotificationType::Error => "✗",
            NotificationType::Info => "ℹ",
        }
    }

    /// Map a page-supplied type string; anything unrecognized renders as
    /// info.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => NotificationType::Success,
            "error" => NotificationType::Error,
            _ => NotificationType::Info,
        }
    }
}

/// Show `message` in the shared overlay and fade it out after `duration_ms`.
///
/// The overlay is created on first use and reused afterwards, looked up by
/// [`NOTIFICATION_ID`] on every call. A later call overwrites the content
/// and restores visibility, but fade timers are independent: an earlier
/// notification's timer can hide a later message ahead of its own deadline.
/// The message renders as text, never as markup.
pub fn show_notification<P, S>(
    page: &P,
    scheduler: &S,
    message: &str,
    kind: NotificationType,
    duration_ms: u32,
) where
    P: Page + Clone + 'static,
    S: Scheduler,
{
    let el = match page.element_by_id(NOTIFICATION_ID) {
        Some(el) => el,
        None => match page.create_overlay(NOTIFICATION_ID, BASE_CSS) {
            Some(el) => el,
            // No body to append to, nothing to show.
            None => return,
        },
    };

    page.set_style(&el, "border-left", &format!("4px solid {}", kind.color()));
    page.set_html(&el, &render(message, kind));
    page.set_style(&el, "opacity", "1");

    let fade_page = page.clone();
    let fade_el = el.clone();
    let _ = scheduler.schedule(
        duration_ms,
        Box::new(move || {
            fade_page.set_style(&fade_el, "opacity", "0");
        }),
    );
}

/// Inner HTML of the overlay: a colored glyph span followed by the escaped
/// message.
fn render(message: &str, kind: NotificationType) -> String {
    format!(
        "<span style=\"color: {}; font-weight: bold; font-size: 16px;\">{}</span>{}",
        kind.color(),
        kind.glyph(),
        escape_html(message),
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
