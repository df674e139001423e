//! Browser helpers shared by the components: toasts, alerts, page reloads,
//! the current clock and the user's local UTC offset.
//!
//! Pure parsing helpers live here too so they can be tested natively.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use pulldown_cmark::{html, Parser};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows a short-lived notification at the bottom of the page.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("forge-toast");
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("white-space", "pre-line").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(4000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Blocking browser alert. Used for validation errors and submit outcomes.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            gloo_console::error!(format!("alert failed: {}", message));
        }
    }
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if window.location().reload().is_err() {
            gloo_console::error!("page reload failed");
        }
    }
}

pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// The browser's current UTC offset.
pub fn local_offset() -> FixedOffset {
    offset_from_js_minutes(js_sys::Date::new_0().get_timezone_offset())
}

/// `Date.getTimezoneOffset()` counts minutes *behind* UTC, so the sign flips.
pub fn offset_from_js_minutes(minutes: f64) -> FixedOffset {
    if !minutes.is_finite() {
        return Utc.fix();
    }
    FixedOffset::east_opt(-(minutes as i32) * 60).unwrap_or_else(|| Utc.fix())
}

/// Parses a whole-number form field. Blank or invalid input reads as zero.
pub fn parse_whole(raw: &str) -> u32 {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0).map(|v| v.floor() as u32))
        .unwrap_or(0)
}

/// Parses an amount field. Blank or invalid input reads as zero.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

pub fn format_cost(cost: f64) -> String {
    format!("${:.2}", cost)
}

pub fn parse_markdown_to_html(input: &str) -> String {
    let parser = Parser::new(input);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
