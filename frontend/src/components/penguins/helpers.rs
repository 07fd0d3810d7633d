//! Utility functions for the penguin catalog component.
//!
//! - **User Feedback**: temporary "toast" notifications for the controller's
//!   success, error and info messages.
//! - **Icons**: Material icon names for the card actions.

use common::catalog::NotificationLevel;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 3000;

fn toast_background(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => "rgba(46, 125, 50, 0.92)",
        NotificationLevel::Error => "rgba(198, 40, 40, 0.92)",
        NotificationLevel::Info => "rgba(25, 118, 210, 0.92)",
    }
}

/// Displays a temporary notification message at the top of the screen.
///
/// Creates and injects a styled `div` into the DOM and removes it again after
/// a few seconds. The text is set as plain text content, never as HTML.
pub fn show_toast(level: NotificationLevel, message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("top", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", toast_background(level)).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

pub fn favorite_icon(is_favorite: bool) -> &'static str {
    if is_favorite {
        "favorite"
    } else {
        "favorite_border"
    }
}
