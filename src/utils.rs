// =============================================================================
// Gravity Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Validation Utilities
// =============================================================================

use leptos::prelude::on_cleanup;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object.
pub fn window() -> Window {
    web_sys::window().expect("No window object available")
}

/// Get the current vertical scroll offset in pixels.
pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Get the browser's user-agent string.
pub fn user_agent() -> String {
    window().navigator().user_agent().unwrap_or_default()
}

/// Navigate to a new URL (full page reload).
pub fn navigate_to(url: &str) {
    let _ = window().location().set_href(url);
}

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    let _ = window().open_with_url_and_target(url, "_blank");
}

/// Attach a window event listener scoped to the current reactive owner.
/// The listener is removed again when the owning scope is cleaned up.
pub fn listen_on_window(event: &'static str, handler: impl Fn() + 'static) {
    let callback = Closure::<dyn Fn()>::new(handler);
    let _ = window().add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());

    // `Closure` is `!Send + !Sync`; `on_cleanup` requires `Send + Sync`. In
    // single-threaded wasm, wrapping in `SendWrapper` satisfies the bound
    // soundly while preserving detach-on-cleanup behavior.
    let callback = SendWrapper::new(callback);
    on_cleanup(move || {
        let _ = window()
            .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    });
}

// -----------------------------------------------------------------------------
// 2. Validation Utilities
// -----------------------------------------------------------------------------

/// Validate an email address (basic `local@domain.tld` check).
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Validate a contact number (10-15 ASCII digits after trimming).
pub fn is_valid_phone(number: &str) -> bool {
    let digits = number.trim();
    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}
