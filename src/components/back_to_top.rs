// =============================================================================
// Gravity Web - Back To Top Button
// =============================================================================

use leptos::prelude::*;

use crate::utils;

/// Scroll offset past which the button becomes visible.
const VISIBLE_SCROLL_THRESHOLD: f64 = 500.0;

/// Floating back-to-top button, shown once the page is scrolled down.
#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(utils::scroll_y() > VISIBLE_SCROLL_THRESHOLD);

    utils::listen_on_window("scroll", move || {
        visible.set(utils::scroll_y() > VISIBLE_SCROLL_THRESHOLD);
    });

    view! {
        <a
            href="#top"
            class=move || if visible.get() { "back-top-btn active" } else { "back-top-btn" }
            aria-label="Back to top"
        >
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M12 19V5"></path>
                <polyline points="5 12 12 5 19 12"></polyline>
            </svg>
        </a>
    }
}
