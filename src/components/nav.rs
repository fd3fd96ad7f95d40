// =============================================================================
// Gravity Web - Site Header Component
// =============================================================================
// Sticky header with in-page section links
// Mobile-responsive with hamburger menu, slide-out drawer and overlay
// Picks up an "active" style once the page scrolls past the hero
// =============================================================================

use leptos::prelude::*;

use crate::utils;

/// Scroll offset past which the header switches to its compact style.
const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Site-wide sticky header with section navigation.
#[component]
pub fn SiteHeader() -> impl IntoView {
    // Mobile menu state
    let menu_open = RwSignal::new(false);
    let scrolled = RwSignal::new(utils::scroll_y() > HEADER_SCROLL_THRESHOLD);

    utils::listen_on_window("scroll", move || {
        scrolled.set(utils::scroll_y() > HEADER_SCROLL_THRESHOLD);
    });

    let toggle_menu = move |_| menu_open.update(|open| *open = !*open);
    // Close menu when clicking a link or the overlay
    let close_menu = move |_| menu_open.set(false);

    view! {
        <header class=move || {
            if scrolled.get() || menu_open.get() { "header active" } else { "header" }
        }>
            <div class="container">
                <a href="#home" class="logo">"Gravity"</a>

                <nav class=move || if menu_open.get() { "navbar active" } else { "navbar" }>
                    <div class="wrapper">
                        <button class="nav-close-btn" aria-label="Close menu" on:click=toggle_menu>
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M18 6L6 18"></path>
                                <path d="M6 6l12 12"></path>
                            </svg>
                        </button>
                    </div>
                    <ul class="navbar-list">
                        <li class="navbar-item">
                            <a href="#home" class="navbar-link" on:click=close_menu>"Home"</a>
                        </li>
                        <li class="navbar-item">
                            <a href="#our-services" class="navbar-link" on:click=close_menu>"Our services"</a>
                        </li>
                        <li class="navbar-item">
                            <a href="#features" class="navbar-link" on:click=close_menu>"Features"</a>
                        </li>
                    </ul>
                </nav>

                <button
                    class="nav-open-btn"
                    aria-label="Open menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=toggle_menu
                >
                    <span class="hamburger-line line-1"></span>
                    <span class="hamburger-line line-2"></span>
                    <span class="hamburger-line line-3"></span>
                </button>

                <a href="#contact" class="btn btn-primary">"Let's Talk"</a>

                // Backdrop behind the drawer; tapping it closes the menu
                <div
                    class=move || if menu_open.get() { "overlay active" } else { "overlay" }
                    on:click=close_menu
                ></div>
            </div>
        </header>
    }
}
