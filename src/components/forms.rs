// =============================================================================
// Gravity Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. TextArea
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Single-line text input with a reactive inline error line.
#[component]
pub fn TextInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] name: String,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    view! {
        <div class="form-field" class:has-error=move || error.get().is_some()>
            <input
                type=input_type
                name=name
                class="form-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |e| {
                    value.set(event_target_value(&e));
                }
            />
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Multi-line text area with a reactive inline error line.
#[component]
pub fn TextArea(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] name: String,
    #[prop(optional)] rows: u32,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };

    view! {
        <div class="form-field" class:has-error=move || error.get().is_some()>
            <textarea
                class="form-textarea"
                name=name
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |e| {
                    value.set(event_target_value(&e));
                }
            />
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </div>
    }
}
