use leptos::prelude::*;

/// Inline error panel shown at the top of a page when a backend call fails.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|message| view! {
            <div class="error-banner">
                <span class="error-banner__icon">"⚠"</span>
                <span class="error-banner__text">{message}</span>
            </div>
        })}
    }
}
