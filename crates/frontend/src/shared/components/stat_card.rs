use leptos::prelude::*;

/// Single numeric indicator on the reports page.
#[component]
pub fn StatCard(
    icon: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__icon">{icon}</span>
            <div class="stat-card__body">
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}
