use contracts::validation::ValidationError;
use leptos::prelude::*;

/// Validation messages for one form field, rendered under its input.
#[component]
pub fn FieldErrors(
    #[prop(into)] errors: Signal<Vec<ValidationError>>,
    field: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            errors
                .get()
                .into_iter()
                .filter(|e| e.field == field)
                .map(|e| view! { <div class="form-group__error">{e.message}</div> })
                .collect_view()
        }}
    }
}
