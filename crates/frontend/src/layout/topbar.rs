use leptos::prelude::*;

use crate::routes::CurrentPage;
use crate::shared::api::ApiClient;

#[component]
pub fn Topbar() -> impl IntoView {
    let current = use_context::<CurrentPage>().expect("CurrentPage not provided");
    let api = use_context::<ApiClient>().expect("ApiClient not provided");
    let base_url = api.base_url().to_string();

    view! {
        <header class="topbar">
            <div class="topbar__title">
                <span class="topbar__brand">"لوحة إدارة العيادة"</span>
                <span class="topbar__page">{move || current.get().label()}</span>
            </div>
            <div class="topbar__backend" dir="ltr" title="Backend">
                {base_url}
            </div>
        </header>
    }
}
