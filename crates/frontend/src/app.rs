use leptos::prelude::*;

use crate::layout::Shell;
use crate::routes::{CurrentPage, Page};
use crate::shared::api::{ApiClient, ApiConfig};

#[component]
pub fn App() -> impl IntoView {
    // Single API client for the whole app; configuration is resolved once
    // here and never mutated afterwards.
    let config = ApiConfig::from_env();
    log::info!("clinic backend: {}", config.base_url);
    provide_context(ApiClient::new(config));

    let current: CurrentPage = RwSignal::new(Page::Branches);
    provide_context(current);

    view! { <Shell /> }
}
