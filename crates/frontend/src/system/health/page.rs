use contracts::domain::diagnostics::SystemHealth;
use leptos::prelude::*;

use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::ErrorBanner;

fn status_icon(status: &str) -> &'static str {
    match status {
        "ok" | "healthy" => "✅",
        "warning" | "degraded" => "⚠️",
        _ => "❌",
    }
}

fn overall_label(status: &str) -> &'static str {
    match status {
        "healthy" => "النظام يعمل بشكل سليم",
        "degraded" => "النظام يعمل مع تحذيرات",
        _ => "النظام يواجه مشاكل",
    }
}

/// System diagnostics: liveness probe plus the per-component check report.
#[component]
pub fn HealthPage() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiClient>().expect("ApiClient not provided"));

    let (alive, set_alive) = signal::<Option<bool>>(None);
    let (health, set_health) = signal::<Option<SystemHealth>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let client = api.get_value();
            match api::fetch_liveness(&client).await {
                Ok(status) => set_alive.set(Some(status.status == "ok")),
                Err(_) => set_alive.set(Some(false)),
            }
            match api::fetch_system_health(&client).await {
                Ok(report) => {
                    set_health.set(Some(report));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_loading.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"🩺 حالة النظام"</h1>
                    <p class="page__subtitle">"فحص مكونات الخادم وقاعدة البيانات"</p>
                </div>
                <button
                    class="button button--secondary"
                    disabled=move || loading.get()
                    on:click=move |_| fetch()
                >
                    "إعادة الفحص"
                </button>
            </div>

            <ErrorBanner error=error />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"جاري الفحص..."</div> }
            >
                <div class="health__liveness">
                    {move || match alive.get() {
                        Some(true) => view! { <span class="tag">"✅ الخادم متصل"</span> },
                        _ => view! { <span class="tag tag--warning">"❌ الخادم غير متصل"</span> },
                    }}
                </div>

                {move || health.get().map(|report| view! {
                    <div class="health__overall">
                        <span>{status_icon(&report.overall_status).to_string()}</span>
                        <span>{overall_label(&report.overall_status).to_string()}</span>
                    </div>

                    <table class="table">
                        <thead>
                            <tr>
                                <th>"المكون"</th>
                                <th>"الحالة"</th>
                                <th>"التفاصيل"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {report.checks.into_iter().map(|check| view! {
                                <tr>
                                    <td>{check.component}</td>
                                    <td>{format!("{} {}", status_icon(&check.status), check.status)}</td>
                                    <td>{check.message}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                })}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{overall_label, status_icon};

    #[test]
    fn component_status_maps_to_icon() {
        assert_eq!(status_icon("ok"), "✅");
        assert_eq!(status_icon("warning"), "⚠️");
        assert_eq!(status_icon("error"), "❌");
    }

    #[test]
    fn unknown_overall_status_reads_as_unhealthy() {
        assert_eq!(overall_label("broken"), "النظام يواجه مشاكل");
    }
}
