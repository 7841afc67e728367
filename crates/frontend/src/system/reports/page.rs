use contracts::domain::reports::{AnalyticsSummary, DailyStats};
use leptos::prelude::*;
use std::collections::HashMap;

use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::{ErrorBanner, StatCard};

fn format_date(year: u32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

fn today() -> String {
    let now = js_sys::Date::new_0();
    format_date(
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date(),
    )
}

/// Counter map sorted by count descending, for stable table rendering.
fn sorted_counts(counts: &HashMap<String, i64>) -> Vec<(String, i64)> {
    let mut rows: Vec<_> = counts
        .iter()
        .map(|(key, count)| (key.clone(), *count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

#[component]
fn CountTable(title: &'static str, rows: Signal<Vec<(String, i64)>>) -> impl IntoView {
    view! {
        <div class="report__table">
            <h3>{title}</h3>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <p class="page__empty">"لا توجد بيانات"</p> }
            >
                <table class="table">
                    <tbody>
                        {move || rows.get().into_iter().map(|(key, count)| view! {
                            <tr>
                                <td>{key}</td>
                                <td>{count.to_string()}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
pub fn DailyReportPage() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiClient>().expect("ApiClient not provided"));

    let (date, set_date) = signal(today());
    let (stats, set_stats) = signal(DailyStats::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let (from, set_from) = signal(today());
    let (to, set_to) = signal(today());
    let (summary, set_summary) = signal::<Option<AnalyticsSummary>>(None);
    let (summary_loading, set_summary_loading) = signal(false);

    let fetch = move || {
        let day = date.get();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_daily(&api.get_value(), &day).await {
                Ok(report) => {
                    set_stats.set(report);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_loading.set(false);
        });
    };

    fetch();

    let fetch_summary = move |_| {
        if summary_loading.get() {
            return;
        }
        let range_from = from.get();
        let range_to = to.get();
        set_summary_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_summary(&api.get_value(), &range_from, &range_to).await {
                Ok(result) => {
                    set_summary.set(Some(result));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_summary_loading.set(false);
        });
    };

    let channels = Signal::derive(move || sorted_counts(&stats.get().channels));
    let intents = Signal::derive(move || sorted_counts(&stats.get().top_intents));

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"📊 التقرير اليومي"</h1>
                    <p class="page__subtitle">"ملخص المحادثات والمواعيد ليوم واحد"</p>
                </div>
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:change=move |ev| {
                        set_date.set(event_target_value(&ev));
                        fetch();
                    }
                />
            </div>

            <ErrorBanner error=error />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"جاري التحميل..."</div> }
            >
                <div class="report__cards">
                    <StatCard
                        icon="💬"
                        label="المحادثات"
                        value=Signal::derive(move || stats.get().total_conversations.to_string())
                    />
                    <StatCard
                        icon="📅"
                        label="المواعيد"
                        value=Signal::derive(move || stats.get().total_appointments.to_string())
                    />
                </div>

                <div class="report__tables">
                    <CountTable title="القنوات" rows=channels />
                    <CountTable title="أكثر النوايا" rows=intents />
                </div>
            </Show>

            <div class="report__range">
                <h2>"ملخص فترة"</h2>
                <div class="report__range-controls">
                    <div class="form-group">
                        <label>"من"</label>
                        <input
                            type="date"
                            prop:value=move || from.get()
                            on:change=move |ev| set_from.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"إلى"</label>
                        <input
                            type="date"
                            prop:value=move || to.get()
                            on:change=move |ev| set_to.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        class="button button--primary"
                        disabled=move || summary_loading.get()
                        on:click=fetch_summary
                    >
                        "عرض"
                    </button>
                </div>

                <Show when=move || summary.get().is_some()>
                    <div class="report__cards">
                        <StatCard
                            icon="💬"
                            label="إجمالي المحادثات"
                            value=Signal::derive(move || {
                                summary.get().map(|s| s.total_conversations.to_string()).unwrap_or_default()
                            })
                        />
                        <StatCard
                            icon="📅"
                            label="إجمالي المواعيد"
                            value=Signal::derive(move || {
                                summary.get().map(|s| s.total_appointments.to_string()).unwrap_or_default()
                            })
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{format_date, sorted_counts};
    use std::collections::HashMap;

    #[test]
    fn date_is_zero_padded() {
        assert_eq!(format_date(2024, 3, 7), "2024-03-07");
    }

    #[test]
    fn counts_sort_by_count_then_name() {
        let mut counts = HashMap::new();
        counts.insert("web".to_string(), 2);
        counts.insert("whatsapp".to_string(), 5);
        counts.insert("telegram".to_string(), 2);
        let rows = sorted_counts(&counts);
        assert_eq!(
            rows,
            vec![
                ("whatsapp".to_string(), 5),
                ("telegram".to_string(), 2),
                ("web".to_string(), 2),
            ]
        );
    }
}
