use leptos::prelude::*;

use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::ErrorBanner;
use crate::shared::dom::{confirm, file_from_event};

struct DbAction {
    action: &'static str,
    label: &'static str,
    description: &'static str,
    confirm_message: &'static str,
    destructive: bool,
}

const DB_ACTIONS: &[DbAction] = &[
    DbAction {
        action: "init",
        label: "تهيئة قاعدة البيانات",
        description: "إنشاء الجداول الناقصة دون حذف البيانات",
        confirm_message: "تهيئة قاعدة البيانات؟",
        destructive: false,
    },
    DbAction {
        action: "create-core-tables",
        label: "إنشاء الجداول الأساسية",
        description: "إنشاء جداول الفروع والأطباء والخدمات",
        confirm_message: "إنشاء الجداول الأساسية؟",
        destructive: false,
    },
    DbAction {
        action: "add-sample-data",
        label: "إضافة بيانات تجريبية",
        description: "تعبئة الجداول ببيانات للاختبار",
        confirm_message: "إضافة بيانات تجريبية؟",
        destructive: false,
    },
    DbAction {
        action: "clean",
        label: "تنظيف البيانات",
        description: "حذف محتوى الجداول مع إبقاء الهيكل",
        confirm_message: "سيتم حذف جميع البيانات. هل أنت متأكد؟",
        destructive: true,
    },
    DbAction {
        action: "drop-all-tables",
        label: "حذف جميع الجداول",
        description: "إسقاط كل الجداول نهائيا",
        confirm_message: "سيتم إسقاط جميع الجداول نهائيا. هل أنت متأكد؟",
        destructive: true,
    },
];

/// Database maintenance actions plus bulk CSV import. Everything here is
/// gated behind a browser confirm because most of it is destructive.
#[component]
pub fn MaintenancePage() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiClient>().expect("ApiClient not provided"));

    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    // Path segment of the action currently running, if any.
    let (running, set_running) = signal::<Option<&'static str>>(None);

    let (branches_file, set_branches_file) = signal_local::<Option<web_sys::File>>(None);
    let (doctors_file, set_doctors_file) = signal_local::<Option<web_sys::File>>(None);
    let (services_file, set_services_file) = signal_local::<Option<web_sys::File>>(None);
    let (importing, set_importing) = signal(false);

    let run = move |action: &'static str, confirm_message: &'static str| {
        if running.get().is_some() || !confirm(confirm_message) {
            return;
        }
        set_notice.set(None);
        set_running.set(Some(action));
        wasm_bindgen_futures::spawn_local(async move {
            match api::run_db_action(&api.get_value(), action).await {
                Ok(result) => {
                    set_error.set(None);
                    set_notice.set(Some(result.message));
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_running.set(None);
        });
    };

    let import = move |_| {
        if importing.get() {
            return;
        }
        let branches = branches_file.get();
        let doctors = doctors_file.get();
        let services = services_file.get();
        if branches.is_none() && doctors.is_none() && services.is_none() {
            set_error.set(Some("اختر ملف CSV واحدا على الأقل".to_string()));
            return;
        }
        set_notice.set(None);
        set_importing.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::import_csv(
                &api.get_value(),
                branches.as_ref(),
                doctors.as_ref(),
                services.as_ref(),
            )
            .await
            {
                Ok(result) => {
                    set_error.set(None);
                    set_notice.set(Some(
                        result
                            .message
                            .unwrap_or_else(|| "تم الاستيراد بنجاح".to_string()),
                    ));
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_importing.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"🛠️ الصيانة"</h1>
                    <p class="page__subtitle">"عمليات قاعدة البيانات واستيراد البيانات"</p>
                </div>
            </div>

            <ErrorBanner error=error />

            <Show when=move || notice.get().is_some()>
                <div class="banner banner--success">{move || notice.get().unwrap_or_default()}</div>
            </Show>

            <div class="maintenance__actions">
                {DB_ACTIONS.iter().map(|db_action| {
                    let action = db_action.action;
                    let confirm_message = db_action.confirm_message;
                    let busy = move || running.get() == Some(action);
                    view! {
                        <div class="maintenance__card">
                            <div>
                                <h3>{db_action.label}</h3>
                                <p class="maintenance__description">{db_action.description}</p>
                            </div>
                            <button
                                class="button"
                                class:button--danger=db_action.destructive
                                class:button--secondary=!db_action.destructive
                                disabled=move || running.get().is_some()
                                on:click=move |_| run(action, confirm_message)
                            >
                                {move || if busy() { "جاري التنفيذ...".to_string() } else { db_action.label.to_string() }}
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="maintenance__import">
                <h2>"استيراد من CSV"</h2>
                <div class="form-group">
                    <label>"ملف الفروع"</label>
                    <input
                        type="file"
                        accept=".csv"
                        on:change=move |ev| set_branches_file.set(file_from_event(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"ملف الأطباء"</label>
                    <input
                        type="file"
                        accept=".csv"
                        on:change=move |ev| set_doctors_file.set(file_from_event(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"ملف الخدمات"</label>
                    <input
                        type="file"
                        accept=".csv"
                        on:change=move |ev| set_services_file.set(file_from_event(&ev))
                    />
                </div>
                <button
                    class="button button--primary"
                    disabled=move || importing.get()
                    on:click=import
                >
                    "استيراد"
                </button>
            </div>
        </div>
    }
}
