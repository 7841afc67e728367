use contracts::domain::knowledge::{DocumentSource, SourceForm};
use leptos::prelude::*;

use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::ErrorBanner;
use crate::shared::dom::file_from_event;

const SOURCE_TYPES: &[(&str, &str)] = &[
    ("manual", "إدخال يدوي"),
    ("pdf", "ملف PDF"),
    ("url", "رابط"),
];

fn type_label(source_type: &str) -> &str {
    SOURCE_TYPES
        .iter()
        .find(|(value, _)| *value == source_type)
        .map(|(_, label)| *label)
        .unwrap_or(source_type)
}

/// Knowledge base management: document sources plus per-source file ingestion.
#[component]
pub fn KnowledgePage() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiClient>().expect("ApiClient not provided"));

    let (sources, set_sources) = signal::<Vec<DocumentSource>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let (show_form, set_show_form) = signal(false);
    let (saving, set_saving) = signal(false);
    let (title, set_title) = signal(String::new());
    let (source_type, set_source_type) = signal("manual".to_string());
    let (tags, set_tags) = signal(String::new());
    let (language, set_language) = signal("ar".to_string());

    // Id of the source whose file is currently uploading, if any.
    let (ingesting_id, set_ingesting_id) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_sources(&api.get_value()).await {
                Ok(rows) => {
                    set_sources.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_loading.set(false);
        });
    };

    fetch();

    let open_form = move |_| {
        set_title.set(String::new());
        set_source_type.set("manual".to_string());
        set_tags.set(String::new());
        set_language.set("ar".to_string());
        set_show_form.set(true);
    };

    let save = move |_| {
        if saving.get() {
            return;
        }
        let form_title = title.get().trim().to_string();
        if form_title.is_empty() {
            set_error.set(Some("العنوان مطلوب".to_string()));
            return;
        }
        let form_tags = tags.get().trim().to_string();
        let form = SourceForm {
            title: form_title,
            source_type: source_type.get(),
            tags: (!form_tags.is_empty()).then_some(form_tags),
            language: Some(language.get()),
        };
        set_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_source(&api.get_value(), &form).await {
                Ok(_) => {
                    set_show_form.set(false);
                    set_error.set(None);
                    fetch();
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_saving.set(false);
        });
    };

    let ingest = move |source_id: String, ev: web_sys::Event| {
        let Some(file) = file_from_event(&ev) else {
            return;
        };
        if ingesting_id.get().is_some() {
            return;
        }
        set_notice.set(None);
        set_ingesting_id.set(Some(source_id.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            match api::ingest_file(&api.get_value(), &source_id, &file).await {
                Ok(result) => {
                    set_error.set(None);
                    let text = match result.chunks {
                        Some(chunks) => format!("تمت فهرسة الملف: {} مقطع", chunks),
                        None => result
                            .message
                            .unwrap_or_else(|| "تمت فهرسة الملف".to_string()),
                    };
                    set_notice.set(Some(text));
                    fetch();
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_ingesting_id.set(None);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"📚 قاعدة المعرفة"</h1>
                    <p class="page__subtitle">"مصادر المستندات التي يعتمد عليها البوت"</p>
                </div>
                <button class="button button--primary" on:click=open_form>"+ إضافة مصدر"</button>
            </div>

            <ErrorBanner error=error />

            <Show when=move || notice.get().is_some()>
                <div class="banner banner--success">{move || notice.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"جاري التحميل..."</div> }
            >
                <Show
                    when=move || !sources.get().is_empty()
                    fallback=|| view! { <div class="page__empty">"لا توجد مصادر بعد"</div> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"العنوان"</th>
                                <th>"النوع"</th>
                                <th>"الوسوم"</th>
                                <th>"اللغة"</th>
                                <th>"رفع ملف"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || sources.get().into_iter().map(|source| {
                                let id = source.id.clone();
                                let ingest_id = id.clone();
                                let busy = move || ingesting_id.get().as_deref() == Some(id.as_str());
                                view! {
                                    <tr>
                                        <td>{source.title.clone()}</td>
                                        <td>{type_label(&source.source_type).to_string()}</td>
                                        <td>{source.tags.join("، ")}</td>
                                        <td>{source.language.clone().unwrap_or_default()}</td>
                                        <td>
                                            <Show
                                                when=move || !busy()
                                                fallback=|| view! { <span class="table__hint">"جاري الرفع..."</span> }
                                            >
                                                <input
                                                    type="file"
                                                    on:change={
                                                        let ingest_id = ingest_id.clone();
                                                        move |ev| ingest(ingest_id.clone(), ev)
                                                    }
                                                />
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || show_form.get()>
                <div class="modal-overlay">
                    <div class="modal">
                        <h3 class="modal__title">"مصدر جديد"</h3>

                        <div class="form-group">
                            <label>"العنوان"</label>
                            <input
                                type="text"
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label>"النوع"</label>
                            <select
                                prop:value=move || source_type.get()
                                on:change=move |ev| set_source_type.set(event_target_value(&ev))
                            >
                                {SOURCE_TYPES.iter().map(|(value, label)| view! {
                                    <option value=*value>{*label}</option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"الوسوم (مفصولة بفواصل)"</label>
                            <input
                                type="text"
                                prop:value=move || tags.get()
                                on:input=move |ev| set_tags.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label>"اللغة"</label>
                            <select
                                prop:value=move || language.get()
                                on:change=move |ev| set_language.set(event_target_value(&ev))
                            >
                                <option value="ar">"العربية"</option>
                                <option value="en">"English"</option>
                            </select>
                        </div>

                        <div class="modal__actions">
                            <button
                                class="button button--primary"
                                disabled=move || saving.get()
                                on:click=save
                            >
                                "حفظ"
                            </button>
                            <button
                                class="button button--secondary"
                                on:click=move |_| set_show_form.set(false)
                            >
                                "إلغاء"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::type_label;

    #[test]
    fn known_types_get_arabic_labels() {
        assert_eq!(type_label("pdf"), "ملف PDF");
        assert_eq!(type_label("manual"), "إدخال يدوي");
    }

    #[test]
    fn unknown_type_falls_back_to_raw_value() {
        assert_eq!(type_label("docx"), "docx");
    }
}
