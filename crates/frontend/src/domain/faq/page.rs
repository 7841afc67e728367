use contracts::domain::faq::{Faq, FaqForm};
use contracts::validation::{validate_faq, ValidationError};
use leptos::prelude::*;

use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::{ErrorBanner, FieldErrors};
use crate::shared::dom::confirm;

// Tags are edited as one comma-separated line.
fn parse_tags(input: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = input
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiClient>().expect("ApiClient not provided"));

    let (faqs, set_faqs) = signal::<Vec<Faq>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let form = RwSignal::new(FaqForm::default());
    let (tags_input, set_tags_input) = signal(String::new());
    let (field_errors, set_field_errors) = signal::<Vec<ValidationError>>(Vec::new());
    let (saving, set_saving) = signal(false);
    let (deleting_id, set_deleting_id) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_faqs(&api.get_value()).await {
                Ok(rows) => {
                    set_faqs.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message)),
            }
        });
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        form.set(FaqForm {
            is_active: true,
            ..Default::default()
        });
        set_tags_input.set(String::new());
        set_field_errors.set(Vec::new());
        set_show_modal.set(true);
    };

    let open_edit = move |faq: Faq| {
        set_editing_id.set(Some(faq.id.clone()));
        set_tags_input.set(faq.tags.join(", "));
        form.set(FaqForm {
            question: faq.question,
            answer: faq.answer,
            tags: None,
            is_active: faq.is_active,
        });
        set_field_errors.set(Vec::new());
        set_show_modal.set(true);
    };

    let save = move |_| {
        if saving.get() {
            return;
        }
        let mut current = form.get();
        current.tags = parse_tags(&tags_input.get());

        let errors = validate_faq(&current);
        if !errors.is_empty() {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(Vec::new());
        set_saving.set(true);

        let id = editing_id.get();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_faq(&api.get_value(), id, &current).await,
                None => api::create_faq(&api.get_value(), &current).await,
            };
            set_saving.set(false);
            match result {
                Ok(_) => {
                    set_show_modal.set(false);
                    fetch();
                }
                Err(e) => set_error.set(Some(e.message)),
            }
        });
    };

    let delete = move |id: String| {
        if deleting_id.get().is_some() {
            return;
        }
        if !confirm("هل تريد حذف هذا السؤال؟") {
            return;
        }
        set_deleting_id.set(Some(id.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_faq(&api.get_value(), &id).await {
                Ok(_) => fetch(),
                Err(e) => set_error.set(Some(e.message)),
            }
            set_deleting_id.set(None);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"❓ الأسئلة الشائعة"</h1>
                    <p class="page__subtitle">"الأسئلة التي يجيب عنها البوت تلقائياً"</p>
                </div>
                <div class="page__actions">
                    <button class="button button--primary" on:click=open_create>"سؤال جديد"</button>
                    <button class="button button--secondary" on:click=move |_| fetch()>"تحديث"</button>
                </div>
            </div>

            <ErrorBanner error=error />

            <div class="faq-list">
                {move || faqs.get().into_iter().map(|faq| {
                    let for_edit = faq.clone();
                    let id = faq.id.clone();
                    view! {
                        <div class="faq-item" class:faq-item--inactive=!faq.is_active>
                            <div class="faq-item__question">{faq.question.clone()}</div>
                            <div class="faq-item__answer">{faq.answer.clone()}</div>
                            <div class="faq-item__footer">
                                <div class="faq-item__tags">
                                    {faq.tags.iter().map(|tag| view! {
                                        <span class="tag">{tag.clone()}</span>
                                    }).collect_view()}
                                </div>
                                <div class="faq-item__actions">
                                    <button class="button button--small" on:click=move |_| open_edit(for_edit.clone())>
                                        "تعديل"
                                    </button>
                                    <button
                                        class="button button--small button--danger"
                                        disabled=move || deleting_id.get().is_some()
                                        on:click=move |_| delete(id.clone())
                                    >
                                        "حذف"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || faqs.get().is_empty()>
                <div class="page__empty">"لا توجد أسئلة حالياً"</div>
            </Show>

            <Show when=move || show_modal.get()>
                <div class="modal-overlay">
                    <div class="modal">
                        <h3 class="modal__title">
                            {move || if editing_id.get().is_some() { "تعديل السؤال" } else { "سؤال جديد" }}
                        </h3>

                        <div class="form-group">
                            <label>"السؤال"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().question
                                on:input=move |ev| form.update(|f| f.question = event_target_value(&ev))
                            />
                            <FieldErrors errors=field_errors field="question" />
                        </div>

                        <div class="form-group">
                            <label>"الجواب"</label>
                            <textarea
                                rows="4"
                                prop:value=move || form.get().answer
                                on:input=move |ev| form.update(|f| f.answer = event_target_value(&ev))
                            />
                            <FieldErrors errors=field_errors field="answer" />
                        </div>

                        <div class="form-group">
                            <label>"الوسوم (مفصولة بفواصل)"</label>
                            <input
                                type="text"
                                placeholder="مواعيد, أسعار"
                                prop:value=move || tags_input.get()
                                on:input=move |ev| set_tags_input.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group form-group--inline">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.get().is_active
                                    on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                                />
                                "السؤال فعال"
                            </label>
                        </div>

                        <div class="modal__actions">
                            <button class="button button--primary" disabled=move || saving.get() on:click=save>
                                {move || if saving.get() { "جارٍ الحفظ..." } else { "حفظ" }}
                            </button>
                            <button class="button button--secondary" on:click=move |_| set_show_modal.set(false)>
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
    use super::parse_tags;

    #[test]
    fn comma_separated_tags_are_trimmed() {
        assert_eq!(
            parse_tags("مواعيد, أسعار ,  حجز"),
            Some(vec![
                "مواعيد".to_string(),
                "أسعار".to_string(),
                "حجز".to_string()
            ])
        );
    }

    #[test]
    fn empty_input_yields_no_tags() {
        assert_eq!(parse_tags(""), None);
        assert_eq!(parse_tags(" , ,"), None);
    }
}
