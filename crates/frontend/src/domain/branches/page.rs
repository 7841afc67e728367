use contracts::domain::branch::{Branch, BranchForm};
use contracts::validation::{validate_branch, ValidationError};
use leptos::prelude::*;

use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::{ErrorBanner, FieldErrors};
use crate::shared::dom::confirm;

#[component]
pub fn BranchesPage() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiClient>().expect("ApiClient not provided"));

    let (branches, set_branches) = signal::<Vec<Branch>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    // Modal form state. `editing_id` decides between POST and PUT.
    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let form = RwSignal::new(BranchForm::default());
    let (field_errors, set_field_errors) = signal::<Vec<ValidationError>>(Vec::new());
    let (saving, set_saving) = signal(false);
    let (deleting_id, set_deleting_id) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            set_loading.set(true);
            match api::fetch_branches(&api.get_value()).await {
                Ok(rows) => {
                    set_branches.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message)),
            }
            set_loading.set(false);
        });
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        form.set(BranchForm {
            is_active: true,
            working_hours: serde_json::Value::String(String::new()),
            ..Default::default()
        });
        set_field_errors.set(Vec::new());
        set_show_modal.set(true);
    };

    let open_edit = move |branch: Branch| {
        set_editing_id.set(Some(branch.id.clone()));
        form.set(BranchForm {
            name: branch.name,
            city: branch.city,
            address: branch.address,
            location_url: branch.location_url,
            phone: branch.phone,
            working_hours: branch.working_hours,
            is_active: branch.is_active,
        });
        set_field_errors.set(Vec::new());
        set_show_modal.set(true);
    };

    let save = move |_| {
        if saving.get() {
            return;
        }
        let current = form.get();
        let errors = validate_branch(&current);
        if !errors.is_empty() {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(Vec::new());
        set_saving.set(true);

        let id = editing_id.get();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_branch(&api.get_value(), id, &current).await,
                None => api::create_branch(&api.get_value(), &current).await,
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

    let delete = move |id: String, name: String| {
        if deleting_id.get().is_some() {
            return;
        }
        if !confirm(&format!("هل تريد حذف الفرع \"{}\"؟", name)) {
            return;
        }
        set_deleting_id.set(Some(id.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_branch(&api.get_value(), &id).await {
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
                    <h1 class="page__title">"🏢 الفروع"</h1>
                    <p class="page__subtitle">"فروع العيادة ومواقعها"</p>
                </div>
                <div class="page__actions">
                    <button class="button button--primary" on:click=open_create>
                        "فرع جديد"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "تحديث"
                    </button>
                </div>
            </div>

            <ErrorBanner error=error />

            <Show when=move || loading.get()>
                <div class="page__loading">"جارٍ التحميل..."</div>
            </Show>

            <div class="card-grid">
                {move || branches.get().into_iter().map(|branch| {
                    let for_edit = branch.clone();
                    let id = branch.id.clone();
                    let name = branch.name.clone();
                    let hours = branch.working_hours_label();
                    view! {
                        <div class="card" class:card--inactive=!branch.is_active>
                            <div class="card__header">
                                <div>
                                    <h3 class="card__title">{branch.name.clone()}</h3>
                                    <p class="card__subtitle">{branch.city.clone()}</p>
                                </div>
                                <span class="badge" class:badge--active=branch.is_active>
                                    {if branch.is_active { "مفتوح" } else { "مغلق" }}
                                </span>
                            </div>
                            <div class="card__body">
                                <div>"📍 " {if branch.address.is_empty() { "لا يوجد عنوان".to_string() } else { branch.address.clone() }}</div>
                                <div dir="ltr">"📞 " {branch.phone.clone().unwrap_or_else(|| "لا يوجد رقم".to_string())}</div>
                                <Show when={
                                    let hours = hours.clone();
                                    move || !hours.is_empty()
                                }>
                                    <div>"🕐 " {hours.clone()}</div>
                                </Show>
                            </div>
                            <div class="card__actions">
                                <button
                                    class="button button--small"
                                    on:click=move |_| open_edit(for_edit.clone())
                                >
                                    "تعديل"
                                </button>
                                <button
                                    class="button button--small button--danger"
                                    disabled=move || deleting_id.get().is_some()
                                    on:click=move |_| delete(id.clone(), name.clone())
                                >
                                    "حذف"
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || !loading.get() && branches.get().is_empty()>
                <div class="page__empty">"لا توجد فروع حالياً"</div>
            </Show>

            <Show when=move || show_modal.get()>
                <div class="modal-overlay">
                    <div class="modal">
                        <h3 class="modal__title">
                            {move || if editing_id.get().is_some() { "تعديل الفرع" } else { "فرع جديد" }}
                        </h3>

                        <div class="form-group">
                            <label>"اسم الفرع"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                            <FieldErrors errors=field_errors field="name" />
                        </div>

                        <div class="form-group">
                            <label>"المدينة"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().city
                                on:input=move |ev| form.update(|f| f.city = event_target_value(&ev))
                            />
                            <FieldErrors errors=field_errors field="city" />
                        </div>

                        <div class="form-group">
                            <label>"العنوان"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().address
                                on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                            />
                            <FieldErrors errors=field_errors field="address" />
                        </div>

                        <div class="form-group">
                            <label>"رقم الهاتف"</label>
                            <input
                                type="tel"
                                dir="ltr"
                                placeholder="05xxxxxxxx"
                                prop:value=move || form.get().phone.unwrap_or_default()
                                on:input=move |ev| form.update(|f| {
                                    let value = event_target_value(&ev);
                                    f.phone = if value.is_empty() { None } else { Some(value) };
                                })
                            />
                            <FieldErrors errors=field_errors field="phone" />
                        </div>

                        <div class="form-group">
                            <label>"رابط الموقع على الخريطة"</label>
                            <input
                                type="url"
                                dir="ltr"
                                prop:value=move || form.get().location_url.unwrap_or_default()
                                on:input=move |ev| form.update(|f| {
                                    let value = event_target_value(&ev);
                                    f.location_url = if value.is_empty() { None } else { Some(value) };
                                })
                            />
                        </div>

                        <div class="form-group">
                            <label>"ساعات العمل"</label>
                            <input
                                type="text"
                                placeholder="من 8ص حتى 10م"
                                prop:value=move || match form.get().working_hours {
                                    serde_json::Value::String(s) => s,
                                    other => other.to_string(),
                                }
                                on:input=move |ev| form.update(|f| {
                                    f.working_hours = serde_json::Value::String(event_target_value(&ev));
                                })
                            />
                        </div>

                        <div class="form-group form-group--inline">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.get().is_active
                                    on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                                />
                                "الفرع نشط"
                            </label>
                        </div>

                        <div class="modal__actions">
                            <button
                                class="button button--primary"
                                disabled=move || saving.get()
                                on:click=save
                            >
                                {move || if saving.get() { "جارٍ الحفظ..." } else { "حفظ" }}
                            </button>
                            <button
                                class="button button--secondary"
                                on:click=move |_| set_show_modal.set(false)
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
