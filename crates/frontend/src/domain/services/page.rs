use contracts::domain::service::{Service, ServiceForm};
use contracts::validation::{validate_service, ValidationError};
use leptos::prelude::*;

use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::{ErrorBanner, FieldErrors};
use crate::shared::dom::confirm;

fn format_price(service: &Service) -> String {
    match service.base_price {
        Some(price) => format!("{:.2} ر.س", price),
        None => "-".to_string(),
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiClient>().expect("ApiClient not provided"));

    let (services, set_services) = signal::<Vec<Service>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let form = RwSignal::new(ServiceForm::default());
    // Price is edited as raw text so partial input ("12.") survives typing.
    let (price_input, set_price_input) = signal(String::new());
    let (field_errors, set_field_errors) = signal::<Vec<ValidationError>>(Vec::new());
    let (saving, set_saving) = signal(false);
    let (deleting_id, set_deleting_id) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_services(&api.get_value()).await {
                Ok(rows) => {
                    set_services.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message)),
            }
        });
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        form.set(ServiceForm {
            is_active: true,
            ..Default::default()
        });
        set_price_input.set(String::new());
        set_field_errors.set(Vec::new());
        set_show_modal.set(true);
    };

    let open_edit = move |service: Service| {
        set_editing_id.set(Some(service.id.clone()));
        set_price_input.set(
            service
                .base_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
        );
        form.set(ServiceForm {
            name: service.name,
            description: service.description,
            base_price: service.base_price,
            duration_minutes: service.duration_minutes,
            is_active: service.is_active,
        });
        set_field_errors.set(Vec::new());
        set_show_modal.set(true);
    };

    let save = move |_| {
        if saving.get() {
            return;
        }
        let mut current = form.get();
        let price_text = price_input.get();
        current.base_price = if price_text.trim().is_empty() {
            None
        } else {
            // Unparseable input maps to -1 so validation rejects it with the
            // price message instead of silently dropping the field.
            Some(price_text.trim().parse::<f64>().unwrap_or(-1.0))
        };

        let errors = validate_service(&current);
        if !errors.is_empty() {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(Vec::new());
        set_saving.set(true);

        let id = editing_id.get();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_service(&api.get_value(), id, &current).await,
                None => api::create_service(&api.get_value(), &current).await,
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
        if !confirm(&format!("هل تريد حذف الخدمة \"{}\"؟", name)) {
            return;
        }
        set_deleting_id.set(Some(id.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_service(&api.get_value(), &id).await {
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
                    <h1 class="page__title">"💊 الخدمات"</h1>
                    <p class="page__subtitle">"الخدمات الطبية وأسعارها"</p>
                </div>
                <div class="page__actions">
                    <button class="button button--primary" on:click=open_create>"خدمة جديدة"</button>
                    <button class="button button--secondary" on:click=move |_| fetch()>"تحديث"</button>
                </div>
            </div>

            <ErrorBanner error=error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th>"الخدمة"</th>
                            <th>"الوصف"</th>
                            <th>"السعر"</th>
                            <th>"المدة (دقيقة)"</th>
                            <th>"الحالة"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || services.get().into_iter().map(|service| {
                            let for_edit = service.clone();
                            let id = service.id.clone();
                            let name = service.name.clone();
                            let price = format_price(&service);
                            view! {
                                <tr>
                                    <td>{service.name.clone()}</td>
                                    <td>{service.description.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td dir="ltr">{price}</td>
                                    <td>{service.duration_minutes.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>
                                        <span class="badge" class:badge--active=service.is_active>
                                            {if service.is_active { "نشطة" } else { "غير نشطة" }}
                                        </span>
                                    </td>
                                    <td class="table__row-actions">
                                        <button class="button button--small" on:click=move |_| open_edit(for_edit.clone())>
                                            "تعديل"
                                        </button>
                                        <button
                                            class="button button--small button--danger"
                                            disabled=move || deleting_id.get().is_some()
                                            on:click=move |_| delete(id.clone(), name.clone())
                                        >
                                            "حذف"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || services.get().is_empty()>
                <div class="page__empty">"لا توجد خدمات حالياً"</div>
            </Show>

            <Show when=move || show_modal.get()>
                <div class="modal-overlay">
                    <div class="modal">
                        <h3 class="modal__title">
                            {move || if editing_id.get().is_some() { "تعديل الخدمة" } else { "خدمة جديدة" }}
                        </h3>

                        <div class="form-group">
                            <label>"اسم الخدمة"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                            <FieldErrors errors=field_errors field="name" />
                        </div>

                        <div class="form-group">
                            <label>"الوصف"</label>
                            <textarea
                                rows="3"
                                prop:value=move || form.get().description.unwrap_or_default()
                                on:input=move |ev| form.update(|f| {
                                    let value = event_target_value(&ev);
                                    f.description = if value.is_empty() { None } else { Some(value) };
                                })
                            />
                        </div>

                        <div class="form-group">
                            <label>"السعر الأساسي (ر.س)"</label>
                            <input
                                type="number"
                                dir="ltr"
                                min="0"
                                step="0.01"
                                prop:value=move || price_input.get()
                                on:input=move |ev| set_price_input.set(event_target_value(&ev))
                            />
                            <FieldErrors errors=field_errors field="base_price" />
                        </div>

                        <div class="form-group">
                            <label>"المدة بالدقائق"</label>
                            <input
                                type="number"
                                dir="ltr"
                                min="0"
                                prop:value=move || form.get().duration_minutes.map(|d| d.to_string()).unwrap_or_default()
                                on:input=move |ev| form.update(|f| {
                                    f.duration_minutes = event_target_value(&ev).parse().ok();
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
                                "الخدمة نشطة"
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
