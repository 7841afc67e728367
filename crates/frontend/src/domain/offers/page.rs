use contracts::domain::offer::{Offer, OfferForm};
use contracts::validation::{validate_required, ValidationError};
use leptos::prelude::*;

use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::{ErrorBanner, FieldErrors};
use crate::shared::dom::confirm;

fn discount_label(offer: &Offer) -> String {
    if offer.discount_type == "percentage" {
        format!("{}%", offer.discount_value)
    } else {
        format!("{} ر.س", offer.discount_value)
    }
}

fn validate_offer(form: &OfferForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(validate_required(&form.title, "title", "عنوان العرض"));
    errors.extend(validate_required(&form.start_date, "start_date", "تاريخ البداية"));
    errors.extend(validate_required(&form.end_date, "end_date", "تاريخ النهاية"));
    if !form.start_date.is_empty() && !form.end_date.is_empty() && form.end_date < form.start_date {
        errors.push(ValidationError {
            field: "end_date".to_string(),
            message: "تاريخ النهاية يجب أن يكون بعد تاريخ البداية".to_string(),
        });
    }
    if form.discount_value < 0.0 {
        errors.push(ValidationError {
            field: "discount_value".to_string(),
            message: "قيمة الخصم يجب أن تكون أكبر من أو تساوي صفر".to_string(),
        });
    }
    errors
}

#[component]
pub fn OffersPage() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiClient>().expect("ApiClient not provided"));

    let (offers, set_offers) = signal::<Vec<Offer>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let form = RwSignal::new(OfferForm::default());
    let (field_errors, set_field_errors) = signal::<Vec<ValidationError>>(Vec::new());
    let (saving, set_saving) = signal(false);
    let (deleting_id, set_deleting_id) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_offers(&api.get_value()).await {
                Ok(rows) => {
                    set_offers.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message)),
            }
        });
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        form.set(OfferForm {
            discount_type: "percentage".to_string(),
            is_active: true,
            ..Default::default()
        });
        set_field_errors.set(Vec::new());
        set_show_modal.set(true);
    };

    let open_edit = move |offer: Offer| {
        set_editing_id.set(Some(offer.id.clone()));
        form.set(OfferForm {
            title: offer.title,
            description: offer.description,
            discount_type: offer.discount_type,
            discount_value: offer.discount_value,
            start_date: offer.start_date,
            end_date: offer.end_date,
            related_service_id: offer.related_service_id,
            is_active: offer.is_active,
        });
        set_field_errors.set(Vec::new());
        set_show_modal.set(true);
    };

    let save = move |_| {
        if saving.get() {
            return;
        }
        let current = form.get();
        let errors = validate_offer(&current);
        if !errors.is_empty() {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(Vec::new());
        set_saving.set(true);

        let id = editing_id.get();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_offer(&api.get_value(), id, &current).await,
                None => api::create_offer(&api.get_value(), &current).await,
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

    let delete = move |id: String, title: String| {
        if deleting_id.get().is_some() {
            return;
        }
        if !confirm(&format!("هل تريد حذف العرض \"{}\"؟", title)) {
            return;
        }
        set_deleting_id.set(Some(id.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_offer(&api.get_value(), &id).await {
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
                    <h1 class="page__title">"🏷 العروض"</h1>
                    <p class="page__subtitle">"العروض والخصومات الحالية"</p>
                </div>
                <div class="page__actions">
                    <button class="button button--primary" on:click=open_create>"عرض جديد"</button>
                    <button class="button button--secondary" on:click=move |_| fetch()>"تحديث"</button>
                </div>
            </div>

            <ErrorBanner error=error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th>"العنوان"</th>
                            <th>"الخصم"</th>
                            <th>"من"</th>
                            <th>"إلى"</th>
                            <th>"الحالة"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || offers.get().into_iter().map(|offer| {
                            let for_edit = offer.clone();
                            let id = offer.id.clone();
                            let title = offer.title.clone();
                            let discount = discount_label(&offer);
                            view! {
                                <tr>
                                    <td>{offer.title.clone()}</td>
                                    <td dir="ltr">{discount}</td>
                                    <td dir="ltr">{offer.start_date.clone()}</td>
                                    <td dir="ltr">{offer.end_date.clone()}</td>
                                    <td>
                                        <span class="badge" class:badge--active=offer.is_active>
                                            {if offer.is_active { "فعال" } else { "منتهي" }}
                                        </span>
                                    </td>
                                    <td class="table__row-actions">
                                        <button class="button button--small" on:click=move |_| open_edit(for_edit.clone())>
                                            "تعديل"
                                        </button>
                                        <button
                                            class="button button--small button--danger"
                                            disabled=move || deleting_id.get().is_some()
                                            on:click=move |_| delete(id.clone(), title.clone())
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

            <Show when=move || offers.get().is_empty()>
                <div class="page__empty">"لا توجد عروض حالياً"</div>
            </Show>

            <Show when=move || show_modal.get()>
                <div class="modal-overlay">
                    <div class="modal">
                        <h3 class="modal__title">
                            {move || if editing_id.get().is_some() { "تعديل العرض" } else { "عرض جديد" }}
                        </h3>

                        <div class="form-group">
                            <label>"عنوان العرض"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().title
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                            />
                            <FieldErrors errors=field_errors field="title" />
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

                        <div class="form-group form-group--row">
                            <div>
                                <label>"نوع الخصم"</label>
                                <select
                                    prop:value=move || form.get().discount_type
                                    on:change=move |ev| form.update(|f| f.discount_type = event_target_value(&ev))
                                >
                                    <option value="percentage">"نسبة مئوية"</option>
                                    <option value="fixed">"مبلغ ثابت"</option>
                                </select>
                            </div>
                            <div>
                                <label>"قيمة الخصم"</label>
                                <input
                                    type="number"
                                    dir="ltr"
                                    min="0"
                                    step="0.01"
                                    prop:value=move || form.get().discount_value.to_string()
                                    on:input=move |ev| form.update(|f| {
                                        f.discount_value = event_target_value(&ev).parse().unwrap_or(0.0);
                                    })
                                />
                                <FieldErrors errors=field_errors field="discount_value" />
                            </div>
                        </div>

                        <div class="form-group form-group--row">
                            <div>
                                <label>"تاريخ البداية"</label>
                                <input
                                    type="date"
                                    prop:value=move || form.get().start_date
                                    on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                                />
                                <FieldErrors errors=field_errors field="start_date" />
                            </div>
                            <div>
                                <label>"تاريخ النهاية"</label>
                                <input
                                    type="date"
                                    prop:value=move || form.get().end_date
                                    on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                                />
                                <FieldErrors errors=field_errors field="end_date" />
                            </div>
                        </div>

                        <div class="form-group form-group--inline">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.get().is_active
                                    on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                                />
                                "العرض فعال"
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
