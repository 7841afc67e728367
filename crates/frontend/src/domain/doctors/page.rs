use contracts::domain::branch::Branch;
use contracts::domain::doctor::{Doctor, DoctorForm};
use contracts::validation::{validate_doctor, ValidationError};
use leptos::prelude::*;

use super::api;
use crate::domain::branches::api as branches_api;
use crate::shared::api::ApiClient;
use crate::shared::components::{ErrorBanner, FieldErrors};
use crate::shared::dom::confirm;

#[component]
pub fn DoctorsPage() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiClient>().expect("ApiClient not provided"));

    let (doctors, set_doctors) = signal::<Vec<Doctor>>(Vec::new());
    let (branches, set_branches) = signal::<Vec<Branch>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let form = RwSignal::new(DoctorForm::default());
    let (field_errors, set_field_errors) = signal::<Vec<ValidationError>>(Vec::new());
    let (saving, set_saving) = signal(false);
    let (deleting_id, set_deleting_id) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_doctors(&api.get_value()).await {
                Ok(rows) => {
                    set_doctors.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message)),
            }
        });
    };

    // Branch names for the select; a failure here only degrades the form.
    let fetch_branches = move || {
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(rows) = branches_api::fetch_branches(&api.get_value()).await {
                set_branches.set(rows);
            }
        });
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        form.set(DoctorForm {
            is_active: true,
            ..Default::default()
        });
        set_field_errors.set(Vec::new());
        set_show_modal.set(true);
    };

    let open_edit = move |doctor: Doctor| {
        set_editing_id.set(Some(doctor.id.clone()));
        form.set(DoctorForm {
            name: doctor.name,
            specialty: doctor.specialty,
            branch_id: doctor.branch_id.unwrap_or_default(),
            bio: doctor.bio,
            is_active: doctor.is_active,
        });
        set_field_errors.set(Vec::new());
        set_show_modal.set(true);
    };

    let save = move |_| {
        if saving.get() {
            return;
        }
        let current = form.get();
        let errors = validate_doctor(&current);
        if !errors.is_empty() {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(Vec::new());
        set_saving.set(true);

        let id = editing_id.get();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_doctor(&api.get_value(), id, &current).await,
                None => api::create_doctor(&api.get_value(), &current).await,
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
        if !confirm(&format!("هل تريد حذف الطبيب \"{}\"؟", name)) {
            return;
        }
        set_deleting_id.set(Some(id.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_doctor(&api.get_value(), &id).await {
                Ok(_) => fetch(),
                Err(e) => set_error.set(Some(e.message)),
            }
            set_deleting_id.set(None);
        });
    };

    fetch();
    fetch_branches();

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"🩺 الأطباء"</h1>
                    <p class="page__subtitle">"أطباء العيادة وتخصصاتهم"</p>
                </div>
                <div class="page__actions">
                    <button class="button button--primary" on:click=open_create>"طبيب جديد"</button>
                    <button class="button button--secondary" on:click=move |_| fetch()>"تحديث"</button>
                </div>
            </div>

            <ErrorBanner error=error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th>"الاسم"</th>
                            <th>"التخصص"</th>
                            <th>"نبذة"</th>
                            <th>"الحالة"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || doctors.get().into_iter().map(|doctor| {
                            let for_edit = doctor.clone();
                            let id = doctor.id.clone();
                            let name = doctor.name.clone();
                            view! {
                                <tr>
                                    <td>{doctor.name.clone()}</td>
                                    <td>{doctor.specialty.clone()}</td>
                                    <td>{doctor.bio.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>
                                        <span class="badge" class:badge--active=doctor.is_active>
                                            {if doctor.is_active { "نشط" } else { "غير نشط" }}
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

            <Show when=move || doctors.get().is_empty()>
                <div class="page__empty">"لا يوجد أطباء حالياً"</div>
            </Show>

            <Show when=move || show_modal.get()>
                <div class="modal-overlay">
                    <div class="modal">
                        <h3 class="modal__title">
                            {move || if editing_id.get().is_some() { "تعديل الطبيب" } else { "طبيب جديد" }}
                        </h3>

                        <div class="form-group">
                            <label>"اسم الطبيب"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                            <FieldErrors errors=field_errors field="name" />
                        </div>

                        <div class="form-group">
                            <label>"التخصص"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().specialty
                                on:input=move |ev| form.update(|f| f.specialty = event_target_value(&ev))
                            />
                            <FieldErrors errors=field_errors field="specialty" />
                        </div>

                        <div class="form-group">
                            <label>"الفرع"</label>
                            <select
                                prop:value=move || form.get().branch_id
                                on:change=move |ev| form.update(|f| f.branch_id = event_target_value(&ev))
                            >
                                <option value="">"اختر الفرع"</option>
                                {move || branches.get().into_iter().map(|branch| view! {
                                    <option value=branch.id.clone()>{branch.name.clone()}</option>
                                }).collect_view()}
                            </select>
                            <FieldErrors errors=field_errors field="branch_id" />
                        </div>

                        <div class="form-group">
                            <label>"نبذة"</label>
                            <textarea
                                rows="3"
                                prop:value=move || form.get().bio.unwrap_or_default()
                                on:input=move |ev| form.update(|f| {
                                    let value = event_target_value(&ev);
                                    f.bio = if value.is_empty() { None } else { Some(value) };
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
                                "الطبيب نشط"
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
