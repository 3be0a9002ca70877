//! Create/edit form for a student. The `:id` route param selects edit mode.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use records::FieldErrors;
use records::endpoints::Resource;
use records::forms::StudentForm;
use records::types::Student;

use super::shared::{load_item, submit};
use crate::components::error_panel::SubmitError;
use crate::components::form_field::{TextField, bind};
use crate::components::layout::Layout;

#[component]
pub fn StudentFormPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let edit_id = params.with_untracked(|p| p.get("id"));
    let form = RwSignal::new(StudentForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    if let Some(id) = edit_id.clone() {
        load_item(Resource::Students, id, move |student: Student| form.set(StudentForm::from_student(&student)), submit_error);
    }

    let title = if edit_id.is_some() { "Edit Student" } else { "Add Student" };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match form.with_untracked(StudentForm::validate) {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                let navigate = navigate.clone();
                submit(Resource::Students, edit_id.clone(), payload, busy, submit_error, move || {
                    navigate("/students", NavigateOptions::default());
                });
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    view! {
        <Layout title=title>
            <form class="record-form" on:submit=on_submit>
                <TextField label="Name" field="name" binding=bind(form, |f| &f.name, |f| &mut f.name) errors=errors/>
                <TextField
                    label="Class"
                    field="classLevel"
                    input_type="number"
                    binding=bind(form, |f| &f.class_level, |f| &mut f.class_level)
                    errors=errors
                />
                <TextField label="Roll" field="roll" binding=bind(form, |f| &f.roll, |f| &mut f.roll) errors=errors/>
                <TextField
                    label="Guardian name"
                    field="guardianName"
                    binding=bind(form, |f| &f.guardian_name, |f| &mut f.guardian_name)
                    errors=errors
                />
                <TextField
                    label="Phone"
                    field="phone"
                    input_type="tel"
                    binding=bind(form, |f| &f.phone, |f| &mut f.phone)
                    errors=errors
                />
                <TextField
                    label="Email"
                    field="email"
                    input_type="email"
                    binding=bind(form, |f| &f.email, |f| &mut f.email)
                    errors=errors
                />
                <TextField
                    label="Admission date"
                    field="admissionDate"
                    input_type="date"
                    binding=bind(form, |f| &f.admission_date, |f| &mut f.admission_date)
                    errors=errors
                />
                <TextField
                    label="Monthly fee"
                    field="monthlyFee"
                    input_type="number"
                    binding=bind(form, |f| &f.monthly_fee, |f| &mut f.monthly_fee)
                    errors=errors
                />
                <SubmitError error=submit_error/>
                <div class="record-form__actions">
                    <a class="btn" href="/students">"Cancel"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Layout>
    }
}
