//! Multi-step create/edit wizard for employees, teachers, and directors.
//!
//! DESIGN
//! ======
//! The whole wizard edits one `EmployeeForm` signal. "Next" runs the full
//! validator but only surfaces errors owned by the current step, so a step
//! advances exactly when its own fields are valid. The final submit validates
//! everything and, on failure, jumps back to the first step with errors.

#[cfg(test)]
#[path = "employee_form_test.rs"]
mod employee_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use records::endpoints::Resource;
use records::forms::{ClassPaymentInput, EmployeeForm, EmployeeStep, GENDERS};
use records::types::{ClassRange, Employee, EmployeeRole, PaymentMethod};
use records::{FieldErrors, RepeatGroup};

use super::employees::staff_route;
use super::shared::{load_item, submit};
use crate::components::error_panel::SubmitError;
use crate::components::form_field::{
    Binding, CheckboxField, GroupAccess, SelectField, TextField, bind, bind_entry, static_options,
};
use crate::components::layout::Layout;
use crate::components::stepper::Stepper;

/// Collection a role is written to.
pub fn resource_for(role: EmployeeRole) -> Resource {
    match role {
        EmployeeRole::Teacher => Resource::Teachers,
        EmployeeRole::Employee | EmployeeRole::Director => Resource::Employees,
    }
}

/// First step holding any of `errors`, if one does.
pub fn first_step_with_errors(errors: &FieldErrors) -> Option<EmployeeStep> {
    EmployeeStep::ALL.into_iter().find(|step| !errors.only(step.fields()).is_empty())
}

fn parse_payment_method(raw: &str) -> PaymentMethod {
    if raw == PaymentMethod::PerClass.label() { PaymentMethod::PerClass } else { PaymentMethod::Monthly }
}

fn payments(form: &EmployeeForm) -> &RepeatGroup<ClassPaymentInput> {
    &form.per_class_payments
}

fn payments_mut(form: &mut EmployeeForm) -> &mut RepeatGroup<ClassPaymentInput> {
    &mut form.per_class_payments
}

const PAYMENT_ROWS: GroupAccess<EmployeeForm, ClassPaymentInput> =
    GroupAccess { group: payments, group_mut: payments_mut };

#[component]
pub fn EmployeeFormPage(role: EmployeeRole) -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let edit_id = params.with_untracked(|p| p.get("id"));
    let resource = resource_for(role);
    let back = if role == EmployeeRole::Director { "/directors" } else { staff_route(resource) };

    let form = RwSignal::new(EmployeeForm::for_role(role));
    let step = RwSignal::new(EmployeeStep::default());
    let errors = RwSignal::new(FieldErrors::new());
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    if let Some(id) = edit_id.clone() {
        load_item(resource, id, move |employee: Employee| form.set(EmployeeForm::from_employee(&employee)), submit_error);
    }

    let title = format!("{} {}", if edit_id.is_some() { "Edit" } else { "Add" }, role.label());

    let on_next = move |_| {
        let current = step.get_untracked();
        let step_errors = form.with_untracked(|f| f.validate_step(current));
        if step_errors.is_empty() {
            errors.set(FieldErrors::new());
            step.set(current.next());
        } else {
            errors.set(step_errors);
        }
    };
    let on_back = move |_| step.update(|s| *s = s.prev());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || !step.get_untracked().is_last() {
            return;
        }
        match form.with_untracked(EmployeeForm::validate) {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                let navigate = navigate.clone();
                submit(resource, edit_id.clone(), payload, busy, submit_error, move || {
                    navigate(back, NavigateOptions::default());
                });
            }
            Err(all_errors) => {
                if let Some(target) = first_step_with_errors(&all_errors) {
                    step.set(target);
                }
                errors.set(all_errors);
            }
        }
    };

    view! {
        <Layout title=title>
            <Stepper current=step/>
            <form class="record-form record-form--wizard" on:submit=on_submit>
                {move || match step.get() {
                    EmployeeStep::Personal => view! { <PersonalStep form=form errors=errors/> }.into_any(),
                    EmployeeStep::Education => view! { <EducationStep form=form errors=errors/> }.into_any(),
                    EmployeeStep::Payment => view! { <PaymentStep form=form errors=errors/> }.into_any(),
                    EmployeeStep::Review => view! { <ReviewStep form=form/> }.into_any(),
                }}
                <SubmitError error=submit_error/>
                <div class="record-form__actions">
                    <a class="btn" href=back>"Cancel"</a>
                    <Show when=move || { step.get().index() > 0 }>
                        <button class="btn" type="button" on:click=on_back>"Back"</button>
                    </Show>
                    <Show
                        when=move || step.get().is_last()
                        fallback=move || view! { <button class="btn btn--primary" type="button" on:click=on_next>"Next"</button> }
                    >
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Submit" }}
                        </button>
                    </Show>
                </div>
            </form>
        </Layout>
    }
}

#[component]
fn PersonalStep(form: RwSignal<EmployeeForm>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    view! {
        <TextField label="Name" field="name" binding=bind(form, |f| &f.name, |f| &mut f.name) errors=errors/>
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
        <SelectField
            label="Gender"
            field="gender"
            binding=bind(form, |f| &f.gender, |f| &mut f.gender)
            options=static_options(&GENDERS)
            errors=errors
        />
        <TextField
            label="Designation"
            field="designation"
            binding=bind(form, |f| &f.designation, |f| &mut f.designation)
            errors=errors
        />
        <TextField
            label="Join date"
            field="joinDate"
            input_type="date"
            binding=bind(form, |f| &f.join_date, |f| &mut f.join_date)
            errors=errors
        />
    }
}

#[component]
fn EducationStep(form: RwSignal<EmployeeForm>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let studying = Signal::derive(move || form.with(|f| f.is_currently_studying));
    view! {
        <TextField
            label="Institution"
            field="institution"
            binding=bind(form, |f| &f.institution, |f| &mut f.institution)
            errors=errors
        />
        <TextField label="Subject" field="subject" binding=bind(form, |f| &f.subject, |f| &mut f.subject) errors=errors/>
        <CheckboxField
            label="Currently studying"
            checked=studying
            on_change=Callback::new(move |checked: bool| form.update(|f| f.is_currently_studying = checked))
        />
        <Show
            when=move || studying.get()
            fallback=move || {
                view! {
                    <TextField
                        label="Passing year"
                        field="passingYear"
                        input_type="number"
                        binding=bind(form, |f| &f.passing_year, |f| &mut f.passing_year)
                        errors=errors
                    />
                    <TextField
                        label="CGPA"
                        field="cgpa"
                        input_type="number"
                        placeholder="0.00 - 5.00"
                        binding=bind(form, |f| &f.cgpa, |f| &mut f.cgpa)
                        errors=errors
                    />
                }
            }
        >
            <TextField
                label="Admission year"
                field="admissionYear"
                input_type="number"
                binding=bind(form, |f| &f.admission_year, |f| &mut f.admission_year)
                errors=errors
            />
        </Show>
    }
}

#[component]
fn PaymentStep(form: RwSignal<EmployeeForm>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let method = Binding {
        value: Signal::derive(move || form.with(|f| f.payment_method.label().to_owned())),
        set: Callback::new(move |raw: String| form.update(|f| f.payment_method = parse_payment_method(&raw))),
    };
    let per_class = move || form.with(|f| f.payment_method == PaymentMethod::PerClass);
    let keys = Memo::new(move |_| form.with(|f| f.per_class_payments.keys()));
    let can_remove = move || form.with(|f| f.per_class_payments.can_remove());
    let range_options: Vec<(String, String)> =
        ClassRange::ALL.iter().map(|r| (r.label().to_owned(), r.label().to_owned())).collect();

    view! {
        <SelectField
            label="Payment method"
            field="paymentMethod"
            binding=method
            options=static_options(&[PaymentMethod::Monthly.label(), PaymentMethod::PerClass.label()])
            errors=errors
        />
        <Show
            when=per_class
            fallback=move || {
                view! {
                    <TextField
                        label="Payment per month"
                        field="paymentPerMonth"
                        input_type="number"
                        binding=bind(form, |f| &f.payment_per_month, |f| &mut f.payment_per_month)
                        errors=errors
                    />
                }
            }
        >
            <fieldset class="repeat-group">
                <legend>"Per-class payments"</legend>
                {
                    let range_options = range_options.clone();
                    move || {
                        keys.get()
                            .into_iter()
                            .enumerate()
                            .map(|(idx, key)| {
                                view! {
                                    <div class="repeat-group__row">
                                        <SelectField
                                            label="Class range"
                                            field=format!("perClassPayments.{idx}.classRange")
                                            binding=bind_entry(form, PAYMENT_ROWS, key, |r| &r.class_range, |r| &mut r.class_range)
                                            options=range_options.clone()
                                            errors=errors
                                        />
                                        <TextField
                                            label="Amount"
                                            field=format!("perClassPayments.{idx}.amount")
                                            input_type="number"
                                            binding=bind_entry(form, PAYMENT_ROWS, key, |r| &r.amount, |r| &mut r.amount)
                                            errors=errors
                                        />
                                        <Show when=can_remove>
                                            <button
                                                class="btn btn--small btn--danger"
                                                type="button"
                                                on:click=move |_| {
                                                    form.update(|f| {
                                                        f.per_class_payments.remove(key);
                                                    });
                                                }
                                            >
                                                "Remove"
                                            </button>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()
                    }
                }
                <button
                    class="btn btn--small"
                    type="button"
                    on:click=move |_| {
                        form.update(|f| {
                            f.per_class_payments.push(ClassPaymentInput::default());
                        });
                    }
                >
                    "+ Add rate"
                </button>
            </fieldset>
        </Show>
    }
}

/// Label/value pairs shown on the review step.
pub fn review_lines(form: &EmployeeForm) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("Role", form.role.label().to_owned()),
        ("Name", form.name.clone()),
        ("Phone", form.phone.clone()),
        ("Email", form.email.clone()),
        ("Gender", form.gender.clone()),
        ("Designation", form.designation.clone()),
        ("Join date", form.join_date.clone()),
        ("Institution", form.institution.clone()),
        ("Subject", form.subject.clone()),
    ];
    if form.is_currently_studying {
        lines.push(("Admission year", form.admission_year.clone()));
    } else {
        lines.push(("Passing year", form.passing_year.clone()));
        lines.push(("CGPA", form.cgpa.clone()));
    }
    lines.push(("Payment method", form.payment_method.label().to_owned()));
    match form.payment_method {
        PaymentMethod::Monthly => lines.push(("Payment per month", form.payment_per_month.clone())),
        PaymentMethod::PerClass => {
            let rates: Vec<String> =
                form.per_class_payments.values().map(|r| format!("{}: {}", r.class_range, r.amount)).collect();
            lines.push(("Per-class rates", rates.join(", ")));
        }
    }
    lines
}

#[component]
fn ReviewStep(form: RwSignal<EmployeeForm>) -> impl IntoView {
    view! {
        <dl class="review">
            {move || {
                form.with(review_lines)
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <dt>{label}</dt>
                            <dd>{if value.trim().is_empty() { "—".to_owned() } else { value }}</dd>
                        }
                    })
                    .collect_view()
            }}
        </dl>
    }
}
