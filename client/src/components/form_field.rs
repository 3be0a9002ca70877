//! Controlled inputs bound to string fields of a form struct held in a
//! signal, with the field's validation message underneath.

use leptos::prelude::*;
use records::{FieldErrors, RepeatGroup};
use uuid::Uuid;

/// Read/write handle for one `String` field of a form signal.
#[derive(Clone, Copy)]
pub struct Binding {
    pub value: Signal<String>,
    pub set: Callback<String>,
}

/// Bind one field of `form`. The accessors are plain fn pointers so a
/// binding stays `Copy`.
pub fn bind<T: Send + Sync + 'static>(form: RwSignal<T>, get: fn(&T) -> &String, set: fn(&mut T) -> &mut String) -> Binding {
    Binding {
        value: Signal::derive(move || form.with(|f| get(f).clone())),
        set: Callback::new(move |value: String| form.update(|f| *set(f) = value)),
    }
}

/// Accessors for one repeatable group inside a form struct.
pub struct GroupAccess<T, R> {
    pub group: fn(&T) -> &RepeatGroup<R>,
    pub group_mut: fn(&mut T) -> &mut RepeatGroup<R>,
}

impl<T, R> Clone for GroupAccess<T, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, R> Copy for GroupAccess<T, R> {}

/// Bind one `String` field of the entry `key` inside a repeatable group.
/// Unknown keys read as empty and ignore writes.
pub fn bind_entry<T, R>(
    form: RwSignal<T>,
    access: GroupAccess<T, R>,
    key: Uuid,
    get: fn(&R) -> &String,
    set: fn(&mut R) -> &mut String,
) -> Binding
where
    T: Send + Sync + 'static,
    R: 'static,
{
    Binding {
        value: Signal::derive(move || form.with(|f| (access.group)(f).get(key).map(|r| get(r).clone()).unwrap_or_default())),
        set: Callback::new(move |value: String| {
            form.update(|f| (access.group_mut)(f).update(key, |r| *set(r) = value));
        }),
    }
}

fn error_for(errors: Signal<FieldErrors>, field: &str) -> Signal<Option<String>> {
    let field = field.to_owned();
    Signal::derive(move || errors.with(|e| e.get(&field).map(str::to_owned)))
}

#[component]
pub fn TextField(
    label: &'static str,
    /// Error-map key for this field; repeat rows use `group.{index}.name`.
    #[prop(into)]
    field: String,
    binding: Binding,
    #[prop(into)] errors: Signal<FieldErrors>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let error = error_for(errors, &field);
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class=move || if error.with(Option::is_some) { "form-field__input form-field__input--invalid" } else { "form-field__input" }
                type=input_type
                name=field
                placeholder=placeholder
                prop:value=move || binding.value.get()
                on:input=move |ev| binding.set.run(event_target_value(&ev))
            />
            <Show when=move || error.with(Option::is_some)>
                <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

/// Select over `(value, label)` options; an empty first option forces an
/// explicit choice.
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into)] field: String,
    binding: Binding,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] errors: Signal<FieldErrors>,
) -> impl IntoView {
    let error = error_for(errors, &field);
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-field__input"
                name=field
                on:change=move |ev| binding.set.run(event_target_value(&ev))
            >
                <option value="" selected=move || binding.value.with(String::is_empty)>
                    "Select..."
                </option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let current = value.clone();
                            view! {
                                <option value=value selected=move || binding.value.with(|v| *v == current)>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <Show when=move || error.with(Option::is_some)>
                <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

/// Options whose value and label are the same static string.
pub fn static_options(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| ((*v).to_owned(), (*v).to_owned())).collect()
}

#[component]
pub fn CheckboxField(label: &'static str, checked: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <label class="form-field form-field--checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="form-field__label">{label}</span>
        </label>
    }
}
