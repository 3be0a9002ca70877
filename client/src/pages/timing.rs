//! Management regular timing: directors' in/out slots per day.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

use leptos::prelude::*;
use records::endpoints::Resource;
use records::forms::TimingForm;
use records::grid::{CellValue, ColumnSpec, TableRow};
use records::types::{Director, DirectorTiming, TimingSlot};
use records::{FieldErrors, RepeatGroup};

use super::shared::{ListFrame, delete_one, searched_rows, submit, use_list};
use crate::components::data_table::DataTable;
use crate::components::error_panel::SubmitError;
use crate::components::form_field::{GroupAccess, SelectField, TextField, bind, bind_entry};
use crate::components::layout::Layout;
use crate::state::list::ListState;
use crate::state::ui::UiState;

pub const TIMING_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("director", "Director"),
    ColumnSpec::new("date", "Date"),
    ColumnSpec::new("timings", "Timings"),
];

/// `09:00-12:00, 14:00-16:30`.
pub fn slots_text(slots: &[TimingSlot]) -> String {
    slots.iter().map(|s| format!("{}-{}", s.in_time, s.out_time)).collect::<Vec<_>>().join(", ")
}

pub fn timing_row(timing: &DirectorTiming) -> TableRow {
    TableRow {
        id: timing.id.clone(),
        cells: vec![
            CellValue::text(timing.director.name.as_str()),
            CellValue::Date(timing.date.clone()),
            CellValue::text(slots_text(&timing.timings)),
        ],
    }
}

fn slots(form: &TimingForm) -> &RepeatGroup<TimingSlot> {
    &form.slots
}

fn slots_mut(form: &mut TimingForm) -> &mut RepeatGroup<TimingSlot> {
    &mut form.slots
}

const SLOT_ROWS: GroupAccess<TimingForm, TimingSlot> = GroupAccess { group: slots, group_mut: slots_mut };

#[component]
pub fn TimingPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let list = use_list::<DirectorTiming, _>(|| Resource::ManagementTiming.path().to_owned());
    let directors = use_list::<Director, _>(|| Resource::Directors.path().to_owned());
    let rows = searched_rows(list, timing_row);
    let director_options: Signal<Vec<(String, String)>> =
        Signal::derive(move || directors.with(|l| l.rows.iter().map(|d| (d.id.clone(), d.name.clone())).collect()));

    let blank = move || TimingForm { date: crate::util::clock::today(), ..TimingForm::default() };
    let form = RwSignal::new(blank());
    let editing = RwSignal::new(None::<String>);
    let errors = RwSignal::new(FieldErrors::new());
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let slot_keys = Memo::new(move |_| form.with(|f| f.slots.keys()));

    let on_edit = Callback::new(move |id: String| {
        let Some(timing) = list.with_untracked(|l| l.rows.iter().find(|t| t.id == id).cloned()) else {
            return;
        };
        form.set(TimingForm::from_timing(&timing));
        errors.set(FieldErrors::new());
        editing.set(Some(id));
    });
    let on_cancel = move |_| {
        form.set(blank());
        errors.set(FieldErrors::new());
        editing.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match form.with_untracked(TimingForm::validate) {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                submit(Resource::ManagementTiming, editing.get_untracked(), payload, busy, submit_error, move || {
                    form.set(blank());
                    editing.set(None);
                    list.update(ListState::bump);
                });
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    view! {
        <Layout title="Management Timing">
            <form class="record-form" on:submit=on_submit>
                <SelectField
                    label="Director"
                    field="director"
                    binding=bind(form, |f| &f.director_id, |f| &mut f.director_id)
                    options=director_options
                    errors=errors
                />
                <TextField
                    label="Date"
                    field="date"
                    input_type="date"
                    binding=bind(form, |f| &f.date, |f| &mut f.date)
                    errors=errors
                />
                <fieldset class="repeat-group">
                    <legend>"Timings"</legend>
                    {move || {
                        slot_keys
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(idx, key)| {
                                view! {
                                    <div class="repeat-group__row">
                                        <TextField
                                            label="In"
                                            field=format!("timings.{idx}.inTime")
                                            input_type="time"
                                            binding=bind_entry(form, SLOT_ROWS, key, |s| &s.in_time, |s| &mut s.in_time)
                                            errors=errors
                                        />
                                        <TextField
                                            label="Out"
                                            field=format!("timings.{idx}.outTime")
                                            input_type="time"
                                            binding=bind_entry(form, SLOT_ROWS, key, |s| &s.out_time, |s| &mut s.out_time)
                                            errors=errors
                                        />
                                        <Show when=move || form.with(|f| f.slots.can_remove())>
                                            <button
                                                class="btn btn--small btn--danger"
                                                type="button"
                                                on:click=move |_| {
                                                    form.update(|f| {
                                                        f.slots.remove(key);
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
                    }}
                    <button
                        class="btn btn--small"
                        type="button"
                        on:click=move |_| {
                            form.update(|f| {
                                f.slots.push(TimingSlot::default());
                            });
                        }
                    >
                        "+ Add slot"
                    </button>
                </fieldset>
                <SubmitError error=submit_error/>
                <div class="record-form__actions">
                    <Show when=move || editing.with(Option::is_some)>
                        <button class="btn" type="button" on:click=on_cancel>"Cancel edit"</button>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if editing.with(Option::is_some) { "Save Timing" } else { "Add Timing" }}
                    </button>
                </div>
            </form>
            <ListFrame
                loading=Signal::derive(move || list.with(|l| l.loading))
                error=Signal::derive(move || list.with(|l| l.error.clone()))
                on_retry=Callback::new(move |()| list.update(ListState::bump))
            >
                <DataTable
                    columns=TIMING_COLUMNS
                    rows=rows
                    on_edit=on_edit
                    on_delete=Callback::new(move |id: String| delete_one(Resource::ManagementTiming, id, list, ui))
                />
            </ListFrame>
        </Layout>
    }
}
