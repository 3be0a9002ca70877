//! Earnings: add form (student and director pickers) plus the list.
//!
//! The pickers need students and directors; both are fetched together with
//! `futures::join!` and also resolve ids to names in the grid.

#[cfg(test)]
#[path = "earnings_test.rs"]
mod earnings_test;

use leptos::prelude::*;
use records::FieldErrors;
use records::endpoints::Resource;
use records::forms::{EARNING_SOURCES, EarningForm, STUDENT_FEE_SOURCE};
use records::grid::{CellValue, ColumnSpec, TableRow};
use records::search::filter_items;
use records::types::{Director, EarningRecord, Student};

use super::shared::{ListFrame, delete_one, submit, use_list};
use crate::components::data_table::DataTable;
use crate::components::error_panel::SubmitError;
use crate::components::form_field::{SelectField, TextField, bind, static_options};
use crate::components::layout::Layout;
use crate::state::list::ListState;
use crate::state::search::SearchState;
use crate::state::ui::UiState;

pub const EARNING_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("source", "Source"),
    ColumnSpec::new("amount", "Amount"),
    ColumnSpec::new("date", "Date"),
    ColumnSpec::new("student", "Student"),
    ColumnSpec::new("receivedBy", "Received by"),
    ColumnSpec::new("note", "Note"),
];

/// Name for `id` among `people`, or the raw id when it is not listed.
fn name_of<'a>(id: Option<&'a str>, people: impl IntoIterator<Item = (&'a str, &'a str)>) -> CellValue {
    let Some(id) = id else {
        return CellValue::Empty;
    };
    let name = people.into_iter().find(|(candidate, _)| *candidate == id).map_or(id, |(_, name)| name);
    CellValue::text(name)
}

pub fn earning_row(record: &EarningRecord, students: &[Student], directors: &[Director]) -> TableRow {
    TableRow {
        id: record.id.clone(),
        cells: vec![
            CellValue::text(record.source.as_str()),
            CellValue::Number(record.amount),
            CellValue::Date(record.date.clone()),
            name_of(record.student_id.as_deref(), students.iter().map(|s| (s.id.as_str(), s.name.as_str()))),
            name_of(record.received_by.as_deref(), directors.iter().map(|d| (d.id.as_str(), d.name.as_str()))),
            CellValue::opt_text(record.note.as_deref()),
        ],
    }
}

#[component]
pub fn EarningsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let search = expect_context::<RwSignal<SearchState>>();
    let list = use_list::<EarningRecord, _>(|| Resource::Earnings.path().to_owned());
    let students = RwSignal::new(Vec::<Student>::new());
    let directors = RwSignal::new(Vec::<Director>::new());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::components::toast::notify;
            use crate::state::ui::ToastKind;

            let (student_result, director_result) = futures::join!(
                crate::net::api::list::<Student>(Resource::Students),
                crate::net::api::list::<Director>(Resource::Directors),
            );
            match student_result {
                Ok(rows) => students.set(rows),
                Err(err) => notify(ui, ToastKind::Error, format!("Students: {err}")),
            }
            match director_result {
                Ok(rows) => directors.set(rows),
                Err(err) => notify(ui, ToastKind::Error, format!("Directors: {err}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (students, directors);
    });

    let rows = Memo::new(move |_| {
        let term = search.with(|s| s.term.clone());
        list.with(|l| {
            students.with(|students| {
                directors.with(|directors| {
                    filter_items(&l.rows, &term).iter().map(|e| earning_row(e, students, directors)).collect::<Vec<_>>()
                })
            })
        })
    });

    let student_options: Signal<Vec<(String, String)>> = Signal::derive(move || {
        students.with(|rows| rows.iter().map(|s| (s.id.clone(), format!("{} (class {})", s.name, s.class_level))).collect())
    });
    let director_options: Signal<Vec<(String, String)>> =
        Signal::derive(move || directors.with(|rows| rows.iter().map(|d| (d.id.clone(), d.name.clone())).collect()));

    let form = RwSignal::new(EarningForm { date: crate::util::clock::today(), ..EarningForm::default() });
    let errors = RwSignal::new(FieldErrors::new());
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let is_student_fee = move || form.with(|f| f.source == STUDENT_FEE_SOURCE);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match form.with_untracked(EarningForm::validate) {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                submit(Resource::Earnings, None, payload, busy, submit_error, move || {
                    form.update(|f| {
                        f.amount.clear();
                        f.student_id.clear();
                        f.note.clear();
                    });
                    list.update(ListState::bump);
                });
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    view! {
        <Layout title="Earnings">
            <form class="record-form record-form--inline" on:submit=on_submit>
                <SelectField
                    label="Source"
                    field="source"
                    binding=bind(form, |f| &f.source, |f| &mut f.source)
                    options=static_options(&EARNING_SOURCES)
                    errors=errors
                />
                <Show when=is_student_fee>
                    <SelectField
                        label="Student"
                        field="studentId"
                        binding=bind(form, |f| &f.student_id, |f| &mut f.student_id)
                        options=student_options
                        errors=errors
                    />
                </Show>
                <TextField
                    label="Amount"
                    field="amount"
                    input_type="number"
                    binding=bind(form, |f| &f.amount, |f| &mut f.amount)
                    errors=errors
                />
                <TextField
                    label="Date"
                    field="date"
                    input_type="date"
                    binding=bind(form, |f| &f.date, |f| &mut f.date)
                    errors=errors
                />
                <SelectField
                    label="Received by"
                    field="receivedBy"
                    binding=bind(form, |f| &f.received_by, |f| &mut f.received_by)
                    options=director_options
                    errors=errors
                />
                <TextField label="Note" field="note" binding=bind(form, |f| &f.note, |f| &mut f.note) errors=errors/>
                <SubmitError error=submit_error/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add Earning"
                </button>
            </form>
            <ListFrame
                loading=Signal::derive(move || list.with(|l| l.loading))
                error=Signal::derive(move || list.with(|l| l.error.clone()))
                on_retry=Callback::new(move |()| list.update(ListState::bump))
            >
                <DataTable
                    columns=EARNING_COLUMNS
                    rows=rows
                    on_delete=Callback::new(move |id: String| delete_one(Resource::Earnings, id, list, ui))
                />
            </ListFrame>
        </Layout>
    }
}
