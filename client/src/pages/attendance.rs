//! Attendance log: a mark-attendance form above the list of records.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use leptos::prelude::*;
use records::FieldErrors;
use records::endpoints::Resource;
use records::forms::AttendanceForm;
use records::grid::{CellValue, ColumnSpec, TableRow};
use records::types::{AttendanceRecord, AttendanceStatus, Employee, PersonKind, Student};

use super::shared::{ListFrame, delete_one, searched_rows, submit, use_list};
use crate::components::data_table::DataTable;
use crate::components::error_panel::SubmitError;
use crate::components::form_field::{Binding, SelectField, TextField, bind, static_options};
use crate::components::layout::Layout;
use crate::state::list::ListState;
use crate::state::ui::UiState;

pub const ATTENDANCE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("person", "Person"),
    ColumnSpec::new("personKind", "Type"),
    ColumnSpec::new("date", "Date"),
    ColumnSpec::new("status", "Status"),
    ColumnSpec::new("note", "Note"),
];

pub fn kind_label(kind: PersonKind) -> &'static str {
    match kind {
        PersonKind::Student => "Student",
        PersonKind::Employee => "Employee",
    }
}

fn parse_kind(raw: &str) -> PersonKind {
    if raw == kind_label(PersonKind::Employee) { PersonKind::Employee } else { PersonKind::Student }
}

pub fn attendance_row(record: &AttendanceRecord) -> TableRow {
    TableRow {
        id: record.id.clone(),
        cells: vec![
            CellValue::text(record.person.name.as_str()),
            CellValue::text(kind_label(record.person_kind)),
            CellValue::Date(record.date.clone()),
            CellValue::text(record.status.label()),
            CellValue::opt_text(record.note.as_deref()),
        ],
    }
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let list = use_list::<AttendanceRecord, _>(|| Resource::Attendance.path().to_owned());
    let students = use_list::<Student, _>(|| Resource::Students.path().to_owned());
    let employees = use_list::<Employee, _>(|| Resource::Employees.path().to_owned());
    let rows = searched_rows(list, attendance_row);

    let form = RwSignal::new(AttendanceForm { date: crate::util::clock::today(), ..AttendanceForm::default() });
    let errors = RwSignal::new(FieldErrors::new());
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let kind = Binding {
        value: Signal::derive(move || form.with(|f| kind_label(f.person_kind).to_owned())),
        set: Callback::new(move |raw: String| {
            form.update(|f| {
                f.person_kind = parse_kind(&raw);
                f.person_id.clear();
            });
        }),
    };
    let people: Signal<Vec<(String, String)>> = Signal::derive(move || match form.with(|f| f.person_kind) {
        PersonKind::Student => students.with(|l| l.rows.iter().map(|s| (s.id.clone(), s.name.clone())).collect()),
        PersonKind::Employee => employees.with(|l| l.rows.iter().map(|e| (e.id.clone(), e.name.clone())).collect()),
    });
    let statuses: Vec<&str> = AttendanceStatus::ALL.iter().map(|s| s.label()).collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match form.with_untracked(AttendanceForm::validate) {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                submit(Resource::Attendance, None, payload, busy, submit_error, move || {
                    form.update(|f| {
                        f.person_id.clear();
                        f.note.clear();
                    });
                    list.update(ListState::bump);
                });
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    view! {
        <Layout title="Attendance">
            <form class="record-form record-form--inline" on:submit=on_submit>
                <SelectField
                    label="Type"
                    field="personKind"
                    binding=kind
                    options=static_options(&[kind_label(PersonKind::Student), kind_label(PersonKind::Employee)])
                    errors=errors
                />
                <SelectField
                    label="Person"
                    field="personId"
                    binding=bind(form, |f| &f.person_id, |f| &mut f.person_id)
                    options=people
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
                    label="Status"
                    field="status"
                    binding=bind(form, |f| &f.status, |f| &mut f.status)
                    options=static_options(&statuses)
                    errors=errors
                />
                <TextField label="Note" field="note" binding=bind(form, |f| &f.note, |f| &mut f.note) errors=errors/>
                <SubmitError error=submit_error/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Mark"
                </button>
            </form>
            <ListFrame
                loading=Signal::derive(move || list.with(|l| l.loading))
                error=Signal::derive(move || list.with(|l| l.error.clone()))
                on_retry=Callback::new(move |()| list.update(ListState::bump))
            >
                <DataTable
                    columns=ATTENDANCE_COLUMNS
                    rows=rows
                    on_delete=Callback::new(move |id: String| delete_one(Resource::Attendance, id, list, ui))
                />
            </ListFrame>
        </Layout>
    }
}
