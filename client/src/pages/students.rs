//! Student list with search, grid, single and bulk delete.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::endpoints::Resource;
use records::grid::{CellValue, ColumnSpec, TableRow};
use records::types::Student;

use super::shared::{ListFrame, delete_one, delete_selected, searched_rows, selection_handlers, use_list};
use crate::components::data_table::DataTable;
use crate::components::layout::Layout;
use crate::state::list::ListState;
use crate::state::ui::UiState;

pub const STUDENT_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("name", "Name"),
    ColumnSpec::new("classLevel", "Class"),
    ColumnSpec::new("roll", "Roll"),
    ColumnSpec::new("guardianName", "Guardian"),
    ColumnSpec::new("phone", "Phone"),
    ColumnSpec::new("monthlyFee", "Monthly Fee"),
    ColumnSpec::new("admissionDate", "Admitted"),
    ColumnSpec::new("status", "Status"),
];

pub fn student_row(student: &Student) -> TableRow {
    TableRow {
        id: student.id.clone(),
        cells: vec![
            CellValue::text(student.name.as_str()),
            CellValue::Number(f64::from(student.class_level)),
            CellValue::opt_text(student.roll.as_deref()),
            CellValue::opt_text(student.guardian_name.as_deref()),
            CellValue::text(student.phone.as_str()),
            CellValue::Number(student.monthly_fee),
            student.admission_date.clone().map_or(CellValue::Empty, CellValue::Date),
            CellValue::text(if student.is_active { "Active" } else { "Inactive" }),
        ],
    }
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let list = use_list::<Student, _>(|| Resource::Students.path().to_owned());
    let rows = searched_rows(list, student_row);
    let (selected, on_toggle, on_toggle_all) = selection_handlers(list);

    let on_delete = Callback::new(move |id: String| delete_one(Resource::Students, id, list, ui));
    let navigate_edit = navigate.clone();
    let on_edit = Callback::new(move |id: String| navigate_edit(&format!("/students/{id}/edit"), NavigateOptions::default()));

    view! {
        <Layout title="Students">
            <div class="page-actions">
                <button class="btn btn--primary" on:click=move |_| navigate("/students/new", NavigateOptions::default())>
                    "+ Add Student"
                </button>
                <button
                    class="btn btn--danger"
                    disabled=move || list.with(|l| l.selection.is_empty())
                    on:click=move |_| delete_selected(Resource::Students, list, ui)
                >
                    {move || format!("Delete selected ({})", list.with(|l| l.selection.len()))}
                </button>
            </div>
            <ListFrame
                loading=Signal::derive(move || list.with(|l| l.loading))
                error=Signal::derive(move || list.with(|l| l.error.clone()))
                on_retry=Callback::new(move |()| list.update(ListState::bump))
            >
                <DataTable
                    columns=STUDENT_COLUMNS
                    rows=rows
                    selected=selected
                    on_toggle=on_toggle
                    on_toggle_all=on_toggle_all
                    on_edit=on_edit
                    on_delete=on_delete
                />
            </ListFrame>
        </Layout>
    }
}
