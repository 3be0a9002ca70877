//! Employee and teacher lists. Both are the same staff grid over different
//! collections; teachers differ only in the endpoint and route prefix.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::endpoints::Resource;
use records::grid::{CellValue, ColumnSpec, TableRow, format_number};
use records::types::{Employee, PaymentMethod};

use super::shared::{ListFrame, delete_one, delete_selected, searched_rows, selection_handlers, use_list};
use crate::components::data_table::DataTable;
use crate::components::layout::Layout;
use crate::state::list::ListState;
use crate::state::ui::UiState;

pub const STAFF_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("name", "Name"),
    ColumnSpec::new("designation", "Designation"),
    ColumnSpec::new("phone", "Phone"),
    ColumnSpec::new("email", "Email"),
    ColumnSpec::new("gender", "Gender"),
    ColumnSpec::new("joinDate", "Joined"),
    ColumnSpec::new("payment", "Payment"),
];

/// Short payment description: the monthly amount or the per-class rates.
pub fn payment_summary(employee: &Employee) -> String {
    match employee.payment_method {
        PaymentMethod::Monthly => match employee.payment_per_month {
            Some(amount) => format!("{} / month", format_number(amount)),
            None => "Monthly".to_owned(),
        },
        PaymentMethod::PerClass => {
            let rates: Vec<String> = employee
                .per_class_payments
                .iter()
                .map(|p| format!("{}: {}", p.class_range, format_number(p.amount)))
                .collect();
            if rates.is_empty() { "Per class".to_owned() } else { rates.join(", ") }
        }
    }
}

pub fn staff_row(employee: &Employee) -> TableRow {
    TableRow {
        id: employee.id.clone(),
        cells: vec![
            CellValue::text(employee.name.as_str()),
            CellValue::opt_text(employee.designation.as_deref()),
            CellValue::text(employee.phone.as_str()),
            CellValue::opt_text(employee.email.as_deref()),
            CellValue::opt_text(employee.gender.as_deref()),
            employee.join_date.clone().map_or(CellValue::Empty, CellValue::Date),
            CellValue::text(payment_summary(employee)),
        ],
    }
}

/// Route prefix for a staff collection.
pub fn staff_route(resource: Resource) -> &'static str {
    match resource {
        Resource::Teachers => "/teachers",
        _ => "/employees",
    }
}

#[component]
fn StaffList(resource: Resource, title: &'static str, add_label: &'static str) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let list = use_list::<Employee, _>(move || resource.path().to_owned());
    let rows = searched_rows(list, staff_row);
    let (selected, on_toggle, on_toggle_all) = selection_handlers(list);
    let base = staff_route(resource);

    let on_delete = Callback::new(move |id: String| delete_one(resource, id, list, ui));
    let navigate_edit = navigate.clone();
    let on_edit = Callback::new(move |id: String| navigate_edit(&format!("{base}/{id}/edit"), NavigateOptions::default()));

    view! {
        <Layout title=title>
            <div class="page-actions">
                <button
                    class="btn btn--primary"
                    on:click=move |_| navigate(&format!("{base}/new"), NavigateOptions::default())
                >
                    {add_label}
                </button>
                <button
                    class="btn btn--danger"
                    disabled=move || list.with(|l| l.selection.is_empty())
                    on:click=move |_| delete_selected(resource, list, ui)
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
                    columns=STAFF_COLUMNS
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

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! { <StaffList resource=Resource::Employees title="Employees" add_label="+ Add Employee"/> }
}

#[component]
pub fn TeachersPage() -> impl IntoView {
    view! { <StaffList resource=Resource::Teachers title="Teachers" add_label="+ Add Teacher"/> }
}
