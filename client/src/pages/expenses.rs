//! Monthly expenses: month picker, running total, add form, and the list.

#[cfg(test)]
#[path = "expenses_test.rs"]
mod expenses_test;

use leptos::prelude::*;
use records::FieldErrors;
use records::endpoints::{self, Resource};
use records::filters::ColumnFilters;
use records::forms::{EXPENSE_CATEGORIES, ExpenseForm};
use records::grid::{CellValue, ColumnSpec, TableRow};
use records::types::ExpenseRecord;

use super::dashboard::expense_total;
use super::shared::{ListFrame, delete_one, searched_rows, submit, use_list};
use crate::components::data_table::DataTable;
use crate::components::error_panel::SubmitError;
use crate::components::form_field::{SelectField, TextField, bind, static_options};
use crate::components::layout::Layout;
use crate::components::month_picker::MonthPicker;
use crate::state::list::ListState;
use crate::state::ui::UiState;

pub const EXPENSE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("title", "Title"),
    ColumnSpec::new("category", "Category"),
    ColumnSpec::new("amount", "Amount"),
    ColumnSpec::new("date", "Date"),
    ColumnSpec::new("note", "Note"),
];

pub fn expense_row(expense: &ExpenseRecord) -> TableRow {
    TableRow {
        id: expense.id.clone(),
        cells: vec![
            CellValue::text(expense.title.as_str()),
            CellValue::text(expense.category.as_str()),
            CellValue::Number(expense.amount),
            CellValue::Date(expense.date.clone()),
            CellValue::opt_text(expense.note.as_deref()),
        ],
    }
}

#[component]
pub fn ExpensesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let fallback = crate::util::clock::current_month_year();
    let filters = RwSignal::new(ColumnFilters::for_month(fallback.0, fallback.1));
    let list = use_list::<ExpenseRecord, _>(move || {
        let (month0, year) = filters.with(|f| f.month_year_or(fallback));
        endpoints::monthly_expenses(month0, year)
    });
    let rows = searched_rows(list, expense_row);
    let total = move || list.with(|l| expense_total(&l.rows));

    let form = RwSignal::new(ExpenseForm { date: crate::util::clock::today(), ..ExpenseForm::default() });
    let errors = RwSignal::new(FieldErrors::new());
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match form.with_untracked(ExpenseForm::validate) {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                submit(Resource::Expenses, None, payload, busy, submit_error, move || {
                    form.update(|f| {
                        f.title.clear();
                        f.amount.clear();
                        f.note.clear();
                    });
                    list.update(ListState::bump);
                });
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    view! {
        <Layout title="Expenses">
            <div class="page-actions">
                <MonthPicker filters=filters fallback=fallback/>
                <span class="page-actions__total">"Total: " {total}</span>
            </div>
            <form class="record-form record-form--inline" on:submit=on_submit>
                <TextField label="Title" field="title" binding=bind(form, |f| &f.title, |f| &mut f.title) errors=errors/>
                <SelectField
                    label="Category"
                    field="category"
                    binding=bind(form, |f| &f.category, |f| &mut f.category)
                    options=static_options(&EXPENSE_CATEGORIES)
                    errors=errors
                />
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
                <TextField label="Note" field="note" binding=bind(form, |f| &f.note, |f| &mut f.note) errors=errors/>
                <SubmitError error=submit_error/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add Expense"
                </button>
            </form>
            <ListFrame
                loading=Signal::derive(move || list.with(|l| l.loading))
                error=Signal::derive(move || list.with(|l| l.error.clone()))
                on_retry=Callback::new(move |()| list.update(ListState::bump))
            >
                <DataTable
                    columns=EXPENSE_COLUMNS
                    rows=rows
                    on_delete=Callback::new(move |id: String| delete_one(Resource::Expenses, id, list, ui))
                />
            </ListFrame>
        </Layout>
    }
}
