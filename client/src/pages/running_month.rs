//! Running-month class-count pivot: one row per day, one column group per
//! teacher, footers with the backend's running totals.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/monthly-class-count` is fetched for the selected month and reshaped by
//! `records::pivot::build_month_pivot`. The grid is rebuilt on every fetch.
//! This screen has no Retry control; changing the month re-fetches.

#[cfg(test)]
#[path = "running_month_test.rs"]
mod running_month_test;

use leptos::prelude::*;
use records::endpoints;
use records::filters::ColumnFilters;
use records::grid::format_number;
use records::pivot::{MonthPivot, build_month_pivot, duplicate_dates, format_cell};
use records::types::{BucketTotals, ClassRange, EmployeeClassCount};

use super::shared::ListFrame;
use crate::components::layout::Layout;
use crate::components::month_picker::MonthPicker;

/// Bucket values of each teacher, flattened in column order.
pub fn bucket_footer(totals: &[BucketTotals]) -> Vec<String> {
    totals
        .iter()
        .flat_map(|t| ClassRange::ALL.iter().map(|range| format_number(t.get(*range))))
        .collect()
}

/// Combined total per teacher.
pub fn combined_footer(totals: &[BucketTotals]) -> Vec<String> {
    totals.iter().map(|t| format_number(t.total)).collect()
}

/// `Name: 2024-02-03, 2024-02-09` for every teacher with repeated days.
pub fn duplicate_warnings(data: &[EmployeeClassCount]) -> Vec<String> {
    data.iter()
        .filter_map(|record| {
            let dupes = duplicate_dates(record);
            (!dupes.is_empty()).then(|| format!("{}: {}", record.employee.name, dupes.join(", ")))
        })
        .collect()
}

#[component]
pub fn RunningMonthPage() -> impl IntoView {
    let fallback = crate::util::clock::current_month_year();
    let filters = RwSignal::new(ColumnFilters::for_month(fallback.0, fallback.1));
    let selection = Memo::new(move |_| filters.with(|f| f.month_year_or(fallback)));
    let data = RwSignal::new(Vec::<EmployeeClassCount>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let (month0, year) = selection.get();
        let path = endpoints::monthly_class_count(month0, year);
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_json::<Vec<EmployeeClassCount>>(&path).await {
                Ok(rows) => data.set(rows),
                Err(err) => {
                    log::warn!("monthly class count fetch failed: {err}");
                    data.set(Vec::new());
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (path, data);
    });

    let pivot = Memo::new(move |_| {
        let (month0, year) = selection.get();
        data.with(|rows| build_month_pivot(month0, year, rows).map_err(|e| e.to_string()))
    });
    let warnings = Memo::new(move |_| data.with(|rows| duplicate_warnings(rows)));

    view! {
        <Layout title="Running Month">
            <div class="page-actions">
                <MonthPicker filters=filters fallback=fallback/>
            </div>
            <ListFrame loading=loading error=error>
                <Show when=move || warnings.with(|w| !w.is_empty())>
                    <div class="pivot__warning" role="status">
                        <p>"Multiple entries on the same day; the first entry is shown:"</p>
                        <ul>{move || warnings.get().into_iter().map(|w| view! { <li>{w}</li> }).collect_view()}</ul>
                    </div>
                </Show>
                {move || match pivot.get() {
                    Ok(pivot) => view! { <PivotTable pivot=pivot/> }.into_any(),
                    Err(message) => view! { <p class="error-panel__message">{message}</p> }.into_any(),
                }}
            </ListFrame>
        </Layout>
    }
}

#[component]
fn PivotTable(pivot: MonthPivot) -> impl IntoView {
    if pivot.is_empty() {
        return view! { <p class="pivot__empty">{format!("No class counts for {}.", pivot.title())}</p> }.into_any();
    }

    let title = pivot.title();
    let group_headers = pivot
        .columns
        .iter()
        .map(|column| view! { <th colspan="3">{column.employee_name.clone()}</th> })
        .collect_view();
    let bucket_headers = pivot
        .columns
        .iter()
        .flat_map(|_| ClassRange::ALL)
        .map(|range| view! { <th>{range.label()}</th> })
        .collect_view();
    let body = pivot
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .flat_map(|count| ClassRange::ALL.map(|range| count.get(range)))
                .map(|n| view! { <td>{format_cell(n)}</td> })
                .collect_view();
            view! {
                <tr>
                    <th scope="row">{row.date.clone()}</th>
                    {cells}
                </tr>
            }
        })
        .collect_view();
    let footer_row = |label: &'static str, values: Vec<String>| {
        view! {
            <tr>
                <th scope="row">{label}</th>
                {values.into_iter().map(|v| view! { <td>{v}</td> }).collect_view()}
            </tr>
        }
    };
    let combined_row = |label: &'static str, values: Vec<String>| {
        view! {
            <tr>
                <th scope="row">{label}</th>
                {values.into_iter().map(|v| view! { <td colspan="3">{v}</td> }).collect_view()}
            </tr>
        }
    };

    view! {
        <div class="pivot">
            <h2 class="pivot__title">{title}</h2>
            <table class="pivot__table">
                <thead>
                    <tr>
                        <th rowspan="2">"Date"</th>
                        {group_headers}
                    </tr>
                    <tr>{bucket_headers}</tr>
                </thead>
                <tbody>{body}</tbody>
                <tfoot>
                    {footer_row("Classes taken", bucket_footer(&pivot.footer.classes_taken))}
                    {combined_row("Total classes", combined_footer(&pivot.footer.classes_taken))}
                    {footer_row("Income", bucket_footer(&pivot.footer.income))}
                    {combined_row("Total income", combined_footer(&pivot.footer.income))}
                </tfoot>
            </table>
        </div>
    }
    .into_any()
}
