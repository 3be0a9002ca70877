//! Dashboard: headcounts and the current month's expense total.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. The four collections are independent, so
//! they are requested together with `futures::join!` and each card shows its
//! own result or error.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use records::ApiError;
use records::grid::format_number;
use records::types::ExpenseRecord;

use crate::components::layout::Layout;

/// One summary card.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    pub href: &'static str,
}

fn count_text(result: &Result<usize, ApiError>) -> String {
    match result {
        Ok(count) => count.to_string(),
        Err(_) => "—".to_owned(),
    }
}

/// Sum of expense amounts, formatted for display.
pub fn expense_total(expenses: &[ExpenseRecord]) -> String {
    format_number(expenses.iter().map(|e| e.amount).sum())
}

/// Cards in display order from the four fetch results.
pub fn summary_cards(
    students: &Result<usize, ApiError>,
    employees: &Result<usize, ApiError>,
    teachers: &Result<usize, ApiError>,
    expenses: &Result<Vec<ExpenseRecord>, ApiError>,
) -> Vec<SummaryCard> {
    vec![
        SummaryCard { label: "Students", value: count_text(students), href: "/students" },
        SummaryCard { label: "Employees", value: count_text(employees), href: "/employees" },
        SummaryCard { label: "Teachers", value: count_text(teachers), href: "/teachers" },
        SummaryCard {
            label: "Expenses this month",
            value: expenses.as_ref().map_or_else(|_| "—".to_owned(), |e| expense_total(e)),
            href: "/expenses",
        },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let cards = RwSignal::new(None::<Vec<SummaryCard>>);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use records::endpoints::{self, Resource};
            use records::types::{Employee, Student};

            let (month0, year) = crate::util::clock::current_month_year();
            let expenses_path = endpoints::monthly_expenses(month0, year);
            let (students, employees, teachers, expenses) = futures::join!(
                crate::net::api::list::<Student>(Resource::Students),
                crate::net::api::list::<Employee>(Resource::Employees),
                crate::net::api::list::<Employee>(Resource::Teachers),
                crate::net::api::get_json::<Vec<ExpenseRecord>>(&expenses_path),
            );
            cards.set(Some(summary_cards(
                &students.map(|s| s.len()),
                &employees.map(|e| e.len()),
                &teachers.map(|t| t.len()),
                &expenses,
            )));
        });
    });

    view! {
        <Layout title="Dashboard">
            <Show when=move || cards.with(Option::is_some) fallback=|| view! { <p>"Loading summary..."</p> }>
                <div class="dashboard__cards">
                    {move || {
                        cards
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|card| {
                                view! {
                                    <a class="dashboard__card" href=card.href>
                                        <span class="dashboard__card-label">{card.label}</span>
                                        <span class="dashboard__card-value">{card.value}</span>
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </Layout>
    }
}
