//! Month/year selector backed by column-filter state.

use leptos::prelude::*;
use records::filters::{ColumnFilters, MONTH_FILTER, YEAR_FILTER};
use records::pivot::MONTH_NAMES;

/// Writes the selection into `filters` under the `month` and `year` ids.
/// Readers parse it back with `ColumnFilters::month_year_or`.
#[component]
pub fn MonthPicker(filters: RwSignal<ColumnFilters>, fallback: (u32, i32)) -> impl IntoView {
    let selected = move || filters.with(|f| f.month_year_or(fallback));

    view! {
        <div class="month-picker">
            <select
                class="month-picker__month"
                aria-label="Month"
                on:change=move |ev| filters.update(|f| f.set(MONTH_FILTER, &event_target_value(&ev)))
            >
                {MONTH_NAMES
                    .iter()
                    .zip(0_u32..)
                    .map(|(name, month0)| {
                        view! {
                            <option value=month0.to_string() selected=move || selected().0 == month0>
                                {*name}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <input
                class="month-picker__year"
                type="number"
                aria-label="Year"
                min="2000"
                max="2100"
                prop:value=move || selected().1.to_string()
                on:change=move |ev| filters.update(|f| f.set(YEAR_FILTER, &event_target_value(&ev)))
            />
        </div>
    }
}
