//! Sortable, filterable, paginated table over `records::grid`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list page maps its (already search-narrowed) records into
//! `TableRow`s and renders them here. The table owns its `GridState`; the
//! page owns the rows and, for bulk-capable screens, the selection.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use std::collections::BTreeSet;

use leptos::prelude::*;
use records::grid::{ColumnSpec, GridState, GridView, PAGE_SIZES, SortDirection, TableRow};

/// Header suffix showing the active sort on `column`.
pub fn sort_indicator(state: &GridState, column: usize) -> &'static str {
    match state.sort {
        Some(key) if key.column == column => match key.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}

/// Pager caption, e.g. `Page 2 of 3 · 25 rows`.
pub fn page_caption(view: &GridView) -> String {
    let noun = if view.filtered_count == 1 { "row" } else { "rows" };
    format!("Page {} of {} · {} {noun}", view.page_index + 1, view.page_count, view.filtered_count)
}

/// Ids of the rows on the current page, for select-all.
pub fn page_ids(view: &GridView) -> Vec<String> {
    view.rows.iter().map(|row| row.id.clone()).collect()
}

/// Whether the header checkbox should read as checked: every row on the
/// current page is selected. An empty page is never checked.
pub fn page_fully_selected(view: &GridView, selected: &BTreeSet<String>) -> bool {
    !view.rows.is_empty() && view.rows.iter().all(|row| selected.contains(&row.id))
}

#[component]
pub fn DataTable(
    columns: &'static [ColumnSpec],
    #[prop(into)] rows: Signal<Vec<TableRow>>,
    /// Selected ids; enables the checkbox column together with `on_toggle`.
    #[prop(optional, into)]
    selected: Option<Signal<BTreeSet<String>>>,
    #[prop(optional)] on_toggle: Option<Callback<String>>,
    #[prop(optional)] on_toggle_all: Option<Callback<Vec<String>>>,
    #[prop(optional)] on_edit: Option<Callback<String>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let grid = RwSignal::new(GridState::default());
    let projected = Memo::new(move |_| rows.with(|rows| grid.with(|g| g.project(columns, rows))));

    let selectable = selected.is_some() && on_toggle.is_some();
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let is_selected = move |id: &str| selected.is_some_and(|s| s.with(|set| set.contains(id)));

    let column_toggles = columns
        .iter()
        .enumerate()
        .filter(|(_, col)| col.hideable)
        .map(|(idx, col)| {
            view! {
                <label class="data-table__column-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || grid.with(|g| !g.hidden.contains(&idx))
                        on:change=move |_| grid.update(|g| g.toggle_column(columns, idx))
                    />
                    {col.header}
                </label>
            }
        })
        .collect_view();

    let header_cells = move || {
        projected
            .get()
            .visible_columns
            .into_iter()
            .filter_map(|idx| columns.get(idx).map(|col| (idx, *col)))
            .map(|(idx, col)| {
                view! {
                    <th>
                        <button
                            class="data-table__sort"
                            disabled=!col.sortable
                            on:click=move |_| grid.update(|g| g.toggle_sort(columns, idx))
                        >
                            {col.header}
                            {move || grid.with(|g| sort_indicator(g, idx))}
                        </button>
                    </th>
                }
            })
            .collect_view()
    };

    let filter_cells = move || {
        projected
            .get()
            .visible_columns
            .into_iter()
            .filter_map(|idx| columns.get(idx).copied())
            .map(|col| {
                view! {
                    <th>
                        <input
                            class="data-table__filter"
                            type="text"
                            placeholder="Filter"
                            prop:value=move || grid.with(|g| g.filters.get(col.id).unwrap_or_default().to_owned())
                            on:input=move |ev| grid.update(|g| g.set_filter(col.id, &event_target_value(&ev)))
                        />
                    </th>
                }
            })
            .collect_view()
    };

    let body = move || {
        let view_model = projected.get();
        if view_model.rows.is_empty() {
            let span = view_model.visible_columns.len() + usize::from(selectable) + usize::from(has_actions);
            return view! {
                <tr>
                    <td class="data-table__empty" colspan=span>"No records found."</td>
                </tr>
            }
            .into_any();
        }
        let visible = view_model.visible_columns.clone();
        view_model
            .rows
            .into_iter()
            .map(|row| {
                let id = row.id.clone();
                let cells = visible
                    .iter()
                    .map(|idx| {
                        let text = row.cells.get(*idx).map(records::grid::CellValue::display).unwrap_or_default();
                        view! { <td>{text}</td> }
                    })
                    .collect_view();
                let check_id = id.clone();
                let toggle_id = id.clone();
                let edit_id = id.clone();
                let delete_id = id;
                view! {
                    <tr class=move || {
                        if is_selected(&check_id) { "data-table__row data-table__row--selected" } else { "data-table__row" }
                    }>
                        {selectable
                            .then(|| {
                                let checked_id = toggle_id.clone();
                                view! {
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || is_selected(&checked_id)
                                            on:change=move |_| {
                                                if let Some(cb) = on_toggle {
                                                    cb.run(toggle_id.clone());
                                                }
                                            }
                                        />
                                    </td>
                                }
                            })}
                        {cells}
                        {has_actions
                            .then(|| {
                                view! {
                                    <td class="data-table__actions">
                                        {on_edit
                                            .map(|cb| {
                                                view! {
                                                    <button class="btn btn--small" on:click=move |_| cb.run(edit_id.clone())>
                                                        "Edit"
                                                    </button>
                                                }
                                            })}
                                        {on_delete
                                            .map(|cb| {
                                                view! {
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| cb.run(delete_id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            })}
                                    </td>
                                }
                            })}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="data-table">
            <details class="data-table__columns">
                <summary>"Columns"</summary>
                {column_toggles}
            </details>
            <table class="data-table__table">
                <thead>
                    <tr>
                        {selectable
                            .then(|| {
                                view! {
                                    <th>
                                        <input
                                            type="checkbox"
                                            title="Select page"
                                            prop:checked=move || {
                                                selected
                                                    .is_some_and(|s| {
                                                        s.with(|set| projected.with(|v| page_fully_selected(v, set)))
                                                    })
                                            }
                                            on:change=move |_| {
                                                if let Some(cb) = on_toggle_all {
                                                    cb.run(page_ids(&projected.get_untracked()));
                                                }
                                            }
                                        />
                                    </th>
                                }
                            })}
                        {header_cells}
                        {has_actions.then(|| view! { <th>"Actions"</th> })}
                    </tr>
                    <tr class="data-table__filters">
                        {selectable.then(|| view! { <th></th> })}
                        {filter_cells}
                        {has_actions.then(|| view! { <th></th> })}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <div class="data-table__pager">
                <button
                    class="btn btn--small"
                    disabled=move || projected.with(|v| v.page_index == 0)
                    on:click=move |_| {
                        let count = projected.with_untracked(|v| v.page_count);
                        grid.update(|g| g.prev_page(count));
                    }
                >
                    "Previous"
                </button>
                <span class="data-table__page">{move || projected.with(page_caption)}</span>
                <button
                    class="btn btn--small"
                    disabled=move || projected.with(|v| v.page_index + 1 >= v.page_count)
                    on:click=move |_| {
                        let count = projected.with_untracked(|v| v.page_count);
                        grid.update(|g| g.next_page(count));
                    }
                >
                    "Next"
                </button>
                <select
                    class="data-table__page-size"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            grid.update(|g| g.set_page_size(size));
                        }
                    }
                >
                    {PAGE_SIZES
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option value=size.to_string() selected=move || grid.with(|g| g.page_size == size)>
                                    {format!("{size} / page")}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
