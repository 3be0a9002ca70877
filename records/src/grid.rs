//! Table grid model: sorting, column filters, pagination, column visibility.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list screen maps its fetched records into [`TableRow`]s and hands
//! them to the `DataTable` component, which owns a [`GridState`] and renders
//! [`GridState::project`]. Keeping the model here lets it be tested without a
//! browser and reused by the CLI.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::filters::ColumnFilters;

pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Static description of one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub hideable: bool,
}

impl ColumnSpec {
    #[must_use]
    pub const fn new(id: &'static str, header: &'static str) -> Self {
        Self { id, header, sortable: true, hideable: true }
    }

    /// Column that can neither be sorted nor hidden (e.g. actions).
    #[must_use]
    pub const fn fixed(id: &'static str, header: &'static str) -> Self {
        Self { id, header, sortable: false, hideable: false }
    }
}

/// Typed cell value; drives sort order and text rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    /// `YYYY-MM-DD` (or ISO datetime); sorts lexically.
    Date(String),
    Empty,
}

impl CellValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() { Self::Empty } else { Self::Text(value) }
    }

    #[must_use]
    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, Self::text)
    }

    /// Rendered cell text; dates drop their time part.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(n) => format_number(*n),
            Self::Date(raw) => crate::pivot::date_key(raw).to_owned(),
            Self::Empty => String::new(),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Empty, Self::Empty) => Ordering::Equal,
            (Self::Empty, _) => Ordering::Greater,
            (_, Self::Empty) => Ordering::Less,
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (a, b) => a.display().to_lowercase().cmp(&b.display().to_lowercase()),
        }
    }
}

/// One row handed to the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<CellValue>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub column: usize,
    pub direction: SortDirection,
}

/// Interactive grid state.
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    pub sort: Option<SortKey>,
    pub page_index: usize,
    pub page_size: usize,
    pub hidden: BTreeSet<usize>,
    pub filters: ColumnFilters,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            hidden: BTreeSet::new(),
            filters: ColumnFilters::new(),
        }
    }
}

/// The slice of rows the table should render right now.
#[derive(Clone, Debug, PartialEq)]
pub struct GridView {
    /// Indexes into the column list that are visible, in order.
    pub visible_columns: Vec<usize>,
    pub rows: Vec<TableRow>,
    /// Rows left after filtering, across all pages.
    pub filtered_count: usize,
    pub page_index: usize,
    pub page_count: usize,
}

impl GridState {
    /// Cycle a column through ascending, descending, unsorted.
    pub fn toggle_sort(&mut self, columns: &[ColumnSpec], column: usize) {
        if !columns.get(column).is_some_and(|c| c.sortable) {
            return;
        }
        self.sort = match self.sort {
            Some(SortKey { column: current, direction: SortDirection::Asc }) if current == column => {
                Some(SortKey { column, direction: SortDirection::Desc })
            }
            Some(SortKey { column: current, direction: SortDirection::Desc }) if current == column => None,
            _ => Some(SortKey { column, direction: SortDirection::Asc }),
        };
        self.page_index = 0;
    }

    /// Hide or show a column; non-hideable columns stay visible.
    pub fn toggle_column(&mut self, columns: &[ColumnSpec], column: usize) {
        if !columns.get(column).is_some_and(|c| c.hideable) {
            return;
        }
        if !self.hidden.remove(&column) {
            self.hidden.insert(column);
        }
    }

    /// Set a per-column filter and jump back to the first page.
    pub fn set_filter(&mut self, id: &str, value: &str) {
        self.filters.set(id, value);
        self.page_index = 0;
    }

    /// Unknown sizes snap to the default.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = if PAGE_SIZES.contains(&size) { size } else { DEFAULT_PAGE_SIZE };
        self.page_index = 0;
    }

    /// The stored index can outlive a shrinking row set; both steps start
    /// from the page actually shown.
    fn shown_page(&self, page_count: usize) -> usize {
        self.page_index.min(page_count.saturating_sub(1))
    }

    pub fn next_page(&mut self, page_count: usize) {
        let shown = self.shown_page(page_count);
        self.page_index = if shown + 1 < page_count { shown + 1 } else { shown };
    }

    pub fn prev_page(&mut self, page_count: usize) {
        self.page_index = self.shown_page(page_count).saturating_sub(1);
    }

    /// Filter, sort and paginate `rows` for display.
    #[must_use]
    pub fn project(&self, columns: &[ColumnSpec], rows: &[TableRow]) -> GridView {
        let active_filters = self
            .filters
            .iter()
            .filter_map(|f| {
                columns
                    .iter()
                    .position(|c| c.id == f.id)
                    .map(|idx| (idx, f.value.trim().to_lowercase()))
            })
            .collect::<Vec<_>>();

        let mut filtered = rows
            .iter()
            .filter(|row| {
                active_filters.iter().all(|(idx, needle)| {
                    row.cells
                        .get(*idx)
                        .is_some_and(|cell| cell.display().to_lowercase().contains(needle.as_str()))
                })
            })
            .cloned()
            .collect::<Vec<_>>();

        if let Some(SortKey { column, direction }) = self.sort {
            filtered.sort_by(|a, b| {
                let ord = match (a.cells.get(column), b.cells.get(column)) {
                    (Some(x), Some(y)) => x.compare(y),
                    _ => Ordering::Equal,
                };
                match (direction, a.cells.get(column), b.cells.get(column)) {
                    // Empty cells stay last in both directions.
                    (SortDirection::Desc, Some(CellValue::Empty), _) | (SortDirection::Desc, _, Some(CellValue::Empty)) => ord,
                    (SortDirection::Desc, _, _) => ord.reverse(),
                    (SortDirection::Asc, _, _) => ord,
                }
            });
        }

        let filtered_count = filtered.len();
        let page_size = self.page_size.max(1);
        let page_count = filtered_count.div_ceil(page_size).max(1);
        let page_index = self.page_index.min(page_count - 1);
        let rows = filtered.into_iter().skip(page_index * page_size).take(page_size).collect();

        let visible_columns = (0..columns.len()).filter(|idx| !self.hidden.contains(idx)).collect();

        GridView { visible_columns, rows, filtered_count, page_index, page_count }
    }
}

/// Whole numbers without a trailing `.0`, otherwise two decimals.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
