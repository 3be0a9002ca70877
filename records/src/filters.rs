//! Column-filter state shared by every grid.
//!
//! DESIGN
//! ======
//! Filters are `(column id, string value)` pairs. The class-count screens
//! reuse the same list to carry the month/year selection under the ids
//! [`MONTH_FILTER`] and [`YEAR_FILTER`], which no grid column uses.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use serde::{Deserialize, Serialize};

pub const MONTH_FILTER: &str = "month";
pub const YEAR_FILTER: &str = "year";

/// A single active column filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub id: String,
    pub value: String,
}

/// Ordered list of active column filters, at most one per id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilters(Vec<ColumnFilter>);

impl ColumnFilters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the month/year pair.
    #[must_use]
    pub fn for_month(month0: u32, year: i32) -> Self {
        let mut filters = Self::new();
        filters.set_month_year(month0, year);
        filters
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.iter().find(|f| f.id == id).map(|f| f.value.as_str())
    }

    /// Set a filter; an empty (after trim) value removes it.
    pub fn set(&mut self, id: &str, value: &str) {
        if value.trim().is_empty() {
            self.remove(id);
            return;
        }
        match self.0.iter_mut().find(|f| f.id == id) {
            Some(existing) => value.clone_into(&mut existing.value),
            None => self.0.push(ColumnFilter { id: id.to_owned(), value: value.to_owned() }),
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.0.retain(|f| f.id != id);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnFilter> {
        self.0.iter()
    }

    pub fn set_month_year(&mut self, month0: u32, year: i32) {
        self.set(MONTH_FILTER, &month0.to_string());
        self.set(YEAR_FILTER, &year.to_string());
    }

    /// Parsed month/year selection, falling back to `fallback` per field
    /// when absent or unparsable. Months outside `0..=11` fall back too.
    #[must_use]
    pub fn month_year_or(&self, fallback: (u32, i32)) -> (u32, i32) {
        let month = self
            .get(MONTH_FILTER)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|month| *month <= 11)
            .unwrap_or(fallback.0);
        let year = self
            .get(YEAR_FILTER)
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .unwrap_or(fallback.1);
        (month, year)
    }
}
