//! Per-screen list state: fetched rows, load status, refresh counter, and
//! row selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each list page owns one `RwSignal<ListState<T>>`. An effect re-fetches
//! whenever `refresh` changes; create, delete, and Retry bump it. Bulk delete
//! is the exception: it reconciles rows locally from the response instead of
//! re-fetching.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use std::collections::BTreeSet;

use records::ApiError;
use records::bulk::{BulkOutcome, Identified, apply_bulk_delete};
use records::types::BulkDeleteResponse;

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped to trigger a re-fetch.
    pub refresh: u64,
    pub selection: BTreeSet<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), loading: true, error: None, refresh: 0, selection: BTreeSet::new() }
    }
}

impl<T: Identified> ListState<T> {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fetch result. Selections for rows that no longer exist are
    /// dropped; rows from a failed fetch are cleared.
    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(rows) => {
                self.selection.retain(|id| rows.iter().any(|row| row.id() == id));
                self.rows = rows;
                self.error = None;
            }
            Err(err) => {
                self.rows.clear();
                self.selection.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    /// Manual retry or post-mutation refresh.
    pub fn bump(&mut self) {
        self.refresh = self.refresh.wrapping_add(1);
    }

    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_owned());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Select every id in `ids` or, if all are already selected, clear them.
    pub fn toggle_all(&mut self, ids: &[String]) {
        if !ids.is_empty() && ids.iter().all(|id| self.selection.contains(id)) {
            for id in ids {
                self.selection.remove(id);
            }
        } else {
            self.selection.extend(ids.iter().cloned());
        }
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.iter().cloned().collect()
    }

    /// Drop one row after a single delete succeeded.
    pub fn remove_row(&mut self, id: &str) {
        self.rows.retain(|row| row.id() != id);
        self.selection.remove(id);
    }

    /// Reconcile rows and selection with a bulk-delete response.
    pub fn apply_bulk(&mut self, requested: &[String], response: &BulkDeleteResponse) -> BulkOutcome {
        apply_bulk_delete(&mut self.rows, &mut self.selection, requested, response)
    }
}
