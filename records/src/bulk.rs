//! Reconciling local rows with a bulk-delete response.
//!
//! DESIGN
//! ======
//! The list screens do not re-fetch after a bulk delete. They drop exactly
//! the ids the backend reports as deleted and keep everything else, failed
//! or unmentioned, visible and selected so the user can retry.

#[cfg(test)]
#[path = "bulk_test.rs"]
mod bulk_test;

use std::collections::{BTreeSet, HashSet};

use crate::types::{
    AttendanceRecord, BulkDeleteResponse, BulkFailure, ClassCountRecord, Director, DirectorTiming, EarningRecord,
    Employee, ExpenseRecord, Student,
};

/// Rows addressable by their server id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// What a bulk delete did to local state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    pub removed: Vec<String>,
    pub failed: Vec<BulkFailure>,
    /// Requested ids the response said nothing about.
    pub unreported: Vec<String>,
}

impl BulkOutcome {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.unreported.is_empty()
    }

    /// One-line toast text.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut text = format!("Deleted {}", self.removed.len());
        if !self.failed.is_empty() {
            text.push_str(&format!(", {} failed", self.failed.len()));
        }
        if !self.unreported.is_empty() {
            text.push_str(&format!(", {} not confirmed", self.unreported.len()));
        }
        text
    }
}

/// Apply a bulk-delete response to the local rows and selection.
///
/// Only ids that were part of `requested` and reported as succeeded are
/// removed. Failed and unreported ids stay in both `rows` and `selection`.
pub fn apply_bulk_delete<T: Identified>(
    rows: &mut Vec<T>,
    selection: &mut BTreeSet<String>,
    requested: &[String],
    response: &BulkDeleteResponse,
) -> BulkOutcome {
    let requested_set = requested.iter().map(String::as_str).collect::<HashSet<_>>();
    let removed = response
        .succeeded
        .iter()
        .filter(|id| requested_set.contains(id.as_str()))
        .cloned()
        .collect::<BTreeSet<_>>();

    rows.retain(|row| !removed.contains(row.id()));
    selection.retain(|id| !removed.contains(id));

    let failed_ids = response.failed.iter().map(|f| f.id.as_str()).collect::<HashSet<_>>();
    let unreported = requested
        .iter()
        .filter(|id| !removed.contains(id.as_str()) && !failed_ids.contains(id.as_str()))
        .cloned()
        .collect();

    BulkOutcome { removed: removed.into_iter().collect(), failed: response.failed.clone(), unreported }
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_identified!(
    Student,
    Employee,
    Director,
    AttendanceRecord,
    ExpenseRecord,
    EarningRecord,
    ClassCountRecord,
    DirectorTiming,
);
