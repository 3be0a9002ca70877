//! Free-text search narrowing for list screens.
//!
//! The search term comes from the shared search box. Filtering is a pure
//! predicate over rows already fetched: it never reorders and never adds,
//! and a blank term leaves the list untouched.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::types::{
    AttendanceRecord, ClassCountRecord, Director, DirectorTiming, EarningRecord, Employee, ExpenseRecord, Student,
};

/// Display fields a row is matched against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Case-insensitive substring match of `term` against any search field.
/// A blank term matches everything.
#[must_use]
pub fn matches<T: Searchable + ?Sized>(item: &T, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Rows matching `term`, in their original order.
#[must_use]
pub fn filter_items<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    if term.trim().is_empty() {
        return items.to_vec();
    }
    items.iter().filter(|item| matches(*item, term)).cloned().collect()
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.phone.as_str()];
        fields.extend(self.roll.as_deref());
        fields.extend(self.guardian_name.as_deref());
        fields.extend(self.email.as_deref());
        fields
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.phone.as_str(), self.role.label()];
        fields.extend(self.email.as_deref());
        fields.extend(self.designation.as_deref());
        fields
    }
}

impl Searchable for Director {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.phone.as_deref());
        fields
    }
}

impl Searchable for AttendanceRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.person.name.as_str(), self.date.as_str(), self.status.label()]
    }
}

impl Searchable for ExpenseRecord {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.category.as_str(), self.date.as_str()];
        fields.extend(self.note.as_deref());
        fields
    }
}

impl Searchable for EarningRecord {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.source.as_str(), self.date.as_str()];
        fields.extend(self.note.as_deref());
        fields
    }
}

impl Searchable for ClassCountRecord {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.teacher.name.as_str(), self.date.as_str()];
        fields.extend(self.proxy_classes.iter().map(|proxy| proxy.covered_for.as_str()));
        fields
    }
}

impl Searchable for DirectorTiming {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.director.name.as_str(), self.date.as_str()]
    }
}
