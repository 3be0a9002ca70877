//! Repeatable field groups (per-class payments, proxy classes, timing slots).
//!
//! A group always holds at least one entry. Each entry carries a stable key
//! so keyed list rendering keeps input focus when rows are added or removed.

#[cfg(test)]
#[path = "repeat_test.rs"]
mod repeat_test;

use uuid::Uuid;

/// One keyed entry of a [`RepeatGroup`].
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<T> {
    pub key: Uuid,
    pub value: T,
}

/// Variable-length list of structurally identical sub-records, never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct RepeatGroup<T> {
    entries: Vec<Entry<T>>,
}

impl<T: Default> Default for RepeatGroup<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> RepeatGroup<T> {
    /// Group seeded with one entry.
    #[must_use]
    pub fn new(first: T) -> Self {
        Self { entries: vec![Entry { key: Uuid::new_v4(), value: first }] }
    }

    /// Group seeded from existing values; falls back to `fallback` if empty.
    #[must_use]
    pub fn from_values(values: Vec<T>, fallback: T) -> Self {
        if values.is_empty() {
            return Self::new(fallback);
        }
        Self {
            entries: values
                .into_iter()
                .map(|value| Entry { key: Uuid::new_v4(), value })
                .collect(),
        }
    }

    /// Append an entry and return its key.
    pub fn push(&mut self, value: T) -> Uuid {
        let key = Uuid::new_v4();
        self.entries.push(Entry { key, value });
        key
    }

    /// Whether the remove control should be offered.
    #[must_use]
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    /// Remove the entry with `key`. Refused (returns `false`) when it is the
    /// last remaining entry or the key is unknown.
    pub fn remove(&mut self, key: Uuid) -> bool {
        if !self.can_remove() {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key != key);
        self.entries.len() != before
    }

    /// Mutate the entry with `key` in place; unknown keys are ignored.
    pub fn update(&mut self, key: Uuid, apply: impl FnOnce(&mut T)) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            apply(&mut entry.value);
        }
    }

    #[must_use]
    pub fn get(&self, key: Uuid) -> Option<&T> {
        self.entries.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Keys in display order.
    #[must_use]
    pub fn keys(&self) -> Vec<Uuid> {
        self.entries.iter().map(|entry| entry.key).collect()
    }
}
