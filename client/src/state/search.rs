//! Global search term shared by the header search box and list pages.
//!
//! The header is the only writer. Pages read the term and narrow their
//! already-fetched rows with `records::search::filter_items`.

/// Raw search input as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub term: String,
}

impl SearchState {
    /// True when the term would not narrow anything.
    pub fn is_blank(&self) -> bool {
        self.term.trim().is_empty()
    }
}
