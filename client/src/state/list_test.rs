use super::*;
use records::types::{BulkFailure, Director};

fn director(id: &str) -> Director {
    Director { id: id.to_owned(), name: format!("Director {id}"), phone: None }
}

fn loaded(ids: &[&str]) -> ListState<Director> {
    let mut state = ListState::default();
    state.finish(Ok(ids.iter().map(|id| director(id)).collect()));
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn default_starts_loading() {
    let state = ListState::<Director>::default();
    assert!(state.loading);
    assert!(state.rows.is_empty());
}

#[test]
fn finish_error_clears_rows_and_sets_message() {
    let mut state = loaded(&["a"]);
    state.start_loading();
    state.finish(Err(ApiError::Status { status: 500 }));
    assert!(!state.loading);
    assert!(state.rows.is_empty());
    assert_eq!(state.error.as_deref(), Some("request failed with status 500"));
}

#[test]
fn finish_prunes_stale_selection() {
    let mut state = loaded(&["a", "b"]);
    state.toggle_selected("a");
    state.toggle_selected("b");
    state.finish(Ok(vec![director("b")]));
    assert_eq!(state.selected_ids(), vec!["b".to_owned()]);
}

#[test]
fn bump_changes_refresh_counter() {
    let mut state = loaded(&[]);
    let before = state.refresh;
    state.bump();
    assert_ne!(state.refresh, before);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn toggle_all_selects_then_clears_page() {
    let mut state = loaded(&["a", "b", "c"]);
    let page = vec!["a".to_owned(), "b".to_owned()];
    state.toggle_all(&page);
    assert!(state.is_selected("a") && state.is_selected("b"));
    state.toggle_selected("c");
    state.toggle_all(&page);
    assert_eq!(state.selected_ids(), vec!["c".to_owned()]);
}

// =============================================================
// Deletes
// =============================================================

#[test]
fn bulk_partial_failure_keeps_failed_rows_selected() {
    let mut state = loaded(&["a", "b", "c"]);
    state.toggle_all(&["a".to_owned(), "b".to_owned()]);
    let requested = state.selected_ids();
    let response = BulkDeleteResponse {
        succeeded: vec!["a".to_owned()],
        failed: vec![BulkFailure { id: "b".to_owned(), message: "has attendance".to_owned() }],
    };
    let outcome = state.apply_bulk(&requested, &response);
    assert_eq!(outcome.removed, vec!["a".to_owned()]);
    assert_eq!(state.rows.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(), vec!["b", "c"]);
    assert_eq!(state.selected_ids(), vec!["b".to_owned()]);
}

#[test]
fn remove_row_drops_row_and_selection() {
    let mut state = loaded(&["a", "b"]);
    state.toggle_selected("a");
    state.remove_row("a");
    assert_eq!(state.rows.len(), 1);
    assert!(!state.is_selected("a"));
}
