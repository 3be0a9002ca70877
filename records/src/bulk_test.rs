use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: String,
}

impl Identified for Row {
    fn id(&self) -> &str {
        &self.id
    }
}

fn rows(ids: &[&str]) -> Vec<Row> {
    ids.iter().map(|id| Row { id: (*id).to_owned() }).collect()
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

#[test]
fn partial_failure_removes_only_succeeded_ids() {
    let mut table = rows(&["a", "b", "c", "d"]);
    let mut selection = set(&["a", "b", "c"]);
    let response = BulkDeleteResponse {
        succeeded: ids(&["a", "c"]),
        failed: vec![BulkFailure { id: "b".to_owned(), message: "has dues".to_owned() }],
    };

    let outcome = apply_bulk_delete(&mut table, &mut selection, &ids(&["a", "b", "c"]), &response);

    assert_eq!(table, rows(&["b", "d"]));
    assert_eq!(selection, set(&["b"]));
    assert_eq!(outcome.removed, ids(&["a", "c"]));
    assert_eq!(outcome.failed.len(), 1);
    assert!(outcome.unreported.is_empty());
    assert!(!outcome.is_complete());
}

#[test]
fn full_success_clears_selection() {
    let mut table = rows(&["a", "b"]);
    let mut selection = set(&["a", "b"]);
    let response = BulkDeleteResponse { succeeded: ids(&["a", "b"]), failed: vec![] };

    let outcome = apply_bulk_delete(&mut table, &mut selection, &ids(&["a", "b"]), &response);

    assert!(table.is_empty());
    assert!(selection.is_empty());
    assert!(outcome.is_complete());
    assert_eq!(outcome.summary(), "Deleted 2");
}

#[test]
fn unrequested_success_ids_are_ignored() {
    let mut table = rows(&["a", "z"]);
    let mut selection = set(&["a"]);
    let response = BulkDeleteResponse { succeeded: ids(&["a", "z"]), failed: vec![] };

    apply_bulk_delete(&mut table, &mut selection, &ids(&["a"]), &response);

    assert_eq!(table, rows(&["z"]));
}

#[test]
fn unreported_ids_stay_visible_and_selected() {
    let mut table = rows(&["a", "b"]);
    let mut selection = set(&["a", "b"]);
    let response = BulkDeleteResponse { succeeded: ids(&["a"]), failed: vec![] };

    let outcome = apply_bulk_delete(&mut table, &mut selection, &ids(&["a", "b"]), &response);

    assert_eq!(table, rows(&["b"]));
    assert_eq!(selection, set(&["b"]));
    assert_eq!(outcome.unreported, ids(&["b"]));
    assert_eq!(outcome.summary(), "Deleted 1, 1 not confirmed");
}

#[test]
fn summary_mentions_failures() {
    let outcome = BulkOutcome {
        removed: ids(&["a"]),
        failed: vec![BulkFailure { id: "b".to_owned(), message: String::new() }],
        unreported: vec![],
    };
    assert_eq!(outcome.summary(), "Deleted 1, 1 failed");
}
