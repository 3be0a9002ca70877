use super::*;
use records::grid::{CellValue, SortKey};

const COLUMNS: &[ColumnSpec] = &[ColumnSpec::new("name", "Name"), ColumnSpec::new("fee", "Fee")];

fn rows(n: usize) -> Vec<TableRow> {
    (0..n)
        .map(|i| TableRow {
            id: format!("r{i}"),
            cells: vec![CellValue::text(format!("Student {i}")), CellValue::Number(1000.0)],
        })
        .collect()
}

#[test]
fn sort_indicator_marks_only_sorted_column() {
    let mut state = GridState::default();
    assert_eq!(sort_indicator(&state, 0), "");
    state.sort = Some(SortKey { column: 1, direction: SortDirection::Desc });
    assert_eq!(sort_indicator(&state, 1), " ▼");
    assert_eq!(sort_indicator(&state, 0), "");
}

#[test]
fn page_caption_counts_filtered_rows() {
    let view = GridState::default().project(COLUMNS, &rows(25));
    assert_eq!(page_caption(&view), "Page 1 of 3 · 25 rows");
    let view = GridState::default().project(COLUMNS, &rows(1));
    assert_eq!(page_caption(&view), "Page 1 of 1 · 1 row");
}

#[test]
fn page_ids_lists_current_page_only() {
    let mut state = GridState::default();
    state.next_page(3);
    let view = state.project(COLUMNS, &rows(25));
    let ids = page_ids(&view);
    assert_eq!(ids.len(), 10);
    assert_eq!(ids[0], "r10");
}

#[test]
fn header_checkbox_tracks_page_selection() {
    let view = GridState::default().project(COLUMNS, &rows(3));
    let mut selected = page_ids(&view).into_iter().collect::<BTreeSet<_>>();
    assert!(page_fully_selected(&view, &selected));

    selected.remove("r1");
    assert!(!page_fully_selected(&view, &selected));

    let empty = GridState::default().project(COLUMNS, &[]);
    assert!(!page_fully_selected(&empty, &BTreeSet::new()));
}
