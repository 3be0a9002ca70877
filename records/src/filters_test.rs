use super::*;

#[test]
fn set_replaces_existing_value_for_same_id() {
    let mut filters = ColumnFilters::new();
    filters.set("name", "ra");
    filters.set("name", "rahim");
    assert_eq!(filters.get("name"), Some("rahim"));
    assert_eq!(filters.iter().count(), 1);
}

#[test]
fn set_with_blank_value_removes_filter() {
    let mut filters = ColumnFilters::new();
    filters.set("phone", "017");
    filters.set("phone", "   ");
    assert!(filters.get("phone").is_none());
    assert!(filters.is_empty());
}

#[test]
fn for_month_stores_strings() {
    let filters = ColumnFilters::for_month(1, 2024);
    assert_eq!(filters.get(MONTH_FILTER), Some("1"));
    assert_eq!(filters.get(YEAR_FILTER), Some("2024"));
}

#[test]
fn month_year_parses_carried_strings() {
    let mut filters = ColumnFilters::new();
    filters.set(MONTH_FILTER, "09");
    filters.set(YEAR_FILTER, " 2023 ");
    assert_eq!(filters.month_year_or((0, 2000)), (9, 2023));
}

#[test]
fn month_year_falls_back_per_field() {
    let mut filters = ColumnFilters::new();
    filters.set(YEAR_FILTER, "2022");
    assert_eq!(filters.month_year_or((4, 2030)), (4, 2022));

    filters.set(MONTH_FILTER, "twelve");
    assert_eq!(filters.month_year_or((4, 2030)), (4, 2022));
}

#[test]
fn month_year_rejects_out_of_range_month() {
    let mut filters = ColumnFilters::new();
    filters.set(MONTH_FILTER, "12");
    assert_eq!(filters.month_year_or((3, 2024)), (3, 2024));
}
