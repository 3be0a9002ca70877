use super::*;

#[test]
fn item_path_appends_id() {
    assert_eq!(Resource::Students.item("65ab12"), "/students/65ab12");
    assert_eq!(Resource::ManagementTiming.item("t1"), "/management-regular-timing/t1");
}

#[test]
fn item_path_encodes_unsafe_characters() {
    assert_eq!(Resource::Employees.item("a b/c"), "/employees/a%20b%2Fc");
}

#[test]
fn bulk_delete_only_for_people_collections() {
    assert_eq!(Resource::Students.bulk_delete().as_deref(), Some("/students/bulk-delete"));
    assert_eq!(Resource::Teachers.bulk_delete().as_deref(), Some("/teachers/bulk-delete"));
    assert_eq!(Resource::Expenses.bulk_delete(), None);
}

#[test]
fn slug_round_trips_through_from_slug() {
    for resource in Resource::ALL {
        assert_eq!(Resource::from_slug(resource.slug()), Some(resource));
    }
    assert_eq!(Resource::from_slug("/class-count"), Some(Resource::ClassCount));
    assert_eq!(Resource::from_slug("courses"), None);
}

#[test]
fn monthly_queries_send_one_based_month() {
    assert_eq!(monthly_expenses(0, 2024), "/expenses/monthly?month=1&year=2024");
    assert_eq!(monthly_class_count(11, 2023), "/monthly-class-count?month=12&year=2023");
}

#[test]
fn class_count_records_adds_teacher_filter_when_present() {
    assert_eq!(class_count_records(None, 1, 2024), "/class-count?month=2&year=2024");
    assert_eq!(class_count_records(Some("  "), 1, 2024), "/class-count?month=2&year=2024");
    assert_eq!(
        class_count_records(Some("t-9"), 1, 2024),
        "/class-count?month=2&year=2024&teacher=t-9"
    );
}

#[test]
fn join_normalizes_slashes() {
    assert_eq!(join("http://api.test/api/", "/students"), "http://api.test/api/students");
    assert_eq!(join("http://api.test/api", "students"), "http://api.test/api/students");
}
