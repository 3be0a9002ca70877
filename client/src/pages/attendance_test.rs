use records::types::PersonRef;

use super::*;

#[test]
fn kind_labels_round_trip_through_the_select() {
    for kind in [PersonKind::Student, PersonKind::Employee] {
        assert_eq!(parse_kind(kind_label(kind)), kind);
    }
    assert_eq!(parse_kind("unknown"), PersonKind::Student);
}

#[test]
fn attendance_row_shows_person_and_status() {
    let record = AttendanceRecord {
        id: "a1".to_owned(),
        person: PersonRef { id: "s1".to_owned(), name: "Mitu".to_owned() },
        person_kind: PersonKind::Employee,
        date: "2024-03-04T00:00:00Z".to_owned(),
        status: AttendanceStatus::Late,
        note: None,
    };
    let row = attendance_row(&record);
    let text: Vec<String> = row.cells.iter().map(CellValue::display).collect();
    assert_eq!(text, ["Mitu", "Employee", "2024-03-04", "Late", ""]);
}
