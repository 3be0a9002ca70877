use super::*;

fn student() -> Student {
    Student {
        id: "s1".to_owned(),
        name: "Rafi Ahmed".to_owned(),
        class_level: 9,
        roll: None,
        guardian_name: Some("Karim Ahmed".to_owned()),
        phone: "01711000000".to_owned(),
        email: None,
        admission_date: Some("2024-01-10T00:00:00.000Z".to_owned()),
        monthly_fee: 1200.0,
        is_active: false,
    }
}

#[test]
fn student_row_has_one_cell_per_column() {
    let row = student_row(&student());
    assert_eq!(row.id, "s1");
    assert_eq!(row.cells.len(), STUDENT_COLUMNS.len());
}

#[test]
fn student_row_renders_missing_and_typed_values() {
    let row = student_row(&student());
    assert_eq!(row.cells[1], CellValue::Number(9.0));
    assert_eq!(row.cells[2], CellValue::Empty);
    assert_eq!(row.cells[6].display(), "2024-01-10");
    assert_eq!(row.cells[7].display(), "Inactive");
}
