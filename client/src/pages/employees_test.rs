use records::types::{ClassPayment, ClassRange, Education, EmployeeRole};

use super::*;

fn employee(method: PaymentMethod) -> Employee {
    Employee {
        id: "e1".to_owned(),
        name: "Nasrin Akter".to_owned(),
        phone: "01811000000".to_owned(),
        email: None,
        gender: Some("Female".to_owned()),
        designation: None,
        role: EmployeeRole::Teacher,
        join_date: None,
        education: Education::default(),
        payment_method: method,
        payment_per_month: None,
        per_class_payments: Vec::new(),
    }
}

#[test]
fn monthly_payment_shows_amount_when_known() {
    let mut staff = employee(PaymentMethod::Monthly);
    assert_eq!(payment_summary(&staff), "Monthly");
    staff.payment_per_month = Some(15000.0);
    assert_eq!(payment_summary(&staff), "15000 / month");
}

#[test]
fn per_class_payment_lists_rates_in_order() {
    let mut staff = employee(PaymentMethod::PerClass);
    assert_eq!(payment_summary(&staff), "Per class");
    staff.per_class_payments = vec![
        ClassPayment { class_range: ClassRange::ThreeToEight, amount: 150.0 },
        ClassPayment { class_range: ClassRange::ElevenToTwelve, amount: 300.0 },
    ];
    assert_eq!(payment_summary(&staff), "3-8: 150, 11-12: 300");
}

#[test]
fn staff_row_matches_columns() {
    let row = staff_row(&employee(PaymentMethod::Monthly));
    assert_eq!(row.cells.len(), STAFF_COLUMNS.len());
    assert_eq!(row.cells[1], CellValue::Empty);
    assert_eq!(row.cells[4].display(), "Female");
}

#[test]
fn teachers_route_under_their_own_prefix() {
    assert_eq!(staff_route(Resource::Teachers), "/teachers");
    assert_eq!(staff_route(Resource::Employees), "/employees");
}
