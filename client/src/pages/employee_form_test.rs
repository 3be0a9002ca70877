use super::*;

#[test]
fn teachers_write_to_the_teacher_collection() {
    assert_eq!(resource_for(EmployeeRole::Teacher), Resource::Teachers);
    assert_eq!(resource_for(EmployeeRole::Employee), Resource::Employees);
    assert_eq!(resource_for(EmployeeRole::Director), Resource::Employees);
}

#[test]
fn failed_submit_returns_to_earliest_step_with_errors() {
    let mut errors = FieldErrors::new();
    errors.add("paymentPerMonth", "Required");
    errors.add("subject", "Required");
    assert_eq!(first_step_with_errors(&errors), Some(EmployeeStep::Education));

    let mut row_only = FieldErrors::new();
    row_only.add("perClassPayments.1.amount", "Required");
    assert_eq!(first_step_with_errors(&row_only), Some(EmployeeStep::Payment));

    assert_eq!(first_step_with_errors(&FieldErrors::new()), None);
}

#[test]
fn payment_method_parses_labels() {
    assert_eq!(parse_payment_method("PerClass"), PaymentMethod::PerClass);
    assert_eq!(parse_payment_method("Monthly"), PaymentMethod::Monthly);
    assert_eq!(parse_payment_method(""), PaymentMethod::Monthly);
}

#[test]
fn review_lists_only_the_active_conditional_fields() {
    let mut form = EmployeeForm::for_role(EmployeeRole::Employee);
    form.passing_year = "2015".to_owned();
    form.payment_per_month = "18000".to_owned();
    let labels: Vec<&str> = review_lines(&form).iter().map(|(label, _)| *label).collect();
    assert!(labels.contains(&"Passing year"));
    assert!(labels.contains(&"Payment per month"));
    assert!(!labels.contains(&"Admission year"));
    assert!(!labels.contains(&"Per-class rates"));

    form.is_currently_studying = true;
    form.payment_method = PaymentMethod::PerClass;
    let lines = review_lines(&form);
    assert!(lines.iter().any(|(label, _)| *label == "Admission year"));
    assert!(lines.iter().any(|(label, value)| *label == "Per-class rates" && value == ": "));
}
