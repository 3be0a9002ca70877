use super::*;

fn teacher_form() -> EmployeeForm {
    let mut form = EmployeeForm::for_role(EmployeeRole::Teacher);
    form.name = "Nasrin Akter".into();
    form.phone = "01712345678".into();
    form.gender = "Female".into();
    form.join_date = "2023-01-15".into();
    form.institution = "Dhaka University".into();
    form.subject = "Physics".into();
    form.passing_year = "2020".into();
    form.cgpa = "3.6".into();
    form
}

// =============================================================
// Student
// =============================================================

#[test]
fn student_form_builds_payload() {
    let form = StudentForm {
        name: " Rahim ".into(),
        class_level: "9".into(),
        roll: String::new(),
        guardian_name: "Karim".into(),
        phone: "017-1234-5678".into(),
        email: String::new(),
        admission_date: "2024-01-10".into(),
        monthly_fee: "1500".into(),
    };
    let payload = form.validate().unwrap();
    assert_eq!(payload.name, "Rahim");
    assert_eq!(payload.class_level, 9);
    assert_eq!(payload.roll, None);
    assert_eq!(payload.phone, "01712345678");
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["classLevel"], 9);
    assert!(json.get("email").is_none());
}

#[test]
fn student_form_reports_every_bad_field() {
    let errors = StudentForm::default().validate().unwrap_err();
    for field in ["name", "classLevel", "guardianName", "phone", "admissionDate", "monthlyFee"] {
        assert!(errors.contains(field), "missing error for {field}");
    }
    assert!(!errors.contains("roll"));
    assert!(!errors.contains("email"));
}

#[test]
fn student_form_rejects_class_outside_school_range() {
    let form = StudentForm { class_level: "2".into(), ..StudentForm::default() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("classLevel"), Some("Must be between 3 and 12"));
}

// =============================================================
// Employee wizard
// =============================================================

#[test]
fn monthly_payment_requires_amount() {
    let mut form = teacher_form();
    form.payment_method = PaymentMethod::Monthly;
    let errors = form.validate().unwrap_err();
    assert!(errors.contains("paymentPerMonth"));
    assert!(!errors.contains("perClassPayments.0.amount"));
}

#[test]
fn per_class_payment_does_not_require_monthly_amount() {
    let mut form = teacher_form();
    let key = form.per_class_payments.keys()[0];
    form.per_class_payments.update(key, |row| {
        row.class_range = "9-10".into();
        row.amount = "300".into();
    });
    let payload = form.validate().unwrap();
    assert_eq!(payload.payment_method, PaymentMethod::PerClass);
    assert_eq!(payload.payment_per_month, None);
    assert_eq!(payload.per_class_payments, vec![ClassPayment { class_range: ClassRange::NineToTen, amount: 300.0 }]);
}

#[test]
fn per_class_rows_need_positive_amounts() {
    let mut form = teacher_form();
    let key = form.per_class_payments.keys()[0];
    form.per_class_payments.update(key, |row| {
        row.class_range = "3-8".into();
        row.amount = "0".into();
    });
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("perClassPayments.0.amount"), Some("Must be greater than 0"));
}

#[test]
fn per_class_rows_reject_duplicate_ranges() {
    let mut form = teacher_form();
    let key = form.per_class_payments.keys()[0];
    form.per_class_payments.update(key, |row| {
        row.class_range = "3-8".into();
        row.amount = "200".into();
    });
    form.per_class_payments.push(ClassPaymentInput { class_range: "3-8".into(), amount: "250".into() });
    let errors = form.validate().unwrap_err();
    assert!(errors.contains("perClassPayments.1.classRange"));
}

#[test]
fn currently_studying_needs_admission_year_not_cgpa() {
    let mut form = teacher_form();
    form.is_currently_studying = true;
    form.passing_year.clear();
    form.cgpa.clear();
    let errors = form.validate_step(EmployeeStep::Education);
    assert!(errors.contains("admissionYear"));
    assert!(!errors.contains("passingYear"));
    assert!(!errors.contains("cgpa"));

    form.admission_year = "2022".into();
    assert!(form.validate_step(EmployeeStep::Education).is_empty());
}

#[test]
fn graduated_needs_passing_year_and_cgpa_in_range() {
    let mut form = teacher_form();
    form.cgpa = "5.2".into();
    let errors = form.validate_step(EmployeeStep::Education);
    assert_eq!(errors.get("cgpa"), Some("Must be between 0 and 5"));
}

#[test]
fn step_errors_are_scoped_to_their_step() {
    let mut form = teacher_form();
    form.name.clear();
    assert!(form.validate_step(EmployeeStep::Personal).contains("name"));
    assert!(form.validate_step(EmployeeStep::Education).is_empty());
    assert!(!form.validate_step(EmployeeStep::Payment).contains("name"));
}

#[test]
fn steps_walk_forward_and_back() {
    assert_eq!(EmployeeStep::Personal.next(), EmployeeStep::Education);
    assert_eq!(EmployeeStep::Review.next(), EmployeeStep::Review);
    assert_eq!(EmployeeStep::Personal.prev(), EmployeeStep::Personal);
    assert_eq!(EmployeeStep::Payment.prev(), EmployeeStep::Education);
    assert!(EmployeeStep::Review.is_last());
}

#[test]
fn employee_prefill_round_trips_through_validate() {
    let employee: Employee = serde_json::from_value(serde_json::json!({
        "_id": "e1",
        "name": "Salma",
        "phone": "01812345678",
        "gender": "Female",
        "role": "Employee",
        "joinDate": "2022-03-01T00:00:00.000Z",
        "education": { "institution": "BRAC", "subject": "Accounting", "passingYear": 2019, "cgpa": 3.25 },
        "paymentMethod": "Monthly",
        "paymentPerMonth": 18000
    }))
    .unwrap();
    let form = EmployeeForm::from_employee(&employee);
    assert_eq!(form.join_date, "2022-03-01");
    let payload = form.validate().unwrap();
    assert_eq!(payload.payment_per_month, Some(18000.0));
    assert!(payload.per_class_payments.is_empty());
    assert_eq!(payload.education.cgpa, Some(3.25));
}

// =============================================================
// Attendance / money
// =============================================================

#[test]
fn attendance_status_is_case_insensitive() {
    let form = AttendanceForm {
        person_id: "s1".into(),
        person_kind: PersonKind::Student,
        date: "2024-05-02".into(),
        status: "late".into(),
        note: String::new(),
    };
    assert_eq!(form.validate().unwrap().status, AttendanceStatus::Late);
}

#[test]
fn expense_category_must_be_listed() {
    let form = ExpenseForm {
        title: "Chalk".into(),
        category: "Snacks".into(),
        amount: "120".into(),
        date: "2024-05-02".into(),
        note: String::new(),
    };
    assert!(form.validate().unwrap_err().contains("category"));
}

#[test]
fn student_fee_earning_requires_student() {
    let mut form = EarningForm {
        source: STUDENT_FEE_SOURCE.into(),
        amount: "1500".into(),
        date: "2024-05-02".into(),
        ..EarningForm::default()
    };
    assert!(form.validate().unwrap_err().contains("studentId"));

    form.source = "Donation".into();
    assert_eq!(form.validate().unwrap().student_id, None);
}

// =============================================================
// Class count / timing
// =============================================================

#[test]
fn class_count_blank_buckets_are_zero_but_one_class_required() {
    let form = ClassCountForm { teacher_id: "t1".into(), date: "2024-05-02".into(), ..ClassCountForm::default() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("classCount"), Some("Log at least one class"));

    let mut form = form;
    form.set_bucket(ClassRange::NineToTen, "2".into());
    let payload = form.validate().unwrap();
    assert_eq!(payload.class_count.get(ClassRange::NineToTen), 2);
    assert_eq!(payload.class_count.get(ClassRange::ThreeToEight), 0);
    assert!(payload.proxy_classes.is_empty());
}

#[test]
fn proxy_rows_are_validated_only_when_enabled() {
    let mut form = ClassCountForm {
        teacher_id: "t1".into(),
        date: "2024-05-02".into(),
        three_to_eight: "1".into(),
        ..ClassCountForm::default()
    };
    assert!(form.validate().is_ok());

    form.has_proxy = true;
    let errors = form.validate().unwrap_err();
    assert!(errors.contains("proxyClasses.0.classRange"));
    assert!(errors.contains("proxyClasses.0.coveredFor"));

    let key = form.proxy_classes.keys()[0];
    form.proxy_classes.update(key, |row| {
        row.class_range = "11-12".into();
        row.count = "1".into();
        row.covered_for = "Mr. Alam".into();
    });
    let payload = form.validate().unwrap();
    assert_eq!(payload.proxy_classes.len(), 1);
    assert_eq!(payload.proxy_classes[0].class_range, ClassRange::ElevenToTwelve);
}

#[test]
fn proxy_only_day_is_accepted() {
    let mut form = ClassCountForm {
        teacher_id: "t1".into(),
        date: "2024-05-02".into(),
        has_proxy: true,
        ..ClassCountForm::default()
    };
    let key = form.proxy_classes.keys()[0];
    form.proxy_classes.update(key, |row| {
        row.class_range = "3-8".into();
        row.count = "2".into();
        row.covered_for = "Ms. Rupa".into();
    });
    assert!(form.validate().unwrap().class_count.is_empty());
}

#[test]
fn timing_slot_out_must_follow_in() {
    let mut form = TimingForm { director_id: "d1".into(), date: "2024-05-02".into(), ..TimingForm::default() };
    let key = form.slots.keys()[0];
    form.slots.update(key, |slot| {
        slot.in_time = "10:00".into();
        slot.out_time = "10:00".into();
    });
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("timings.0.outTime"), Some("Out time must be after in time"));
}

#[test]
fn timing_slots_may_not_overlap() {
    let mut form = TimingForm { director_id: "d1".into(), date: "2024-05-02".into(), ..TimingForm::default() };
    let key = form.slots.keys()[0];
    form.slots.update(key, |slot| {
        slot.in_time = "09:00".into();
        slot.out_time = "12:00".into();
    });
    form.slots.push(TimingSlot { in_time: "11:30".into(), out_time: "13:00".into() });
    assert!(form.validate().unwrap_err().contains("timings.1.inTime"));

    form.slots.push(TimingSlot { in_time: "14:00".into(), out_time: "16:00".into() });
    let second = form.slots.keys()[1];
    form.slots.remove(second);
    let payload = form.validate().unwrap();
    assert_eq!(payload.timings.len(), 2);
}

// =============================================================
// Auth
// =============================================================

#[test]
fn login_requires_both_fields() {
    let errors = LoginForm::default().validate().unwrap_err();
    assert!(errors.contains("email"));
    assert!(errors.contains("password"));
}

#[test]
fn register_checks_length_and_confirmation() {
    let form = RegisterForm {
        name: "Admin".into(),
        email: "admin@school.test".into(),
        password: "12345".into(),
        confirm_password: "1234".into(),
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("password"), Some("Must be at least 6 characters"));
    assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));

    let form = RegisterForm { password: "123456".into(), confirm_password: "123456".into(), ..form };
    assert_eq!(form.validate().unwrap().email, "admin@school.test");
}
