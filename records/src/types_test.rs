use super::*;

// =============================================================
// ClassRange
// =============================================================

#[test]
fn class_range_serializes_to_wire_labels() {
    assert_eq!(serde_json::to_string(&ClassRange::ThreeToEight).unwrap(), "\"3-8\"");
    assert_eq!(serde_json::to_string(&ClassRange::NineToTen).unwrap(), "\"9-10\"");
    assert_eq!(serde_json::to_string(&ClassRange::ElevenToTwelve).unwrap(), "\"11-12\"");
}

#[test]
fn class_range_from_label_trims_and_rejects_unknown() {
    assert_eq!(ClassRange::from_label(" 9-10 "), Some(ClassRange::NineToTen));
    assert_eq!(ClassRange::from_label("1-2"), None);
}

// =============================================================
// ClassCount
// =============================================================

#[test]
fn class_count_accepts_float_and_null_counts() {
    let count: ClassCount = serde_json::from_value(serde_json::json!({
        "3-8": 2.0,
        "9-10": null,
        "11-12": 4
    }))
    .unwrap();
    assert_eq!(count, ClassCount { three_to_eight: 2, nine_to_ten: 0, eleven_to_twelve: 4 });
}

#[test]
fn class_count_missing_buckets_default_to_zero() {
    let count: ClassCount = serde_json::from_value(serde_json::json!({ "9-10": 1 })).unwrap();
    assert_eq!(count.get(ClassRange::ThreeToEight), 0);
    assert_eq!(count.get(ClassRange::NineToTen), 1);
    assert!(!count.is_empty());
}

#[test]
fn class_count_rejects_fractional_counts() {
    let result = serde_json::from_value::<ClassCount>(serde_json::json!({ "3-8": 1.5 }));
    assert!(result.is_err());
}

#[test]
fn class_count_set_updates_single_bucket() {
    let mut count = ClassCount::default();
    count.set(ClassRange::ElevenToTwelve, 3);
    assert_eq!(count.eleven_to_twelve, 3);
    assert_eq!(count.three_to_eight, 0);
}

// =============================================================
// Entities
// =============================================================

#[test]
fn student_reads_mongo_id_and_defaults() {
    let student: Student = serde_json::from_value(serde_json::json!({
        "_id": "s1",
        "name": "Rahim",
        "classLevel": 9,
        "phone": "01712345678"
    }))
    .unwrap();
    assert_eq!(student.id, "s1");
    assert_eq!(student.class_level, 9);
    assert!(student.is_active);
    assert!(student.guardian_name.is_none());
}

#[test]
fn student_accepts_plain_id_alias() {
    let student: Student = serde_json::from_value(serde_json::json!({
        "id": "s2",
        "name": "Karim",
        "classLevel": 3.0,
        "phone": "01812345678"
    }))
    .unwrap();
    assert_eq!(student.id, "s2");
    assert_eq!(student.class_level, 3);
}

#[test]
fn employee_defaults_to_monthly_employee() {
    let employee: Employee = serde_json::from_value(serde_json::json!({
        "_id": "e1",
        "name": "Nasrin",
        "phone": "01912345678"
    }))
    .unwrap();
    assert_eq!(employee.role, EmployeeRole::Employee);
    assert_eq!(employee.payment_method, PaymentMethod::Monthly);
    assert!(employee.per_class_payments.is_empty());
}

#[test]
fn employee_class_count_reads_backend_totals() {
    let record: EmployeeClassCount = serde_json::from_value(serde_json::json!({
        "employee": { "_id": "t1", "name": "Mr. Das" },
        "classCountDetails": [
            { "date": "2024-02-01T00:00:00.000Z", "classCount": { "3-8": 2, "9-10": 1, "11-12": 0 } }
        ],
        "totalClassTakenThisMonthSoFar": { "3-8": 2, "9-10": 1, "11-12": 0, "total": 3 },
        "totalIncomeThisMonthSoFar": { "3-8": 400, "9-10": 250.5, "11-12": 0, "total": 650.5 }
    }))
    .unwrap();
    assert_eq!(record.employee.name, "Mr. Das");
    assert_eq!(record.class_count_details.len(), 1);
    assert!((record.total_class_taken_this_month_so_far.total - 3.0).abs() < f64::EPSILON);
    assert!((record.total_income_this_month_so_far.get(ClassRange::NineToTen) - 250.5).abs() < f64::EPSILON);
}

#[test]
fn attendance_status_from_label_is_case_insensitive() {
    assert_eq!(AttendanceStatus::from_label("late"), Some(AttendanceStatus::Late));
    assert_eq!(AttendanceStatus::from_label("gone"), None);
}

// =============================================================
// Bulk delete response
// =============================================================

#[test]
fn bulk_delete_response_accepts_success_alias_and_bare_failures() {
    let resp: BulkDeleteResponse = serde_json::from_value(serde_json::json!({
        "success": ["a", "b"],
        "failed": ["c"]
    }))
    .unwrap();
    assert_eq!(resp.succeeded, vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(resp.failed, vec![BulkFailure { id: "c".to_owned(), message: String::new() }]);
}

#[test]
fn bulk_delete_response_reads_failure_messages() {
    let resp: BulkDeleteResponse = serde_json::from_value(serde_json::json!({
        "deleted": [],
        "failed": [{ "id": "x", "message": "has attendance" }]
    }))
    .unwrap();
    assert!(resp.succeeded.is_empty());
    assert_eq!(resp.failed[0].message, "has attendance");
}

#[test]
fn auth_tokens_refresh_token_is_optional() {
    let tokens: AuthTokens = serde_json::from_value(serde_json::json!({ "accessToken": "abc" })).unwrap();
    assert_eq!(tokens.access_token, "abc");
    assert!(tokens.refresh_token.is_none());
    assert!(tokens.user.is_none());
}
