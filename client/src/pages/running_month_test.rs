use records::types::{ClassCount, ClassCountDetail, PersonRef};

use super::*;

fn totals(a: f64, b: f64, c: f64) -> BucketTotals {
    BucketTotals { three_to_eight: a, nine_to_ten: b, eleven_to_twelve: c, total: a + b + c }
}

#[test]
fn footers_flatten_in_bucket_order_per_teacher() {
    let rows = [totals(4.0, 0.0, 2.0), totals(1.0, 1.5, 0.0)];
    assert_eq!(bucket_footer(&rows), ["4", "0", "2", "1", "1.50", "0"]);
    assert_eq!(combined_footer(&rows), ["6", "2.50"]);
}

#[test]
fn warnings_name_teachers_with_repeated_days() {
    let detail = |date: &str| ClassCountDetail { date: date.to_owned(), class_count: ClassCount::default() };
    let record = |name: &str, details| EmployeeClassCount {
        id: String::new(),
        employee: PersonRef { id: name.to_lowercase(), name: name.to_owned() },
        month: Some(2),
        year: Some(2024),
        class_count_details: details,
        total_class_taken_this_month_so_far: BucketTotals::default(),
        total_income_this_month_so_far: BucketTotals::default(),
    };
    let data = [
        record("Alam", vec![detail("2024-02-03"), detail("2024-02-03T08:00:00Z"), detail("2024-02-04")]),
        record("Bina", vec![detail("2024-02-03")]),
    ];
    assert_eq!(duplicate_warnings(&data), ["Alam: 2024-02-03"]);
}
