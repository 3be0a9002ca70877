use records::pivot::build_month_pivot;
use records::types::{ClassCount, ClassCountDetail, EmployeeClassCount, PersonRef};

use super::*;

fn teacher(name: &str, details: Vec<ClassCountDetail>) -> EmployeeClassCount {
    EmployeeClassCount {
        id: String::new(),
        employee: PersonRef { id: name.to_lowercase(), name: name.to_owned() },
        month: Some(2),
        year: Some(2023),
        class_count_details: details,
        total_class_taken_this_month_so_far: BucketTotals { three_to_eight: 3.0, nine_to_ten: 0.0, eleven_to_twelve: 1.0, total: 4.0 },
        total_income_this_month_so_far: BucketTotals { three_to_eight: 450.0, nine_to_ten: 0.0, eleven_to_twelve: 250.0, total: 700.0 },
    }
}

#[test]
fn pivot_text_has_header_days_and_footers() {
    let detail = ClassCountDetail {
        date: "2023-02-01T00:00:00.000Z".to_owned(),
        class_count: ClassCount { three_to_eight: 3, nine_to_ten: 0, eleven_to_twelve: 1 },
    };
    let pivot = build_month_pivot(1, 2023, &[teacher("Alam", vec![detail])]).unwrap();
    let text = render_pivot(&pivot);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "February 2023");
    assert!(lines[1].ends_with("Alam"));
    assert!(lines[2].starts_with("Date"));
    // title + two header lines + 28 days + 4 footer lines
    assert_eq!(lines.len(), 3 + 28 + 4);
    assert_eq!(lines[3], "2023-02-01       3     -     1");
    assert_eq!(lines[4], "2023-02-02       -     -     -");
    assert!(lines[31].starts_with("Classes"));
    assert!(lines[32].ends_with('4'));
    assert!(lines[34].ends_with("700"));
}

#[test]
fn empty_pivot_says_so() {
    let pivot = build_month_pivot(0, 2024, &[]).unwrap();
    assert_eq!(render_pivot(&pivot), "January 2024\nno class counts");
}

#[test]
fn summaries_are_single_line() {
    let director = Director { id: "d1".to_owned(), name: "Mr. Hasan".to_owned(), phone: Some("017".to_owned()) };
    assert_eq!(director.summary(), "Mr. Hasan 017");
}

#[test]
fn summary_lines_filter_and_prefix_ids() {
    let directors = vec![
        Director { id: "d1".to_owned(), name: "Mr. Hasan".to_owned(), phone: None },
        Director { id: "d2".to_owned(), name: "Ms. Nila".to_owned(), phone: Some("018".to_owned()) },
    ];
    assert_eq!(summary_lines(&directors, "nila"), vec!["d2\tMs. Nila 018".to_owned()]);
    assert_eq!(summary_lines(&directors, "  ").len(), 2);
}
