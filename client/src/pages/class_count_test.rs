use records::types::{ClassCount, PersonRef};

use super::*;

fn record(proxy_classes: Vec<ProxyClass>) -> ClassCountRecord {
    ClassCountRecord {
        id: "c1".to_owned(),
        teacher: PersonRef { id: "t1".to_owned(), name: "Rahima".to_owned() },
        date: "2024-02-05".to_owned(),
        class_count: ClassCount { three_to_eight: 2, nine_to_ten: 0, eleven_to_twelve: 1 },
        proxy_classes,
    }
}

#[test]
fn row_lays_buckets_out_in_fixed_order() {
    let row = class_count_row(&record(Vec::new()));
    assert_eq!(row.cells.len(), CLASS_COUNT_COLUMNS.len());
    assert_eq!(row.cells[2], CellValue::Number(2.0));
    assert_eq!(row.cells[3], CellValue::Number(0.0));
    assert_eq!(row.cells[4], CellValue::Number(1.0));
    assert_eq!(row.cells[5], CellValue::Empty);
}

#[test]
fn proxies_summarise_range_count_and_cover() {
    let proxies = vec![
        ProxyClass { class_range: ClassRange::NineToTen, count: 2, covered_for: "Rahim".to_owned() },
        ProxyClass { class_range: ClassRange::ThreeToEight, count: 1, covered_for: "Sumi".to_owned() },
    ];
    assert_eq!(proxy_summary(&proxies), "9-10 ×2 for Rahim; 3-8 ×1 for Sumi");
    assert_eq!(class_count_row(&record(proxies)).cells[5].display(), "9-10 ×2 for Rahim; 3-8 ×1 for Sumi");
}
