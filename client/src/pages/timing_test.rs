use records::types::PersonRef;

use super::*;

fn slot(in_time: &str, out_time: &str) -> TimingSlot {
    TimingSlot { in_time: in_time.to_owned(), out_time: out_time.to_owned() }
}

#[test]
fn slots_render_as_ranges() {
    assert_eq!(slots_text(&[slot("09:00", "12:00"), slot("14:00", "16:30")]), "09:00-12:00, 14:00-16:30");
    assert_eq!(slots_text(&[]), "");
}

#[test]
fn timing_row_uses_director_name() {
    let timing = DirectorTiming {
        id: "m1".to_owned(),
        director: PersonRef { id: "d1".to_owned(), name: "Mr. Hasan".to_owned() },
        date: "2024-05-06T00:00:00Z".to_owned(),
        timings: vec![slot("10:00", "13:00")],
    };
    let text: Vec<String> = timing_row(&timing).cells.iter().map(CellValue::display).collect();
    assert_eq!(text, ["Mr. Hasan", "2024-05-06", "10:00-13:00"]);
}
