use super::*;

fn student(id: &str, name: &str, phone: &str, guardian: Option<&str>) -> Student {
    Student {
        id: id.to_owned(),
        name: name.to_owned(),
        class_level: 8,
        roll: Some(format!("R-{id}")),
        guardian_name: guardian.map(ToOwned::to_owned),
        phone: phone.to_owned(),
        email: None,
        admission_date: None,
        monthly_fee: 1200.0,
        is_active: true,
    }
}

fn roster() -> Vec<Student> {
    vec![
        student("1", "Rahim Uddin", "01711111111", Some("Abdul Uddin")),
        student("2", "Karima Begum", "01822222222", None),
        student("3", "Sadia Rahman", "01933333333", Some("Rahim Mia")),
    ]
}

#[test]
fn blank_term_returns_full_list_unchanged() {
    let items = roster();
    assert_eq!(filter_items(&items, ""), items);
    assert_eq!(filter_items(&items, "   \t"), items);
}

#[test]
fn term_matches_case_insensitively_across_fields() {
    let items = roster();
    let ids = filter_items(&items, "RAHIM")
        .into_iter()
        .map(|s| s.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["1".to_owned(), "3".to_owned()]);
}

#[test]
fn term_matches_phone_and_roll() {
    let items = roster();
    assert_eq!(filter_items(&items, "0182").len(), 1);
    assert_eq!(filter_items(&items, "r-3")[0].id, "3");
}

#[test]
fn result_is_always_an_ordered_subset() {
    let items = roster();
    for term in ["a", "uddin", "zzz", "0", " begum "] {
        let filtered = filter_items(&items, term);
        assert!(filtered.len() <= items.len());
        let mut cursor = items.iter();
        for row in &filtered {
            assert!(cursor.any(|candidate| candidate == row), "{term:?} broke ordering");
        }
    }
}

#[test]
fn no_match_yields_empty_list() {
    assert!(filter_items(&roster(), "nobody").is_empty());
}

#[test]
fn employee_role_label_is_searchable() {
    let employee: Employee = serde_json::from_value(serde_json::json!({
        "_id": "e1",
        "name": "Nasrin",
        "phone": "01912345678",
        "role": "Teacher"
    }))
    .unwrap();
    assert!(matches(&employee, "teach"));
    assert!(!matches(&employee, "director"));
}
