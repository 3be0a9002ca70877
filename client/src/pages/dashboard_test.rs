use super::*;

fn expense(amount: f64) -> ExpenseRecord {
    ExpenseRecord {
        id: "x".to_owned(),
        title: "Rent".to_owned(),
        category: "Rent".to_owned(),
        amount,
        date: "2024-05-01".to_owned(),
        note: None,
    }
}

#[test]
fn expense_total_sums_amounts() {
    assert_eq!(expense_total(&[expense(1500.0), expense(250.5)]), "1750.50");
    assert_eq!(expense_total(&[]), "0");
}

#[test]
fn summary_cards_mark_failed_fetches() {
    let cards = summary_cards(&Ok(120), &Err(ApiError::Status { status: 500 }), &Ok(18), &Ok(vec![expense(100.0)]));
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0].value, "120");
    assert_eq!(cards[1].value, "—");
    assert_eq!(cards[3].value, "100");
}
