use super::*;

#[test]
fn new_group_has_one_entry_and_no_remove() {
    let group = RepeatGroup::new(0_u32);
    assert_eq!(group.len(), 1);
    assert!(!group.can_remove());
}

#[test]
fn remove_refuses_last_entry() {
    let mut group = RepeatGroup::new("a");
    let only = group.keys()[0];
    assert!(!group.remove(only));
    assert_eq!(group.len(), 1);
}

#[test]
fn repeated_removes_never_go_below_one() {
    let mut group = RepeatGroup::new(0);
    for i in 1..5 {
        group.push(i);
    }
    for key in group.keys() {
        group.remove(key);
    }
    assert_eq!(group.len(), 1);
    assert_eq!(group.values().copied().collect::<Vec<_>>(), vec![4]);
}

#[test]
fn remove_unknown_key_is_noop() {
    let mut group = RepeatGroup::new(1);
    group.push(2);
    assert!(!group.remove(Uuid::new_v4()));
    assert_eq!(group.len(), 2);
}

#[test]
fn update_changes_only_target_entry() {
    let mut group = RepeatGroup::new(String::from("x"));
    let second = group.push(String::from("y"));
    group.update(second, |value| value.push('!'));
    assert_eq!(group.values().cloned().collect::<Vec<_>>(), vec!["x".to_owned(), "y!".to_owned()]);
    assert_eq!(group.get(second).map(String::as_str), Some("y!"));
}

#[test]
fn keys_are_stable_across_removal() {
    let mut group = RepeatGroup::new('a');
    let b = group.push('b');
    let c = group.push('c');
    group.remove(b);
    assert_eq!(group.keys()[1], c);
}

#[test]
fn from_values_never_empty() {
    let group = RepeatGroup::from_values(Vec::<u8>::new(), 7);
    assert_eq!(group.values().copied().collect::<Vec<_>>(), vec![7]);
    let group = RepeatGroup::from_values(vec![1, 2], 7);
    assert_eq!(group.len(), 2);
    assert!(!group.is_empty());
}
