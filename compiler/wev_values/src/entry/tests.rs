use super::*;
use crate::AnyKind;
use pretty_assertions::assert_eq;

#[test]
fn entry_deduplicates_values() {
    let entry = MemoryEntry::from_values([
        Value::Int(1),
        Value::Int(1),
        Value::from("1"),
        Value::Int(1),
    ]);
    assert_eq!(entry.map(|e| e.count()), Some(2));
}

#[test]
fn entry_keeps_insertion_order() {
    let entry = MemoryEntry::from_values([Value::Int(3), Value::Bool(false), Value::Int(1)]);
    assert_eq!(
        entry.map(|e| e.values().to_vec()),
        Some(vec![Value::Int(3), Value::Bool(false), Value::Int(1)])
    );
}

#[test]
fn empty_entry_is_rejected() {
    assert!(MemoryEntry::from_values(Vec::new()).is_none());
    assert_eq!(
        MemoryEntry::try_from_values(Vec::new()),
        Err(crate::EvalError::EmptyEntry)
    );
}

#[test]
fn union_adds_only_new_values() {
    let mut left = MemoryEntry::new(Value::Int(1));
    let right = MemoryEntry::from_values([Value::Int(1), Value::Any(AnyKind::String)]);
    if let Some(right) = right {
        left.union(&right);
    }
    assert_eq!(left.count(), 2);
    assert!(left.contains(&Value::Any(AnyKind::String)));
    assert_eq!(left.as_single(), None);
}

#[test]
fn entry_display_lists_values() {
    let entry = MemoryEntry::from_values([Value::Int(1), Value::Undefined]);
    assert_eq!(entry.map(|e| e.to_string()), Some("{1, null}".to_owned()));
}

#[test]
fn identifier_names_are_unique() {
    let id = MemberIdentifier::names(["5", "a", "5"]);
    assert_eq!(id.member_names().to_vec(), vec!["5".to_owned(), "a".to_owned()]);
    assert!(id.is_always_concrete());
    assert!(id.may_touch("a"));
    assert!(!id.may_touch("b"));
}

#[test]
fn any_identifier_touches_everything() {
    let id = MemberIdentifier::Any;
    assert!(id.may_touch("anything"));
    assert!(id.member_names().is_empty());
    assert_eq!(id.to_string(), "[?]");
}
