use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_same_text_same_name() {
    let interner = StringInterner::new();
    let a = interner.intern("counter");
    let b = interner.intern("counter");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "counter");
}

#[test]
fn test_intern_distinct_text() {
    let interner = StringInterner::new();
    let a = interner.intern("i");
    let b = interner.intern("j");
    assert_ne!(a, b);
    assert_eq!(interner.len(), 3);
}

#[test]
fn test_empty_is_preinterned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert!(!interner.is_empty());
}

#[test]
fn test_get_does_not_insert() {
    let interner = StringInterner::new();
    assert_eq!(interner.get("x"), None);
    assert_eq!(interner.len(), 1);

    let x = interner.intern("x");
    assert_eq!(interner.get("x"), Some(x));
}

#[test]
fn test_lookup_foreign_name_is_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(99)), "");
}

#[test]
fn test_shared_interner_clones_share_table() {
    let shared = SharedInterner::new();
    let other = shared.clone();
    let x = shared.intern("x");
    assert_eq!(other.get("x"), Some(x));
}
