use super::*;

#[test]
fn test_intern_is_dense_and_stable() {
    let mut interner = Interner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    assert_eq!(x.raw(), 0);
    assert_eq!(y.raw(), 1);
    assert_eq!(interner.intern("x"), x);
    assert_eq!(interner.len(), 2);
}

#[test]
fn test_lookup_round_trips() {
    let mut interner = Interner::new();
    let name = interner.intern("counter");
    assert_eq!(interner.lookup(name), "counter");
    assert_eq!(interner.get("counter"), Some(name));
    assert_eq!(interner.get("missing"), None);
}

#[test]
fn test_lookup_unknown_id() {
    let interner = Interner::new();
    assert_eq!(interner.lookup(Name::from_raw(7)), "<unknown>");
}
