use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_scalars() {
    assert_eq!(Value::None.to_string(), "None");
    assert_eq!(Value::Bool(true).to_string(), "True");
    assert_eq!(Value::Bool(false).to_string(), "False");
    assert_eq!(Value::Int(-42).to_string(), "-42");
}

#[test]
fn test_display_doubles_like_printf_g() {
    let cases = [
        (2.5, "2.5"),
        (3.0, "3"),
        (1.0 / 3.0, "0.333333"),
        (100_000.0, "100000"),
        (1_000_000.0, "1e+06"),
        (123_456_789.0, "1.23457e+08"),
        (0.0001, "0.0001"),
        (0.000_012_5, "1.25e-05"),
        (-7.25, "-7.25"),
        (0.0, "0"),
        (f64::INFINITY, "inf"),
    ];
    for (value, expected) in cases {
        assert_eq!(format_double(value), expected, "formatting {value}");
    }
}

#[test]
fn test_display_tuples() {
    let table = TupleTable::new();
    let inner = table.alloc(vec![Value::Int(1)]);
    let outer = table.alloc(vec![inner, Value::Double(0.5), Value::Bool(false)]);
    assert_eq!(outer.to_string(), "((1,), 0.5, False)");
    assert_eq!(table.alloc(Vec::new()).to_string(), "()");
}

#[test]
fn test_truthiness() {
    let table = TupleTable::new();
    assert!(!Value::None.is_truthy());
    assert!(!Value::Int(0).is_truthy());
    assert!(Value::Int(-1).is_truthy());
    assert!(!Value::Double(0.0).is_truthy());
    assert!(!table.alloc(Vec::new()).is_truthy());
    assert!(table.alloc(vec![Value::None]).is_truthy());
}

#[test]
fn test_tuple_freed_with_last_handle() {
    let table = TupleTable::new();
    let a = table.alloc(vec![Value::Int(1)]);
    let b = a.clone();
    assert_eq!(table.live(), 1);
    if let (Value::Tuple(x), Value::Tuple(y)) = (&a, &b) {
        assert!(Heap::ptr_eq(x, y));
        assert_eq!(Heap::handle_count(x), 2);
    }
    drop(a);
    assert_eq!(table.live(), 1);
    drop(b);
    assert_eq!(table.live(), 0);
    assert_eq!(table.created(), 1);
}

#[test]
fn test_nested_tuples_free_transitively() {
    let table = TupleTable::new();
    let inner = table.alloc(vec![Value::Int(1)]);
    let outer = table.alloc(vec![inner.clone(), inner]);
    assert_eq!(table.live(), 2);
    drop(outer);
    assert_eq!(table.live(), 0);
}

#[test]
fn test_tuple_equality_is_structural() {
    let table = TupleTable::new();
    assert_eq!(
        table.alloc(vec![Value::Int(1), Value::None]),
        table.alloc(vec![Value::Int(1), Value::None])
    );
}

fn nest(table: &TupleTable, depth: usize) -> Value {
    let mut value = table.alloc(Vec::new());
    for _ in 0..depth {
        value = table.alloc(vec![value]);
    }
    value
}

#[test]
fn test_deeply_nested_tuple_drops_iteratively() {
    let table = TupleTable::new();
    let value = nest(&table, 200_000);
    assert_eq!(table.live(), 200_001);
    drop(value);
    assert_eq!(table.live(), 0);
}

#[test]
fn test_drop_keeps_shared_children() {
    let table = TupleTable::new();
    let shared = nest(&table, 3);
    let outer = table.alloc(vec![shared.clone(), Value::Int(1), shared.clone()]);
    assert_eq!(table.live(), 5);

    drop(outer);
    assert_eq!(table.live(), 4);
    assert_eq!(shared.to_string(), "((((),),),)");
    drop(shared);
    assert_eq!(table.live(), 0);
}

#[test]
fn test_display_deeply_nested_tuple() {
    let table = TupleTable::new();
    let depth = 50_000;
    let text = nest(&table, depth).to_string();
    assert_eq!(text.len(), 2 + 3 * depth);
    assert!(text.starts_with("(((("));
    assert!(text.ends_with("(),),)"));
}
