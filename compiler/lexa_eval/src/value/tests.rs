use super::*;
use pretty_assertions::assert_eq;

#[test]
fn zero_values_by_kind() {
    assert_eq!(Value::zero(Kind::Int), Value::Int(0));
    assert_eq!(Value::zero(Kind::Str), Value::string(""));
    assert_eq!(Value::zero(Kind::Bool), Value::Bool(false));
    assert_eq!(Value::zero(Kind::Func), Value::Unit);
    assert_eq!(Value::zero(Kind::List), Value::list(vec![]));
}

#[test]
fn display_matches_print_format() {
    assert_eq!(Value::Int(-4).to_string(), "-4");
    assert_eq!(Value::from("Hi go").to_string(), "Hi go");
    assert_eq!(Value::Unit.to_string(), "nil");
    assert_eq!(
        Value::list(vec![Value::Int(0), Value::Int(1), Value::Int(2)]).to_string(),
        "[0 1 2]"
    );
}

#[test]
fn mixed_kinds_are_unequal() {
    assert_ne!(Value::Int(0), Value::Bool(false));
    assert_ne!(Value::Unit, Value::Int(0));
}

#[test]
fn type_names() {
    assert_eq!(Value::Int(1).type_name(), "int");
    assert_eq!(Value::from(true).type_name(), "bool");
    assert_eq!(Value::list(vec![]).type_name(), "list");
}

#[test]
fn lengths_become_ints() {
    assert_eq!(Value::from_len(3), Value::Int(3));
    assert_eq!(Value::from_len(usize::MAX), Value::Int(i64::MAX));
}
