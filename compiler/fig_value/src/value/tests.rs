#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::{check_arity, NativeError, NativeObject, NativeResult, Symbol};
use pretty_assertions::assert_eq;
use std::any::Any;

struct Dummy;

impl NativeObject for Dummy {
    fn class_name(&self) -> &'static str {
        "Dummy"
    }

    fn attribute(&self, _name: &str) -> Option<Symbol> {
        None
    }

    fn has_method(&self, _name: &str) -> bool {
        false
    }

    fn call_method(&self, _name: &str, _args: &[Value]) -> NativeResult<Option<Symbol>> {
        Ok(None)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn type_names() {
    assert_eq!(Value::Int(1).type_name(), "int");
    assert_eq!(Value::Float(1.0).type_name(), "float");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::string("a").type_name(), "str");
    assert_eq!(Value::list([]).type_name(), "list");
    assert_eq!(Value::Void.type_name(), "void");
    assert_eq!(Value::Object(Rc::new(Dummy)).type_name(), "Dummy");
}

#[test]
fn display_matches_language_text() {
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Float(1.0).to_string(), "1.0");
    assert_eq!(Value::Float(0.5).to_string(), "0.5");
    assert_eq!(Value::Bool(false).to_string(), "False");
    assert_eq!(Value::string("plain").to_string(), "plain");
    assert_eq!(
        Value::list([Value::Int(1), Value::string("a"), Value::list([Value::Bool(true)])])
            .to_string(),
        "[1, 'a', [True]]"
    );
    assert_eq!(Value::Object(Rc::new(Dummy)).to_string(), "<Dummy object>");
}

#[test]
fn booleans_are_not_numbers() {
    assert_eq!(Value::Int(2).as_number(), Some(Number::Int(2)));
    assert_eq!(Value::Bool(true).as_number(), None);
    assert_eq!(Value::string("1").as_number(), None);
}

#[test]
fn equality_is_structural_for_lists() {
    let a = Value::list([Value::Int(1), Value::Int(2)]);
    let b = Value::list([Value::Int(1), Value::Int(2)]);
    let c = Value::list([Value::Int(1)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn equality_never_crosses_types() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_ne!(Value::Int(1), Value::Bool(true));
}

#[test]
fn objects_compare_by_identity() {
    let object: ObjectRef = Rc::new(Dummy);
    let same = Value::Object(Rc::clone(&object));
    assert_eq!(Value::Object(object), same);
    assert_ne!(Value::Object(Rc::new(Dummy)), same);
}

#[test]
fn downcast_to_concrete_object() {
    let value = Value::Object(Rc::new(Dummy));
    assert!(value.downcast_object::<Dummy>().is_some());
    assert!(Value::Int(1).downcast_object::<Dummy>().is_none());
}

#[test]
fn symbols_share_writes() {
    let cell = Symbol::new(Value::Int(1));
    let alias = cell.clone();
    alias.set(Value::Int(2));
    assert_eq!(cell.get(), Value::Int(2));
    assert!(cell.ptr_eq(&alias));
    assert!(!cell.ptr_eq(&Symbol::new(Value::Int(2))));
}

#[test]
fn list_elements_are_shared_symbols() {
    let list = List::from_values([Value::Int(1), Value::Int(2), Value::Int(3)]);
    let handle = Value::List(list.clone());
    list.get(0).unwrap().set(Value::Int(4));
    assert_eq!(handle.to_string(), "[4, 2, 3]");
}

#[test]
fn negative_indexes_count_from_end() {
    let list = List::from_values([Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert_eq!(list.resolve_index(0), Some(0));
    assert_eq!(list.resolve_index(-1), Some(2));
    assert_eq!(list.resolve_index(-3), Some(0));
    assert_eq!(list.resolve_index(3), None);
    assert_eq!(list.resolve_index(-4), None);
}

#[test]
fn list_mutation() {
    let list = List::default();
    assert!(list.is_empty());
    list.push(Symbol::new(Value::Int(1)));
    list.push(Symbol::new(Value::Int(2)));
    assert_eq!(list.remove(0).map(|s| s.get()), Some(Value::Int(1)));
    assert!(list.remove(5).is_none());
    assert_eq!(list.len(), 1);
    list.clear();
    assert!(list.is_empty());
}

#[test]
fn native_error_messages() {
    assert_eq!(
        NativeError::invalid_constructor_arguments("Square").to_string(),
        "Invalid constructor arguments for class Square"
    );
    assert_eq!(
        NativeError::type_casting("int", "str").to_string(),
        "Invalid type casting -- cannot cast str to int"
    );
    assert_eq!(
        check_arity("set_x", &[Value::Int(1), Value::Int(2)], 1).unwrap_err().to_string(),
        "Invalid number of arguments for function set_x Expected 1, got 2"
    );
}

#[test]
fn float_text_spells_exponents_and_non_finite_values() {
    assert_eq!(Value::Float(123.25).to_string(), "123.25");
    assert_eq!(Value::Float(-2.0).to_string(), "-2.0");
    assert_eq!(Value::Float(1e20).to_string(), "1e+20");
    assert_eq!(Value::Float(-1.5e300).to_string(), "-1.5e+300");
    assert_eq!(Value::Float(1.5e-7).to_string(), "1.5e-07");
    assert_eq!(Value::Float(f64::NAN).to_string(), "nan");
    assert_eq!(Value::Float(f64::INFINITY).to_string(), "inf");
    assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-inf");
    assert_eq!(Value::list([Value::Float(1e20)]).to_string(), "[1e+20]");
}

fn self_containing(extra: &[Value]) -> Value {
    let list = List::from_values(extra.iter().cloned());
    list.push(Symbol::new(Value::List(list.clone())));
    Value::List(list)
}

#[test]
fn self_containing_list_prints_a_back_reference() {
    let list = self_containing(&[]);
    assert_eq!(list.to_string(), "[[...]]");
    assert_eq!(format!("{list:?}"), "List([[...]])");

    let outer = Value::list([Value::Int(1), list]);
    assert_eq!(outer.to_string(), "[1, [[...]]]");
}

#[test]
fn self_containing_lists_compare_structurally() {
    let a = self_containing(&[]);
    let b = self_containing(&[]);
    assert_eq!(a, a.clone());
    assert_eq!(a, b);
    assert_ne!(a, self_containing(&[Value::Int(2)]));
    assert_ne!(
        self_containing(&[Value::Int(1)]),
        self_containing(&[Value::Int(2)])
    );
}
