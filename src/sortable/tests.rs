#![cfg(test)]

use std::cmp::Ordering;

use super::*;
use crate::util::panic::assert_panics;
use crate::util::test_node::{node, TestNode};

#[test]
fn test_primitive_sortables() {
    assert!(1_u32.less(&2), "Integers should use their natural order.");
    assert!(!2_u32.less(&2), "Less should be strict.");
    assert!("abc".equal(&"abc"), "Equal strings should be equal.");
    assert!(String::from("a").less(&String::from("b")));
    assert_eq!(42_i64.unique_key(), "42");
    assert_eq!(String::from("node").unique_key(), "node");
    assert_eq!('x'.unique_key(), "x");
}

#[test]
fn test_unique_is_independent_of_instance() {
    let a = node("A");
    let b = TestNode(String::from("A"));
    assert_eq!(
        a.unique(), b.unique(),
        "Distinct instances with the same value should share an identity."
    );
    assert_eq!((&a).unique_key(), "A", "References should forward to the referent.");
}

#[test]
fn test_natural_comparator() {
    assert_eq!(Natural.compare(&node("A"), &node("B")), Ordering::Less);
    assert_eq!(Natural.compare(&node("B"), &node("A")), Ordering::Greater);
    assert_eq!(Natural.compare(&node("A"), &node("A")), Ordering::Equal);
    assert!(Natural.equals(&node("A"), &node("A")));
}

#[test]
fn test_closure_and_reverse_comparators() {
    let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    assert_eq!(by_len.compare(&"aa", &"b"), Ordering::Greater);
    assert!(by_len.equals(&"aa", &"bb"), "Closures should provide equals through compare.");

    let rev = Reverse(Natural);
    assert_eq!(rev.compare(&1_i32, &2), Ordering::Greater);
    assert_eq!(Reverse(u8::cmp).compare(&3_u8, &3), Ordering::Equal);
}

#[test]
fn test_dyn_sortable_same_type() {
    let a: Box<dyn DynSortable> = Box::new(1_u8);
    let b: Box<dyn DynSortable> = Box::new(2_u8);
    assert!(a.less(&b), "Boxed values of the same type should compare normally.");
    assert!(!a.equal(&b));
    assert_eq!(a.unique_key(), "u8:1", "Boxed identities are tagged with their type.");
}

#[test]
fn test_float_identity_ignores_sign_of_zero() {
    assert!(0.0_f64.equal(&-0.0));
    assert_eq!((-0.0_f64).unique_key(), 0.0_f64.unique_key(), "Equal floats need one identity.");
    assert_eq!((-0.0_f32).unique_key(), "0");
    assert_eq!((-1.5_f64).unique_key(), "-1.5");
}

#[test]
fn test_dyn_identity_includes_type() {
    let number: Box<dyn DynSortable> = Box::new(1_i32);
    let text: Box<dyn DynSortable> = Box::new(String::from("1"));
    assert_ne!(
        number.unique(), text.unique(),
        "Values of different types shouldn't share an identity."
    );
    assert_eq!(number.unique_key(), "i32:1");
}

#[test]
fn test_dyn_sortable_type_mismatch_panics() {
    let a: Box<dyn DynSortable> = Box::new(1_u8);
    let b: Box<dyn DynSortable> = Box::new(String::from("1"));
    assert_panics!(
        { a.less(&b) },
        "Comparing different concrete types should panic.",
        contains "against a u8!"
    );
    assert_panics!(
        { a.equal(&b) },
        "Equality between different concrete types should panic, not return false."
    );
}

#[test]
fn test_downcast_error() {
    let b: Box<dyn DynSortable> = Box::new(String::from("x"));
    let err = downcast::<u8>(&*b).expect_err("A String shouldn't downcast to u8.");
    assert_eq!(err.expected, "u8");
    assert!(err.found.ends_with("String"), "The found type should name the boxed value.");
    assert_eq!(
        err.to_string(),
        format!("Cannot compare a {} against a u8!", err.found)
    );
}
