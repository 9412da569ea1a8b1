//! Integration tests for variable substitution

#[path = "common/mod.rs"]
mod common;
#[allow(unused_imports)]
use common::{eval_str, evaluate, Error};
use shunt::substitute;

#[test]
fn test_substitution_per_key() {
    assert_eq!(substitute("x+x", &[("x", 3.0)]), "3+3");
    assert_eq!(evaluate("x+x", &[("x", 3.0)]).unwrap(), 6.0);
}

#[test]
fn test_sample_scenario() {
    // -10 + 9 - 15 + 6
    assert_eq!(
        evaluate("-10+x^2-5*x+(12/2)", &[("x", 3.0)]).unwrap(),
        -10.0
    );
}

#[test]
fn test_variable_in_parens() {
    assert_eq!(evaluate("(x*3-5)/5", &[("x", 10.0)]).unwrap(), 5.0);
}

#[test]
fn test_multiple_variables() {
    assert_eq!(
        evaluate("a*b+c", &[("a", 2.0), ("b", 3.0), ("c", 4.0)]).unwrap(),
        10.0
    );
}

#[test]
fn test_bindings_apply_in_caller_order() {
    // The longer name must come first to win on overlap
    assert_eq!(evaluate("ab", &[("ab", 12.0), ("a", 3.0)]).unwrap(), 12.0);
}

#[test]
fn test_substituted_negative_binds_like_unary_minus() {
    // x=-2 substitutes textually, so x^2 reads -2^2 = -(2^2)
    assert_eq!(evaluate("x^2", &[("x", -2.0)]).unwrap(), -4.0);
}

#[test]
fn test_unbound_name_is_dropped() {
    // Letters outside the expression alphabet vanish at tokenization
    assert_eq!(evaluate("x", &[]), Err(Error::InvalidExpression));
}
