//! Common test utilities for shunt integration tests

pub use shunt::{evaluate, Error};

/// Evaluate an expression with no variables
#[allow(dead_code)]
pub fn eval_str(input: &str) -> Result<f64, Error> {
    evaluate(input, &[])
}
