//! shunt - a shunting-yard infix expression calculator
//!
//! # Overview
//!
//! shunt evaluates arithmetic expressions supplied as text, with
//! named-variable substitution, producing an `f64`. It supports the binary
//! operators `+ - * / ^`, unary minus, parentheses, and floating-point
//! literals.
//!
//! # Pipeline
//!
//! ```text
//! raw text
//!   -> substitute   variables become literal number text
//!   -> lex          text becomes typed tokens (unary minus decided here)
//!   -> parse        tokens reorder to postfix via operator precedence
//!   -> eval         postfix reduces on an operand stack
//!   -> f64
//! ```
//!
//! Each stage is pure and owns its working storage, so evaluations are
//! independent and can run concurrently without coordination.
//!
//! # Example
//!
//! ```rust
//! use shunt::evaluate;
//!
//! assert_eq!(evaluate("2+3*4", &[]).unwrap(), 14.0);
//! assert_eq!(evaluate("(x*3-5)/5", &[("x", 10.0)]).unwrap(), 5.0);
//! assert_eq!(evaluate("3--5", &[]).unwrap(), 8.0);
//! ```
//!
//! Errors are typed, so callers can tell failure modes apart:
//!
//! ```rust
//! use shunt::{evaluate, Error};
//!
//! assert_eq!(evaluate("5/0", &[]), Err(Error::DivisionByZero));
//! assert_eq!(evaluate("(2+3", &[]), Err(Error::UnmatchedParenthesis));
//! ```

pub mod display;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod op;
pub mod parser;
pub mod vars;

// Re-export commonly used items
pub use error::Error;
pub use eval::eval;
pub use lexer::{lex, Token};
pub use op::Operator;
pub use parser::parse;
pub use vars::substitute;

/// Evaluate an expression with the given variable bindings.
///
/// Bindings substitute textually, one at a time, in slice order; callers
/// are responsible for names that do not collide (see [`vars::substitute`]).
pub fn evaluate(expression: &str, vars: &[(&str, f64)]) -> Result<f64, Error> {
    let text = substitute(expression, vars);
    let tokens = lex(&text);
    let postfix = parse(tokens)?;
    eval(&postfix)
}
