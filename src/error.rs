//! Error types for the evaluation pipeline.
//!
//! Every stage reports the first malformed condition it observes and the
//! error travels straight to the caller of `evaluate` - no partial results,
//! no internal recovery.

use crate::op::Operator;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid number literal: '{0}'")]
    InvalidNumberLiteral(String),
    #[error("unmatched parenthesis")]
    UnmatchedParenthesis,
    #[error("stack underflow: operator '{0}' is missing an operand")]
    StackUnderflow(Operator),
    #[error("expression did not reduce to a single value")]
    InvalidExpression,
    /// Defensive: the lexer only emits symbols the operator model knows.
    #[error("unrecognized operator: '{0}'")]
    UnrecognizedOperator(char),
}
