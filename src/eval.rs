//! Postfix evaluation.
//!
//! Consumes a postfix token sequence and reduces it to a single number on
//! an operand stack. The stack is owned by the call, so evaluations are
//! independent and re-entrant.

use crate::error::Error;
use crate::lexer::Token;
use crate::op::Operator;

/// Evaluate a postfix token sequence to a number.
///
/// Numbers parse here, not in the lexer, so a malformed literal like
/// `1.2.3` surfaces as `InvalidNumberLiteral` at this stage. Binary
/// operators pop the right operand first; the pop order is what makes
/// `10 3 -` evaluate to 7.
pub fn eval(postfix: &[Token]) -> Result<f64, Error> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(text) => {
                let value = text
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidNumberLiteral(text.clone()))?;
                stack.push(value);
            }
            Token::Operator { symbol, unary } => {
                let op = Operator::from_symbol(*symbol, *unary)
                    .ok_or(Error::UnrecognizedOperator(*symbol))?;
                let value = if op.is_unary() {
                    let a = stack.pop().ok_or(Error::StackUnderflow(op))?;
                    op.apply(a, None)?
                } else {
                    let b = stack.pop().ok_or(Error::StackUnderflow(op))?;
                    let a = stack.pop().ok_or(Error::StackUnderflow(op))?;
                    op.apply(a, Some(b))?
                };
                stack.push(value);
            }
            // A parenthesis in postfix output means conversion flushed an
            // unclosed open paren
            Token::Paren { .. } => return Err(Error::UnmatchedParenthesis),
        }
    }

    let result = stack.pop().ok_or(Error::InvalidExpression)?;
    if !stack.is_empty() {
        return Err(Error::InvalidExpression);
    }
    Ok(result)
}
