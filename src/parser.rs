//! Infix-to-postfix conversion (shunting-yard).
//!
//! Reorders the lexer's token sequence into postfix (reverse Polish) order
//! using a working stack for operators and parentheses. No new tokens are
//! created here - the converter only moves existing ones between the
//! output list and the stack.

use crate::error::Error;
use crate::lexer::Token;
use crate::op::Operator;

/// Convert a token sequence to postfix order.
///
/// Binary operators of equal precedence group left to right, so `2-3-4`
/// converts as `(2-3)-4`. A unary operator never pops ahead of itself: it
/// binds to what follows and goes straight onto the stack, to be popped by
/// a later operator's own precedence check.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Token>, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator { symbol, unary } => {
                let op = Operator::from_symbol(symbol, unary)
                    .ok_or(Error::UnrecognizedOperator(symbol))?;
                while let Some(Token::Operator { symbol: top_symbol, unary: top_unary }) =
                    stack.last()
                {
                    let top = Operator::from_symbol(*top_symbol, *top_unary)
                        .ok_or(Error::UnrecognizedOperator(*top_symbol))?;
                    if op.is_unary() || op.precedence() > top.precedence() {
                        break;
                    }
                    if let Some(popped) = stack.pop() {
                        output.push(popped);
                    }
                }
                stack.push(token);
            }
            Token::Paren { open: true } => stack.push(token),
            Token::Paren { open: false } => loop {
                match stack.pop() {
                    // The matching open parenthesis is discarded
                    Some(Token::Paren { open: true }) => break,
                    Some(inner) => output.push(inner),
                    None => return Err(Error::UnmatchedParenthesis),
                }
            },
        }
    }

    // Flush the stack in pop order. A leftover open parenthesis flows into
    // the output here and is rejected during evaluation.
    while let Some(token) = stack.pop() {
        output.push(token);
    }

    Ok(output)
}
