//! Tokenization for shunt.
//!
//! Tokens are the atomic elements of an expression: number literals,
//! operator symbols, and parentheses. The lexer makes one decision that
//! needs context - whether a `-` negates or subtracts - and records it in
//! the token so later stages never revisit it.

use nom::{bytes::complete::take_while1, character::complete::one_of, IResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A run of digits and decimal points, kept as text. Malformed runs
    /// like `1.2.3` pass through and fail later at numeric parsing.
    Number(String),
    /// One of `+ - * / ^`. `unary` is true only for a `-` that negates.
    Operator { symbol: char, unary: bool },
    /// `(` or `)`
    Paren { open: bool },
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => f.write_str(text),
            Token::Operator { symbol, .. } => write!(f, "{}", symbol),
            Token::Paren { open: true } => f.write_str("("),
            Token::Paren { open: false } => f.write_str(")"),
        }
    }
}

/// Recognize a number literal: one or more digits or decimal points.
fn number(input: &str) -> IResult<&str, Token> {
    let (rest, text) = take_while1(|c: char| c.is_ascii_digit() || c == '.')(input)?;
    Ok((rest, Token::Number(text.to_string())))
}

/// Recognize a parenthesis.
fn parenthesis(input: &str) -> IResult<&str, Token> {
    let (rest, c) = one_of("()")(input)?;
    Ok((rest, Token::Paren { open: c == '(' }))
}

/// Recognize an operator symbol. The unary decision happens in `lex`,
/// which can see the previous token.
fn operator_symbol(input: &str) -> IResult<&str, char> {
    one_of("+-*/^")(input)
}

/// A `-` negates when nothing precedes it, or the previous token is an
/// open parenthesis, or the previous token is itself an operator.
fn minus_is_unary(previous: Option<&Token>) -> bool {
    matches!(
        previous,
        None | Some(Token::Paren { open: true }) | Some(Token::Operator { .. })
    )
}

/// Tokenize an expression string.
///
/// One left-to-right pass. Whitespace and characters outside the expression
/// alphabet are dropped silently, so `lex` itself cannot fail.
pub fn lex(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        if let Ok((next, token)) = number(rest) {
            tokens.push(token);
            rest = next;
        } else if let Ok((next, token)) = parenthesis(rest) {
            tokens.push(token);
            rest = next;
        } else if let Ok((next, symbol)) = operator_symbol(rest) {
            let unary = symbol == '-' && minus_is_unary(tokens.last());
            tokens.push(Token::Operator { symbol, unary });
            rest = next;
        } else {
            // Not part of the expression alphabet - skip one char
            let mut chars = rest.chars();
            chars.next();
            rest = chars.as_str();
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(text: &str) -> Token {
        Token::Number(text.to_string())
    }

    fn op(symbol: char, unary: bool) -> Token {
        Token::Operator { symbol, unary }
    }

    #[test]
    fn tokenize_number() {
        assert_eq!(lex("42"), vec![num("42")]);
        assert_eq!(lex("3.14"), vec![num("3.14")]);
    }

    #[test]
    fn tokenize_malformed_number_as_single_token() {
        // Validation is deferred to numeric parsing
        assert_eq!(lex("1.2.3"), vec![num("1.2.3")]);
        assert_eq!(lex("."), vec![num(".")]);
    }

    #[test]
    fn tokenize_binary_expression() {
        assert_eq!(lex("2+3"), vec![num("2"), op('+', false), num("3")]);
    }

    #[test]
    fn tokenize_whitespace_dropped() {
        assert_eq!(lex(" 2 + 3 "), vec![num("2"), op('+', false), num("3")]);
    }

    #[test]
    fn tokenize_unrecognized_chars_dropped() {
        assert_eq!(lex("2$+@3"), vec![num("2"), op('+', false), num("3")]);
        assert_eq!(lex("abc"), vec![]);
    }

    #[test]
    fn tokenize_parens() {
        assert_eq!(
            lex("(2)"),
            vec![Token::Paren { open: true }, num("2"), Token::Paren { open: false }]
        );
    }

    #[test]
    fn minus_at_start_is_unary() {
        assert_eq!(lex("-5"), vec![op('-', true), num("5")]);
    }

    #[test]
    fn minus_after_open_paren_is_unary() {
        assert_eq!(
            lex("(-5"),
            vec![Token::Paren { open: true }, op('-', true), num("5")]
        );
    }

    #[test]
    fn minus_after_operator_is_unary() {
        assert_eq!(
            lex("3--5"),
            vec![num("3"), op('-', false), op('-', true), num("5")]
        );
        assert_eq!(
            lex("2^-3"),
            vec![num("2"), op('^', false), op('-', true), num("3")]
        );
    }

    #[test]
    fn minus_after_number_is_binary() {
        assert_eq!(lex("5-3"), vec![num("5"), op('-', false), num("3")]);
    }

    #[test]
    fn minus_after_close_paren_is_binary() {
        assert_eq!(
            lex("(2)-3"),
            vec![
                Token::Paren { open: true },
                num("2"),
                Token::Paren { open: false },
                op('-', false),
                num("3"),
            ]
        );
    }

    #[test]
    fn consecutive_unary_minuses() {
        assert_eq!(lex("--5"), vec![op('-', true), op('-', true), num("5")]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert_eq!(lex(""), vec![]);
    }
}
