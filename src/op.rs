//! The operator model: which symbols exist, how tightly they bind, and how
//! they apply to operands.

use crate::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    /// Unary minus. The only single-operand operator.
    Negate,
}

impl Operator {
    /// Map a surface symbol to an operator. A `-` flagged as unary becomes
    /// `Negate`; everything else maps to its binary variant.
    pub fn from_symbol(symbol: char, unary: bool) -> Option<Operator> {
        match symbol {
            '-' if unary => Some(Operator::Negate),
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    /// Fixed binding strength. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Power => 4,
            Operator::Negate => 3,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Add | Operator::Subtract => 1,
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Negate)
    }

    /// Apply the operator. Binary operators read `b` as the right-hand
    /// operand (defaulting to 0 if a caller omits it); `Negate` ignores it.
    /// `Power` uses real-valued exponentiation, so domains undefined over
    /// the reals come back as NaN rather than an error.
    pub fn apply(self, a: f64, b: Option<f64>) -> Result<f64, Error> {
        let b = b.unwrap_or(0.0);
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide => {
                if b == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                Ok(a / b)
            }
            Operator::Power => Ok(a.powf(b)),
            Operator::Negate => Ok(-a),
        }
    }

    fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract | Operator::Negate => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
