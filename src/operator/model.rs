use std::fmt;

use crate::operator::errors::OperatorError;

/// Number of distinct operators, the base used to encode operator sequences
pub const OPERATOR_COUNT: usize = 4;

/// A binary arithmetic operator applied to two adjacent working-list values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in digit order
    pub const ALL: [Operator; OPERATOR_COUNT] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Decode a base-4 digit into its operator.
    ///
    /// # Errors
    ///
    /// Returns an error if `digit` is not below [`OPERATOR_COUNT`].
    pub fn from_digit(digit: usize) -> Result<Self, OperatorError> {
        Self::ALL
            .get(digit)
            .copied()
            .ok_or(OperatorError::InvalidDigit {
                digit,
                base: OPERATOR_COUNT,
            })
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Compute `left <op> right` with plain IEEE arithmetic.
    ///
    /// Division by zero is not special-cased: it yields an infinity or NaN.
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
