use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    #[error("Failed to convert digit {digit} to a base {base} operator")]
    InvalidDigit { digit: usize, base: usize },
}
