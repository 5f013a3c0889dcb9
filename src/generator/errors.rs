use thiserror::Error;

use crate::operator::OperatorError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Operator error: {0}")]
    OperatorError(#[from] OperatorError),
    #[error("Too many slots to enumerate: {slots}")]
    TooManySlots { slots: usize },
}
