use thiserror::Error;

use crate::generator::GeneratorError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Generator error: {0}")]
    GeneratorError(#[from] GeneratorError),
    #[error("Internal invariant violated at step {step}: {reason}")]
    InvariantViolation { step: usize, reason: String },
}
