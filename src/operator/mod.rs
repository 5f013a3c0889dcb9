//! The four arithmetic operators and their evaluation

mod errors;
mod model;

pub use errors::OperatorError;
pub use model::{OPERATOR_COUNT, Operator};
