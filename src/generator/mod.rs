//! Enumeration of operator assignments and reduction orders

mod errors;
pub mod operations;
pub mod orders;

pub use errors::GeneratorError;
pub use operations::{OperatorSequence, OperatorSequences, operator_sequences};
pub use orders::{EvaluationOrder, EvaluationOrders, evaluation_orders};
