pub mod constants;
mod core;
mod errors;
mod trace;

pub use self::core::{Solver, SolverConfig};
pub use errors::SolverError;
pub use trace::{Solution, Step};
