//! Twentyfour - A brute-force solver for the 24 game generalized to N numbers
//!
//! This library enumerates every permutation of the input numbers, every
//! assignment of `+ - * /` to the operator slots and every order in which the
//! pairwise reductions can be applied, and reports each derivation whose
//! value equals the target exactly.

pub mod expression;
pub mod generator;
pub mod operator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::Expression;
pub use generator::GeneratorError;
pub use operator::{Operator, OperatorError};
pub use solver::{Solution, Solver, SolverConfig, SolverError, Step};
pub use utils::{UtilsError, parse_numbers};

/// Find every derivation of `input` that evaluates exactly to `target`
///
/// This is a convenience function that creates a solver with the given
/// target and the default settings.
///
/// # Errors
///
/// This function will return an error if the search space is too large to
/// enumerate or an internal invariant is violated during reduction.
///
/// # Examples
///
/// ```
/// use twentyfour::solve;
///
/// let solutions = solve(&[5.0, 5.0, 5.0, 1.0], 24.0).unwrap();
/// assert_eq!(solutions.len(), 1);
///
/// let expr = solutions[0].expression().unwrap();
/// assert_eq!(expr.to_string(), "(5 - 1 / 5) * 5");
/// ```
pub fn solve(input: &[f64], target: f64) -> Result<Vec<Solution>, SolverError> {
    let solver = Solver::new(SolverConfig {
        target,
        ..SolverConfig::default()
    });
    solver.solve(input)
}
