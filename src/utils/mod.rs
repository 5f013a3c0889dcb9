//! Utils module split into submodules

mod errors;
mod format;
mod parsing;
mod permutations;

pub use errors::UtilsError;
pub use format::{format_elapsed, format_solution_count};
pub use parsing::parse_numbers;
pub use permutations::{next_permutation, next_permutation_by};
