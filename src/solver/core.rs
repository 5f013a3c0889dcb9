use log::{debug, info};
use rayon::prelude::*;

use crate::generator::{EvaluationOrder, OperatorSequence, evaluation_orders, operator_sequences};
use crate::operator::Operator;
use crate::solver::constants::{DEFAULT_TARGET, PERMUTATION_CHUNK_SIZE};
use crate::solver::errors::SolverError;
use crate::solver::trace::{Solution, Step};
use crate::utils::next_permutation_by;

/// Configuration for a solve call
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Value a derivation must equal exactly
    pub target: f64,
    /// Fan input permutations out over the rayon pool
    pub parallel: bool,
    /// Permutations generated and searched per batch (at least 1)
    pub batch_size: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            parallel: true,
            batch_size: PERMUTATION_CHUNK_SIZE,
        }
    }
}

/// Exhaustive solver over input permutations, operator sequences and
/// evaluation orders
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find every derivation of `input` that evaluates exactly to the target.
    ///
    /// Solutions are returned in discovery order: by permutation of the
    /// sorted input, then operator sequence, then evaluation order. The
    /// order does not depend on `parallel`.
    ///
    /// # Errors
    ///
    /// Returns an error if the search space cannot be enumerated or an
    /// internal invariant is violated during reduction.
    pub fn solve(&self, input: &[f64]) -> Result<Vec<Solution>, SolverError> {
        let target = self.config.target;

        match input {
            [] => {
                info!("Empty input, no solutions");
                return Ok(Vec::new());
            }
            [value] => {
                info!("Single-number input, comparing {} with {}", value, target);
                return Ok(if *value == target {
                    vec![Solution::singleton(*value)]
                } else {
                    Vec::new()
                });
            }
            _ => {}
        }

        let steps = input.len() - 1;
        let sequences = operator_sequences(steps)?.collect::<Result<Vec<_>, _>>()?;
        let orders: Vec<EvaluationOrder> = evaluation_orders(steps)?.collect();

        info!(
            "Searching permutations of {} numbers x {} operator sequences x {} orders for {}",
            input.len(),
            sequences.len(),
            orders.len(),
            target
        );

        let mut current = input.to_vec();
        current.sort_by(f64::total_cmp);

        let batch_size = self.config.batch_size.max(1);
        let mut solutions = Vec::new();
        let mut visited = 0usize;
        let mut exhausted = false;
        while !exhausted {
            let mut chunk = Vec::with_capacity(batch_size.min(PERMUTATION_CHUNK_SIZE));
            while chunk.len() < batch_size && !exhausted {
                chunk.push(current.clone());
                exhausted = !next_permutation_by(&mut current, f64::total_cmp);
            }
            visited += chunk.len();

            let per_permutation = self.search_chunk(&chunk, &sequences, &orders)?;
            solutions.extend(per_permutation.into_iter().flatten());
        }

        info!(
            "Found {} solutions across {} permutations",
            solutions.len(),
            visited
        );
        Ok(solutions)
    }

    /// Search a batch of permutations, keeping results in batch order
    fn search_chunk(
        &self,
        chunk: &[Vec<f64>],
        sequences: &[OperatorSequence],
        orders: &[EvaluationOrder],
    ) -> Result<Vec<Vec<Solution>>, SolverError> {
        if self.config.parallel {
            chunk
                .par_iter()
                .map(|permutation| self.search_permutation(permutation, sequences, orders))
                .collect()
        } else {
            chunk
                .iter()
                .map(|permutation| self.search_permutation(permutation, sequences, orders))
                .collect()
        }
    }

    fn search_permutation(
        &self,
        permutation: &[f64],
        sequences: &[OperatorSequence],
        orders: &[EvaluationOrder],
    ) -> Result<Vec<Solution>, SolverError> {
        let target = self.config.target;
        let mut working = Vec::with_capacity(permutation.len());
        let mut found = Vec::new();

        for operators in sequences {
            for order in orders {
                working.clear();
                working.extend_from_slice(permutation);

                let value = reduce(&mut working, operators, order, None)?;
                if value != target {
                    continue;
                }

                // Replay the match with recording so misses never allocate a trace
                working.clear();
                working.extend_from_slice(permutation);
                let mut steps = Vec::with_capacity(operators.len());
                let result = reduce(&mut working, operators, order, Some(&mut steps))?;

                let solution = Solution::new(permutation.to_vec(), steps, result);
                debug!("Found solution:\n{}", solution);
                found.push(solution);
            }
        }

        Ok(found)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Reduce `working` to a single value, applying `operators[i]` at the slot
/// chosen by `order[i]`.
///
/// Each earlier step removed one element, so the slot is `order[i] - i`,
/// floored at 0 and capped at the last adjacent pair.
pub(crate) fn reduce(
    working: &mut Vec<f64>,
    operators: &[Operator],
    order: &[usize],
    mut trace: Option<&mut Vec<Step>>,
) -> Result<f64, SolverError> {
    let steps = working.len().saturating_sub(1);
    if operators.len() != steps || order.len() != steps {
        return Err(SolverError::InvariantViolation {
            step: 0,
            reason: format!(
                "{} values need {} operators and order entries, got {} and {}",
                working.len(),
                steps,
                operators.len(),
                order.len()
            ),
        });
    }

    for (step, (&operator, &index)) in operators.iter().zip(order).enumerate() {
        let slot = index.saturating_sub(step).min(working.len() - 2);

        let (Some(&left), Some(&right)) = (working.get(slot), working.get(slot + 1)) else {
            return Err(SolverError::InvariantViolation {
                step,
                reason: format!("slot {} out of range for {} values", slot, working.len()),
            });
        };

        let result = operator.apply(left, right);
        working[slot] = result;
        working.remove(slot + 1);

        if let Some(trace) = trace.as_deref_mut() {
            trace.push(Step {
                slot,
                left,
                right,
                operator,
                result,
                state: working.clone(),
            });
        }
    }

    working
        .first()
        .copied()
        .ok_or_else(|| SolverError::InvariantViolation {
            step: steps,
            reason: "working list is empty".to_string(),
        })
}
