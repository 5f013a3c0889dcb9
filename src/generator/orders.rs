use log::debug;

use crate::generator::errors::GeneratorError;
use crate::utils::next_permutation;

/// The order in which reduction steps are applied to a shrinking working list
pub type EvaluationOrder = Vec<usize>;

/// Lazy iterator over the permutations of `0..steps` in lexicographic order
#[derive(Debug, Clone)]
pub struct EvaluationOrders {
    current: EvaluationOrder,
    remaining: usize,
}

impl Iterator for EvaluationOrders {
    type Item = EvaluationOrder;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let order = self.current.clone();
        self.remaining -= 1;
        if self.remaining > 0 {
            next_permutation(&mut self.current);
        }
        Some(order)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for EvaluationOrders {}

/// All `steps!` permutations of `0..steps`, in lexicographic order.
///
/// # Errors
///
/// Returns an error if `steps!` does not fit in a `usize`.
pub fn evaluation_orders(steps: usize) -> Result<EvaluationOrders, GeneratorError> {
    let total = (1..=steps)
        .try_fold(1usize, |acc, n| acc.checked_mul(n))
        .ok_or(GeneratorError::TooManySlots { slots: steps })?;

    debug!("Enumerating {} evaluation orders of {} steps", total, steps);

    Ok(EvaluationOrders {
        current: (0..steps).collect(),
        remaining: total,
    })
}
