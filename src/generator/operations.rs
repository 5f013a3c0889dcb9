use log::debug;

use crate::generator::errors::GeneratorError;
use crate::operator::{OPERATOR_COUNT, Operator};

/// Operators assigned positionally to the reduction steps of one expression
pub type OperatorSequence = Vec<Operator>;

/// Lazy iterator over every assignment of operators to `slots` positions.
///
/// Index `i` is read as a base-4 numeral, least significant digit first,
/// with digit `j` deciding the operator of slot `j`.
#[derive(Debug, Clone)]
pub struct OperatorSequences {
    slots: usize,
    next: usize,
    total: usize,
}

impl OperatorSequences {
    fn decode(&self, index: usize) -> Result<OperatorSequence, GeneratorError> {
        let mut remaining = index;
        let mut sequence = Vec::with_capacity(self.slots);
        for _ in 0..self.slots {
            sequence.push(Operator::from_digit(remaining % OPERATOR_COUNT)?);
            remaining /= OPERATOR_COUNT;
        }
        Ok(sequence)
    }
}

impl Iterator for OperatorSequences {
    type Item = Result<OperatorSequence, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let item = self.decode(self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OperatorSequences {}

/// # Errors
///
/// Returns an error if `4^slots` does not fit in a `usize`.
pub fn operator_sequences(slots: usize) -> Result<OperatorSequences, GeneratorError> {
    let exponent = u32::try_from(slots).map_err(|_| GeneratorError::TooManySlots { slots })?;
    let total = OPERATOR_COUNT
        .checked_pow(exponent)
        .ok_or(GeneratorError::TooManySlots { slots })?;

    debug!(
        "Enumerating {} operator sequences over {} slots",
        total, slots
    );

    Ok(OperatorSequences {
        slots,
        next: 0,
        total,
    })
}
