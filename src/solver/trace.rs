use std::fmt;

use crate::expression::Expression;
use crate::operator::Operator;

/// One pairwise reduction of a derivation
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Position of the left operand in the working list before the step
    pub slot: usize,
    pub left: f64,
    pub right: f64,
    pub operator: Operator,
    pub result: f64,
    /// Working list after the step
    pub state: Vec<f64>,
}

/// A derivation whose final value equals the target
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    permutation: Vec<f64>,
    steps: Vec<Step>,
    result: f64,
}

impl Solution {
    pub(crate) fn new(permutation: Vec<f64>, steps: Vec<Step>, result: f64) -> Self {
        Self {
            permutation,
            steps,
            result,
        }
    }

    pub(crate) fn singleton(value: f64) -> Self {
        Self::new(vec![value], Vec::new(), value)
    }

    /// The input permutation the derivation started from
    pub fn permutation(&self) -> &[f64] {
        &self.permutation
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    /// Rebuild the derivation as a single expression tree by replaying the
    /// steps on a list of subtrees.
    ///
    /// Returns `None` if the steps do not describe a reduction of the
    /// permutation to one value.
    pub fn expression(&self) -> Option<Expression> {
        let mut nodes: Vec<Expression> = self
            .permutation
            .iter()
            .map(|&n| Expression::Number(n))
            .collect();

        for step in &self.steps {
            if step.slot + 1 >= nodes.len() {
                return None;
            }
            let right = nodes.remove(step.slot + 1);
            let left = nodes.remove(step.slot);
            nodes.insert(step.slot, Expression::combine(step.operator, left, right));
        }

        match nodes.len() {
            1 => nodes.pop(),
            _ => None,
        }
    }
}

fn write_values(f: &mut fmt::Formatter, values: &[f64]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}: ", self.left, self.operator, self.right)?;
        write_values(f, &self.state)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_values(f, &self.permutation)?;
        writeln!(f)?;
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        write!(f, "result: {}", self.result)
    }
}
