use crate::expression::ast::Expression;
use crate::operator::Operator;

impl Expression {
    /// Recompute the value of the tree with the same IEEE operations the
    /// solver applied, so the result is bit-identical to the trace.
    pub fn evaluate(&self) -> f64 {
        match self {
            Expression::Number(n) => *n,
            Expression::Add(l, r) => Operator::Add.apply(l.evaluate(), r.evaluate()),
            Expression::Sub(l, r) => Operator::Subtract.apply(l.evaluate(), r.evaluate()),
            Expression::Mul(l, r) => Operator::Multiply.apply(l.evaluate(), r.evaluate()),
            Expression::Div(l, r) => Operator::Divide.apply(l.evaluate(), r.evaluate()),
        }
    }
}
