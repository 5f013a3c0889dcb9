use crate::operator::Operator;

/// Infix expression tree equivalent to one derivation
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Combine two subtrees with `operator`, left operand first
    pub fn combine(operator: Operator, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match operator {
            Operator::Add => Expression::Add(l, r),
            Operator::Subtract => Expression::Sub(l, r),
            Operator::Multiply => Expression::Mul(l, r),
            Operator::Divide => Expression::Div(l, r),
        }
    }

    /// Number of literal leaves in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => l.leaf_count() + r.leaf_count(),
        }
    }
}
