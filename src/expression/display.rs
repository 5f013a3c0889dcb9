use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mul(_, _) | Expression::Div(_, _) => 2,
                Expression::Number(_) => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        // Right operands are parenthesised at equal precedence, so reading the
        // text left to right repeats the exact f64 operation order.
        fn write_binary(
            f: &mut fmt::Formatter,
            l: &Expression,
            r: &Expression,
            symbol: &str,
            level: u8,
        ) -> fmt::Result {
            let need_l = precedence(l) < level;
            let need_r = precedence(r) <= level;
            write_with_parens(f, l, need_l)?;
            write!(f, " {} ", symbol)?;
            write_with_parens(f, r, need_r)
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) if *n < 0.0 => write!(f, "({})", n),
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r) => write_binary(f, l, r, "+", 1),
                Expression::Sub(l, r) => write_binary(f, l, r, "-", 1),
                Expression::Mul(l, r) => write_binary(f, l, r, "*", 2),
                Expression::Div(l, r) => write_binary(f, l, r, "/", 2),
            }
        }

        fmt_expression(f, self)
    }
}
