//! Expression module split into submodules for clarity

mod ast;
mod display;
mod eval;

pub use ast::Expression;
