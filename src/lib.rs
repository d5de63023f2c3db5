pub mod expr;
pub mod polynomial;

pub use expr::{EvalConfig, EvalError, Evaluator, Limits, Operator, PowPrecedence, Token};
pub use polynomial::{Polynomial, Term};

use rayon::prelude::*;

/// One-shot evaluation of an infix expression with default configuration.
pub fn evaluate_expression(expression: &str) -> Result<f64, EvalError> {
    let mut evaluator = Evaluator::new(1);
    evaluator.evaluate_expression(expression)
}

/// Evaluates independent expressions in parallel. Results correspond to the
/// input positions; expressions share nothing, so no ordering is implied
/// between them.
pub fn evaluate_batch(expressions: &[&str]) -> Vec<Result<f64, EvalError>> {
    expressions
        .par_iter()
        .map(|expression| evaluate_expression(expression))
        .collect()
}
