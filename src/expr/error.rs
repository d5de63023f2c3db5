use thiserror::Error;

/// Every way an evaluation can fail.
///
/// All variants are fail-fast: the pipeline aborts on the first error and
/// produces no partial result.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("unmatched parenthesis ')'")]
    UnmatchedCloseParen,

    #[error("stack overflow (limit {0})")]
    StackOverflow(usize),

    #[error("output overflow (limit {0})")]
    OutputOverflow(usize),

    #[error("insufficient operands")]
    InsufficientOperands,

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid expression")]
    InvalidExpression,

    /// Pop from an empty stack. The length checks in the converter and
    /// evaluator keep this unreachable; it is reported rather than panicking.
    #[error("stack underflow")]
    StackUnderflow,
}
