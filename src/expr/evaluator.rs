use crate::expr::{converter, tokenizer, EvalConfig, EvalError, Limits, Token};
use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Evaluates a postfix token sequence with one operand stack.
///
/// Operands push; an operator pops the right operand, then the left, applies
/// itself and pushes the result. The stack shares the converter's depth
/// bound. After the last token exactly one value must remain.
pub fn eval_postfix(postfix: &[Token], limits: &Limits) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for &token in postfix {
        match token {
            Token::Number(value) => {
                if stack.len() >= limits.stack_depth {
                    return Err(EvalError::StackOverflow(limits.stack_depth));
                }
                stack.push(value);
            }
            Token::Op(op) => {
                if stack.len() < 2 {
                    return Err(EvalError::InsufficientOperands);
                }
                let right = stack.pop().ok_or(EvalError::StackUnderflow)?;
                let left = stack.pop().ok_or(EvalError::StackUnderflow)?;
                let result = op.apply(left, right)?;
                debug!("{left} {} {right} = {result}", op.symbol());
                stack.push(result);
            }
            // parentheses never survive conversion
            Token::OpenParen | Token::CloseParen => return Err(EvalError::InvalidExpression),
        }
    }

    if stack.len() != 1 {
        return Err(EvalError::InvalidExpression);
    }
    stack.pop().ok_or(EvalError::StackUnderflow)
}

/// The expression engine: tokenize, convert to postfix, evaluate.
///
/// Compiled postfix programs are kept in an LRU cache keyed by the source
/// string, so re-evaluating the same expression skips the front half of the
/// pipeline. The working structures of each call stay call-local.
pub struct Evaluator {
    config: EvalConfig,
    cache: LruCache<String, Vec<Token>>,
}

impl Evaluator {
    /// Creates a new `Evaluator` with a given maximum cache size.
    pub fn new(max_cache_size: usize) -> Self {
        Self::with_config(EvalConfig::default(), max_cache_size)
    }

    pub fn with_config(config: EvalConfig, max_cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            config,
            cache: LruCache::new(capacity),
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Tokenizes and converts `expression`, returning its postfix program.
    pub fn compile_expression(&mut self, expression: &str) -> Result<Vec<Token>, EvalError> {
        if let Some(postfix) = self.cache.get(expression) {
            debug!("postfix cache hit: {expression:?}");
            return Ok(postfix.clone());
        }
        let tokens = tokenizer::tokenize(expression)?;
        let postfix = converter::to_postfix(&tokens, &self.config)?;
        self.cache.put(expression.to_string(), postfix.clone());
        Ok(postfix)
    }

    /// Evaluates a previously compiled postfix program.
    pub fn evaluate_postfix(&self, postfix: &[Token]) -> Result<f64, EvalError> {
        eval_postfix(postfix, &self.config.limits)
    }

    /// Runs the full pipeline on `expression`, surfacing the first error.
    pub fn evaluate_expression(&mut self, expression: &str) -> Result<f64, EvalError> {
        let postfix = self.compile_expression(expression)?;
        self.evaluate_postfix(&postfix)
    }
}
