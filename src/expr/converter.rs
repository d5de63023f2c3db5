use crate::expr::{EvalConfig, EvalError, Operator, PowPrecedence, Token};
use log::debug;

/// Decides whether the operator on top of the stack must be flushed to the
/// output before `incoming` is pushed.
///
/// Only called when the stack top is an operator; an open parenthesis is a
/// barrier handled by the caller and is never popped here. Rules, first
/// match wins:
///
/// 1. `^` over `^` stays (right-associative chain).
/// 2. `^` over anything else pops.
/// 3. `*` and `/` pop unconditionally under `Legacy`; under `Tight` they
///    stay when the incoming operator is `^`.
/// 4. `+` and `-` pop only for another additive operator.
/// 5. Everything else stays.
pub fn should_pop(top: Operator, incoming: Operator, pow: PowPrecedence) -> bool {
    use Operator::*;
    match (top, incoming) {
        (Power, Power) => false,
        (Power, _) => true,
        (Multiply | Divide, Power) => pow == PowPrecedence::Legacy,
        (Multiply | Divide, _) => true,
        (Add | Subtract, Add | Subtract) => true,
        _ => false,
    }
}

/// Converts an infix token sequence to postfix with one pass of the
/// shunting-yard algorithm.
///
/// The operator stack and the output sequence are bounded by
/// `config.limits`; a `)` with no pending `(` fails, while a leftover `(`
/// at end of input is silently discarded.
pub fn to_postfix(tokens: &[Token], config: &EvalConfig) -> Result<Vec<Token>, EvalError> {
    let limits = &config.limits;
    let mut output: Vec<Token> = Vec::new();
    let mut ops: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => emit(&mut output, token, limits.output_len)?,

            Token::OpenParen => push_op(&mut ops, token, limits.stack_depth)?,

            Token::CloseParen => loop {
                match ops.pop() {
                    Some(Token::OpenParen) => break,
                    Some(top) => emit(&mut output, top, limits.output_len)?,
                    None => return Err(EvalError::UnmatchedCloseParen),
                }
            },

            Token::Op(incoming) => {
                while let Some(&top) = ops.last() {
                    // an open parenthesis blocks the scan
                    let Token::Op(top_op) = top else { break };
                    if !should_pop(top_op, incoming, config.pow_precedence) {
                        break;
                    }
                    ops.pop();
                    emit(&mut output, top, limits.output_len)?;
                }
                push_op(&mut ops, token, limits.stack_depth)?;
            }
        }
    }

    // drain the stack; an unmatched '(' is dropped, not reported
    while let Some(top) = ops.pop() {
        if !matches!(top, Token::OpenParen) {
            emit(&mut output, top, limits.output_len)?;
        }
    }

    debug!(
        "postfix: {}",
        output
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(output)
}

fn emit(output: &mut Vec<Token>, token: Token, limit: usize) -> Result<(), EvalError> {
    if output.len() >= limit {
        return Err(EvalError::OutputOverflow(limit));
    }
    output.push(token);
    Ok(())
}

fn push_op(ops: &mut Vec<Token>, token: Token, limit: usize) -> Result<(), EvalError> {
    if ops.len() >= limit {
        return Err(EvalError::StackOverflow(limit));
    }
    ops.push(token);
    Ok(())
}
