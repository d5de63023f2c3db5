use crate::expr::{EvalError, Operator, Token};
use log::debug;
use pest::error::InputLocation;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "expr/expression.pest"]
pub struct ExprTokenizer;

/// Scans `source` into tokens, left to right.
///
/// Whitespace is discarded. A digit starts a maximal run of consecutive
/// digits, emitted as one non-negative integer `Number`; a leading `-` is
/// always an operator token, never part of the number. Any character outside
/// digits, `+ - * / ^`, parentheses and whitespace fails with
/// `InvalidCharacter`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, EvalError> {
    debug!("tokenizing: {source:?}");

    let parsed = ExprTokenizer::parse(Rule::token_list, source)
        .map_err(|e| invalid_character_at(source, e.location))?
        .next()
        .ok_or(EvalError::InvalidExpression)?;

    let mut tokens = Vec::new();
    for pair in parsed.into_inner() {
        match pair.as_rule() {
            Rule::number => {
                // digit runs always parse; enormous ones saturate to inf
                tokens.push(Token::Number(pair.as_str().parse().unwrap()));
            }
            Rule::operator => {
                let symbol = pair
                    .as_str()
                    .chars()
                    .next()
                    .ok_or(EvalError::InvalidExpression)?;
                tokens.push(Token::Op(Operator::try_from(symbol)?));
            }
            Rule::open_paren => tokens.push(Token::OpenParen),
            Rule::close_paren => tokens.push(Token::CloseParen),
            Rule::EOI => {}
            _ => unreachable!("token_list only yields token rules"),
        }
    }

    debug!("tokens: {tokens:?}");
    Ok(tokens)
}

/// Recovers the offending character from a pest error position.
fn invalid_character_at(source: &str, location: InputLocation) -> EvalError {
    let pos = match location {
        InputLocation::Pos(p) => p,
        InputLocation::Span((start, _)) => start,
    };
    match source[pos..].chars().next() {
        Some(c) => EvalError::InvalidCharacter(c),
        None => EvalError::InvalidExpression,
    }
}
