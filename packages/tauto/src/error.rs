use derive_more::derive::Display;

use crate::{ast::Variable, lexer::Token};

/// A character the formula notation does not know.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display("unrecognized character '{character}' at position {offset}")]
pub struct LexError {
    pub character: char,
    /// Byte offset into the raw input.
    pub offset: usize,
}

impl std::error::Error for LexError {}

/// A structurally invalid token sequence.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[display("the formula is empty")]
    EmptyFormula,
    #[display("unexpected {token} at position {offset}")]
    UnexpectedToken { token: Token, offset: usize },
    #[display("unexpected end of formula")]
    UnexpectedEnd,
}

impl std::error::Error for ParseError {}

/// A variable without a truth value in the given assignment.
///
/// [`check`](crate::check) always evaluates under assignments covering the
/// formula's whole variable set, so this surfacing there is a programming
/// error, not an input error.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display("no truth value assigned to variable {variable}")]
pub struct EvalError {
    pub variable: Variable,
}

impl std::error::Error for EvalError {}
