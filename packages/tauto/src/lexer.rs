use winnow::{
    ascii::multispace0,
    combinator::{alt, preceded, repeat, terminated},
    token::one_of,
    PResult, Parser,
};

use crate::{ast::Variable, error::LexError};

/// A lexical unit of the formula notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Variable(Variable),
    Not,
    And,
    Or,
    Implies,
    Iff,
    LeftParen,
    RightParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Variable(variable) => write!(f, "variable '{variable}'"),
            Token::Not => write!(f, "'~'"),
            Token::And => write!(f, "'^'"),
            Token::Or => write!(f, "'v'"),
            Token::Implies => write!(f, "'->'"),
            Token::Iff => write!(f, "'<->'"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
        }
    }
}

/// Splits a raw formula string into tokens, discarding whitespace.
///
/// The two-character connectives `<->` and `->` are matched before the
/// single-character ones so they are never split apart. A lowercase `v` is
/// always the disjunction operator; the variable spelling is the uppercase
/// `V`. The symbolic connectives `¬ ∧ ∨ ⇒ ⇔` are accepted alongside the
/// ASCII ones, so a rendered [`Formula`](crate::ast::Formula) lexes back.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    terminated(repeat(0.., preceded(multispace0, token)), multispace0)
        .parse(input)
        .map_err(|error| {
            let offset = error.offset();

            LexError {
                character: input[offset..].chars().next().unwrap_or_default(),
                offset,
            }
        })
}

fn token(input: &mut &str) -> PResult<Token> {
    alt((
        "<->".value(Token::Iff),
        "->".value(Token::Implies),
        '⇔'.value(Token::Iff),
        '⇒'.value(Token::Implies),
        one_of(['^', '&', '∧']).value(Token::And),
        one_of(['v', '∨']).value(Token::Or),
        one_of(['~', '!', '¬']).value(Token::Not),
        '('.value(Token::LeftParen),
        ')'.value(Token::RightParen),
        one_of('A'..='Z').map(|name| Token::Variable(Variable(name))),
    ))
    .parse_next(input)
}
