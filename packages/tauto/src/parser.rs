use winnow::{
    combinator::{alt, cut_err, delimited, eof, preceded, separated_foldl1, separated_foldr1, terminated},
    token::{any, one_of},
    PResult, Parser,
};

use crate::{ast::Formula, error::ParseError, lexer::Token};

type Tokens<'a> = &'a [Token];

/// Parses a complete token sequence into a single formula.
///
/// Connectives bind in the order `¬`, `∧`, `∨`, `⇒`, `⇔` from tightest to
/// loosest. Implication and equivalence associate to the right, so
/// `P -> Q -> R` reads as `P -> (Q -> R)`; conjunction and disjunction
/// associate to the left. Negation applies to the immediately following
/// primary (a variable, a parenthesized group, or another negation), never
/// further.
pub fn parse(tokens: &[Token]) -> Result<Formula, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyFormula);
    }

    terminated(formula, eof).parse(tokens).map_err(|error| {
        let offset = error.offset();

        match tokens.get(offset) {
            Some(&token) => ParseError::UnexpectedToken { token, offset },
            None => ParseError::UnexpectedEnd,
        }
    })
}

fn formula(input: &mut Tokens) -> PResult<Formula> {
    equivalence(input)
}

fn equivalence(input: &mut Tokens) -> PResult<Formula> {
    separated_foldr1(
        implication,
        one_of(|token| token == Token::Iff),
        |left, _, right| Formula::Equivalence(Box::new(left), Box::new(right)),
    )
    .parse_next(input)
}

fn implication(input: &mut Tokens) -> PResult<Formula> {
    separated_foldr1(
        disjunction,
        one_of(|token| token == Token::Implies),
        |left, _, right| Formula::Implication(Box::new(left), Box::new(right)),
    )
    .parse_next(input)
}

fn disjunction(input: &mut Tokens) -> PResult<Formula> {
    separated_foldl1(
        conjunction,
        one_of(|token| token == Token::Or),
        |left, _, right| Formula::Disjunction(Box::new(left), Box::new(right)),
    )
    .parse_next(input)
}

fn conjunction(input: &mut Tokens) -> PResult<Formula> {
    separated_foldl1(
        primary,
        one_of(|token| token == Token::And),
        |left, _, right| Formula::Conjunction(Box::new(left), Box::new(right)),
    )
    .parse_next(input)
}

fn primary(input: &mut Tokens) -> PResult<Formula> {
    alt((variable, parenthesized, negation)).parse_next(input)
}

fn variable(input: &mut Tokens) -> PResult<Formula> {
    any.verify_map(|token| match token {
        Token::Variable(variable) => Some(variable.into()),
        _ => None,
    })
    .parse_next(input)
}

// Once the opening parenthesis matched, the body and the closing parenthesis
// are committed; a failure past this point reports the offending token
// instead of backtracking.
fn parenthesized(input: &mut Tokens) -> PResult<Formula> {
    delimited(
        one_of(|token| token == Token::LeftParen),
        cut_err(formula),
        cut_err(one_of(|token| token == Token::RightParen)),
    )
    .parse_next(input)
}

fn negation(input: &mut Tokens) -> PResult<Formula> {
    preceded(one_of(|token| token == Token::Not), primary)
        .map(|operand| Formula::Negation(Box::new(operand)))
        .parse_next(input)
}
