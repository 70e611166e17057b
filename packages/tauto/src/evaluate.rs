use std::collections::BTreeSet;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    ast::{Formula, Variable},
    error::EvalError,
};

/// A classical truth value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthValue(pub bool);

impl std::fmt::Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self.0 { "T" } else { "F" })
    }
}

/// A complete mapping from the variables of a formula to truth values.
///
/// Entries keep their insertion order; assignments produced by
/// [`Assignment::generate_all`] list variables lexicographically.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Assignment(pub IndexMap<Variable, TruthValue>);

impl Assignment {
    /// Enumerates every assignment over `variables` in truth-table row
    /// order: the all-true row first, the all-false row last, with the first
    /// variable as the outermost toggle.
    pub fn generate_all(variables: BTreeSet<Variable>) -> impl Iterator<Item = Assignment> {
        let n = variables.len();

        (0..1usize << n).map(move |row| {
            let bit_string = format!("{:0n$b}", row);

            Assignment(
                variables
                    .iter()
                    .zip(bit_string.chars())
                    .map(|(&variable, bit)| (variable, TruthValue(bit == '0')))
                    .collect(),
            )
        })
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|(variable, value)| format!("{variable} = {value}"))
                .join(", ")
        )
    }
}

pub trait Evaluate {
    /// Computes the truth value of `self` under `assignment`.
    fn evaluate(&self, assignment: &Assignment) -> Result<TruthValue, EvalError>;
}

impl Evaluate for Variable {
    fn evaluate(&self, assignment: &Assignment) -> Result<TruthValue, EvalError> {
        assignment
            .0
            .get(self)
            .copied()
            .ok_or(EvalError { variable: *self })
    }
}

impl Evaluate for Formula {
    fn evaluate(&self, assignment: &Assignment) -> Result<TruthValue, EvalError> {
        let value = match self {
            Formula::Variable(variable) => variable.evaluate(assignment)?.0,
            Formula::Negation(operand) => !operand.evaluate(assignment)?.0,
            Formula::Conjunction(left, right) => {
                left.evaluate(assignment)?.0 && right.evaluate(assignment)?.0
            }
            Formula::Disjunction(left, right) => {
                left.evaluate(assignment)?.0 || right.evaluate(assignment)?.0
            }
            Formula::Implication(left, right) => {
                !left.evaluate(assignment)?.0 || right.evaluate(assignment)?.0
            }
            Formula::Equivalence(left, right) => {
                left.evaluate(assignment)?.0 == right.evaluate(assignment)?.0
            }
        };

        Ok(TruthValue(value))
    }
}
