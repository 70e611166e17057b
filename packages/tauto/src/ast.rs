use std::collections::BTreeSet;

use derive_more::derive::Display;
use termtree::Tree;

/// A propositional variable, named by a single uppercase ASCII letter.
#[derive(Debug, Display, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable(pub char);

/// A propositional formula.
///
/// The tree owns its children exclusively and is immutable once built; the
/// parser is the only producer.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Formula {
    Variable(Variable),
    Negation(Box<Formula>),
    Conjunction(Box<Formula>, Box<Formula>),
    Disjunction(Box<Formula>, Box<Formula>),
    Implication(Box<Formula>, Box<Formula>),
    Equivalence(Box<Formula>, Box<Formula>),
}

impl From<Variable> for Formula {
    fn from(variable: Variable) -> Self {
        Formula::Variable(variable)
    }
}

impl Formula {
    /// The distinct variables of the formula, in lexicographic order.
    pub fn variables(&self) -> BTreeSet<Variable> {
        match self {
            Formula::Variable(variable) => BTreeSet::from([*variable]),
            Formula::Negation(operand) => operand.variables(),
            Formula::Conjunction(left, right)
            | Formula::Disjunction(left, right)
            | Formula::Implication(left, right)
            | Formula::Equivalence(left, right) => {
                let mut variables = left.variables();
                variables.extend(right.variables());

                variables
            }
        }
    }

    pub fn get_tree(&self) -> Tree<String> {
        let connective = |symbol: &str| Tree::new(symbol.to_owned());

        match self {
            Formula::Variable(variable) => Tree::new(variable.to_string()),
            Formula::Negation(operand) => connective("¬").with_leaves(vec![operand.get_tree()]),
            Formula::Conjunction(left, right) => {
                connective("∧").with_leaves(vec![left.get_tree(), right.get_tree()])
            }
            Formula::Disjunction(left, right) => {
                connective("∨").with_leaves(vec![left.get_tree(), right.get_tree()])
            }
            Formula::Implication(left, right) => {
                connective("⇒").with_leaves(vec![left.get_tree(), right.get_tree()])
            }
            Formula::Equivalence(left, right) => {
                connective("⇔").with_leaves(vec![left.get_tree(), right.get_tree()])
            }
        }
    }
}

/// Canonical fully parenthesized rendering. Re-parsing the output yields an
/// equal tree.
impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Variable(variable) => write!(f, "{variable}"),
            Formula::Negation(operand) => write!(f, "(¬{operand})"),
            Formula::Conjunction(left, right) => write!(f, "({left} ∧ {right})"),
            Formula::Disjunction(left, right) => write!(f, "({left} ∨ {right})"),
            Formula::Implication(left, right) => write!(f, "({left} ⇒ {right})"),
            Formula::Equivalence(left, right) => write!(f, "({left} ⇔ {right})"),
        }
    }
}
