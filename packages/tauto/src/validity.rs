use enum_as_inner::EnumAsInner;

use crate::{
    evaluate::{Assignment, Evaluate},
    lexer::tokenize,
    parser::parse,
};

/// The outcome of checking one formula.
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner)]
pub enum Verdict {
    /// The formula is true under every assignment.
    Tautology,
    /// The formula is false under `counterexample`, the first falsifying row
    /// in truth-table order.
    NotTautology { counterexample: Assignment },
    /// The input was rejected before enumeration; `message` says why.
    Invalid { message: String },
}

/// Decides whether `input` denotes a tautology.
///
/// The input is tokenized and parsed, then evaluated under every truth
/// assignment over its variables, all-true row first. Enumeration stops at
/// the first falsifying assignment, which becomes the reported
/// counterexample. Lexer and parser failures, lowercase proposition names,
/// and formulas without any proposition are all recovered here as
/// [`Verdict::Invalid`]; nothing escapes to the caller.
pub fn check(input: &str) -> Verdict {
    if input
        .chars()
        .any(|c| c.is_alphabetic() && c.is_lowercase() && c != 'v')
    {
        return Verdict::Invalid {
            message: "use only uppercase letters for propositions".to_owned(),
        };
    }

    let tokens = match tokenize(input) {
        Ok(tokens) => tokens,
        Err(error) => {
            return Verdict::Invalid {
                message: error.to_string(),
            }
        }
    };

    let formula = match parse(&tokens) {
        Ok(formula) => formula,
        Err(error) => {
            return Verdict::Invalid {
                message: error.to_string(),
            }
        }
    };

    let variables = formula.variables();

    if variables.is_empty() {
        return Verdict::Invalid {
            message: "no propositional symbols found".to_owned(),
        };
    }

    log::debug!(
        "checking {formula} over {} assignments",
        1usize << variables.len()
    );

    for assignment in Assignment::generate_all(variables) {
        let value = match formula.evaluate(&assignment) {
            Ok(value) => value,
            Err(error) => {
                unreachable!("assignments cover the formula's variable set: {error}")
            }
        };

        log::trace!("{assignment} yields {value}");

        if !value.0 {
            return Verdict::NotTautology {
                counterexample: assignment,
            };
        }
    }

    Verdict::Tautology
}
