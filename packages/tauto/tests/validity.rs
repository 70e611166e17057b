use indexmap::indexmap;
use tauto::{
    ast::Variable,
    check,
    evaluate::{Assignment, TruthValue},
    Verdict,
};

#[test]
fn recognizes_classical_tautologies() {
    let test_cases = [
        "P v ~P",
        "(P ^ Q) -> Q",
        "P -> (Q -> P)",
        "((P -> Q) ^ (Q -> R)) -> (P -> R)",
        "(P <-> Q) <-> ((P ^ Q) v (~P ^ ~Q))",
        "~(P ^ Q) <-> (~P v ~Q)",
        "((P v Q) ^ ~P) -> Q",
    ];

    for (i, input) in test_cases.into_iter().enumerate() {
        let verdict = check(input);

        assert!(
            verdict.is_tautology(),
            "Test case {}; Input: {}; Verdict: {:?}",
            i + 1,
            input,
            verdict
        );
    }
}

#[test]
fn reports_the_first_falsifying_row_as_counterexample() {
    let test_cases = [
        // Both rows falsify a contradiction; the all-true row comes first.
        (
            "P ^ ~P",
            indexmap! { Variable('P') => TruthValue(true) },
        ),
        (
            "P -> Q",
            indexmap! { Variable('P') => TruthValue(true), Variable('Q') => TruthValue(false) },
        ),
        (
            "P v Q",
            indexmap! { Variable('P') => TruthValue(false), Variable('Q') => TruthValue(false) },
        ),
        (
            "P <-> Q",
            indexmap! { Variable('P') => TruthValue(true), Variable('Q') => TruthValue(false) },
        ),
        (
            "Q -> P",
            indexmap! { Variable('P') => TruthValue(false), Variable('Q') => TruthValue(true) },
        ),
    ];

    for (i, (input, expected)) in test_cases.into_iter().enumerate() {
        assert_eq!(
            check(input),
            Verdict::NotTautology {
                counterexample: Assignment(expected),
            },
            "Test case {}; Input: {}",
            i + 1,
            input
        );
    }
}

#[test]
fn counterexamples_list_variables_in_sorted_order() {
    // The formula mentions Z before A; the counterexample is still sorted.
    let verdict = check("Z ^ A");
    let counterexample = verdict
        .as_not_tautology()
        .expect("Z ^ A is falsifiable");

    assert_eq!(
        counterexample.0.keys().copied().collect::<Vec<_>>(),
        vec![Variable('A'), Variable('Z')]
    );
}

#[test]
fn rejects_invalid_inputs_with_a_reason() {
    let test_cases = [
        "",
        "   ",
        "p -> q",
        "P -> q",
        "P + Q",
        "P Q",
        "(P",
        "P)",
        "P ^",
        "()",
    ];

    for (i, input) in test_cases.into_iter().enumerate() {
        let verdict = check(input);

        let message = verdict
            .as_invalid()
            .unwrap_or_else(|| panic!("Test case {}; Input: {:?}; Verdict not Invalid", i + 1, input));

        assert!(
            !message.is_empty(),
            "Test case {}; Input: {:?}; empty message",
            i + 1,
            input
        );
    }
}

#[test]
fn lowercase_propositions_are_rejected_before_lexing() {
    assert_eq!(
        check("p -> q"),
        Verdict::Invalid {
            message: "use only uppercase letters for propositions".to_owned(),
        }
    );
}

#[test]
fn lowercase_v_is_the_disjunction_operator() {
    // 'v' never trips the lowercase rejection, and 'V' stays a variable.
    assert!(check("P v ~P").is_tautology());

    assert_eq!(
        check("V v V"),
        Verdict::NotTautology {
            counterexample: Assignment(indexmap! { Variable('V') => TruthValue(false) }),
        }
    );
}

#[test]
fn check_is_idempotent() {
    let test_cases = ["P v ~P", "P -> Q", "p -> q", "((P"];

    for (i, input) in test_cases.into_iter().enumerate() {
        assert_eq!(
            check(input),
            check(input),
            "Test case {}; Input: {}",
            i + 1,
            input
        );
    }
}

#[test]
fn enumerates_assignments_in_truth_table_row_order() {
    let variables = [Variable('P'), Variable('Q')].into_iter().collect();

    let rows = Assignment::generate_all(variables)
        .map(|assignment| {
            assignment
                .0
                .values()
                .map(|value| value.0)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    assert_eq!(
        rows,
        vec![
            vec![true, true],
            vec![true, false],
            vec![false, true],
            vec![false, false],
        ]
    );
}

#[test]
fn enumeration_covers_exactly_two_to_the_n_rows() {
    for n in 0..5 {
        let variables = ('A'..='Z').take(n).map(Variable).collect();

        assert_eq!(Assignment::generate_all(variables).count(), 1 << n);
    }
}
