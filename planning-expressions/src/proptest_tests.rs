//! Property-based tests for evaluation, substitution and consequent
//! extraction over randomly generated, well-formed formulas.

use crate::{
    apply_parameters, contains_any_of_instances, evaluate_expression,
    extract_consequent_predicates,
};
use planning_ontology::{Expression, Fact, Instance};
use proptest::prelude::*;
use std::collections::HashMap;

const PREDICATES: [&str; 3] = ["likes", "at", "busy"];
const TOKENS: [&str; 4] = ["alice", "bob", "kitchen", "?x"];

fn universe() -> Vec<Instance> {
    vec![
        Instance::new("alice", "person"),
        Instance::new("bob", "person"),
        Instance::new("kitchen", "room"),
    ]
}

fn arb_atom() -> impl Strategy<Value = Expression> {
    (
        0..PREDICATES.len(),
        proptest::collection::vec(0..TOKENS.len(), 0..=2),
    )
        .prop_map(|(p, args)| {
            Expression::predicate(PREDICATES[p], args.into_iter().map(|i| TOKENS[i]))
        })
}

fn arb_fact() -> impl Strategy<Value = Fact> {
    (0..PREDICATES.len(), proptest::collection::vec(0..3usize, 0..=2)).prop_map(|(p, args)| {
        Fact::new(PREDICATES[p], args.into_iter().map(|i| TOKENS[i]))
    })
}

fn arb_formula() -> impl Strategy<Value = Expression> {
    arb_atom().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expression::not),
            proptest::collection::vec(inner.clone(), 0..=3).prop_map(Expression::and),
            proptest::collection::vec(inner.clone(), 0..=3).prop_map(Expression::or),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expression::imply(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expression::when(a, b)),
            (prop_oneof![Just("?x - person"), Just("?x - room")], inner.clone())
                .prop_map(|(d, body)| Expression::forall(d, body)),
            (prop_oneof![Just("?x - person"), Just("?x - room")], inner)
                .prop_map(|(d, body)| Expression::exists(d, body)),
        ]
    })
}

fn eval(expression: &Expression, facts: &[Fact]) -> bool {
    evaluate_expression(expression, &universe(), facts, None).expect("well-formed")
}

proptest! {
    #[test]
    fn prop_and_is_conjunction(
        a in arb_formula(),
        b in arb_formula(),
        facts in proptest::collection::vec(arb_fact(), 0..8),
    ) {
        let both = Expression::and(vec![a.clone(), b.clone()]);
        prop_assert_eq!(eval(&both, &facts), eval(&a, &facts) && eval(&b, &facts));
    }

    #[test]
    fn prop_imply_is_material(
        a in arb_formula(),
        b in arb_formula(),
        facts in proptest::collection::vec(arb_fact(), 0..8),
    ) {
        let expected = !eval(&a, &facts) || eval(&b, &facts);
        prop_assert_eq!(eval(&Expression::imply(a.clone(), b.clone()), &facts), expected);
        prop_assert_eq!(eval(&Expression::when(a, b), &facts), expected);
    }

    #[test]
    fn prop_vacuous_quantifiers(body in arb_formula(), facts in proptest::collection::vec(arb_fact(), 0..8)) {
        let forall = Expression::forall("?x - person", body.clone());
        let exists = Expression::exists("?x - person", body);

        prop_assert_eq!(evaluate_expression(&forall, &[], &facts, None), Ok(true));
        prop_assert_eq!(evaluate_expression(&exists, &[], &facts, None), Ok(false));
    }

    #[test]
    fn prop_trace_sees_root_last(formula in arb_formula(), facts in proptest::collection::vec(arb_fact(), 0..8)) {
        let mut last = None;
        let mut hook = |e: &Expression, holds: bool| last = Some((e.clone(), holds));
        let result = evaluate_expression(&formula, &universe(), &facts, Some(&mut hook))
            .expect("well-formed");

        prop_assert_eq!(last, Some((formula.clone(), result)));
        prop_assert_eq!(result, eval(&formula, &facts));
    }

    #[test]
    fn prop_empty_mapping_is_identity(formula in arb_formula()) {
        let empty: HashMap<Instance, Instance> = HashMap::new();
        prop_assert_eq!(apply_parameters(&formula, &empty), formula);
    }

    #[test]
    fn prop_consequent_ignores_antecedent(a in arb_formula(), b in arb_formula()) {
        prop_assert_eq!(
            extract_consequent_predicates(&Expression::imply(a, b.clone())),
            extract_consequent_predicates(&b)
        );
    }

    #[test]
    fn prop_contains_any_of(
        fact in arb_fact(),
        negate in any::<bool>(),
        picks in proptest::collection::vec(0..3usize, 0..3),
    ) {
        let all = universe();
        let instances: Vec<&Instance> = picks.iter().map(|&i| &all[i]).collect();
        let expected = instances
            .iter()
            .any(|instance| fact.args().iter().any(|arg| arg.word() == instance.name()));

        let fact = if negate { fact.negated() } else { fact };
        prop_assert_eq!(contains_any_of_instances(&fact, instances), expected);
    }
}
