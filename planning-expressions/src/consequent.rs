//! Planners index rules by what they may produce: the predicates that
//! a formula can assert when read as a rule's conclusion.  Premises of
//! implications say nothing about that and are skipped.
//!
//! A disjunction asserts one of its branches, but we cannot tell which
//! one, so all predicates under an `or` collapse into a single
//! `Either` entry.  A conjunction asserts every branch, so its entries
//! stay separate.
use crate::either::Either;
use crate::error::{operands, Error, Result};
use planning_ontology::{Expression, Node, Operator};
use std::collections::BTreeSet;

/// Returns the predicates `expression` could assert, each entry being
/// one predicate or an unresolved choice between several.
///
/// # Errors
///
/// Returns `Err` on an empty word, and on malformed operator
/// applications.  An empty word names no predicate, so it is rejected
/// here as it is during evaluation.
pub fn extract_consequent_predicates(expression: &Expression) -> Result<BTreeSet<Either<String>>> {
    let op = match expression.node() {
        Node::Empty => return Err(Error::EmptyExpression),
        Node::Predicate(name) => {
            let mut ret = BTreeSet::new();
            ret.insert(Either::new(name.to_string()));
            return Ok(ret);
        }
        Node::Operator(op) => op,
    };

    let args = operands(op, expression)?;
    match op {
        Operator::Not => extract_consequent_predicates(&args[0]),
        Operator::And => {
            let mut ret = BTreeSet::new();
            for arg in args {
                ret.extend(extract_consequent_predicates(arg)?);
            }

            Ok(ret)
        }
        Operator::Or => {
            let mut branches = Vec::new();
            for arg in args {
                branches.extend(extract_consequent_predicates(arg)?);
            }

            let mut ret = BTreeSet::new();
            ret.insert(Either::of_either(branches));
            Ok(ret)
        }
        // The antecedent of an implication and the declaration of a
        // quantifier both sit in the first slot.
        Operator::Imply | Operator::When | Operator::Forall | Operator::Exists => {
            extract_consequent_predicates(&args[1])
        }
    }
}

#[cfg(test)]
fn names(entries: &[&[&str]]) -> BTreeSet<Either<String>> {
    entries
        .iter()
        .map(|entry| entry.iter().map(|name| name.to_string()).collect::<Either<String>>())
        .collect()
}

#[test]
fn test_leaf() {
    let formula = Expression::predicate("likes", vec!["alice", "bob"]);
    assert_eq!(extract_consequent_predicates(&formula), Ok(names(&[&["likes"]])));
}

#[test]
fn test_or_is_one_ambiguous_entry() {
    let formula = Expression::or(vec![
        Expression::predicate("P", vec!["x"]),
        Expression::predicate("Q", vec!["y"]),
    ]);

    let extracted = extract_consequent_predicates(&formula).expect("ok");
    assert_eq!(extracted, names(&[&["P", "Q"]]));
    assert_eq!(extracted.len(), 1);
    assert_eq!(
        extracted.iter().next().map(ToString::to_string),
        Some("{P, Q}".to_string())
    );
}

#[test]
fn test_and_keeps_entries_apart() {
    let formula = Expression::and(vec![
        Expression::predicate("P", vec!["x"]),
        Expression::not(Expression::predicate("Q", vec!["y"])),
        Expression::or(vec![
            Expression::predicate("R", vec![]),
            Expression::predicate("S", vec![]),
        ]),
    ]);

    assert_eq!(
        extract_consequent_predicates(&formula),
        Ok(names(&[&["P"], &["Q"], &["R", "S"]]))
    );
}

#[test]
fn test_or_flattens_nested_entries() {
    let formula = Expression::or(vec![
        Expression::and(vec![
            Expression::predicate("P", vec![]),
            Expression::predicate("Q", vec![]),
        ]),
        Expression::predicate("R", vec![]),
    ]);

    assert_eq!(
        extract_consequent_predicates(&formula),
        Ok(names(&[&["P", "Q", "R"]]))
    );
}

#[test]
fn test_antecedent_ignored() {
    let consequent = Expression::predicate("clean", vec!["kitchen"]);
    for formula in [
        Expression::imply(Expression::predicate("dirty", vec!["kitchen"]), consequent.clone()),
        Expression::when(Expression::leaf(""), consequent.clone()),
    ]
    .iter()
    {
        assert_eq!(
            extract_consequent_predicates(formula),
            extract_consequent_predicates(&consequent)
        );
    }
}

#[test]
fn test_quantifier_body() {
    let formula = Expression::forall(
        "?x - person",
        Expression::exists("?y - room", Expression::predicate("at", vec!["?x", "?y"])),
    );

    assert_eq!(extract_consequent_predicates(&formula), Ok(names(&[&["at"]])));
}

#[test]
fn test_malformed() {
    assert_eq!(
        extract_consequent_predicates(&Expression::leaf("")),
        Err(Error::EmptyExpression)
    );
    assert!(matches!(
        extract_consequent_predicates(&Expression::operator(
            Operator::Imply,
            vec![Expression::leaf("p")]
        )),
        Err(Error::Arity { operator: Operator::Imply, .. })
    ));
}

#[test]
fn test_empty_connectives() {
    assert_eq!(
        extract_consequent_predicates(&Expression::and(Vec::new())),
        Ok(BTreeSet::new())
    );

    // An empty disjunction still asserts one (unknown) thing.
    let mut unresolved = BTreeSet::new();
    unresolved.insert(Either::from_values(Vec::<String>::new()));
    assert_eq!(
        extract_consequent_predicates(&Expression::or(Vec::new())),
        Ok(unresolved)
    );
}
