use super::parse_parameter;
use crate::error::{operands, Result};
use crate::substitution::apply_parameters;
use planning_ontology::{Expression, Instance, Operator};
use tracing::trace;

/// Expands the `quantifier` application `expression` over `objects`:
/// returns one substituted copy of the body per object whose type is
/// exactly the declared type, in the order of `objects`.
///
/// # Errors
///
/// Returns `Err` when `expression` does not have a declaration and a
/// body, or when the declaration does not parse.
pub fn expand_quantifier(
    quantifier: Operator,
    expression: &Expression,
    objects: &[Instance],
) -> Result<Vec<Expression>> {
    let args = operands(quantifier, expression)?;
    let (declaration, body) = (&args[0], &args[1]);
    let parameter = parse_parameter(declaration)?;

    let expanded: Vec<Expression> = objects
        .iter()
        .filter(|object| object.type_name() == parameter.type_name())
        .map(|object| apply_parameters(body, &(parameter.clone(), object.clone())))
        .collect();

    trace!(
        %quantifier,
        declaration = declaration.word(),
        candidates = objects.len(),
        matching = expanded.len(),
        "expanded quantifier"
    );
    Ok(expanded)
}

#[cfg(test)]
fn universe() -> Vec<Instance> {
    vec![
        Instance::new("alice", "person"),
        Instance::new("kitchen", "room"),
        Instance::new("bob", "person"),
    ]
}

#[test]
fn test_expand_keeps_universe_order() {
    let formula = Expression::forall(
        "?x - person",
        Expression::predicate("likes", vec!["alice", "?x"]),
    );

    let expanded = expand_quantifier(Operator::Forall, &formula, &universe()).expect("ok");
    assert_eq!(
        expanded,
        vec![
            Expression::predicate("likes", vec!["alice", "alice"]),
            Expression::predicate("likes", vec!["alice", "bob"]),
        ]
    );
}

#[test]
fn test_expand_excludes_other_types() {
    let formula = Expression::exists("?r - robot", Expression::predicate("idle", vec!["?r"]));

    let expanded = expand_quantifier(Operator::Exists, &formula, &universe()).expect("ok");
    assert!(expanded.is_empty());
}

#[test]
fn test_expand_nested_keeps_inner_declaration() {
    let formula = Expression::forall(
        "?x - person",
        Expression::exists(
            "?y - room",
            Expression::predicate("at", vec!["?x", "?y"]),
        ),
    );

    let expanded = expand_quantifier(Operator::Forall, &formula, &universe()).expect("ok");
    assert_eq!(
        expanded[1],
        Expression::exists("?y - room", Expression::predicate("at", vec!["bob", "?y"]))
    );
}

#[test]
fn test_expand_malformed() {
    use crate::error::Error;

    let missing_body = Expression::operator(Operator::Forall, vec![Expression::leaf("?x - person")]);
    assert!(matches!(
        expand_quantifier(Operator::Forall, &missing_body, &universe()),
        Err(Error::Arity { found: 1, .. })
    ));

    let bad_declaration = Expression::exists("?x", Expression::leaf("p"));
    assert!(matches!(
        expand_quantifier(Operator::Exists, &bad_declaration, &universe()),
        Err(Error::Parse { .. })
    ));
}
