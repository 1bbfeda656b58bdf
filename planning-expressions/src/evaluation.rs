//! Evaluation decides whether a formula holds in a world state: a
//! universe of typed objects for quantifiers to range over, and a
//! snapshot of known facts for predicates to be looked up in.
//!
//! Anything that is not a connective or a quantifier is a ground fact
//! query, answered by structural equality against the snapshot.  A
//! predicate still mentioning a parameter thus simply fails to match.
use crate::error::{operands, Error, Result};
use crate::quantifier::expand_quantifier;
use planning_ontology::{Expression, FactSnapshot, Instance, Node, Operator};

/// Callback invoked once per evaluated node with the node and its
/// truth value.  It observes the evaluation, and cannot influence it.
pub type TraceHook<'a> = &'a mut dyn FnMut(&Expression, bool);

/// Returns whether `expression` holds given `objects` and `facts`.
///
/// When `trace` is provided, it is called after each node's value is
/// known, i.e., in post-order over the tree with quantifiers expanded.
///
/// `and`, `or`, `forall` and `exists` short-circuit: once the result
/// is decided, remaining children are neither evaluated nor traced.
/// With no children (or no matching objects), `and` and `forall` hold
/// while `or` and `exists` do not.
///
/// # Errors
///
/// Returns `Err` on an empty word, on malformed operator applications,
/// and on quantifier declarations that do not parse.
pub fn evaluate_expression<F>(
    expression: &Expression,
    objects: &[Instance],
    facts: &F,
    trace: Option<TraceHook<'_>>,
) -> Result<bool>
where
    F: FactSnapshot + ?Sized,
{
    let mut evaluator = Evaluator {
        objects,
        facts,
        trace,
    };

    evaluator.evaluate(expression)
}

struct Evaluator<'a, 't, F: ?Sized> {
    objects: &'a [Instance],
    facts: &'a F,
    trace: Option<TraceHook<'t>>,
}

impl<F: FactSnapshot + ?Sized> Evaluator<'_, '_, F> {
    fn evaluate(&mut self, expression: &Expression) -> Result<bool> {
        let result = match expression.node() {
            Node::Empty => return Err(Error::EmptyExpression),
            Node::Predicate(_) => self.facts.holds(expression),
            Node::Operator(op) => self.evaluate_operator(op, expression)?,
        };

        if let Some(trace) = self.trace.as_deref_mut() {
            trace(expression, result);
        }

        Ok(result)
    }

    fn evaluate_operator(&mut self, op: Operator, expression: &Expression) -> Result<bool> {
        match op {
            Operator::And => self.all(operands(op, expression)?),
            Operator::Or => self.any(operands(op, expression)?),
            Operator::Not => Ok(!self.evaluate(&operands(op, expression)?[0])?),
            Operator::Forall => {
                let expanded = expand_quantifier(op, expression, self.objects)?;
                self.all(&expanded)
            }
            Operator::Exists => {
                let expanded = expand_quantifier(op, expression, self.objects)?;
                self.any(&expanded)
            }
            Operator::Imply | Operator::When => {
                let args = operands(op, expression)?;
                let premise = self.evaluate(&args[0])?;
                let conclusion = self.evaluate(&args[1])?;
                Ok(!premise || conclusion)
            }
        }
    }

    fn all(&mut self, expressions: &[Expression]) -> Result<bool> {
        for expression in expressions {
            if !self.evaluate(expression)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn any(&mut self, expressions: &[Expression]) -> Result<bool> {
        for expression in expressions {
            if self.evaluate(expression)? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
fn people() -> Vec<Instance> {
    vec![Instance::new("alice", "person"), Instance::new("bob", "person")]
}

#[cfg(test)]
fn likes(a: &str, b: &str) -> Expression {
    Expression::predicate("likes", vec![a, b])
}

#[cfg(test)]
fn alice_likes_bob() -> Vec<planning_ontology::Fact> {
    vec![planning_ontology::Fact::new("likes", vec!["alice", "bob"])]
}

#[test]
fn test_exists_person_liked_by_alice() {
    let formula = Expression::exists("?x - person", likes("alice", "?x"));
    assert!(evaluate_expression(&formula, &people(), &alice_likes_bob(), None).expect("ok"));
}

#[test]
fn test_forall_fails_on_alice_herself() {
    let formula = Expression::forall("?x - person", likes("alice", "?x"));
    assert!(!evaluate_expression(&formula, &people(), &alice_likes_bob(), None).expect("ok"));
}

#[test]
fn test_vacuous_quantifiers() {
    let facts = alice_likes_bob();
    let forall = Expression::forall("?x - person", likes("?x", "?x"));
    let exists = Expression::exists("?x - person", likes("alice", "bob"));

    assert!(evaluate_expression(&forall, &[], &facts, None).expect("ok"));
    assert!(!evaluate_expression(&exists, &[], &facts, None).expect("ok"));

    // No object of the declared type is the same as no object at all.
    let rooms = vec![Instance::new("kitchen", "room")];
    assert!(evaluate_expression(&forall, &rooms, &facts, None).expect("ok"));
    assert!(!evaluate_expression(&exists, &rooms, &facts, None).expect("ok"));
}

#[test]
fn test_connectives() {
    let facts = alice_likes_bob();
    let yes = likes("alice", "bob");
    let no = likes("bob", "alice");
    let eval = |e: &Expression| evaluate_expression(e, &people(), &facts, None).expect("ok");

    assert!(eval(&Expression::and(vec![yes.clone()])));
    assert!(!eval(&Expression::and(vec![yes.clone(), no.clone()])));
    assert!(eval(&Expression::or(vec![no.clone(), yes.clone()])));
    assert!(!eval(&Expression::or(vec![no.clone()])));
    assert!(eval(&Expression::not(no.clone())));
    assert!(!eval(&Expression::not(yes.clone())));
}

#[test]
fn test_imply_and_when_agree() {
    let facts = alice_likes_bob();
    let yes = likes("alice", "bob");
    let no = likes("bob", "alice");

    for (a, b, expected) in [
        (&yes, &yes, true),
        (&yes, &no, false),
        (&no, &yes, true),
        (&no, &no, true),
    ]
    .iter()
    {
        let imply = Expression::imply((*a).clone(), (*b).clone());
        let when = Expression::when((*a).clone(), (*b).clone());
        assert_eq!(evaluate_expression(&imply, &people(), &facts, None), Ok(*expected));
        assert_eq!(evaluate_expression(&when, &people(), &facts, None), Ok(*expected));
    }
}

#[test]
fn test_empty_word() {
    let facts = alice_likes_bob();
    assert_eq!(
        evaluate_expression(&Expression::leaf(""), &people(), &facts, None),
        Err(Error::EmptyExpression)
    );

    // Nested under a connective, too.
    let nested = Expression::or(vec![likes("alice", "bob"), Expression::leaf("")]);
    let nested_first = Expression::or(vec![Expression::leaf(""), likes("alice", "bob")]);
    assert_eq!(evaluate_expression(&nested, &people(), &facts, None), Ok(true));
    assert_eq!(
        evaluate_expression(&nested_first, &people(), &facts, None),
        Err(Error::EmptyExpression)
    );
}

#[test]
fn test_malformed_operators() {
    let facts = alice_likes_bob();
    let bad_not = Expression::operator(
        Operator::Not,
        vec![likes("alice", "bob"), likes("bob", "alice")],
    );
    let bad_declaration = Expression::forall("x person", likes("alice", "x"));

    assert!(matches!(
        evaluate_expression(&bad_not, &people(), &facts, None),
        Err(Error::Arity { operator: Operator::Not, found: 2, .. })
    ));
    assert!(matches!(
        evaluate_expression(&bad_declaration, &people(), &facts, None),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn test_trace_is_post_order() {
    let facts = alice_likes_bob();
    let formula = Expression::exists(
        "?x - person",
        Expression::not(likes("?x", "alice")),
    );

    let mut seen = Vec::new();
    let mut hook = |e: &Expression, holds: bool| seen.push((e.to_string(), holds));
    let result = evaluate_expression(&formula, &people(), &facts, Some(&mut hook));

    assert_eq!(result, Ok(true));
    assert_eq!(
        seen,
        vec![
            ("likes(alice, alice)".to_string(), false),
            ("not(likes(alice, alice))".to_string(), true),
            ("exists(?x - person, not(likes(?x, alice)))".to_string(), true),
        ]
    );
}

#[test]
fn test_trace_does_not_change_result() {
    let facts = alice_likes_bob();
    let formula = Expression::forall(
        "?x - person",
        Expression::imply(likes("alice", "?x"), likes("?x", "alice")),
    );

    let mut count = 0;
    let mut hook = |_: &Expression, _: bool| count += 1;
    let traced = evaluate_expression(&formula, &people(), &facts, Some(&mut hook));
    let untraced = evaluate_expression(&formula, &people(), &facts, None);

    assert_eq!(traced, untraced);
    assert_eq!(traced, Ok(false));
    // alice: 2 leaves + imply; bob: 2 leaves + imply; forall.
    assert_eq!(count, 7);
}

#[test]
fn test_empty_connectives() {
    let facts = alice_likes_bob();
    let empty_and = Expression::and(Vec::new());
    let empty_or = Expression::or(Vec::new());

    assert_eq!(evaluate_expression(&empty_and, &people(), &facts, None), Ok(true));
    assert_eq!(evaluate_expression(&empty_or, &people(), &facts, None), Ok(false));
    assert_eq!(
        evaluate_expression(&Expression::not(empty_or), &[], &facts, None),
        Ok(true)
    );

    let mut seen = Vec::new();
    let mut hook = |e: &Expression, holds: bool| seen.push((e.clone(), holds));
    assert_eq!(
        evaluate_expression(&empty_and, &[], &facts, Some(&mut hook)),
        Ok(true)
    );
    assert_eq!(seen, vec![(empty_and.clone(), true)]);
}
