//! Facts are ground predicate applications believed true in a world
//! state.  A planner hands the evaluator a snapshot of them; the
//! evaluator only ever reads it.
use crate::{Expression, Operator};
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::BuildHasher;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A ground statement, e.g. `likes(alice, bob)`, or its negation
/// `not(likes(alice, bob))`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Fact(Expression);

impl Fact {
    #[must_use]
    pub fn new<'a, I: IntoIterator<Item = &'a str>>(predicate: &str, tokens: I) -> Self {
        Fact(Expression::predicate(predicate, tokens))
    }

    #[must_use]
    pub fn negated(self) -> Self {
        Fact(Expression::not(self.0))
    }

    #[must_use]
    pub fn word(&self) -> &str {
        self.0.word()
    }

    #[must_use]
    pub fn args(&self) -> &[Expression] {
        self.0.args()
    }

    #[must_use]
    pub fn is_negated(&self) -> bool {
        Operator::from_word(self.0.word()) == Some(Operator::Not)
    }

    /// Returns the statement under a `not`, or the fact itself.
    #[must_use]
    pub fn positive(&self) -> &Expression {
        if self.is_negated() {
            if let Some(inner) = self.0.args().first() {
                return inner;
            }
        }

        &self.0
    }

    #[must_use]
    pub fn as_expression(&self) -> &Expression {
        &self.0
    }

    #[must_use]
    pub fn into_expression(self) -> Expression {
        self.0
    }
}

impl From<Expression> for Fact {
    fn from(expression: Expression) -> Self {
        Fact(expression)
    }
}

// `Fact` hashes and compares exactly like its expression.
impl Borrow<Expression> for Fact {
    fn borrow(&self) -> &Expression {
        &self.0
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A read-only set of facts, queried by structural equality.
pub trait FactSnapshot {
    /// Returns true iff `expression` is literally one of the facts.
    fn holds(&self, expression: &Expression) -> bool;
}

impl FactSnapshot for [Fact] {
    fn holds(&self, expression: &Expression) -> bool {
        self.iter().any(|fact| fact.as_expression() == expression)
    }
}

impl FactSnapshot for Vec<Fact> {
    fn holds(&self, expression: &Expression) -> bool {
        self.as_slice().holds(expression)
    }
}

impl<S: BuildHasher> FactSnapshot for HashSet<Fact, S> {
    fn holds(&self, expression: &Expression) -> bool {
        self.contains(expression)
    }
}

impl FactSnapshot for BTreeSet<Fact> {
    fn holds(&self, expression: &Expression) -> bool {
        self.contains(expression)
    }
}

impl<T: FactSnapshot + ?Sized> FactSnapshot for &T {
    fn holds(&self, expression: &Expression) -> bool {
        (**self).holds(expression)
    }
}

#[test]
fn test_negated_fact() {
    let likes = Fact::new("likes", vec!["alice", "bob"]);
    let dislikes = likes.clone().negated();

    assert!(!likes.is_negated());
    assert!(dislikes.is_negated());
    assert_eq!(dislikes.positive(), likes.as_expression());
    assert_eq!(dislikes.to_string(), "not(likes(alice, bob))");
}

#[test]
fn test_snapshots_agree() {
    let facts = vec![
        Fact::new("likes", vec!["alice", "bob"]),
        Fact::new("at", vec!["bob", "kitchen"]),
    ];
    let hashed: HashSet<Fact> = facts.iter().cloned().collect();
    let ordered: BTreeSet<Fact> = facts.iter().cloned().collect();

    let present = Expression::predicate("at", vec!["bob", "kitchen"]);
    let absent = Expression::predicate("at", vec!["kitchen", "bob"]);

    let snapshots: [&dyn FactSnapshot; 3] = [&facts, &hashed, &ordered];
    for snapshot in snapshots.iter() {
        assert!(snapshot.holds(&present));
        assert!(!snapshot.holds(&absent));
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_fact_serde() {
    let fact = Fact::new("likes", vec!["alice", "bob"]);
    let json = serde_json::to_string(&fact).expect("serializes");
    assert_eq!(
        json,
        r#"{"word":"likes","args":[{"word":"alice"},{"word":"bob"}]}"#
    );
    let back: Fact = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, fact);
}
