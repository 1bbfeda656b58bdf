//! Expressions are the formula trees planners attach to actions and
//! goals: predicates applied to argument tokens, combined with a
//! small, closed set of connectives and bounded quantifiers.
//!
//! The representation is deliberately uniform.  Every node is a word
//! plus a list of children; argument tokens are leaves whose word is
//! the token, and the parameter slot of a quantifier is a leaf whose
//! word is the raw declaration (`?x - person`).  The `Node` view
//! recovers the operator structure for code that needs to dispatch on
//! it.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const NOT_OPERATOR_NAME: &str = "not";
pub const AND_OPERATOR_NAME: &str = "and";
pub const OR_OPERATOR_NAME: &str = "or";
pub const IMPLY_OPERATOR_NAME: &str = "imply";
pub const WHEN_OPERATOR_NAME: &str = "when";
pub const FORALL_OPERATOR_NAME: &str = "forall";
pub const EXISTS_OPERATOR_NAME: &str = "exists";

/// The reserved words of the expression language.  No predicate may
/// be named after one of these.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Operator {
    Not,
    And,
    Or,
    Imply,
    When,
    Forall,
    Exists,
}

/// How many children an operator accepts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    #[must_use]
    pub fn admits(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

impl Operator {
    pub const ALL: [Operator; 7] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Imply,
        Operator::When,
        Operator::Forall,
        Operator::Exists,
    ];

    /// Returns the operator spelled `word`, if `word` is reserved.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            NOT_OPERATOR_NAME => Some(Operator::Not),
            AND_OPERATOR_NAME => Some(Operator::And),
            OR_OPERATOR_NAME => Some(Operator::Or),
            IMPLY_OPERATOR_NAME => Some(Operator::Imply),
            WHEN_OPERATOR_NAME => Some(Operator::When),
            FORALL_OPERATOR_NAME => Some(Operator::Forall),
            EXISTS_OPERATOR_NAME => Some(Operator::Exists),
            _ => None,
        }
    }

    #[must_use]
    pub fn word(self) -> &'static str {
        match self {
            Operator::Not => NOT_OPERATOR_NAME,
            Operator::And => AND_OPERATOR_NAME,
            Operator::Or => OR_OPERATOR_NAME,
            Operator::Imply => IMPLY_OPERATOR_NAME,
            Operator::When => WHEN_OPERATOR_NAME,
            Operator::Forall => FORALL_OPERATOR_NAME,
            Operator::Exists => EXISTS_OPERATOR_NAME,
        }
    }

    /// `imply` and `when` take (antecedent, consequent); quantifiers
    /// take (declaration, body).  `and` and `or` fold any number of
    /// children, none included.
    #[must_use]
    pub fn arity(self) -> Arity {
        match self {
            Operator::Not => Arity::Exactly(1),
            Operator::And | Operator::Or => Arity::AtLeast(0),
            Operator::Imply | Operator::When => Arity::Exactly(2),
            Operator::Forall | Operator::Exists => Arity::Exactly(2),
        }
    }

    #[must_use]
    pub fn is_quantifier(self) -> bool {
        matches!(self, Operator::Forall | Operator::Exists)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// What an expression node denotes, given its word.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Node<'a> {
    /// The empty word.  Never a valid formula.
    Empty,
    Operator(Operator),
    /// A predicate application, or a bare token when the node has no
    /// children.
    Predicate(&'a str),
}

/// A formula tree node.  Structural equality is the identity used to
/// look expressions up in fact snapshots.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    word: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    args: Vec<Expression>,
}

impl Expression {
    #[must_use]
    pub fn new<I: IntoIterator<Item = Expression>>(word: &str, args: I) -> Self {
        Self {
            word: word.into(),
            args: args.into_iter().collect(),
        }
    }

    /// A childless node: an argument token, or a declaration string in
    /// a quantifier's parameter slot.
    #[must_use]
    pub fn leaf(word: &str) -> Self {
        Self::new(word, Vec::new())
    }

    /// `name(tokens...)`, where every token becomes a leaf.
    #[must_use]
    pub fn predicate<'a, I: IntoIterator<Item = &'a str>>(name: &str, tokens: I) -> Self {
        Self::new(name, tokens.into_iter().map(Expression::leaf))
    }

    #[must_use]
    pub fn operator<I: IntoIterator<Item = Expression>>(op: Operator, args: I) -> Self {
        Self::new(op.word(), args)
    }

    #[must_use]
    pub fn not(inner: Expression) -> Self {
        Self::operator(Operator::Not, vec![inner])
    }

    #[must_use]
    pub fn and<I: IntoIterator<Item = Expression>>(args: I) -> Self {
        Self::operator(Operator::And, args)
    }

    #[must_use]
    pub fn or<I: IntoIterator<Item = Expression>>(args: I) -> Self {
        Self::operator(Operator::Or, args)
    }

    #[must_use]
    pub fn imply(antecedent: Expression, consequent: Expression) -> Self {
        Self::operator(Operator::Imply, vec![antecedent, consequent])
    }

    #[must_use]
    pub fn when(antecedent: Expression, consequent: Expression) -> Self {
        Self::operator(Operator::When, vec![antecedent, consequent])
    }

    /// `forall(declaration, body)`, where `declaration` reads like
    /// `?x - person`.
    #[must_use]
    pub fn forall(declaration: &str, body: Expression) -> Self {
        Self::operator(Operator::Forall, vec![Expression::leaf(declaration), body])
    }

    #[must_use]
    pub fn exists(declaration: &str, body: Expression) -> Self {
        Self::operator(Operator::Exists, vec![Expression::leaf(declaration), body])
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn args(&self) -> &[Expression] {
        &self.args
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.args.is_empty()
    }

    #[must_use]
    pub fn node(&self) -> Node<'_> {
        if self.word.is_empty() {
            return Node::Empty;
        }

        match Operator::from_word(&self.word) {
            Some(op) => Node::Operator(op),
            None => Node::Predicate(&self.word),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)?;
        if self.args.is_empty() {
            return Ok(());
        }

        f.write_str("(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

#[test]
fn test_operator_words_round_trip() {
    for op in Operator::ALL.iter().copied() {
        assert_eq!(Operator::from_word(op.word()), Some(op));
    }

    assert_eq!(Operator::from_word("likes"), None);
    assert_eq!(Operator::from_word("NOT"), None);
}

#[test]
fn test_node_classification() {
    assert_eq!(Expression::leaf("").node(), Node::Empty);
    assert_eq!(
        Expression::predicate("likes", vec!["alice", "bob"]).node(),
        Node::Predicate("likes")
    );
    assert_eq!(
        Expression::not(Expression::leaf("p")).node(),
        Node::Operator(Operator::Not)
    );
    assert_eq!(
        Expression::forall("?x - person", Expression::leaf("p")).node(),
        Node::Operator(Operator::Forall)
    );
}

#[test]
fn test_arity() {
    assert!(Operator::Not.arity().admits(1));
    assert!(!Operator::Not.arity().admits(2));
    assert!(Operator::And.arity().admits(3));
    assert!(Operator::Or.arity().admits(0));
    assert!(!Operator::Forall.arity().admits(1));
    assert!(Operator::Exists.arity().admits(2));
    assert_eq!(Operator::Imply.arity().to_string(), "exactly 2");
}

#[test]
fn test_display() {
    let formula = Expression::exists(
        "?x - person",
        Expression::and(vec![
            Expression::predicate("likes", vec!["alice", "?x"]),
            Expression::not(Expression::predicate("busy", vec!["?x"])),
        ]),
    );

    assert_eq!(
        formula.to_string(),
        "exists(?x - person, and(likes(alice, ?x), not(busy(?x))))"
    );
}
