//! Substitution binds parameters by rewriting: every argument token
//! naming a mapped instance is replaced by its image.  Quantifier
//! expansion relies on it instead of threading an environment through
//! evaluation.
//!
//! Substitution is total.  Tokens without an image pass through, and
//! malformed operator nodes are rewritten child by child like any
//! other node.
use planning_ontology::{Expression, Instance, Node};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A finite map from bound parameters to the instances replacing them.
pub trait Bindings {
    /// Returns the replacement for the token `name`, if any.
    fn image(&self, name: &str) -> Option<&Instance>;
}

impl<S: BuildHasher> Bindings for HashMap<Instance, Instance, S> {
    fn image(&self, name: &str) -> Option<&Instance> {
        self.get(name)
    }
}

impl Bindings for BTreeMap<Instance, Instance> {
    fn image(&self, name: &str) -> Option<&Instance> {
        self.get(name)
    }
}

/// A single binding, as introduced by a quantifier.
impl Bindings for (Instance, Instance) {
    fn image(&self, name: &str) -> Option<&Instance> {
        if self.0.name() == name {
            Some(&self.1)
        } else {
            None
        }
    }
}

/// Returns a copy of `expression` in which parameters are replaced
/// according to `parameters`.
///
/// Connectives are rewritten recursively.  A quantifier's declaration
/// slot is copied verbatim and only its body is rewritten.  The
/// arguments of a predicate are tokens: each is replaced by its image,
/// if any, without looking further down.
#[must_use]
pub fn apply_parameters<B>(expression: &Expression, parameters: &B) -> Expression
where
    B: Bindings + ?Sized,
{
    let args: Vec<Expression> = match expression.node() {
        Node::Operator(op) if op.is_quantifier() => {
            let mut args = expression.args().iter();
            args.next()
                .cloned()
                .into_iter()
                .chain(args.map(|arg| apply_parameters(arg, parameters)))
                .collect()
        }
        Node::Operator(_) => expression
            .args()
            .iter()
            .map(|arg| apply_parameters(arg, parameters))
            .collect(),
        Node::Empty | Node::Predicate(_) => expression
            .args()
            .iter()
            .map(|arg| match parameters.image(arg.word()) {
                Some(instance) => instance.to_expression(),
                None => arg.clone(),
            })
            .collect(),
    };

    Expression::new(expression.word(), args)
}

#[cfg(test)]
fn person(name: &str) -> Instance {
    Instance::new(name, "person")
}

#[test]
fn test_empty_mapping_is_identity() {
    let formula = Expression::forall(
        "?x - person",
        Expression::imply(
            Expression::predicate("hungry", vec!["?x"]),
            Expression::predicate("eats", vec!["?x", "?y"]),
        ),
    );

    let empty: HashMap<Instance, Instance> = HashMap::new();
    assert_eq!(apply_parameters(&formula, &empty), formula);
}

#[test]
fn test_substitutes_predicate_arguments() {
    let mut mapping = HashMap::new();
    mapping.insert(person("?x"), person("alice"));

    let formula = Expression::and(vec![
        Expression::predicate("likes", vec!["?x", "bob"]),
        Expression::not(Expression::predicate("busy", vec!["?x"])),
    ]);

    assert_eq!(
        apply_parameters(&formula, &mapping),
        Expression::and(vec![
            Expression::predicate("likes", vec!["alice", "bob"]),
            Expression::not(Expression::predicate("busy", vec!["alice"])),
        ])
    );
}

#[test]
fn test_predicate_name_is_not_substituted() {
    let binding = (person("likes"), person("alice"));
    let formula = Expression::predicate("likes", vec!["likes"]);

    assert_eq!(
        apply_parameters(&formula, &binding),
        Expression::predicate("likes", vec!["alice"])
    );
}

#[test]
fn test_declaration_slot_untouched() {
    // The declaration word is never looked up, even when it happens
    // to spell a mapped token.
    let binding = (person("?x - person"), person("alice"));
    let formula = Expression::exists(
        "?x - person",
        Expression::predicate("p", vec!["?x - person"]),
    );

    assert_eq!(
        apply_parameters(&formula, &binding),
        Expression::exists("?x - person", Expression::predicate("p", vec!["alice"]))
    );
}

#[test]
fn test_nested_quantifier_body() {
    let mut mapping = BTreeMap::new();
    mapping.insert(person("?x"), person("alice"));

    let formula = Expression::forall(
        "?y - person",
        Expression::predicate("likes", vec!["?x", "?y"]),
    );

    assert_eq!(
        apply_parameters(&formula, &mapping),
        Expression::forall(
            "?y - person",
            Expression::predicate("likes", vec!["alice", "?y"])
        )
    );
}

#[test]
fn test_input_unchanged() {
    let formula = Expression::predicate("likes", vec!["?x", "?x"]);
    let before = formula.clone();
    let rewritten = apply_parameters(&formula, &(person("?x"), person("bob")));

    assert_eq!(formula, before);
    assert_eq!(rewritten, Expression::predicate("likes", vec!["bob", "bob"]));
}

#[test]
fn test_when_recurses() {
    let formula = Expression::when(
        Expression::predicate("at", vec!["?r", "kitchen"]),
        Expression::predicate("clean", vec!["kitchen"]),
    );
    let binding = (Instance::new("?r", "robot"), Instance::new("pepper", "robot"));
    let rewritten = apply_parameters(&formula, &binding);

    assert_eq!(
        rewritten,
        Expression::when(
            Expression::predicate("at", vec!["pepper", "kitchen"]),
            Expression::predicate("clean", vec!["kitchen"]),
        )
    );
    assert_eq!(rewritten.word(), "when");
}
