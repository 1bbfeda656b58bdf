//! Ready-made evaluation hooks.  `log_evaluation` forwards every
//! evaluated node to `tracing`; a `Recorder` keeps them for later
//! inspection, e.g., to explain why a goal does not hold.
use planning_ontology::{Expression, Node};
use std::fmt;
use tracing::debug;

/// Emits one `debug` event per evaluated node, marked `✓` when it
/// holds and `❌` otherwise.
pub fn log_evaluation(expression: &Expression, holds: bool) {
    debug!(holds, "{}", TraceRecord::new(expression, holds));
}

/// One evaluated node and its truth value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TraceRecord {
    pub expression: Expression,
    pub holds: bool,
}

impl TraceRecord {
    #[must_use]
    pub fn new(expression: &Expression, holds: bool) -> Self {
        Self {
            expression: expression.clone(),
            holds,
        }
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.holds { '\u{2713}' } else { '\u{274c}' };
        write!(f, "{} {}", mark, self.expression)
    }
}

/// Collects `TraceRecord`s, in evaluation (post-)order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    records: Vec<TraceRecord>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, expression: &Expression, holds: bool) {
        self.records.push(TraceRecord::new(expression, holds));
    }

    /// Returns a hook appending to this recorder, for
    /// `evaluate_expression`.
    pub fn hook(&mut self) -> impl FnMut(&Expression, bool) + '_ {
        move |expression, holds| self.record(expression, holds)
    }

    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Returns the fact queries that did not hold, in the order they
    /// were evaluated.
    #[must_use]
    pub fn failed_queries(&self) -> Vec<&Expression> {
        self.records
            .iter()
            .filter(|record| !record.holds)
            .filter(|record| matches!(record.expression.node(), Node::Predicate(_)))
            .map(|record| &record.expression)
            .collect()
    }
}

#[test]
fn test_record_display() {
    let likes = Expression::predicate("likes", vec!["alice", "bob"]);
    assert_eq!(TraceRecord::new(&likes, true).to_string(), "\u{2713} likes(alice, bob)");
    assert_eq!(TraceRecord::new(&likes, false).to_string(), "\u{274c} likes(alice, bob)");
}

#[test]
fn test_recorder_hook() {
    use crate::evaluate_expression;
    use planning_ontology::{Fact, Instance};

    let objects = vec![Instance::new("alice", "person"), Instance::new("bob", "person")];
    let facts = vec![Fact::new("likes", vec!["alice", "bob"])];
    let formula = Expression::forall(
        "?x - person",
        Expression::predicate("likes", vec!["alice", "?x"]),
    );

    let mut recorder = Recorder::new();
    {
        let mut hook = recorder.hook();
        assert_eq!(
            evaluate_expression(&formula, &objects, &facts, Some(&mut hook)),
            Ok(false)
        );
    }

    assert_eq!(recorder.records().len(), 2);
    assert_eq!(
        recorder.failed_queries(),
        vec![&Expression::predicate("likes", vec!["alice", "alice"])]
    );
    assert_eq!(recorder.records()[1].expression, formula);
}

#[test]
fn test_log_evaluation_as_hook() {
    use crate::evaluate_expression;
    use planning_ontology::Fact;

    let facts = vec![Fact::new("open", vec!["door"])];
    let mut hook = log_evaluation;
    let formula = Expression::not(Expression::predicate("open", vec!["door"]));

    assert_eq!(evaluate_expression(&formula, &[], &facts, Some(&mut hook)), Ok(false));
}
