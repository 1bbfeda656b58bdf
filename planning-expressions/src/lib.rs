//! Logical expression evaluation for a symbolic planner.
//!
//! Given a first-order formula over predicates, Boolean connectives
//! and bounded quantifiers, `evaluate_expression` decides whether it
//! holds against a snapshot of known facts and a finite universe of
//! typed objects.  The same trees also support parameter substitution
//! (`apply_parameters`) and consequent predicate extraction
//! (`extract_consequent_predicates`), which planners use to index
//! rules by the effects they may produce.
//!
//! Everything here is a pure function of immutable inputs.  The only
//! side channel is the optional per-node evaluation hook.
mod consequent;
mod containment;
mod either;
mod error;
mod evaluation;
mod quantifier;
mod substitution;
pub mod trace;

#[cfg(test)]
mod proptest_tests;

pub use consequent::extract_consequent_predicates;
pub use containment::contains_any_of_instances;
pub use containment::contains_instance;
pub use containment::task_contains_instance;
pub use either::Either;
pub use error::Error;
pub use error::Result;
pub use evaluation::evaluate_expression;
pub use evaluation::TraceHook;
pub use quantifier::expand_quantifier;
pub use quantifier::parse_parameter;
pub use substitution::apply_parameters;
pub use substitution::Bindings;

pub use planning_ontology as ontology;
