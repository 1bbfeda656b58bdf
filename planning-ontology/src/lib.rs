//! The planning ontology is the vocabulary shared by a symbolic
//! planner and the code that reasons about its formulas: typed
//! instances, ground facts, tasks, and expression trees built from
//! predicates, connectives and bounded quantifiers.
//!
//! Every type here is an immutable value.  Operations that "change"
//! an expression build a new tree.
mod expression;
mod fact;
mod instance;
mod task;

pub use expression::Arity;
pub use expression::Expression;
pub use expression::Node;
pub use expression::Operator;
pub use expression::AND_OPERATOR_NAME;
pub use expression::EXISTS_OPERATOR_NAME;
pub use expression::FORALL_OPERATOR_NAME;
pub use expression::IMPLY_OPERATOR_NAME;
pub use expression::NOT_OPERATOR_NAME;
pub use expression::OR_OPERATOR_NAME;
pub use expression::WHEN_OPERATOR_NAME;
pub use fact::Fact;
pub use fact::FactSnapshot;
pub use instance::Instance;
pub use task::Task;
