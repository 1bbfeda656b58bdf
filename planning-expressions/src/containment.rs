//! Planners index facts and tasks by the objects they mention, e.g.
//! to find every fact that must be retracted when an object leaves
//! the world.
use planning_ontology::{Fact, Instance, Task};
use std::collections::BTreeSet;

/// Returns true iff `fact` mentions `instance`.
#[must_use]
pub fn contains_instance(fact: &Fact, instance: &Instance) -> bool {
    contains_any_of_instances(fact, std::iter::once(instance))
}

/// Returns true iff `fact` mentions at least one of `instances`.  A
/// negated fact mentions whatever its positive statement mentions.
#[must_use]
pub fn contains_any_of_instances<'a, I>(fact: &Fact, instances: I) -> bool
where
    I: IntoIterator<Item = &'a Instance>,
{
    let names: BTreeSet<&str> = instances.into_iter().map(Instance::name).collect();
    fact.positive()
        .args()
        .iter()
        .any(|arg| names.contains(arg.word()))
}

/// Returns true iff `instance` is one of `task`'s parameters.
#[must_use]
pub fn task_contains_instance(task: &Task, instance: &Instance) -> bool {
    task.parameters.iter().any(|p| p == instance.name())
}

#[test]
fn test_contains_instance() {
    let alice = Instance::new("alice", "person");
    let carol = Instance::new("carol", "person");
    let likes = Fact::new("likes", vec!["alice", "bob"]);

    assert!(contains_instance(&likes, &alice));
    assert!(!contains_instance(&likes, &carol));
}

#[test]
fn test_predicate_name_is_not_an_argument() {
    let likes = Instance::new("likes", "verb");
    let fact = Fact::new("likes", vec!["alice", "bob"]);

    assert!(!contains_instance(&fact, &likes));
}

#[test]
fn test_contains_any_of_negated() {
    let bob = Instance::new("bob", "person");
    let carol = Instance::new("carol", "person");
    let fact = Fact::new("likes", vec!["alice", "bob"]).negated();

    assert!(contains_any_of_instances(&fact, vec![&carol, &bob]));
    assert!(!contains_any_of_instances(&fact, vec![&carol]));
    assert!(!contains_any_of_instances(&fact, Vec::new()));
}

#[test]
fn test_task_contains_instance() {
    let task = Task::new("greet", vec!["pepper", "alice"]);

    assert!(task_contains_instance(&task, &Instance::new("alice", "person")));
    assert!(!task_contains_instance(&task, &Instance::new("greet", "action")));
}

#[test]
fn test_unwraps_a_single_not() {
    use planning_ontology::Expression;

    let alice = Instance::new("alice", "person");
    let once = Fact::new("likes", vec!["alice", "bob"]).negated();
    let twice = once.clone().negated();

    assert!(contains_instance(&once, &alice));
    // `not(not(likes(alice, bob)))` has `not(likes(alice, bob))` as its
    // only argument, which is no instance name.
    assert!(!contains_instance(&twice, &alice));
    assert_eq!(twice.positive(), once.as_expression());
    assert_eq!(
        once.positive(),
        &Expression::predicate("likes", vec!["alice", "bob"])
    );
}
