//! A task is a planner-level unit of work (typically a goal or an
//! action instance) whose parameters are instance names.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    pub name: String,
    pub parameters: Vec<String>,
}

impl Task {
    #[must_use]
    pub fn new<'a, I: IntoIterator<Item = &'a str>>(name: &str, parameters: I) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(String::from).collect(),
        }
    }
}

#[test]
fn test_new() {
    let task = Task::new("greet", vec!["pepper", "alice"]);
    assert_eq!(task.name, "greet");
    assert_eq!(task.parameters, ["pepper", "alice"]);
}
