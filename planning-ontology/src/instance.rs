//! Instances are the objects of a planning problem: a robot, a room,
//! a person.  Each carries a type tag, which is all quantifiers need
//! in order to decide whether an object is in their domain.
//!
//! Names are unique identifiers within a problem, so identity (and
//! thus equality, ordering and hashing) only looks at the name.
use crate::Expression;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named, typed object in the planning universe.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instance {
    name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    type_name: String,
}

impl Instance {
    #[must_use]
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the argument token that refers to this instance in an
    /// expression: a leaf whose word is the instance's name.
    #[must_use]
    pub fn to_expression(&self) -> Expression {
        Expression::leaf(&self.name)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Instance {}

impl PartialOrd for Instance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

// Must agree with `Borrow<str>`: only the name is hashed.
impl Hash for Instance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Borrow<str> for Instance {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.type_name)
    }
}

#[test]
fn test_identity_is_name() {
    let alice = Instance::new("alice", "person");
    assert_eq!(alice, Instance::new("alice", "robot"));
    assert_ne!(alice, Instance::new("bob", "person"));
    assert_eq!(alice.type_name(), "person");
}

#[test]
fn test_lookup_by_name() {
    use std::collections::HashMap;

    let mut mapping = HashMap::new();
    mapping.insert(Instance::new("?x", "person"), Instance::new("bob", "person"));

    assert_eq!(mapping.get("?x").map(Instance::name), Some("bob"));
    assert!(mapping.get("bob").is_none());
}

#[test]
fn test_display() {
    let alice = Instance::new("alice", "person");
    assert_eq!(alice.to_string(), "alice - person");
    assert_eq!(alice.to_expression(), Expression::leaf("alice"));
}
