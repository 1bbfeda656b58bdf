//! An `Either` is a value we only know up to a set of candidates: the
//! true value is one of `values`, but which one is unresolved.
//!
//! Merging candidates (`of_either`) is plain set union.  We never take
//! the product of alternatives, so merging `n` uncertain values costs
//! the sum of their sizes.
use std::collections::BTreeSet;
use std::fmt;
use std::iter::FromIterator;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Either<T: Ord> {
    values: BTreeSet<T>,
}

impl<T: Ord> Either<T> {
    /// A resolved value: exactly one candidate.
    #[must_use]
    pub fn new(value: T) -> Self {
        let mut values = BTreeSet::new();
        values.insert(value);
        Self { values }
    }

    #[must_use]
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Flattens a collection of `Either`s into one whose candidates are
    /// the union of all their candidates.
    #[must_use]
    pub fn of_either<I: IntoIterator<Item = Either<T>>>(eithers: I) -> Self {
        let mut values = BTreeSet::new();
        for either in eithers {
            values.extend(either.values);
        }

        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &BTreeSet<T> {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> BTreeSet<T> {
        self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true iff there is exactly one candidate.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.values.len() == 1
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }
}

impl<T: Ord> From<T> for Either<T> {
    fn from(value: T) -> Self {
        Either::new(value)
    }
}

impl<T: Ord> FromIterator<T> for Either<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Either::from_values(iter)
    }
}

impl<T: Ord + fmt::Display> fmt::Display for Either<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.len() == 1 {
            if let Some(value) = self.values.iter().next() {
                return value.fmt(f);
            }
        }

        f.write_str("{")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            value.fmt(f)?;
        }
        f.write_str("}")
    }
}

#[test]
fn test_singleton() {
    let p = Either::new("p");
    assert!(p.is_resolved());
    assert!(p.contains(&"p"));
    assert_eq!(p.to_string(), "p");
}

#[test]
fn test_display_set() {
    let pq: Either<&str> = vec!["q", "p"].into_iter().collect();
    assert!(!pq.is_resolved());
    assert_eq!(pq.to_string(), "{p, q}");
    assert_eq!(Either::<u32>::from_values(None).to_string(), "{}");
}

#[test]
fn test_of_either_is_union() {
    let merged = Either::of_either(vec![
        Either::new(1),
        Either::from_values(vec![2, 3]),
        Either::from_values(vec![1, 3]),
    ]);

    assert_eq!(merged, Either::from_values(vec![1, 2, 3]));
    assert_eq!(merged.len(), 3);
}

#[test]
fn test_of_either_identity() {
    let empty: Vec<Either<u32>> = Vec::new();
    assert!(Either::of_either(empty).is_empty());

    let single = Either::from_values(vec![4, 5]);
    assert_eq!(Either::of_either(vec![single.clone()]), single);
}
