//! A quantifier's parameter slot holds a raw declaration such as
//! `?x - person`: a name (the `?` sigil is just part of it), a
//! spaced dash, and a type.
use crate::error::{Error, Result};
use planning_ontology::{Expression, Instance};
use regex::Regex;
use std::sync::OnceLock;

fn declaration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([\w?]+) - (\w+)$").expect("valid declaration regex"))
}

/// Parses the placeholder instance declared by `expression`'s word.
///
/// # Errors
///
/// Returns `Error::Parse` unless the whole word reads `name - type`.
pub fn parse_parameter(expression: &Expression) -> Result<Instance> {
    let declaration = expression.word();
    let captures = declaration_pattern()
        .captures(declaration)
        .ok_or_else(|| Error::Parse {
            declaration: declaration.into(),
        })?;

    Ok(Instance::new(&captures[1], &captures[2]))
}

#[test]
fn test_parse_sigil() {
    let instance = parse_parameter(&Expression::leaf("?x - person")).expect("ok");
    assert_eq!(instance.name(), "?x");
    assert_eq!(instance.type_name(), "person");
}

#[test]
fn test_parse_plain_name() {
    let instance = parse_parameter(&Expression::leaf("room_2 - location")).expect("ok");
    assert_eq!(instance.name(), "room_2");
    assert_eq!(instance.type_name(), "location");
}

#[test]
fn test_missing_dash() {
    assert_eq!(
        parse_parameter(&Expression::leaf("x person")),
        Err(Error::Parse {
            declaration: "x person".into()
        })
    );
}

#[test]
fn test_match_must_be_total() {
    for declaration in [
        "",
        "?x - person extra",
        " ?x - person",
        "?x -person",
        "?x - ",
        "?x - person-kind",
        "a b - person",
    ]
    .iter()
    {
        assert!(
            parse_parameter(&Expression::leaf(declaration)).is_err(),
            "{:?} should not parse",
            declaration
        );
    }
}
