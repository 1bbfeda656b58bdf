//! Errors are fatal to the call that raised them: the inputs are
//! immutable, so a caller can only fix the formula and retry.
use planning_ontology::{Arity, Expression, Operator};
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A quantifier's parameter slot does not read `name - type`.
    #[error("invalid parameter declaration '{declaration}'; expected `name - type`")]
    Parse { declaration: String },

    #[error("cannot evaluate empty expression")]
    EmptyExpression,

    #[error("`{operator}` expects {expected} argument(s), found {found}")]
    Arity {
        operator: Operator,
        expected: Arity,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Returns the children of `expression`, which must be an application
/// of `operator` with a valid number of them.
pub(crate) fn operands(operator: Operator, expression: &Expression) -> Result<&[Expression]> {
    let args = expression.args();
    let expected = operator.arity();
    if !expected.admits(args.len()) {
        return Err(Error::Arity {
            operator,
            expected,
            found: args.len(),
        });
    }

    Ok(args)
}

#[test]
fn test_messages() {
    let parse = Error::Parse {
        declaration: "x person".into(),
    };
    assert_eq!(
        parse.to_string(),
        "invalid parameter declaration 'x person'; expected `name - type`"
    );

    let arity = Error::Arity {
        operator: Operator::Not,
        expected: Arity::Exactly(1),
        found: 2,
    };
    assert_eq!(arity.to_string(), "`not` expects exactly 1 argument(s), found 2");
}

#[test]
fn test_operands() {
    let negation = Expression::not(Expression::leaf("p"));
    assert_eq!(operands(Operator::Not, &negation).expect("ok").len(), 1);

    let malformed = Expression::operator(Operator::Not, Vec::new());
    assert_eq!(
        operands(Operator::Not, &malformed),
        Err(Error::Arity {
            operator: Operator::Not,
            expected: Arity::Exactly(1),
            found: 0,
        })
    );
}
