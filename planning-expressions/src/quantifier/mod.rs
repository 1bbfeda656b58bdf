//! Quantifiers range over a finite, typed universe of objects, so we
//! evaluate them by expansion: `forall(?x - person, body)` becomes one
//! copy of `body` per person, with `?x` substituted away.  The caller
//! then folds the copies with `and` (`forall`) or `or` (`exists`).
mod declaration;
mod expand;

pub use declaration::parse_parameter;
pub use expand::expand_quantifier;
