/// Set operations.
///
/// Union, intersection, difference, complement and cartesian product over
/// arbitrary elements, plus the subset and equality tests built on them.
pub mod set_ops;

/// Relation predicates.
///
/// Binary-relation membership, reflexivity, symmetry, transitivity and
/// function-ness, each with a diagnostic counterpart that explains a `false`
/// answer.
pub mod predicates;

/// Relation composition and powers.
pub mod composition;

pub use composition::{compose, power};
pub use predicates::{
    FunctionViolation, TransitivityWitness, function_violation, is_binary_relation, is_function,
    is_reflexive, is_symmetric, is_transitive, reflexivity_gaps, symmetry_counterexample,
    transitivity_counterexample,
};
pub use set_ops::{
    cartesian_product, complement, difference, equals, intersection, is_subset, union,
};

use crate::error::AlgebraError;

/// Result type used by the algebra operations.
///
/// Operations either return a value of type `T` or an `AlgebraError`
/// describing why their operands were rejected.
pub type AlgebraResult<T> = Result<T, AlgebraError>;
