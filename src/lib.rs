//! # relset
//!
//! relset evaluates finite-set and binary-relation algebra written in Rust.
//! It parses a small literal notation such as `(1,a), (2,b), (3,c)` into sets
//! and computes unions, complements, cartesian products, relation properties,
//! compositions and powers over them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ScriptError,
    session::{core::Session, outcome::Outcome, registry::Registry},
};

/// Set and relation operations.
///
/// This module holds the algebra proper: pure functions that take sets and
/// return new sets or verdicts. None of them keep state, perform I/O or know
/// about named sets.
///
/// # Responsibilities
/// - Union, intersection, difference, complement and cartesian product.
/// - Binary-relation, reflexivity, symmetry, transitivity and function tests,
///   each with a diagnostic explaining a negative answer.
/// - Relation composition and powers.
pub mod algebra;
/// Provides unified error types for parsing, algebra and scripts.
///
/// This module defines all errors that can be raised while reading literals,
/// applying operations, using the registry or running a script. It
/// standardizes error reporting and carries the details needed for user
/// feedback.
///
/// # Responsibilities
/// - Defines one error enum per layer.
/// - Attaches line numbers to script errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Reads the literal notation.
///
/// This module turns text such as `a, b, 1.5` or `(1,a), (2,b)` into sets,
/// typing each value as an integer, a decimal or text.
pub mod literal;
/// Runs scripts over named sets.
///
/// This module ties the registry of named sets, the command language and the
/// operation table together into a `Session`.
pub mod session;
/// The value module defines the data types the algebra works on.
///
/// # Responsibilities
/// - Defines atoms, elements, pairs, sets and relations.
/// - Gives them structural equality, hashing and a total order.
/// - Displays them in the literal notation.
pub mod value;

/// Runs a script and returns the outcome of every reporting command.
///
/// The script starts from the preset sets when `presets` is `true`, and
/// from an empty registry otherwise.
///
/// # Errors
/// Returns the error of the first line that fails.
///
/// # Examples
/// ```
/// use relset::run_script;
///
/// // The preset relation R is reflexive on A2.
/// let outcomes = run_script("ref(R, A2)", true).unwrap();
/// assert_eq!(outcomes[0].to_string(), "ref(R, A2) = true");
///
/// // Example with an intentional error (unknown set).
/// assert!(run_script("union(X, Y)", false).is_err());
/// ```
pub fn run_script(source: &str, presets: bool) -> Result<Vec<Outcome>, ScriptError> {
    let registry = if presets { Registry::with_presets() } else { Registry::new() };

    Session::new(registry).run(source)
}
