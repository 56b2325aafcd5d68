/// Scalar set members.
///
/// Defines the `Atom` type: an integer, a decimal or a piece of text. Atoms
/// are the leaves of every element and the components of every pair.
pub mod atom;
/// Set members.
///
/// Defines the `Element` type, which is either a bare atom or a tuple of
/// elements. Two-component tuples of atoms are the ordered pairs that
/// relations are made of.
pub mod element;
/// Relations and ordered pairs.
///
/// Defines `Pair` and the `Relation` view, a checked set of pairs that the
/// relation predicates and composition operate on.
pub mod relation;
/// Set representation.
///
/// Defines the `SetValue` type, the duplicate-free collection that every
/// parser and algebra operation produces.
pub mod set_value;

pub use atom::Atom;
pub use element::Element;
pub use relation::{Pair, Relation};
pub use set_value::SetValue;
