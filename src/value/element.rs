use std::fmt::Display;

use crate::value::{atom::Atom, relation::Pair};

/// Enum representing values allowed in sets.
///
/// A `Tuple` with exactly two `Atom` components is an ordered pair and can
/// take part in relation operations. Tuples of any other shape are legal set
/// members but are rejected wherever a relation is required.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    /// A bare atom such as `1` or `a`.
    Atom(Atom),
    /// A tuple such as `(1, a)` or `((1, 2), 3)`.
    Tuple(Vec<Element>),
}

impl Element {
    /// Builds the two-component tuple `(first, second)`.
    ///
    /// # Example
    /// ```
    /// use relset::value::{atom::Atom, element::Element};
    ///
    /// let pair = Element::pair(1, "a");
    ///
    /// assert_eq!(pair,
    ///            Element::Tuple(vec![Element::Atom(Atom::Integer(1)),
    ///                                Element::Atom(Atom::Text("a".into()))]));
    /// ```
    pub fn pair(first: impl Into<Atom>, second: impl Into<Atom>) -> Self {
        Self::Tuple(vec![Self::Atom(first.into()), Self::Atom(second.into())])
    }

    /// Returns the atom if this element is a bare atom.
    #[must_use]
    pub const fn as_atom(&self) -> Option<&Atom> {
        match self {
            Self::Atom(a) => Some(a),
            Self::Tuple(_) => None,
        }
    }

    /// Returns the components of this element if it is an ordered pair of
    /// atoms.
    ///
    /// Tuples with more or fewer than two components, and pairs whose
    /// components are themselves tuples, are not relation pairs.
    #[must_use]
    pub fn as_pair(&self) -> Option<(&Atom, &Atom)> {
        match self {
            Self::Tuple(parts) => match parts.as_slice() {
                [Self::Atom(first), Self::Atom(second)] => Some((first, second)),
                _ => None,
            },
            Self::Atom(_) => None,
        }
    }
}

impl From<Atom> for Element {
    fn from(a: Atom) -> Self {
        Self::Atom(a)
    }
}

impl From<Pair> for Element {
    fn from(p: Pair) -> Self {
        Self::Tuple(vec![Self::Atom(p.first), Self::Atom(p.second)])
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(a) => write!(f, "{a}"),
            Self::Tuple(parts) => {
                write!(f, "(")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{part}")?;
                }
                write!(f, ")")
            },
        }
    }
}
