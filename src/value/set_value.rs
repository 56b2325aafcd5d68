use std::{
    collections::{HashSet, hash_set},
    fmt::Display,
};

use crate::value::element::Element;

/// An unordered, duplicate-free collection of elements.
///
/// A `SetValue` is never changed once built; every algebra operation
/// produces a new one. Equality is structural and ignores insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetValue {
    elements: HashSet<Element>,
}

impl SetValue {
    /// Creates the empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Tests membership of an element.
    #[must_use]
    pub fn contains(&self, element: &Element) -> bool {
        self.elements.contains(element)
    }

    /// Iterates over the elements in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Returns the elements in ascending order.
    ///
    /// Used wherever output has to be deterministic, such as display and
    /// diagnostics.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Element> {
        let mut elements: Vec<_> = self.elements.iter().collect();
        elements.sort_unstable();
        elements
    }

    /// Returns `true` if every element of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// Returns `true` if every element is an ordered pair of atoms.
    ///
    /// The empty set counts as a relation.
    ///
    /// # Example
    /// ```
    /// use relset::literal::parse;
    ///
    /// assert!(parse("(1,a), (2,b)").unwrap().is_relation());
    /// assert!(!parse("(1,a), 2").unwrap().is_relation());
    /// ```
    #[must_use]
    pub fn is_relation(&self) -> bool {
        self.elements.iter().all(|e| e.as_pair().is_some())
    }

    pub(crate) const fn as_hash_set(&self) -> &HashSet<Element> {
        &self.elements
    }
}

impl From<HashSet<Element>> for SetValue {
    fn from(elements: HashSet<Element>) -> Self {
        Self { elements }
    }
}

impl FromIterator<Element> for SetValue {
    fn from_iter<T: IntoIterator<Item = Element>>(iter: T) -> Self {
        Self { elements: iter.into_iter().collect() }
    }
}

impl IntoIterator for SetValue {
    type IntoIter = hash_set::IntoIter<Element>;
    type Item = Element;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a SetValue {
    type IntoIter = hash_set::Iter<'a, Element>;
    type Item = &'a Element;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Display for SetValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, element) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "}}")
    }
}
