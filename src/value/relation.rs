use std::{collections::BTreeSet, fmt::Display};

use crate::{
    error::AlgebraError,
    value::{atom::Atom, element::Element, set_value::SetValue},
};

/// An ordered pair of atoms.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    /// The left component.
    pub first:  Atom,
    /// The right component.
    pub second: Atom,
}

impl Pair {
    /// Builds the pair `(first, second)`.
    pub fn new(first: impl Into<Atom>, second: impl Into<Atom>) -> Self {
        Self { first:  first.into(),
               second: second.into(), }
    }

    /// Returns the pair with its components swapped.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self { first:  self.second.clone(),
               second: self.first.clone(), }
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// A set whose every element is an ordered pair of atoms.
///
/// A relation is never stored on its own; it is a checked view of a
/// [`SetValue`] produced with `Relation::try_from`. Pairs are kept in
/// ascending order so that every scan, and therefore every reported
/// counterexample, is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Relation {
    pairs: BTreeSet<Pair>,
}

impl Relation {
    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the relation has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Tests whether `(first, second)` is in the relation.
    #[must_use]
    pub fn relates(&self, first: &Atom, second: &Atom) -> bool {
        // BTreeSet lookups need an owned key.
        self.pairs.contains(&Pair { first:  first.clone(),
                                    second: second.clone(), })
    }

    /// Tests whether a pair is in the relation.
    #[must_use]
    pub fn contains(&self, pair: &Pair) -> bool {
        self.pairs.contains(pair)
    }

    /// Iterates over the pairs in ascending order.
    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, Pair> {
        self.pairs.iter()
    }

    /// Iterates over the pairs whose first component is `first`.
    pub fn successors<'a>(&'a self, first: &'a Atom) -> impl Iterator<Item = &'a Pair> + 'a {
        self.pairs.iter().filter(move |p| &p.first == first)
    }

    /// Converts the relation back into a plain set of tuples.
    #[must_use]
    pub fn into_set_value(self) -> SetValue {
        self.pairs.into_iter().map(Element::from).collect()
    }
}

impl FromIterator<Pair> for Relation {
    fn from_iter<T: IntoIterator<Item = Pair>>(iter: T) -> Self {
        Self { pairs: iter.into_iter().collect() }
    }
}

impl TryFrom<&SetValue> for Relation {
    type Error = AlgebraError;

    /// Checks that every element of the set is an ordered pair of atoms.
    ///
    /// # Errors
    /// Returns `AlgebraError::NotARelation` naming the smallest element that
    /// is not a pair.
    ///
    /// # Example
    /// ```
    /// use relset::{error::AlgebraError, literal::parse, value::relation::Relation};
    ///
    /// let r = parse("(1,2), (2,3)").unwrap();
    /// assert_eq!(Relation::try_from(&r).unwrap().len(), 2);
    ///
    /// let not_r = parse("(1,2), 3").unwrap();
    /// assert!(matches!(Relation::try_from(&not_r),
    ///                  Err(AlgebraError::NotARelation { .. })));
    /// ```
    fn try_from(set: &SetValue) -> Result<Self, Self::Error> {
        let mut pairs = BTreeSet::new();
        let mut offending: Option<&Element> = None;

        for element in set {
            match element.as_pair() {
                Some((first, second)) => {
                    pairs.insert(Pair { first:  first.clone(),
                                        second: second.clone(), });
                },
                None => {
                    if offending.is_none_or(|o| element < o) {
                        offending = Some(element);
                    }
                },
            }
        }

        match offending {
            Some(element) => Err(AlgebraError::NotARelation { element: element.clone() }),
            None => Ok(Self { pairs }),
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pair}")?;
        }
        write!(f, "}}")
    }
}
