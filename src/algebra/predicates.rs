use std::{collections::BTreeMap, fmt::Display};

use crate::{
    algebra::AlgebraResult,
    value::{Atom, Element, Pair, Relation, SetValue},
};

/// Explains why a relation is not transitive.
///
/// `first` and `second` chain through a shared middle element, but the
/// pair that would close the chain, `missing`, is absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitivityWitness {
    /// The pair `(a, b)`.
    pub first:   Pair,
    /// The pair `(b, d)`.
    pub second:  Pair,
    /// The absent pair `(a, d)`.
    pub missing: Pair,
}

impl Display for TransitivityWitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{} and {} are in the relation but {} is not",
               self.first, self.second, self.missing)
    }
}

/// Explains why a relation is not a function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FunctionViolation {
    /// An element is mapped to two distinct images.
    MultipleImages {
        /// The element with more than one image.
        element: Atom,
        /// The smallest image.
        first:   Atom,
        /// The next image.
        second:  Atom,
    },
    /// The relation is single-valued but leaves the domain or codomain.
    OutOfBounds {
        /// First components that are not in the domain.
        outside_domain:   SetValue,
        /// Second components that are not in the codomain.
        outside_codomain: SetValue,
    },
}

impl Display for FunctionViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MultipleImages { element,
                                   first,
                                   second, } => {
                write!(f, "element {element} has multiple images: {first} and {second}")
            },
            Self::OutOfBounds { outside_domain,
                                outside_codomain, } => {
                if !outside_domain.is_empty() {
                    write!(f, "elements outside the domain: {outside_domain}")?;
                    if !outside_codomain.is_empty() {
                        write!(f, "; ")?;
                    }
                }
                if !outside_codomain.is_empty() {
                    write!(f, "images outside the codomain: {outside_codomain}")?;
                }
                Ok(())
            },
        }
    }
}

/// Tests membership of an atom in a set of elements.
fn has_atom(set: &SetValue, atom: &Atom) -> bool {
    set.contains(&Element::Atom(atom.clone()))
}

/// Tests whether `relation` is a binary relation from `left` to `right`,
/// that is, a subset of their cartesian product.
///
/// # Errors
/// Returns `AlgebraError::NotARelation` if `relation` holds a non-pair.
///
/// # Example
/// ```
/// use relset::{algebra::is_binary_relation, literal::parse};
///
/// let e = parse("(1,a), (2,b), (3,c)").unwrap();
/// let c = parse("1, 2, 3").unwrap();
/// let b = parse("a, b, c").unwrap();
///
/// assert!(is_binary_relation(&e, &c, &b).unwrap());
/// assert!(!is_binary_relation(&e, &b, &c).unwrap());
/// ```
pub fn is_binary_relation(relation: &SetValue,
                          left: &SetValue,
                          right: &SetValue)
                          -> AlgebraResult<bool> {
    let relation = Relation::try_from(relation)?;

    Ok(relation.iter()
               .all(|p| has_atom(left, &p.first) && has_atom(right, &p.second)))
}

/// Lists the elements `x` of `base` for which `(x, x)` is missing from the
/// relation, in ascending order.
///
/// Only `base` is quantified over; pairs of the relation that touch elements
/// outside `base` play no role.
///
/// # Errors
/// Returns `AlgebraError::NotARelation` if `relation` holds a non-pair.
pub fn reflexivity_gaps(relation: &SetValue, base: &SetValue) -> AlgebraResult<Vec<Element>> {
    let relation = Relation::try_from(relation)?;

    Ok(base.sorted()
           .into_iter()
           .filter(|element| !element.as_atom().is_some_and(|a| relation.relates(a, a)))
           .cloned()
           .collect())
}

/// Tests whether the relation holds `(x, x)` for every `x` in `base`.
///
/// # Errors
/// Returns `AlgebraError::NotARelation` if `relation` holds a non-pair.
///
/// # Example
/// ```
/// use relset::{algebra::is_reflexive, literal::parse};
///
/// let r = parse("(1,1), (2,2)").unwrap();
///
/// assert!(is_reflexive(&r, &parse("1, 2").unwrap()).unwrap());
/// assert!(!is_reflexive(&r, &parse("1, 2, 3").unwrap()).unwrap());
/// ```
pub fn is_reflexive(relation: &SetValue, base: &SetValue) -> AlgebraResult<bool> {
    Ok(reflexivity_gaps(relation, base)?.is_empty())
}

/// Finds the smallest pair `(a, b)` with both `a` and `b` in `base` whose
/// mirror `(b, a)` is missing from the relation.
///
/// # Errors
/// Returns `AlgebraError::NotARelation` if `relation` holds a non-pair.
pub fn symmetry_counterexample(relation: &SetValue,
                               base: &SetValue)
                               -> AlgebraResult<Option<Pair>> {
    let relation = Relation::try_from(relation)?;

    Ok(relation.iter()
               .find(|p| {
                   has_atom(base, &p.first)
                   && has_atom(base, &p.second)
                   && !relation.contains(&p.mirrored())
               })
               .cloned())
}

/// Tests whether every pair with both components in `base` has its mirror
/// in the relation.
///
/// # Errors
/// Returns `AlgebraError::NotARelation` if `relation` holds a non-pair.
///
/// # Example
/// ```
/// use relset::{algebra::is_symmetric, literal::parse};
///
/// let r = parse("(1,2), (2,1), (2,3)").unwrap();
///
/// assert!(is_symmetric(&r, &parse("1, 2").unwrap()).unwrap());
/// assert!(!is_symmetric(&r, &parse("1, 2, 3").unwrap()).unwrap());
/// ```
pub fn is_symmetric(relation: &SetValue, base: &SetValue) -> AlgebraResult<bool> {
    Ok(symmetry_counterexample(relation, base)?.is_none())
}

/// Finds the first chain `(a, b)`, `(b, d)` that the relation fails to
/// close with `(a, d)`.
///
/// `a` and `b` must be in `base`, and so must `d`. Pairs are scanned in
/// ascending order.
///
/// # Errors
/// Returns `AlgebraError::NotARelation` if `relation` holds a non-pair.
pub fn transitivity_counterexample(relation: &SetValue,
                                   base: &SetValue)
                                   -> AlgebraResult<Option<TransitivityWitness>> {
    let relation = Relation::try_from(relation)?;

    for first in relation.iter() {
        if !(has_atom(base, &first.first) && has_atom(base, &first.second)) {
            continue;
        }
        for second in relation.successors(&first.second) {
            if has_atom(base, &second.second) && !relation.relates(&first.first, &second.second) {
                return Ok(Some(TransitivityWitness { first:   first.clone(),
                                                     second:  second.clone(),
                                                     missing: Pair { first:  first.first.clone(),
                                                                     second: second.second.clone(), }, }));
            }
        }
    }

    Ok(None)
}

/// Tests whether the relation is transitive on `base`.
///
/// # Errors
/// Returns `AlgebraError::NotARelation` if `relation` holds a non-pair.
///
/// # Example
/// ```
/// use relset::{algebra::is_transitive, literal::parse};
///
/// let r = parse("(1,2), (2,3), (1,3)").unwrap();
/// assert!(is_transitive(&r, &parse("1, 2, 3").unwrap()).unwrap());
///
/// let r = parse("(1,2), (2,3)").unwrap();
/// assert!(!is_transitive(&r, &parse("1, 2, 3").unwrap()).unwrap());
/// // The chain ends outside the base set, so it is not checked.
/// assert!(is_transitive(&r, &parse("1, 2").unwrap()).unwrap());
/// ```
pub fn is_transitive(relation: &SetValue, base: &SetValue) -> AlgebraResult<bool> {
    Ok(transitivity_counterexample(relation, base)?.is_none())
}

/// Explains why the relation is not a function from `domain` to
/// `codomain`, or returns `None` if it is one.
///
/// An element with two distinct images is reported first, whatever the
/// domain and codomain. Otherwise every first component has to be in
/// `domain` and every second component in `codomain`. The relation does
/// not have to cover the whole domain.
///
/// # Errors
/// Returns `AlgebraError::NotARelation` if `relation` holds a non-pair.
pub fn function_violation(relation: &SetValue,
                          domain: &SetValue,
                          codomain: &SetValue)
                          -> AlgebraResult<Option<FunctionViolation>> {
    let relation = Relation::try_from(relation)?;

    let mut images: BTreeMap<&Atom, &Atom> = BTreeMap::new();
    for pair in relation.iter() {
        if let Some(&image) = images.get(&pair.first)
           && image != &pair.second
        {
            return Ok(Some(FunctionViolation::MultipleImages { element: pair.first.clone(),
                                                               first:   image.clone(),
                                                               second:  pair.second.clone(), }));
        }
        images.insert(&pair.first, &pair.second);
    }

    let outside_domain: SetValue = images.keys()
                                         .filter(|x| !has_atom(domain, x))
                                         .map(|&x| Element::Atom(x.clone()))
                                         .collect();
    let outside_codomain: SetValue = images.values()
                                           .filter(|y| !has_atom(codomain, y))
                                           .map(|&y| Element::Atom(y.clone()))
                                           .collect();

    if outside_domain.is_empty() && outside_codomain.is_empty() {
        return Ok(None);
    }

    Ok(Some(FunctionViolation::OutOfBounds { outside_domain,
                                             outside_codomain }))
}

/// Tests whether the relation is a (possibly partial) function from
/// `domain` to `codomain`.
///
/// # Errors
/// Returns `AlgebraError::NotARelation` if `relation` holds a non-pair.
///
/// # Example
/// ```
/// use relset::{algebra::is_function, literal::parse};
///
/// let domain = parse("1, 2, 3").unwrap();
/// let codomain = parse("a, b, c").unwrap();
///
/// let f = parse("(1,a), (2,b), (3,c)").unwrap();
/// assert!(is_function(&f, &domain, &codomain).unwrap());
///
/// let g = parse("(1,a), (1,b)").unwrap();
/// assert!(!is_function(&g, &domain, &codomain).unwrap());
/// ```
pub fn is_function(relation: &SetValue,
                   domain: &SetValue,
                   codomain: &SetValue)
                   -> AlgebraResult<bool> {
    Ok(function_violation(relation, domain, codomain)?.is_none())
}
