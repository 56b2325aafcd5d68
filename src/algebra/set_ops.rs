use crate::value::{Element, SetValue};

/// Returns every element that is in `left`, in `right`, or in both.
///
/// # Example
/// ```
/// use relset::{algebra::union, literal::parse};
///
/// let a = parse("1, 2").unwrap();
/// let b = parse("2, 3").unwrap();
///
/// assert_eq!(union(&a, &b), parse("1, 2, 3").unwrap());
/// ```
#[must_use]
pub fn union(left: &SetValue, right: &SetValue) -> SetValue {
    left.as_hash_set().union(right.as_hash_set()).cloned().collect()
}

/// Returns every element that is in both `left` and `right`.
#[must_use]
pub fn intersection(left: &SetValue, right: &SetValue) -> SetValue {
    left.as_hash_set().intersection(right.as_hash_set()).cloned().collect()
}

/// Returns every element of `left` that is not in `right`.
#[must_use]
pub fn difference(left: &SetValue, right: &SetValue) -> SetValue {
    left.as_hash_set().difference(right.as_hash_set()).cloned().collect()
}

/// Returns the complement of `set` with respect to `universal`.
///
/// The universal set is always explicit. Elements of `set` outside
/// `universal` are simply ignored.
///
/// # Example
/// ```
/// use relset::{algebra::complement, literal::parse};
///
/// let u = parse("a, b, c, d").unwrap();
/// let a = parse("a, c, z").unwrap();
///
/// assert_eq!(complement(&u, &a), parse("b, d").unwrap());
/// ```
#[must_use]
pub fn complement(universal: &SetValue, set: &SetValue) -> SetValue {
    difference(universal, set)
}

/// Returns the set of all tuples `(l, r)` with `l` in `left` and `r` in
/// `right`.
///
/// The result has `|left| * |right|` elements. When both sides hold atoms
/// the result is a relation; otherwise the tuples nest and are not relation
/// pairs.
///
/// # Example
/// ```
/// use relset::{algebra::cartesian_product, literal::parse};
///
/// let a = parse("1, 2").unwrap();
/// let b = parse("x, y, z").unwrap();
/// let product = cartesian_product(&a, &b);
///
/// assert_eq!(product.len(), 6);
/// assert!(product.is_relation());
/// ```
#[must_use]
pub fn cartesian_product(left: &SetValue, right: &SetValue) -> SetValue {
    left.iter()
        .flat_map(|l| right.iter().map(move |r| Element::Tuple(vec![l.clone(), r.clone()])))
        .collect()
}

/// Returns `true` if every element of `left` is in `right`.
#[must_use]
pub fn is_subset(left: &SetValue, right: &SetValue) -> bool {
    left.is_subset(right)
}

/// Returns `true` if both sets have exactly the same elements.
#[must_use]
pub fn equals(left: &SetValue, right: &SetValue) -> bool {
    left == right
}
