use std::collections::HashMap;

use crate::{
    algebra::AlgebraResult,
    error::AlgebraError,
    value::{Pair, Relation, SetValue},
};

/// Chains two relations: `(a, d)` is in the result whenever `(a, b)` is in
/// `first` and `(b, d)` is in `second`.
///
/// This applies `first`, then `second`. Composition is associative but not
/// commutative.
///
/// # Errors
/// Returns `AlgebraError::NotARelation` if either operand holds a non-pair.
///
/// # Example
/// ```
/// use relset::{algebra::compose, literal::parse};
///
/// let r = parse("(1,2), (2,3)").unwrap();
/// let s = parse("(2,5), (3,6)").unwrap();
///
/// assert_eq!(compose(&r, &s).unwrap(), parse("(1,5), (2,6)").unwrap());
/// ```
pub fn compose(first: &SetValue, second: &SetValue) -> AlgebraResult<SetValue> {
    let first = Relation::try_from(first)?;
    let second = Relation::try_from(second)?;

    Ok(compose_relations(&first, &second).into_set_value())
}

fn compose_relations(first: &Relation, second: &Relation) -> Relation {
    first.iter()
         .flat_map(|p| {
             second.successors(&p.second)
                   .map(move |q| Pair { first:  p.first.clone(),
                                        second: q.second.clone(), })
         })
         .collect()
}

/// Composes a relation with itself: `power(r, 1)` is a copy of `r` and
/// `power(r, n)` is `compose(power(r, n - 1), r)`.
///
/// The powers of a finite relation are eventually periodic. Once a power
/// repeats an earlier one, the rest of the sequence is skipped, so large
/// exponents cost no more than the length of the repeating prefix.
///
/// # Errors
/// Returns an `AlgebraError` if:
/// - `exponent` is smaller than 1,
/// - `relation` holds a non-pair.
///
/// # Example
/// ```
/// use relset::{algebra::power, literal::parse};
///
/// let r = parse("(1,2), (2,3)").unwrap();
///
/// assert_eq!(power(&r, 1).unwrap(), r);
/// assert_eq!(power(&r, 2).unwrap(), parse("(1,3)").unwrap());
/// assert!(power(&r, 3).unwrap().is_empty());
/// assert!(power(&r, 0).is_err());
///
/// let cycle = parse("(1,2), (2,1)").unwrap();
/// assert_eq!(power(&cycle, i64::MAX).unwrap(), cycle);
/// ```
pub fn power(relation: &SetValue, exponent: i64) -> AlgebraResult<SetValue> {
    if exponent < 1 {
        return Err(AlgebraError::InvalidArgument { details: format!("the exponent of a relation power must be at least 1, but found {exponent}") });
    }

    let base = Relation::try_from(relation)?;
    let mut seen: HashMap<Relation, i64> = HashMap::from([(base.clone(), 1)]);
    let mut result = base.clone();
    let mut k = 1;

    while k < exponent {
        result = compose_relations(&result, &base);
        k += 1;

        if let Some(earlier) = seen.insert(result.clone(), k) {
            // r^k == r^earlier, so the powers from here on repeat with
            // period k - earlier.
            for _ in 0..(exponent - k) % (k - earlier) {
                result = compose_relations(&result, &base);
            }
            break;
        }
    }

    Ok(result.into_set_value())
}
