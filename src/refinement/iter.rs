//! Collection utilities: run a refinement across borrowed candidates.
//!
//! A refinement is most often used as a filter predicate. These helpers
//! keep the part a plain `filter` throws away - the typed witness - while
//! classifying a whole collection in one pass.

use crate::refinement::Refinement;
use crate::verdict::Verdict;

/// Yield the narrowed witnesses of the accepted candidates.
///
/// Lazily classifies each candidate and yields the witness of every hit,
/// preserving order. The refinement is taken by value; refinements are
/// small and `Copy` when their classifier is.
///
/// # Example
///
/// ```rust
/// use narrows::refinement::{hits, some};
///
/// let basket = vec![Some(1), None, Some(3)];
/// let present: Vec<&i32> = hits(&basket, some()).collect();
/// assert_eq!(present, vec![&1, &3]);
/// ```
pub fn hits<'a, T, R, I>(iter: I, refinement: R) -> impl Iterator<Item = R::Narrowed> + 'a
where
    T: ?Sized + 'a,
    R: Refinement<'a, T> + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: 'a,
{
    iter.into_iter()
        .filter_map(move |candidate| refinement.refine(candidate).into_hit())
}

/// Yield the candidates the refinement rejects.
///
/// The complement of [`hits`]: rejected candidates pass through at their
/// broad type, preserving order.
///
/// # Example
///
/// ```rust
/// use narrows::refinement::{misses, some};
///
/// let basket = vec![Some(1), None, Some(3)];
/// let absent: Vec<&Option<i32>> = misses(&basket, some()).collect();
/// assert_eq!(absent, vec![&None]);
/// ```
pub fn misses<'a, T, R, I>(iter: I, refinement: R) -> impl Iterator<Item = &'a T> + 'a
where
    T: ?Sized + 'a,
    R: Refinement<'a, T> + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: 'a,
{
    iter.into_iter()
        .filter(move |candidate| !refinement.check(candidate))
}

/// Split candidates into narrowed witnesses and rejects in one pass.
///
/// Each candidate is classified exactly once; hits land in the first
/// vector as witnesses, misses in the second at their broad type.
///
/// # Example
///
/// ```rust
/// use narrows::refinement::{partition, some};
///
/// let basket = vec![Some(1), None, Some(3)];
/// let (present, absent) = partition(&basket, &some());
///
/// assert_eq!(present, vec![&1, &3]);
/// assert_eq!(absent, vec![&None]);
/// ```
pub fn partition<'a, T, R, I>(iter: I, refinement: &R) -> (Vec<R::Narrowed>, Vec<&'a T>)
where
    T: ?Sized + 'a,
    R: Refinement<'a, T>,
    I: IntoIterator<Item = &'a T>,
{
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for candidate in iter {
        match refinement.refine(candidate) {
            Verdict::Hit(witness) => accepted.push(witness),
            Verdict::Miss => rejected.push(candidate),
        }
    }

    (accepted, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refinement::{refinement, some};
    use crate::verdict::{hit, miss};

    #[derive(Debug, PartialEq)]
    struct Orange;
    #[derive(Debug, PartialEq)]
    struct Mango;

    #[derive(Debug, PartialEq)]
    enum Fruit {
        Orange(Orange),
        Mango(Mango),
    }

    fn orange_of(fruit: &Fruit) -> crate::Verdict<&Orange> {
        match fruit {
            Fruit::Orange(orange) => hit(orange),
            _ => miss(),
        }
    }

    #[test]
    fn test_hits_yields_witnesses_in_order() {
        let basket = vec![
            Fruit::Orange(Orange),
            Fruit::Mango(Mango),
            Fruit::Orange(Orange),
        ];

        let oranges: Vec<&Orange> = hits(&basket, refinement(orange_of)).collect();
        assert_eq!(oranges, vec![&Orange, &Orange]);
    }

    #[test]
    fn test_misses_yields_rejects() {
        let basket = vec![Fruit::Orange(Orange), Fruit::Mango(Mango)];

        let rest: Vec<&Fruit> = misses(&basket, refinement(orange_of)).collect();
        assert_eq!(rest, vec![&Fruit::Mango(Mango)]);
    }

    #[test]
    fn test_partition_classifies_each_candidate_once() {
        let basket = vec![Some(1), None, Some(3), None];
        let (present, absent) = partition(&basket, &some());

        assert_eq!(present, vec![&1, &3]);
        assert_eq!(absent.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let basket: Vec<Option<i32>> = vec![];
        let (present, absent) = partition(&basket, &some());

        assert!(present.is_empty());
        assert!(absent.is_empty());
    }
}
