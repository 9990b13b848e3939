//! Logical combinators over refinements.
//!
//! Three combinators cover the algebra:
//! - [`Compose<A, B>`]: sequential composition - `B` further narrows `A`'s
//!   witness, short-circuit AND.
//! - [`Union<A, B>`]: alternation - accept if either sibling accepts,
//!   witness is the union of the legs', short-circuit OR.
//! - [`Not<R>`]: complement - accept exactly when `R` rejects.
//!
//! Each is a plain tuple struct; combining refinements allocates nothing
//! and the whole chain compiles down to the underlying classifier calls.

use std::any::type_name;
use std::fmt;

use crate::either::Either;
use crate::refinement::Refinement;
use crate::verdict::Verdict;

/// Sequential composition: `B` further narrows `A`'s witness.
///
/// `A` classifies the candidate first; on a hit, its witness (a borrow of
/// the narrower type) becomes `B`'s candidate. On a miss the whole
/// composition misses and `B` is never invoked - `B` is entitled to assume
/// the narrower input type, so skipping it is part of the contract, not an
/// optimization.
///
/// # Example
///
/// ```rust
/// use narrows::refinement::{compose, ok, some};
/// use narrows::Refinement;
///
/// // Result<Option<i32>, &str> --ok--> Option<i32> --some--> i32
/// let present = compose((ok(), some()));
///
/// let value: Result<Option<i32>, &str> = Ok(Some(7));
/// assert!(present.check(&value));
/// assert_eq!(present.refine(&value).into_hit(), Some(&7));
///
/// let absent: Result<Option<i32>, &str> = Ok(None);
/// assert!(!present.check(&absent));
/// ```
#[derive(Clone, Copy)]
pub struct Compose<A, B>(pub A, pub B);

impl<'a, T, M, A, B> Refinement<'a, T> for Compose<A, B>
where
    T: ?Sized + 'a,
    M: ?Sized + 'a,
    A: Refinement<'a, T, Narrowed = &'a M>,
    B: Refinement<'a, M>,
{
    type Narrowed = B::Narrowed;

    #[inline]
    fn refine(&self, value: &'a T) -> Verdict<Self::Narrowed> {
        match self.0.refine(value) {
            Verdict::Hit(mid) => self.1.refine(mid),
            Verdict::Miss => Verdict::Miss,
        }
    }
}

impl<A, B> fmt::Debug for Compose<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Compose<{}, {}>",
            type_name::<A>(),
            type_name::<B>()
        )
    }
}

/// Alternation: accept if either sibling accepts.
///
/// Both legs classify the same input type; the witness is an
/// [`Either`] of the legs' witnesses. Evaluation is left to right with
/// short-circuit: when the left leg hits, the right leg is never invoked,
/// and when both legs would accept, the witness is the left one
/// (first match wins - defined semantics for overlapping siblings, not an
/// error).
///
/// # Example
///
/// ```rust
/// use narrows::refinement::{err, ok};
/// use narrows::{Either, Refinement};
///
/// let settled = narrows::either((ok(), err()));
///
/// let done: Result<i32, String> = Ok(3);
/// assert!(settled.check(&done));
/// assert_eq!(settled.refine(&done).into_hit(), Some(Either::Left(&3)));
/// ```
#[derive(Clone, Copy)]
pub struct Union<A, B>(pub A, pub B);

impl<'a, T, A, B> Refinement<'a, T> for Union<A, B>
where
    T: ?Sized + 'a,
    A: Refinement<'a, T>,
    B: Refinement<'a, T>,
{
    type Narrowed = Either<A::Narrowed, B::Narrowed>;

    #[inline]
    fn refine(&self, value: &'a T) -> Verdict<Self::Narrowed> {
        match self.0.refine(value) {
            Verdict::Hit(left) => Verdict::Hit(Either::Left(left)),
            Verdict::Miss => self.1.refine(value).map(Either::Right),
        }
    }
}

impl<A, B> fmt::Debug for Union<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Union<{}, {}>", type_name::<A>(), type_name::<B>())
    }
}

/// Complement: accept exactly when the inner refinement rejects.
///
/// The runtime behavior is the exact boolean complement. The witness is
/// the candidate itself at its broad type: Rust has no type-level set
/// difference, so "the union minus the narrowed variant" cannot be named
/// and the complement's narrowing falls back to the supertype. Callers
/// that need the precise complement type should refine the remaining
/// variants directly.
///
/// # Example
///
/// ```rust
/// use narrows::refinement::{not, some};
/// use narrows::Refinement;
///
/// let is_none = not(some());
///
/// let absent: Option<i32> = None;
/// assert!(is_none.check(&absent));
/// assert!(!is_none.check(&Some(3)));
/// ```
#[derive(Clone, Copy)]
pub struct Not<R>(pub R);

impl<'a, T, R> Refinement<'a, T> for Not<R>
where
    T: ?Sized + 'a,
    R: Refinement<'a, T>,
{
    type Narrowed = &'a T;

    #[inline]
    fn refine(&self, value: &'a T) -> Verdict<&'a T> {
        match self.0.refine(value) {
            Verdict::Hit(_) => Verdict::Miss,
            Verdict::Miss => Verdict::Hit(value),
        }
    }
}

impl<R> fmt::Debug for Not<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Not<{}>", type_name::<R>())
    }
}

/// Complement a refinement.
///
/// `not(r).check(x) == !r.check(x)` for every `x`; see [`Not`] for the
/// witness-precision caveat.
///
/// # Example
///
/// ```rust
/// use narrows::{hit, miss, not, refinement, Refinement};
///
/// let is_even = refinement(|n: &i32| if n % 2 == 0 { hit(n) } else { miss() });
/// let is_odd = not(is_even);
///
/// assert!(is_odd.check(&3));
/// assert!(!is_odd.check(&4));
/// ```
pub fn not<'a, T, R>(refinement: R) -> Not<R>
where
    T: ?Sized + 'a,
    R: Refinement<'a, T>,
{
    Not(refinement)
}

/// Extension trait for combinator chaining.
///
/// Mirrors the free-function surface as methods, so refinements read left
/// to right at the call site.
///
/// # Example
///
/// ```rust
/// use narrows::refinement::{ok, some, RefinementExt};
/// use narrows::Refinement;
///
/// let present = ok().and_then(some());
///
/// let value: Result<Option<i32>, &str> = Ok(Some(7));
/// assert!(present.check(&value));
/// ```
pub trait RefinementExt<'a, T: ?Sized + 'a>: Refinement<'a, T> + Sized {
    /// Chain a refinement over this one's witness (short-circuit AND).
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::refinement::{ok, some, RefinementExt};
    /// use narrows::Refinement;
    ///
    /// let present = ok().and_then(some());
    /// let absent: Result<Option<i32>, &str> = Ok(None);
    /// assert!(!present.check(&absent));
    /// ```
    fn and_then<M, B>(self, next: B) -> Compose<Self, B>
    where
        M: ?Sized + 'a,
        Self: Refinement<'a, T, Narrowed = &'a M>,
        B: Refinement<'a, M>,
    {
        Compose(self, next)
    }

    /// Unite with a sibling refinement over the same input (short-circuit OR).
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::refinement::{err, ok, RefinementExt};
    /// use narrows::Refinement;
    ///
    /// let settled = ok().or(err());
    /// let done: Result<i32, String> = Ok(3);
    /// assert!(settled.check(&done));
    /// ```
    fn or<B>(self, other: B) -> Union<Self, B>
    where
        B: Refinement<'a, T>,
    {
        Union(self, other)
    }

    /// Complement this refinement.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::refinement::{some, RefinementExt};
    /// use narrows::Refinement;
    ///
    /// let is_none = some().not();
    /// let absent: Option<i32> = None;
    /// assert!(is_none.check(&absent));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<'a, T: ?Sized + 'a, R: Refinement<'a, T>> RefinementExt<'a, T> for R {}
