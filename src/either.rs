//! A semantically neutral sum type, used as the witness of a union narrowing.
//!
//! When an alternation of two refinements accepts a value, the accepted
//! value belongs to one of two narrower types. Rust has no anonymous union
//! types, so the witness is an `Either<L, R>`: `Left` carries the first
//! alternative's witness, `Right` the second's. Alternations of more than
//! two refinements nest to the right (`Either<U1, Either<U2, U3>>`);
//! [`flatten`](Either::flatten) collapses one level when the leg types line
//! up.
//!
//! # Either vs Result
//!
//! Unlike `Result`, neither variant implies an error condition - both sides
//! of a union narrowing are successes. Use `Result` when one side clearly
//! represents failure; use the [`Result` conversions](Either::into_result)
//! at that boundary.
//!
//! # Example
//!
//! ```rust
//! use narrows::Either;
//!
//! // A witness from a two-way alternation: one of two narrower types.
//! let witness: Either<i32, &str> = Either::left(42);
//!
//! let description = witness.fold(
//!     |n| format!("first alternative: {}", n),
//!     |s| format!("second alternative: {}", s),
//! );
//! assert_eq!(description, "first alternative: 42");
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
///
/// `Either` is a general-purpose sum type with no inherent success/failure
/// semantics. In this crate it appears as the narrowed witness of an
/// alternation: `Left` is the first alternative's witness, `Right` the
/// second's. Alternation is left-biased, so when both alternatives would
/// accept a value the witness is a `Left`.
///
/// # Example
///
/// ```rust
/// use narrows::Either;
///
/// let left: Either<i32, &str> = Either::left(42);
/// let right: Either<i32, &str> = Either::right("hello");
///
/// match left {
///     Either::Left(n) => assert_eq!(n, 42),
///     Either::Right(_) => unreachable!(),
/// }
/// assert!(right.is_right());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Create a Left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert!(e.is_left());
    /// ```
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert!(e.is_right());
    /// ```
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns the left value if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert_eq!(e.into_left(), Some(42));
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert_eq!(e.into_left(), None);
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert_eq!(e.into_right(), Some("hello"));
    /// ```
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the left value, passing right values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(21);
    /// assert_eq!(e.map_left(|x| x * 2), Either::left(42));
    /// ```
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value, passing left values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(21);
    /// assert_eq!(e.map_right(|x| x * 2), Either::right(42));
    /// ```
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform both variants.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Either;
    ///
    /// let e: Either<i32, &str> = Either::right("hello");
    /// assert_eq!(e.bimap(|x| x + 1, |s| s.len()), Either::right(5));
    /// ```
    #[inline]
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(g(r)),
        }
    }

    /// Swap Left and Right.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Fold both variants into a single value.
    ///
    /// This is how callers consume a union witness without caring which
    /// alternative produced it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Either;
    ///
    /// let witness: Either<i32, &str> = Either::left(42);
    /// let rendered = witness.fold(|n| n.to_string(), |s| s.to_string());
    /// assert_eq!(rendered, "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// Convert to Result (Right becomes Ok, Left becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Create from Result (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flatten a right-nested Either.
    ///
    /// Alternations of three or more refinements produce right-nested
    /// witnesses; when the outer and inner left legs share a type, one
    /// level of nesting can be collapsed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::right(Either::right(42));
    /// assert_eq!(nested.flatten(), Either::right(42));
    ///
    /// let inner_left: Either<&str, Either<&str, i32>> = Either::right(Either::left("inner"));
    /// assert_eq!(inner_left.flatten(), Either::left("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(inner) => inner,
        }
    }
}

// The orphan rule forbids `From<Either<L, R>> for Result<R, L>`; the
// reverse direction is the inherent `into_result`.
impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

#[cfg(feature = "proptest")]
impl<L, R> proptest::arbitrary::Arbitrary for Either<L, R>
where
    L: proptest::arbitrary::Arbitrary + 'static,
    R: proptest::arbitrary::Arbitrary + 'static,
    L::Strategy: 'static,
    R::Strategy: 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<L>(l_params).prop_map(Either::Left),
            any_with::<R>(r_params).prop_map(Either::Right),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(Either::<i32, &str>::left(42).is_left());
        assert!(Either::<i32, &str>::right("hello").is_right());
    }

    #[test]
    fn test_extractors() {
        let left: Either<i32, &str> = Either::left(42);
        assert_eq!(left.into_left(), Some(42));
        assert_eq!(left.into_right(), None);

        let right: Either<i32, &str> = Either::right("hello");
        assert_eq!(right.into_right(), Some("hello"));
        assert_eq!(right.into_left(), None);
    }

    #[test]
    fn test_as_ref() {
        let e: Either<i32, String> = Either::left(42);
        assert_eq!(e.as_ref(), Either::left(&42));
    }

    #[test]
    fn test_maps() {
        let e: Either<i32, &str> = Either::left(21);
        assert_eq!(e.map_left(|x| x * 2), Either::left(42));

        let e: Either<i32, &str> = Either::left(21);
        assert_eq!(e.map_right(|s: &str| s.len()), Either::left(21));

        let e: Either<i32, &str> = Either::right("hello");
        assert_eq!(e.bimap(|x| x + 1, |s| s.len()), Either::right(5));
    }

    #[test]
    fn test_swap() {
        let e: Either<i32, &str> = Either::left(42);
        assert_eq!(e.swap(), Either::right(42));
    }

    #[test]
    fn test_fold() {
        let left: Either<i32, &str> = Either::left(42);
        assert_eq!(left.fold(|x| x.to_string(), |s| s.to_string()), "42");

        let right: Either<i32, &str> = Either::right("hello");
        assert_eq!(right.fold(|x| x.to_string(), |s| s.to_string()), "hello");
    }

    #[test]
    fn test_flatten() {
        let nested: Either<&str, Either<&str, i32>> = Either::right(Either::right(42));
        assert_eq!(nested.flatten(), Either::right(42));

        let outer_left: Either<&str, Either<&str, i32>> = Either::left("outer");
        assert_eq!(outer_left.flatten(), Either::left("outer"));
    }

    #[test]
    fn test_result_conversion() {
        let ok: Result<i32, &str> = Ok(42);
        let either: Either<&str, i32> = ok.into();
        assert_eq!(either, Either::right(42));

        let back: Result<i32, &str> = either.into_result();
        assert_eq!(back, Ok(42));
    }
}
