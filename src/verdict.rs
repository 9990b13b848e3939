//! The two-case outcome of a classifier.
//!
//! A classifier inspects a candidate value and either recognizes it as
//! belonging to a narrower type - producing a [`Hit`](Verdict::Hit) that
//! carries the recognized value - or does not, producing a valueless
//! [`Miss`](Verdict::Miss).
//!
//! # Verdict vs Option
//!
//! `Verdict<U>` is shaped like `Option<U>`, but the two are not
//! interchangeable in intent: a `Miss` is a normal, expected outcome of
//! classification, not an absence or an error. Keeping the dedicated type
//! means a classifier's signature says exactly what it is, and the
//! construction protocol in [`crate::refinement`] can require it.
//! Conversions to and from `Option` are provided for the boundary.
//!
//! # Example
//!
//! ```rust
//! use narrows::{hit, miss, Verdict};
//!
//! fn classify_even(n: &i32) -> Verdict<&i32> {
//!     if n % 2 == 0 {
//!         hit(n)
//!     } else {
//!         miss()
//!     }
//! }
//!
//! assert!(classify_even(&4).is_hit());
//! assert!(classify_even(&3).is_miss());
//! ```

/// The outcome of classifying a candidate value.
///
/// `Hit(value)` means the classifier recognized the candidate as belonging
/// to the narrower type and carries it; `Miss` means it did not. Multiple
/// `Miss` values are interchangeable - the variant carries no state.
///
/// # Example
///
/// ```rust
/// use narrows::Verdict;
///
/// let hit: Verdict<i32> = Verdict::Hit(42);
/// let miss: Verdict<i32> = Verdict::Miss;
///
/// assert_eq!(hit.into_hit(), Some(42));
/// assert_eq!(miss.into_hit(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict<U> {
    /// The classifier recognized the candidate; here it is.
    Hit(U),
    /// The classifier does not recognize the candidate.
    Miss,
}

/// Create a `Hit` verdict carrying the recognized value.
///
/// This is the constructor classifier bodies use for the accepting branch.
///
/// # Example
///
/// ```rust
/// use narrows::{hit, Verdict};
///
/// let verdict = hit("recognized");
/// assert_eq!(verdict, Verdict::Hit("recognized"));
/// ```
#[inline]
pub fn hit<U>(value: U) -> Verdict<U> {
    Verdict::Hit(value)
}

/// Create a `Miss` verdict.
///
/// This is the value classifier bodies return for the rejecting branch.
///
/// # Example
///
/// ```rust
/// use narrows::{miss, Verdict};
///
/// let verdict: Verdict<i32> = miss();
/// assert_eq!(verdict, Verdict::Miss);
/// ```
#[inline]
pub fn miss<U>() -> Verdict<U> {
    Verdict::Miss
}

impl<U> Verdict<U> {
    /// Returns `true` if this is a `Hit`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Verdict;
    ///
    /// assert!(Verdict::Hit(1).is_hit());
    /// assert!(!Verdict::<i32>::Miss.is_hit());
    /// ```
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Verdict::Hit(_))
    }

    /// Returns `true` if this is a `Miss`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Verdict;
    ///
    /// assert!(Verdict::<i32>::Miss.is_miss());
    /// assert!(!Verdict::Hit(1).is_miss());
    /// ```
    #[inline]
    pub fn is_miss(&self) -> bool {
        matches!(self, Verdict::Miss)
    }

    /// Transform the carried value, passing `Miss` through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Verdict;
    ///
    /// assert_eq!(Verdict::Hit(21).map(|n| n * 2), Verdict::Hit(42));
    /// assert_eq!(Verdict::<i32>::Miss.map(|n| n * 2), Verdict::Miss);
    /// ```
    #[inline]
    pub fn map<V, F>(self, f: F) -> Verdict<V>
    where
        F: FnOnce(U) -> V,
    {
        match self {
            Verdict::Hit(value) => Verdict::Hit(f(value)),
            Verdict::Miss => Verdict::Miss,
        }
    }

    /// Chain a further classification on the carried value.
    ///
    /// A `Miss` short-circuits: `f` is never invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::{hit, miss, Verdict};
    ///
    /// let nonzero = |n: i32| if n != 0 { hit(n) } else { miss() };
    ///
    /// assert_eq!(Verdict::Hit(3).and_then(nonzero), Verdict::Hit(3));
    /// assert_eq!(Verdict::Hit(0).and_then(nonzero), Verdict::Miss);
    /// assert_eq!(Verdict::Miss.and_then(nonzero), Verdict::Miss);
    /// ```
    #[inline]
    pub fn and_then<V, F>(self, f: F) -> Verdict<V>
    where
        F: FnOnce(U) -> Verdict<V>,
    {
        match self {
            Verdict::Hit(value) => f(value),
            Verdict::Miss => Verdict::Miss,
        }
    }

    /// Returns the carried value if this is a `Hit`, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Verdict;
    ///
    /// assert_eq!(Verdict::Hit(7).into_hit(), Some(7));
    /// assert_eq!(Verdict::<i32>::Miss.into_hit(), None);
    /// ```
    #[inline]
    pub fn into_hit(self) -> Option<U> {
        match self {
            Verdict::Hit(value) => Some(value),
            Verdict::Miss => None,
        }
    }

    /// Return the carried value or a default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Verdict;
    ///
    /// assert_eq!(Verdict::Hit(7).hit_or(0), 7);
    /// assert_eq!(Verdict::Miss.hit_or(0), 0);
    /// ```
    #[inline]
    pub fn hit_or(self, default: U) -> U {
        match self {
            Verdict::Hit(value) => value,
            Verdict::Miss => default,
        }
    }

    /// Convert to `Verdict<&U>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Verdict;
    ///
    /// let verdict = Verdict::Hit(String::from("cat"));
    /// assert_eq!(verdict.as_ref().into_hit(), Some(&String::from("cat")));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Verdict<&U> {
        match self {
            Verdict::Hit(value) => Verdict::Hit(value),
            Verdict::Miss => Verdict::Miss,
        }
    }

    /// Extract the carried value, panicking on a `Miss`.
    ///
    /// # Panics
    ///
    /// Panics if the verdict is a `Miss`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::Verdict;
    ///
    /// assert_eq!(Verdict::Hit(42).unwrap_hit(), 42);
    /// ```
    #[inline]
    pub fn unwrap_hit(self) -> U {
        match self {
            Verdict::Hit(value) => value,
            Verdict::Miss => panic!("called `Verdict::unwrap_hit()` on a `Miss` value"),
        }
    }
}

// The orphan rule forbids `From<Verdict<U>> for Option<U>`; the reverse
// direction is the inherent `into_hit`.
impl<U> From<Option<U>> for Verdict<U> {
    fn from(option: Option<U>) -> Self {
        match option {
            Some(value) => Verdict::Hit(value),
            None => Verdict::Miss,
        }
    }
}

#[cfg(feature = "proptest")]
impl<U> proptest::arbitrary::Arbitrary for Verdict<U>
where
    U: proptest::arbitrary::Arbitrary + Clone + std::fmt::Debug + 'static,
    U::Strategy: 'static,
{
    type Parameters = U::Parameters;
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        prop_oneof![
            any_with::<U>(args).prop_map(Verdict::Hit),
            Just(Verdict::Miss),
        ]
        .boxed()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_map_identity(x: i32) {
            prop_assert_eq!(Verdict::Hit(x).map(|v| v), Verdict::Hit(x));
        }

        #[test]
        fn prop_map_composition(x: i32) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            prop_assert_eq!(
                Verdict::Hit(x).map(f).map(g),
                Verdict::Hit(x).map(|v| g(f(v)))
            );
        }

        #[test]
        fn prop_option_roundtrip(x: i32) {
            let verdict = Verdict::Hit(x);
            let option: Option<i32> = verdict.into_hit();
            let back: Verdict<i32> = option.into();
            prop_assert_eq!(back, Verdict::Hit(x));
        }

        #[test]
        fn prop_hit_is_never_miss(x: i32) {
            prop_assert!(hit(x).is_hit());
            prop_assert!(!hit(x).is_miss());
        }
    }
}
