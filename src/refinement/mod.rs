//! Refinement combinators: predicates that certify a narrowing.
//!
//! A refinement is a predicate over a broad type that, when it accepts a
//! value, additionally certifies the value belongs to a specific narrower
//! type - one variant of a closed union, typically. The certification is
//! not a runtime claim: the construction protocol forces the classifier to
//! produce a concretely typed witness, so a classifier whose body tests
//! the wrong variant fails to compile against its declared narrowing.
//!
//! # Philosophy
//!
//! Instead of scattering `matches!` checks that silently drift from the
//! types they claim to test, build each check once as a [`Refinement`] and
//! compose the rest:
//!
//! - [`refinement`] turns a classifier into a refinement whose narrowing
//!   the compiler verifies.
//! - [`compose`] chains refinements so the narrowing accumulates left to
//!   right.
//! - [`either`] unites sibling refinements into one that narrows to the
//!   union of their targets.
//! - [`not`] complements a refinement within its union.
//!
//! # Example
//!
//! ```rust
//! use narrows::{hit, miss, refinement, Refinement, Verdict};
//!
//! struct Cat { name: String }
//! struct Dog { name: String }
//!
//! enum Pet {
//!     Cat(Cat),
//!     Dog(Dog),
//! }
//!
//! let is_cat = refinement(|pet: &Pet| match pet {
//!     Pet::Cat(cat) => hit(cat),
//!     _ => miss(),
//! });
//!
//! let pet = Pet::Cat(Cat { name: String::from("Misha") });
//! assert!(is_cat.check(&pet));
//!
//! // A hit carries the narrowed witness, not just a boolean.
//! if let Verdict::Hit(cat) = is_cat.refine(&pet) {
//!     assert_eq!(cat.name, "Misha");
//! }
//!
//! let stray = Pet::Dog(Dog { name: String::from("Rex") });
//! assert!(!is_cat.check(&stray));
//! ```
//!
//! # Purity and totality
//!
//! A refinement must be total (defined for every value of its input type)
//! and pure (deterministic, no observable side effects). The combinators
//! preserve both by construction; they never catch a classifier's panic
//! and never introduce partiality of their own. Purity is also why every
//! refinement is `Send + Sync`: sharing one across threads needs no
//! coordination.

mod combinators;
mod iter;
pub mod prelude;
#[cfg(feature = "tracing")]
mod tracing;
mod unions;
mod variadic;

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::verdict::Verdict;

// Re-export combinator types and constructors
pub use combinators::{not, Compose, Not, RefinementExt, Union};

// Re-export variadic entry points
pub use variadic::{compose, either, Alternatives, Chain};

// Re-export std-union refinements
pub use unions::{err, ok, some, IsErr, IsOk, IsSome};

// Re-export collection utilities
pub use iter::{hits, misses, partition};

#[cfg(feature = "tracing")]
pub use tracing::{RefinementTracingExt, Traced};

/// A predicate over `T` that certifies a narrowing when it accepts.
///
/// The lifetime parameter ties the narrowed witness to the borrow of the
/// candidate, the way `serde::Deserialize<'de>` ties deserialized data to
/// its input. For a base refinement built with [`refinement`], the witness
/// is `&'a U` where `U` is the narrowed type; combinators accumulate
/// richer witnesses (a [`Compose`] chain yields its last stage's witness,
/// a [`Union`] yields an [`Either`](crate::Either) of its legs').
///
/// Implementations must be total and pure. `true` from [`check`] is a
/// guarantee, by construction, that [`refine`] yields a `Hit` carrying a
/// valid witness of `Narrowed`.
///
/// [`check`]: Refinement::check
/// [`refine`]: Refinement::refine
///
/// # Example
///
/// ```rust
/// use narrows::refinement::some;
/// use narrows::Refinement;
///
/// // Option is a closed union; `some()` narrows it to its payload.
/// let present: Option<i32> = Some(3);
/// let absent: Option<i32> = None;
///
/// assert!(some().check(&present));
/// assert!(!some().check(&absent));
/// assert_eq!(some().refine(&present).into_hit(), Some(&3));
/// ```
pub trait Refinement<'a, T: ?Sized + 'a>: Send + Sync {
    /// The narrowed witness produced by a successful classification.
    type Narrowed: 'a;

    /// Classify the candidate, yielding the narrowed witness on a hit.
    fn refine(&self, value: &'a T) -> Verdict<Self::Narrowed>;

    /// Check whether the candidate satisfies this refinement.
    ///
    /// Equivalent to `self.refine(value).is_hit()`; use this form when the
    /// witness is not needed, e.g. as a filter predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use narrows::{hit, miss, refinement, Refinement};
    ///
    /// let is_even = refinement(|n: &i32| if n % 2 == 0 { hit(n) } else { miss() });
    /// assert!(is_even.check(&4));
    /// assert!(!is_even.check(&3));
    /// ```
    #[inline]
    fn check(&self, value: &'a T) -> bool {
        self.refine(value).is_hit()
    }
}

/// A refinement built from a classifier function.
///
/// Created by [`refinement`]. The `T` and `U` parameters pin the broad and
/// narrowed types so the classifier is checked against them rather than
/// inferred away.
pub struct FnRefinement<T: ?Sized, U: ?Sized, F> {
    classify: F,
    _types: PhantomData<fn(&T) -> &U>,
}

/// Build a refinement from a classifier.
///
/// The classifier maps a borrowed candidate to a [`Verdict`]: a
/// [`hit`](crate::hit) carrying the recognized value at its narrower type,
/// or a [`miss`](crate::miss). Because the hit must carry a concretely
/// typed `&U`, the compiler checks the classifier's body against the
/// declared narrowing - a classifier that matches the wrong variant is a
/// type error, not a latent bug.
///
/// The classifier is assumed total. If it panics for some input, the
/// panic propagates unchanged; no combinator in this crate catches it.
///
/// # Example
///
/// ```rust
/// use narrows::{hit, miss, refinement, Refinement};
///
/// struct Orange;
/// struct Mango;
///
/// enum Fruit {
///     Orange(Orange),
///     Mango(Mango),
/// }
///
/// let is_mango = refinement(|fruit: &Fruit| match fruit {
///     Fruit::Mango(mango) => hit(mango),
///     _ => miss(),
/// });
///
/// assert!(is_mango.check(&Fruit::Mango(Mango)));
/// assert!(!is_mango.check(&Fruit::Orange(Orange)));
/// ```
///
/// A classifier whose body disagrees with the declared narrowing does not
/// compile:
///
/// ```compile_fail
/// use narrows::{hit, miss, refinement};
/// use narrows::refinement::FnRefinement;
///
/// struct Cat;
/// struct Dog;
///
/// enum Pet {
///     Cat(Cat),
///     Dog(Dog),
/// }
///
/// // Declared to narrow Pet to Cat, but the body produces a Dog witness.
/// let is_cat: FnRefinement<Pet, Cat, _> = refinement(|pet: &Pet| match pet {
///     Pet::Dog(dog) => hit(dog),
///     _ => miss(),
/// });
/// ```
pub fn refinement<T, U, F>(classify: F) -> FnRefinement<T, U, F>
where
    T: ?Sized,
    U: ?Sized,
    F: for<'a> Fn(&'a T) -> Verdict<&'a U> + Send + Sync,
{
    FnRefinement {
        classify,
        _types: PhantomData,
    }
}

impl<'a, T, U, F> Refinement<'a, T> for FnRefinement<T, U, F>
where
    T: ?Sized + 'a,
    U: ?Sized + 'a,
    F: Fn(&'a T) -> Verdict<&'a U> + Send + Sync,
{
    type Narrowed = &'a U;

    #[inline]
    fn refine(&self, value: &'a T) -> Verdict<&'a U> {
        (self.classify)(value)
    }
}

impl<T: ?Sized, U: ?Sized, F> fmt::Debug for FnRefinement<T, U, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FnRefinement<{} -> {}>",
            type_name::<T>(),
            type_name::<U>()
        )
    }
}

impl<T: ?Sized, U: ?Sized, F: Clone> Clone for FnRefinement<T, U, F> {
    fn clone(&self) -> Self {
        FnRefinement {
            classify: self.classify.clone(),
            _types: PhantomData,
        }
    }
}

impl<T: ?Sized, U: ?Sized, F: Copy> Copy for FnRefinement<T, U, F> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::{hit, miss};

    #[derive(Debug, PartialEq)]
    struct Cat {
        name: &'static str,
    }

    #[derive(Debug, PartialEq)]
    struct Dog {
        name: &'static str,
    }

    enum Pet {
        Cat(Cat),
        Dog(Dog),
    }

    fn cat_of(pet: &Pet) -> Verdict<&Cat> {
        match pet {
            Pet::Cat(cat) => hit(cat),
            _ => miss(),
        }
    }

    #[test]
    fn test_check_agrees_with_classifier() {
        let is_cat = refinement(cat_of);
        let cat = Pet::Cat(Cat { name: "Misha" });
        let dog = Pet::Dog(Dog { name: "Rex" });

        assert!(is_cat.check(&cat));
        assert!(!is_cat.check(&dog));
    }

    #[test]
    fn test_refine_yields_the_witness() {
        let is_cat = refinement(cat_of);
        let pet = Pet::Cat(Cat { name: "Misha" });

        let witness = is_cat.refine(&pet).unwrap_hit();
        assert_eq!(witness, &Cat { name: "Misha" });
    }

    #[test]
    fn test_closure_classifier() {
        let is_positive = refinement(|n: &i32| if *n > 0 { hit(n) } else { miss() });
        assert!(is_positive.check(&5));
        assert!(!is_positive.check(&0));
        assert!(!is_positive.check(&-5));
    }

    #[test]
    fn test_refinement_is_total_over_its_domain() {
        let is_dog = refinement(|pet: &Pet| match pet {
            Pet::Dog(dog) => hit(dog),
            _ => miss(),
        });

        // Every variant produces a verdict; no input is undefined.
        assert!(is_dog.check(&Pet::Dog(Dog { name: "Rex" })));
        assert!(!is_dog.check(&Pet::Cat(Cat { name: "Misha" })));
    }

    #[test]
    fn test_refinement_is_deterministic() {
        let is_cat = refinement(cat_of);
        let pet = Pet::Cat(Cat { name: "Misha" });

        assert_eq!(is_cat.check(&pet), is_cat.check(&pet));
    }

    #[test]
    fn test_clone_preserves_behavior() {
        let is_cat = refinement(cat_of);
        #[allow(clippy::clone_on_copy)]
        let cloned = is_cat.clone();
        let pet = Pet::Cat(Cat { name: "Misha" });

        assert_eq!(is_cat.check(&pet), cloned.check(&pet));
    }

    #[test]
    fn test_debug_names_both_types() {
        let is_cat = refinement(cat_of);
        let rendered = format!("{:?}", is_cat);
        assert!(rendered.contains("Pet"));
        assert!(rendered.contains("Cat"));
    }

    #[test]
    fn test_refinements_are_shareable_across_threads() {
        let is_positive = refinement(|n: &i32| if *n > 0 { hit(n) } else { miss() });

        std::thread::scope(|scope| {
            let left = scope.spawn(|| is_positive.check(&1));
            let right = scope.spawn(|| is_positive.check(&-1));
            assert!(left.join().unwrap());
            assert!(!right.join().unwrap());
        });
    }
}
