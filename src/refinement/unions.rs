//! Ready-made refinements over the standard library's closed unions.
//!
//! `Option` and `Result` are the two closed unions every Rust program
//! already has. The refinements here narrow them to their payloads, and
//! they compose like any other: `compose((ok(), some()))` narrows a
//! `Result<Option<T>, E>` all the way to `&T`.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::refinement::Refinement;
use crate::verdict::Verdict;

/// Refinement narrowing `Option<T>` to its `Some` payload.
///
/// Created by [`some`].
pub struct IsSome<T>(PhantomData<fn() -> T>);

/// Narrow an `Option<T>` to the payload of `Some`.
///
/// # Example
///
/// ```rust
/// use narrows::refinement::some;
/// use narrows::Refinement;
///
/// let present: Option<i32> = Some(3);
/// let absent: Option<i32> = None;
///
/// assert!(some().check(&present));
/// assert!(!some().check(&absent));
/// assert_eq!(some().refine(&present).into_hit(), Some(&3));
/// ```
pub fn some<T>() -> IsSome<T> {
    IsSome(PhantomData)
}

impl<'a, T: 'a> Refinement<'a, Option<T>> for IsSome<T> {
    type Narrowed = &'a T;

    #[inline]
    fn refine(&self, value: &'a Option<T>) -> Verdict<&'a T> {
        match value {
            Some(inner) => Verdict::Hit(inner),
            None => Verdict::Miss,
        }
    }
}

/// Refinement narrowing `Result<T, E>` to its `Ok` payload.
///
/// Created by [`ok`].
pub struct IsOk<T, E>(PhantomData<fn() -> (T, E)>);

/// Narrow a `Result<T, E>` to the payload of `Ok`.
///
/// # Example
///
/// ```rust
/// use narrows::refinement::ok;
/// use narrows::Refinement;
///
/// let done: Result<i32, String> = Ok(3);
/// let failed: Result<i32, String> = Err(String::from("boom"));
///
/// assert!(ok().check(&done));
/// assert!(!ok().check(&failed));
/// ```
pub fn ok<T, E>() -> IsOk<T, E> {
    IsOk(PhantomData)
}

impl<'a, T: 'a, E: 'a> Refinement<'a, Result<T, E>> for IsOk<T, E> {
    type Narrowed = &'a T;

    #[inline]
    fn refine(&self, value: &'a Result<T, E>) -> Verdict<&'a T> {
        match value {
            Ok(inner) => Verdict::Hit(inner),
            Err(_) => Verdict::Miss,
        }
    }
}

/// Refinement narrowing `Result<T, E>` to its `Err` payload.
///
/// Created by [`err`].
pub struct IsErr<T, E>(PhantomData<fn() -> (T, E)>);

/// Narrow a `Result<T, E>` to the payload of `Err`.
///
/// # Example
///
/// ```rust
/// use narrows::refinement::err;
/// use narrows::Refinement;
///
/// let failed: Result<i32, String> = Err(String::from("boom"));
///
/// assert!(err().check(&failed));
/// assert_eq!(
///     err().refine(&failed).into_hit(),
///     Some(&String::from("boom"))
/// );
/// ```
pub fn err<T, E>() -> IsErr<T, E> {
    IsErr(PhantomData)
}

impl<'a, T: 'a, E: 'a> Refinement<'a, Result<T, E>> for IsErr<T, E> {
    type Narrowed = &'a E;

    #[inline]
    fn refine(&self, value: &'a Result<T, E>) -> Verdict<&'a E> {
        match value {
            Ok(_) => Verdict::Miss,
            Err(error) => Verdict::Hit(error),
        }
    }
}

impl<T> fmt::Debug for IsSome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IsSome<{}>", type_name::<T>())
    }
}

impl<T> Clone for IsSome<T> {
    fn clone(&self) -> Self {
        IsSome(PhantomData)
    }
}

impl<T> Copy for IsSome<T> {}

impl<T, E> fmt::Debug for IsOk<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IsOk<{}, {}>", type_name::<T>(), type_name::<E>())
    }
}

impl<T, E> Clone for IsOk<T, E> {
    fn clone(&self) -> Self {
        IsOk(PhantomData)
    }
}

impl<T, E> Copy for IsOk<T, E> {}

impl<T, E> fmt::Debug for IsErr<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IsErr<{}, {}>", type_name::<T>(), type_name::<E>())
    }
}

impl<T, E> Clone for IsErr<T, E> {
    fn clone(&self) -> Self {
        IsErr(PhantomData)
    }
}

impl<T, E> Copy for IsErr<T, E> {}
