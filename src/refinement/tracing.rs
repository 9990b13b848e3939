//! Tracing support for refinements.
//!
//! This module provides the `Traced` combinator and `traced` method for
//! observing verdicts as they happen. Feature-gated behind
//! `#[cfg(feature = "tracing")]`.

use crate::refinement::Refinement;
use crate::verdict::Verdict;

/// A refinement that emits a trace event for every classification.
///
/// Created by [`RefinementTracingExt::traced`]. The verdict passes through
/// untouched; the event records the configured name and whether the
/// candidate hit.
#[derive(Clone, Copy, Debug)]
pub struct Traced<R> {
    pub(crate) inner: R,
    pub(crate) name: &'static str,
}

impl<'a, T, R> Refinement<'a, T> for Traced<R>
where
    T: ?Sized + 'a,
    R: Refinement<'a, T>,
{
    type Narrowed = R::Narrowed;

    fn refine(&self, value: &'a T) -> Verdict<Self::Narrowed> {
        let verdict = self.inner.refine(value);
        tracing::trace!(refinement = self.name, hit = verdict.is_hit(), "classified");
        verdict
    }
}

/// Extension trait for adding tracing instrumentation to refinements.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait RefinementTracingExt<'a, T: ?Sized + 'a>: Refinement<'a, T> + Sized {
    /// Name this refinement and emit a trace event per classification.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use narrows::refinement::{some, RefinementTracingExt};
    /// use narrows::Refinement;
    ///
    /// let observed = some().traced("is_some");
    /// assert!(observed.check(&Some(3)));
    /// ```
    fn traced(self, name: &'static str) -> Traced<Self> {
        Traced { inner: self, name }
    }
}

impl<'a, T: ?Sized + 'a, R: Refinement<'a, T>> RefinementTracingExt<'a, T> for R {}
