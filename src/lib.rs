//! # Narrows
//!
//! > *"Where the river narrows, the water runs fast"*
//!
//! A Rust library for compile-time-checked refinement combinators.
//!
//! ## Philosophy
//!
//! A *refinement* is a predicate over a broad type that, when it accepts a
//! value, additionally certifies the value belongs to a narrower type,
//! typically one variant of a closed union. **Narrows** makes that
//! certification a property the compiler checks: a classifier must produce
//! a concretely typed witness for the accepting branch, so a refinement
//! declared to narrow `Pet` to `Cat` cannot accidentally test for `Dog`.
//!
//! Refinements compose:
//!
//! - [`compose`] chains stages so the narrowing accumulates left to right
//!   (short-circuit AND),
//! - [`either`] unites siblings into a refinement for the union of their
//!   targets (short-circuit OR),
//! - [`not`] complements a refinement within its closed union.
//!
//! All of it is pure, total, allocation-free, and `Send + Sync` by
//! construction.
//!
//! ## Quick Example
//!
//! ```rust
//! use narrows::{either, hit, miss, refinement, Refinement};
//!
//! struct Orange;
//! struct Mango;
//! struct Banana;
//!
//! enum Fruit {
//!     Orange(Orange),
//!     Mango(Mango),
//!     Banana(Banana),
//! }
//!
//! let is_orange = refinement(|fruit: &Fruit| match fruit {
//!     Fruit::Orange(orange) => hit(orange),
//!     _ => miss(),
//! });
//! let is_mango = refinement(|fruit: &Fruit| match fruit {
//!     Fruit::Mango(mango) => hit(mango),
//!     _ => miss(),
//! });
//!
//! let is_juicy = either((is_orange, is_mango));
//!
//! let basket = vec![
//!     Fruit::Orange(Orange),
//!     Fruit::Banana(Banana),
//!     Fruit::Mango(Mango),
//! ];
//!
//! let juicy: Vec<&Fruit> = basket.iter().filter(|f| is_juicy.check(f)).collect();
//! assert_eq!(juicy.len(), 2);
//! ```
//!
//! For the full surface - witnesses, std-union refinements, collection
//! utilities - see the [`refinement`] module.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod refinement;
pub mod verdict;

// Re-exports
pub use either::Either;
pub use refinement::{compose, either, not, refinement, Refinement, RefinementExt};
pub use verdict::{hit, miss, Verdict};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::refinement::prelude::*;
}
