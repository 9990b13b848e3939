//! Variadic entry points for composition and alternation.
//!
//! [`compose`] and [`either`] take a tuple of refinements and fold it into
//! the nested binary combinators [`Compose`] and [`Union`]. Tuples are the
//! variadic mechanism because a narrowing chain is heterogeneous - every
//! stage has a different input type, so a homogeneous array cannot hold
//! one.
//!
//! Minimum arities are enforced structurally: [`Chain`] starts at one
//! refinement (a one-stage chain is the refinement itself), and
//! [`Alternatives`] starts at two (a one-way alternation would be a
//! no-op). Both stop at four; longer combinations chain with
//! [`and_then`](crate::refinement::RefinementExt::and_then) and
//! [`or`](crate::refinement::RefinementExt::or).

use crate::refinement::combinators::{Compose, Union};

/// An ordered tuple of refinements forming a narrowing chain.
///
/// Implemented for tuples of arity 1 through 4 where each stage's input
/// type is the previous stage's narrowed type. Conversion folds the tuple
/// into left-nested [`Compose`] values; the single-element tuple converts
/// to its sole refinement unchanged.
pub trait Chain {
    /// The folded composition.
    type Composed;

    /// Fold the chain into a single refinement.
    fn into_refinement(self) -> Self::Composed;
}

impl<R1> Chain for (R1,) {
    type Composed = R1;

    #[inline]
    fn into_refinement(self) -> R1 {
        self.0
    }
}

impl<R1, R2> Chain for (R1, R2) {
    type Composed = Compose<R1, R2>;

    #[inline]
    fn into_refinement(self) -> Self::Composed {
        Compose(self.0, self.1)
    }
}

impl<R1, R2, R3> Chain for (R1, R2, R3) {
    type Composed = Compose<Compose<R1, R2>, R3>;

    #[inline]
    fn into_refinement(self) -> Self::Composed {
        Compose(Compose(self.0, self.1), self.2)
    }
}

impl<R1, R2, R3, R4> Chain for (R1, R2, R3, R4) {
    type Composed = Compose<Compose<Compose<R1, R2>, R3>, R4>;

    #[inline]
    fn into_refinement(self) -> Self::Composed {
        Compose(Compose(Compose(self.0, self.1), self.2), self.3)
    }
}

/// An ordered tuple of sibling refinements over one input type.
///
/// Implemented for tuples of arity 2 through 4. Conversion folds the tuple
/// into right-nested [`Union`] values, so the witness of a three-way
/// alternation is `Either<U1, Either<U2, U3>>`.
pub trait Alternatives {
    /// The folded alternation.
    type United;

    /// Fold the alternatives into a single refinement.
    fn into_refinement(self) -> Self::United;
}

impl<R1, R2> Alternatives for (R1, R2) {
    type United = Union<R1, R2>;

    #[inline]
    fn into_refinement(self) -> Self::United {
        Union(self.0, self.1)
    }
}

impl<R1, R2, R3> Alternatives for (R1, R2, R3) {
    type United = Union<R1, Union<R2, R3>>;

    #[inline]
    fn into_refinement(self) -> Self::United {
        Union(self.0, Union(self.1, self.2))
    }
}

impl<R1, R2, R3, R4> Alternatives for (R1, R2, R3, R4) {
    type United = Union<R1, Union<R2, Union<R3, R4>>>;

    #[inline]
    fn into_refinement(self) -> Self::United {
        Union(self.0, Union(self.1, Union(self.2, self.3)))
    }
}

/// Compose an ordered chain of refinements (short-circuit AND).
///
/// Each stage further narrows the previous stage's witness; the result
/// accepts only when every stage accepts, and stops at the first miss
/// without invoking later stages. A one-element chain returns its sole
/// refinement unchanged - no wrapper, no second evaluation.
///
/// # Example
///
/// ```rust
/// use narrows::{compose, Refinement};
/// use narrows::refinement::{ok, some};
///
/// // Result<Option<i32>, &str> -> Option<i32> -> i32
/// let present = compose((ok(), some()));
///
/// let value: Result<Option<i32>, &str> = Ok(Some(7));
/// assert!(present.check(&value));
///
/// let failed: Result<Option<i32>, &str> = Err("boom");
/// assert!(!present.check(&failed));
/// ```
pub fn compose<C: Chain>(stages: C) -> C::Composed {
    stages.into_refinement()
}

/// Unite sibling refinements over one input type (short-circuit OR).
///
/// The result accepts when any alternative accepts, evaluating left to
/// right and stopping at the first hit; the witness is the union of the
/// alternatives' witnesses, nested to the right. First match wins when
/// alternatives overlap.
///
/// # Example
///
/// ```rust
/// use narrows::{either, Either, Refinement};
/// use narrows::refinement::{err, ok};
///
/// let settled = either((ok(), err()));
///
/// let done: Result<i32, String> = Ok(3);
/// let failed: Result<i32, String> = Err(String::from("boom"));
///
/// assert!(settled.check(&done));
/// assert!(settled.check(&failed));
/// assert_eq!(settled.refine(&done).into_hit(), Some(Either::Left(&3)));
/// ```
pub fn either<A: Alternatives>(alternatives: A) -> A::United {
    alternatives.into_refinement()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::either::Either;
    use crate::refinement::{refinement, Refinement};
    use crate::verdict::{hit, miss, Verdict};

    #[derive(Debug, PartialEq)]
    struct Orange;
    #[derive(Debug, PartialEq)]
    struct Mango;
    #[derive(Debug, PartialEq)]
    struct Banana;

    enum Fruit {
        Orange(Orange),
        Mango(Mango),
        Banana(Banana),
    }

    fn orange_of(fruit: &Fruit) -> Verdict<&Orange> {
        match fruit {
            Fruit::Orange(orange) => hit(orange),
            _ => miss(),
        }
    }

    fn mango_of(fruit: &Fruit) -> Verdict<&Mango> {
        match fruit {
            Fruit::Mango(mango) => hit(mango),
            _ => miss(),
        }
    }

    fn banana_of(fruit: &Fruit) -> Verdict<&Banana> {
        match fruit {
            Fruit::Banana(banana) => hit(banana),
            _ => miss(),
        }
    }

    #[test]
    fn test_single_stage_chain_is_the_refinement_itself() {
        let is_mango = refinement(mango_of);
        let composed = compose((is_mango,));

        // Identity, not a wrapper: the debug rendering is the original's.
        assert!(format!("{:?}", composed).starts_with("FnRefinement<"));
        assert!(composed.check(&Fruit::Mango(Mango)));
        assert!(!composed.check(&Fruit::Orange(Orange)));
    }

    #[test]
    fn test_two_stage_chain() {
        use crate::refinement::{ok, some};

        let present = compose((ok(), some()));

        let value: Result<Option<i32>, &str> = Ok(Some(7));
        let absent: Result<Option<i32>, &str> = Ok(None);
        let failed: Result<Option<i32>, &str> = Err("boom");

        assert!(present.check(&value));
        assert!(!present.check(&absent));
        assert!(!present.check(&failed));
    }

    #[test]
    fn test_three_stage_chain_accumulates_narrowing() {
        use crate::refinement::{ok, some};

        let deep = compose((ok(), some(), some()));

        let value: Result<Option<Option<i32>>, &str> = Ok(Some(Some(7)));
        let shallow: Result<Option<Option<i32>>, &str> = Ok(Some(None));

        assert!(deep.check(&value));
        assert_eq!(deep.refine(&value).into_hit(), Some(&7));
        assert!(!deep.check(&shallow));
    }

    #[test]
    fn test_four_stage_chain() {
        use crate::refinement::some;

        let deep = compose((some(), some(), some(), some()));

        let value: Option<Option<Option<Option<i32>>>> = Some(Some(Some(Some(1))));
        let shallow: Option<Option<Option<Option<i32>>>> = Some(Some(None));

        assert!(deep.check(&value));
        assert!(!deep.check(&shallow));
    }

    #[test]
    fn test_two_way_alternation() {
        let juicy = either((refinement(orange_of), refinement(mango_of)));

        assert!(juicy.check(&Fruit::Orange(Orange)));
        assert!(juicy.check(&Fruit::Mango(Mango)));
        assert!(!juicy.check(&Fruit::Banana(Banana)));
    }

    #[test]
    fn test_three_way_alternation_nests_right() {
        let any_fruit = either((
            refinement(orange_of),
            refinement(mango_of),
            refinement(banana_of),
        ));

        assert_eq!(
            any_fruit.refine(&Fruit::Orange(Orange)).into_hit(),
            Some(Either::Left(&Orange))
        );
        assert_eq!(
            any_fruit.refine(&Fruit::Mango(Mango)).into_hit(),
            Some(Either::Right(Either::Left(&Mango)))
        );
        assert_eq!(
            any_fruit.refine(&Fruit::Banana(Banana)).into_hit(),
            Some(Either::Right(Either::Right(&Banana)))
        );
    }

    #[test]
    fn test_four_way_alternation() {
        use crate::refinement::{err, ok};
        use crate::refinement::RefinementExt;

        // Four alternatives over the same input; the last two are
        // complements of the first two, so everything is accepted.
        let total = either((ok(), err(), ok().not(), err().not()));

        let done: Result<i32, String> = Ok(3);
        let failed: Result<i32, String> = Err(String::from("boom"));

        assert!(total.check(&done));
        assert!(total.check(&failed));
    }

    #[test]
    fn test_alternation_verdict_is_order_independent() {
        let forward = either((refinement(orange_of), refinement(mango_of)));
        let reversed = either((refinement(mango_of), refinement(orange_of)));

        for fruit in [
            Fruit::Orange(Orange),
            Fruit::Mango(Mango),
            Fruit::Banana(Banana),
        ] {
            assert_eq!(forward.check(&fruit), reversed.check(&fruit));
        }
    }
}
