//! Partial isomorphisms between a domain type and a wire shape.
//!
//! A `PartialIso<A, B>` is a pair of pure partial functions:
//!
//! ```text
//! forward:  &A → Option<B>      (print path: domain value toward the wire)
//! backward: &B → Option<A>      (parse path: wire value toward the domain)
//! ```
//!
//! The two directions are expected to be mutual inverses on the subset of
//! inputs where each succeeds, the *round-trip law*:
//!
//! ```text
//! forward(a) == Some(b)   ⇒   backward(b) == Some(a)
//! backward(b) == Some(a)  ⇒   forward(a) == Some(b)
//! ```
//!
//! The law is a convention, not a mechanically enforced property: the kernel
//! trusts every constructor. A violation is a caller bug, not a detected
//! runtime error. The `partiso-conform` crate can check the law over sample
//! inputs in test harnesses.
//!
//! An absent result is the only failure channel, uniformly meaning "no valid
//! transformation for this input." No combinator panics for a well-typed
//! input, and composition propagates absence from any stage with no partial
//! output synthesized from the successful prefix.

use std::fmt;
use std::sync::Arc;

/// An invertible partial transformation between `A` and `B`.
///
/// Immutable once built. The captured functions are shared, never mutated;
/// composite isomorphisms hold their own handles to the constituents and
/// share no mutable state, so any caller may run both directions of the
/// same value concurrently without coordination (the `Send + Sync` bounds
/// on the captured closures make that explicit).
pub struct PartialIso<A, B> {
    forward: Arc<dyn Fn(&A) -> Option<B> + Send + Sync>,
    backward: Arc<dyn Fn(&B) -> Option<A> + Send + Sync>,
}

impl<A, B> Clone for PartialIso<A, B> {
    fn clone(&self) -> Self {
        Self {
            forward: Arc::clone(&self.forward),
            backward: Arc::clone(&self.backward),
        }
    }
}

impl<A, B> fmt::Debug for PartialIso<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialIso").finish_non_exhaustive()
    }
}

impl<A, B> PartialIso<A, B> {
    /// Build an isomorphism from its two directions.
    ///
    /// The caller is responsible for the round-trip law; nothing here
    /// verifies it.
    pub fn new(
        forward: impl Fn(&A) -> Option<B> + Send + Sync + 'static,
        backward: impl Fn(&B) -> Option<A> + Send + Sync + 'static,
    ) -> Self {
        Self {
            forward: Arc::new(forward),
            backward: Arc::new(backward),
        }
    }

    /// Run the forward direction: project a domain value toward the wire.
    ///
    /// `None` means this isomorphism does not apply to `a`, e.g. extracting
    /// an integer from a union case that doesn't match.
    pub fn forward(&self, a: &A) -> Option<B> {
        (self.forward)(a)
    }

    /// Run the backward direction: lift a wire value into the domain.
    ///
    /// `None` means `b` cannot produce this domain shape.
    pub fn backward(&self, b: &B) -> Option<A> {
        (self.backward)(b)
    }

    /// Swap the two directions.
    ///
    /// An involution: `x.clone().invert().invert()` behaves identically
    /// to `x` in both directions.
    pub fn invert(self) -> PartialIso<B, A> {
        PartialIso {
            forward: self.backward,
            backward: self.forward,
        }
    }

    /// Left-to-right sequential composition: `self` then `rhs`.
    ///
    /// Forward runs `self.forward` then, if present, `rhs.forward` on the
    /// intermediate. Backward mirrors in reverse stage order. Any absent
    /// intermediate short-circuits the whole chain to absent.
    pub fn pipe<C>(self, rhs: PartialIso<B, C>) -> PartialIso<A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        let Self {
            forward: lf,
            backward: lb,
        } = self;
        let PartialIso {
            forward: rf,
            backward: rb,
        } = rhs;
        PartialIso {
            forward: Arc::new(move |a: &A| lf(a).and_then(|b| rf(&b))),
            backward: Arc::new(move |c: &C| rb(c).and_then(|b| lb(&b))),
        }
    }

    /// Mathematical composition order: `self ∘ rhs`.
    ///
    /// `lhs.compose(rhs)` is observationally identical to `rhs.pipe(lhs)`
    /// for all inputs; it is derived from `pipe`, not reimplemented.
    /// Offered for call sites that read right-to-left.
    pub fn compose<A0>(self, rhs: PartialIso<A0, A>) -> PartialIso<A0, B>
    where
        A0: 'static,
        A: 'static,
        B: 'static,
    {
        rhs.pipe(self)
    }

    /// First-match-wins alternative: try `self`, fall back to `other`.
    ///
    /// Both directions try `self` first and `other` only on absence. When
    /// the alternatives overlap, upholding the round-trip law across the
    /// pair is a caller obligation, same as for hand-written isomorphisms.
    pub fn or_else(self, other: Self) -> Self
    where
        A: 'static,
        B: 'static,
    {
        let Self {
            forward: f1,
            backward: b1,
        } = self;
        let Self {
            forward: f2,
            backward: b2,
        } = other;
        Self {
            forward: Arc::new(move |a: &A| f1(a).or_else(|| f2(a))),
            backward: Arc::new(move |b: &B| b1(b).or_else(|| b2(b))),
        }
    }

    /// The isomorphism that is absent on every input, in both directions.
    ///
    /// Neutral element of [`PartialIso::or_else`].
    pub fn never() -> Self
    where
        A: 'static,
        B: 'static,
    {
        Self::new(|_: &A| None, |_: &B| None)
    }

    /// Fold an ordered sequence of alternatives, first match wins.
    ///
    /// An explicit left-to-right fold of [`PartialIso::or_else`] seeded
    /// with [`PartialIso::never`]: earlier alternatives take precedence in
    /// both directions, and the empty sequence is absent everywhere.
    pub fn first_of<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        A: 'static,
        B: 'static,
    {
        alternatives.into_iter().fold(Self::never(), Self::or_else)
    }

    /// Isomorphism for one variant of a tagged union.
    ///
    /// `inject` is the variant's constructor (total: forward always
    /// succeeds). `project` inspects the tag and returns the payload only
    /// when the value is that variant, absent for every other variant.
    ///
    /// One call per variant replaces per-variant hand-written pairs:
    ///
    /// ```text
    /// PartialIso::case(Route::Episode, |r| match r {
    ///     Route::Episode(id) => Some(*id),
    ///     _ => None,
    /// })
    /// ```
    pub fn case(
        inject: impl Fn(A) -> B + Send + Sync + 'static,
        project: impl Fn(&B) -> Option<A> + Send + Sync + 'static,
    ) -> Self
    where
        A: Clone,
    {
        Self::new(move |a: &A| Some(inject(a.clone())), project)
    }
}

impl<A: Clone + 'static> PartialIso<A, A> {
    /// The identity isomorphism.
    ///
    /// Both directions return the input unchanged, always present.
    /// Two-sided neutral element of [`PartialIso::pipe`].
    pub fn identity() -> Self {
        Self::new(|a: &A| Some(a.clone()), |a: &A| Some(a.clone()))
    }
}

impl<A: Clone + 'static> PartialIso<A, (A, ())> {
    /// Embed a value into a pair with the unit value.
    ///
    /// Forward yields `(a, ())`; backward projects the first component.
    /// Total in both directions. Seeds tuple-building chains for routes
    /// with no leading captured value.
    pub fn unit() -> Self {
        Self::new(
            |a: &A| Some((a.clone(), ())),
            |pair: &(A, ())| Some(pair.0.clone()),
        )
    }
}

impl<A: Clone + 'static, B: Clone + 'static> PartialIso<(A, B), (B, A)> {
    /// Swap the components of a pair.
    ///
    /// The same swap in both directions, always present, self-inverse:
    /// `commute().invert()` behaves identically to `commute()`.
    pub fn commute() -> Self {
        Self::new(
            |pair: &(A, B)| Some((pair.1.clone(), pair.0.clone())),
            |pair: &(B, A)| Some((pair.1.clone(), pair.0.clone())),
        )
    }
}

impl<B: Clone + PartialEq + 'static + Send + Sync> PartialIso<(), B> {
    /// Embed a fixed value, capturing nothing.
    ///
    /// Forward always yields `b`; backward yields unit exactly when the
    /// input equals `b`. Used for routes whose domain value carries no
    /// data, e.g. a bare home route.
    pub fn constant(b: B) -> Self {
        let embedded = b.clone();
        Self::new(
            move |_: &()| Some(embedded.clone()),
            move |candidate: &B| (*candidate == b).then_some(()),
        )
    }
}
