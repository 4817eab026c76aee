//! Pair-like values: anything with a first and a second component.

/// A value exposing two named components.
///
/// Tuples of two elements implement this directly. Structs with exactly two
/// fields can use `#[derive(PairLike)]`; the first declared field becomes
/// `First`, the second becomes `Second`.
pub trait PairLike {
    type First;
    type Second;

    fn first(&self) -> &Self::First;
    fn second(&self) -> &Self::Second;

    /// Split into the two components.
    fn into_pair(self) -> (Self::First, Self::Second)
    where
        Self: Sized;
}

impl<A, B> PairLike for (A, B) {
    type First = A;
    type Second = B;

    #[inline]
    fn first(&self) -> &A {
        &self.0
    }

    #[inline]
    fn second(&self) -> &B {
        &self.1
    }

    #[inline]
    fn into_pair(self) -> (A, B) {
        self
    }
}
