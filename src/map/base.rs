//! Map core predicate: traversal, size, containment, and lookup by key.

use crate::shape::PairLike;

/// The part of an associative map every lookup shape shares.
///
/// `K` is the probe key type and may be unsized: a `HashMap<String, V>`
/// implements both `AssocMapCore<String, V>` and `AssocMapCore<str, V>`,
/// mirroring `Borrow`-based lookups on std maps.
///
/// Entries only need to be [`PairLike`]; nothing requires them to be tuples.
pub trait AssocMapCore<K: ?Sized, V> {
    /// Stored key type.
    type Key;

    type Entry<'a>: PairLike
    where
        Self: 'a;

    /// Single-pass traversal over all entries.
    type Entries<'a>: Iterator<Item = Self::Entry<'a>>
    where
        Self: 'a;

    fn entries(&self) -> Self::Entries<'_>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: &K) -> bool;

    /// Value stored under `key`.
    fn at(&self, key: &K) -> Option<&V>;
}

/// Mutable lookup on top of [`AssocMapCore`].
pub trait AssocMapMut<K: ?Sized, V>: AssocMapCore<K, V> {
    fn at_mut(&mut self, key: &K) -> Option<&mut V>;
}
