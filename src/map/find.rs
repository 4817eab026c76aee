//! The two lookup shapes: cursor-based (STL-style) and handle-based.

use super::base::AssocMapCore;
use crate::shape::PairLike;

// =============================================================================
// Cursor shape
// =============================================================================

/// Lookup returning a cursor comparable against `end()`.
///
/// `find` and `end` return the same cursor type; the cursor compares equal to
/// `end()` exactly when the key is missing, and yields a pair-like entry when
/// it is not.
pub trait AssocMapFindStl<K: ?Sized, V>: AssocMapCore<K, V> {
    type Cursor<'a>: Iterator<Item: PairLike> + PartialEq
    where
        Self: 'a;

    fn find(&self, key: &K) -> Self::Cursor<'_>;

    fn end(&self) -> Self::Cursor<'_>;
}

// =============================================================================
// Handle shape
// =============================================================================

/// Lookup returning a handle compared against a separate sentinel type.
///
/// Unlike the cursor shape, the handle need not be an iterator: it only has
/// to compare against `FindEnd::default()` (in both operand orders) and
/// convert into the found entry. Handles borrow from the map, so neither the
/// key nor the value has to be `Clone`.
pub trait AssocMapFindHandle<K: ?Sized, V>: AssocMapCore<K, V> {
    type FindResult<'a>: PartialEq<Self::FindEnd<'a>> + Into<Option<Self::Entry<'a>>>
    where
        Self: 'a;

    type FindEnd<'a>: Default + PartialEq<Self::FindResult<'a>>
    where
        Self: 'a;

    fn find(&self, key: &K) -> Self::FindResult<'_>;
}

/// Borrowed lookup handle: the found pair, or nothing.
#[derive(Debug, PartialEq, Eq)]
pub struct Found<'a, K, V>(Option<(&'a K, &'a V)>);

impl<'a, K, V> Found<'a, K, V> {
    #[inline]
    pub fn hit(key: &'a K, value: &'a V) -> Self {
        Self(Some((key, value)))
    }

    #[inline]
    pub fn miss() -> Self {
        Self(None)
    }

    #[inline]
    pub fn is_miss(&self) -> bool {
        self.0.is_none()
    }

    /// Dereference the handle.
    #[inline]
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        self.0
    }
}

impl<K, V> Clone for Found<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Found<'_, K, V> {}

impl<'a, K, V> From<Option<(&'a K, &'a V)>> for Found<'a, K, V> {
    #[inline]
    fn from(entry: Option<(&'a K, &'a V)>) -> Self {
        Self(entry)
    }
}

impl<'a, K, V> From<Found<'a, K, V>> for Option<(&'a K, &'a V)> {
    #[inline]
    fn from(found: Found<'a, K, V>) -> Self {
        found.0
    }
}

/// Sentinel a [`Found`] miss compares equal to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FindEnd;

impl<K, V> PartialEq<FindEnd> for Found<'_, K, V> {
    #[inline]
    fn eq(&self, _: &FindEnd) -> bool {
        self.is_miss()
    }
}

impl<K, V> PartialEq<Found<'_, K, V>> for FindEnd {
    #[inline]
    fn eq(&self, found: &Found<'_, K, V>) -> bool {
        found.is_miss()
    }
}
