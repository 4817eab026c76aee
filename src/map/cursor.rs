//! Point cursor returned by cursor-style `find`.

use core::fmt;
use core::ptr;

/// Cursor at a single map entry, or at the end.
///
/// Two cursors are equal when both are at the end, or both point at the
/// same stored entry. As an iterator it yields its entry once; the end
/// cursor yields nothing.
pub struct EntryCursor<'a, K, V> {
    slot: Option<(&'a K, &'a V)>,
}

impl<'a, K, V> EntryCursor<'a, K, V> {
    /// Cursor positioned at an entry.
    #[inline]
    pub fn at(key: &'a K, value: &'a V) -> Self {
        Self { slot: Some((key, value)) }
    }

    /// The end cursor.
    #[inline]
    pub fn end() -> Self {
        Self { slot: None }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.slot.is_none()
    }

    /// Dereference. `None` for the end cursor.
    #[inline]
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        self.slot
    }

    #[inline]
    pub fn key(&self) -> Option<&'a K> {
        self.slot.map(|(k, _)| k)
    }

    #[inline]
    pub fn value(&self) -> Option<&'a V> {
        self.slot.map(|(_, v)| v)
    }
}

impl<'a, K, V> From<Option<(&'a K, &'a V)>> for EntryCursor<'a, K, V> {
    #[inline]
    fn from(slot: Option<(&'a K, &'a V)>) -> Self {
        Self { slot }
    }
}

impl<K, V> Clone for EntryCursor<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for EntryCursor<'_, K, V> {}

impl<K, V> PartialEq for EntryCursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self.slot, other.slot) {
            (None, None) => true,
            (Some((a, _)), Some((b, _))) => ptr::eq(a, b),
            _ => false,
        }
    }
}

impl<K, V> Eq for EntryCursor<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for EntryCursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Some((k, v)) => f.debug_tuple("EntryCursor").field(k).field(v).finish(),
            None => f.write_str("EntryCursor(end)"),
        }
    }
}

impl<'a, K, V> Iterator for EntryCursor<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slot.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.slot.is_some());
        (n, Some(n))
    }
}

impl<K, V> ExactSizeIterator for EntryCursor<'_, K, V> {}

impl<K, V> core::iter::FusedIterator for EntryCursor<'_, K, V> {}
