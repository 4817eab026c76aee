//! Sequence predicate: multi-pass traversal, size, and indexed access.

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, collections::VecDeque, vec::Vec};

/// A sequence whose elements convert into `E`.
///
/// Holds for a type that can be traversed repeatedly (`Iter` is `Clone`),
/// reports its length, and supports indexed access. Methods are `seq_`
/// prefixed; the inherent `iter`/`len` of slices and arrays stay unambiguous. The stored element type
/// must be convertible to the nominated element type `E`, so
/// `Vec<i32>: SequenceLike<i64>` holds while `Vec<i64>: SequenceLike<i32>`
/// does not.
///
/// ```
/// use tola_shapes::SequenceLike;
///
/// fn total<S: SequenceLike<i64> + ?Sized>(seq: &S) -> i64 {
///     seq.iter_as().sum()
/// }
///
/// assert_eq!(total(&vec![1i32, 2, 3]), 6);
/// assert_eq!(total(&[4u8, 5][..]), 9);
/// ```
pub trait SequenceLike<E> {
    /// Stored element type.
    type Elem: Clone + Into<E>;

    /// Forward iterator; `Clone` makes it multi-pass.
    type Iter<'a>: Iterator<Item = &'a Self::Elem> + Clone
    where
        Self: 'a,
        Self::Elem: 'a;

    fn seq_iter(&self) -> Self::Iter<'_>;

    fn seq_len(&self) -> usize;

    #[inline]
    fn seq_is_empty(&self) -> bool {
        self.seq_len() == 0
    }

    /// Element at `index`, or `None` past the end.
    fn seq_at(&self, index: usize) -> Option<&Self::Elem>;

    /// Element at `index`, converted to `E`.
    #[inline]
    fn get_as(&self, index: usize) -> Option<E> {
        self.seq_at(index).cloned().map(Into::into)
    }

    /// Traverse, converting every element to `E`.
    #[inline]
    fn iter_as<'a>(&'a self) -> impl Iterator<Item = E>
    where
        Self::Elem: 'a,
    {
        self.seq_iter().cloned().map(Into::into)
    }
}

impl<T: Clone + Into<E>, E> SequenceLike<E> for [T] {
    type Elem = T;
    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn seq_iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    #[inline]
    fn seq_len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn seq_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T: Clone + Into<E>, E, const N: usize> SequenceLike<E> for [T; N] {
    type Elem = T;
    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn seq_iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    #[inline]
    fn seq_len(&self) -> usize {
        N
    }

    #[inline]
    fn seq_at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

#[cfg(feature = "alloc")]
impl<T: Clone + Into<E>, E> SequenceLike<E> for Vec<T> {
    type Elem = T;
    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn seq_iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    #[inline]
    fn seq_len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn seq_at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

#[cfg(feature = "alloc")]
impl<T: Clone + Into<E>, E> SequenceLike<E> for Box<[T]> {
    type Elem = T;
    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn seq_iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    #[inline]
    fn seq_len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn seq_at(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

#[cfg(feature = "alloc")]
impl<T: Clone + Into<E>, E> SequenceLike<E> for VecDeque<T> {
    type Elem = T;
    type Iter<'a>
        = alloc::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn seq_iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    #[inline]
    fn seq_len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn seq_at(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}
