//! Type equality predicate.

/// Holds iff `Self` and `T` are the same type.
///
/// ```
/// use tola_shapes::SameAs;
///
/// fn same<A: SameAs<B>, B>() {}
/// same::<u8, u8>();
/// ```
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}
