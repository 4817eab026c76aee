//! Equality against several candidates.

/// `true` if the value equals any of the candidates.
///
/// Candidates are compared left to right and evaluation stops at the first
/// match. They may have different types as long as the value's type
/// implements `PartialEq` for each of them. At least one candidate is
/// required; `is_in!(x)` does not compile.
///
/// ```
/// use tola_shapes::is_in;
///
/// assert!(is_in!(2, 1, 2, 3));
/// assert!(!is_in!(5, 1, 2, 3));
///
/// let method = String::from("PUT");
/// assert!(is_in!(method, "POST", "PUT"));
/// ```
///
/// A bare value with no candidates is rejected:
///
/// ```compile_fail
/// use tola_shapes::is_in;
///
/// let x = 1;
/// let _ = is_in!(x);
/// ```
#[macro_export]
macro_rules! is_in {
    ($value:expr, $($candidate:expr),+ $(,)?) => {{
        let __probe = &$value;
        false $(|| *__probe == $candidate)+
    }};
}

/// Runtime-list form of [`is_in!`](crate::is_in): `true` if `value` equals
/// any element of `candidates`.
#[inline]
pub fn is_in_slice<T, U>(value: &T, candidates: &[U]) -> bool
where
    T: PartialEq<U> + ?Sized,
{
    candidates.iter().any(|c| value == c)
}
