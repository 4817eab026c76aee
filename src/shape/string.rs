//! String view predicate.

#[cfg(feature = "alloc")]
use alloc::{borrow::Cow, boxed::Box, string::String};

/// Types that can be viewed as `&str` without conversion.
///
/// Covers the owned string and the string slice, plus the usual smart
/// pointers around them and references to any of these.
pub trait StringViewLike {
    fn as_str_view(&self) -> &str;
}

impl StringViewLike for str {
    #[inline]
    fn as_str_view(&self) -> &str {
        self
    }
}

impl<T: StringViewLike + ?Sized> StringViewLike for &T {
    #[inline]
    fn as_str_view(&self) -> &str {
        (**self).as_str_view()
    }
}

impl<T: StringViewLike + ?Sized> StringViewLike for &mut T {
    #[inline]
    fn as_str_view(&self) -> &str {
        (**self).as_str_view()
    }
}

#[cfg(feature = "alloc")]
impl StringViewLike for String {
    #[inline]
    fn as_str_view(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "alloc")]
impl StringViewLike for Box<str> {
    #[inline]
    fn as_str_view(&self) -> &str {
        self
    }
}

#[cfg(feature = "alloc")]
impl StringViewLike for Cow<'_, str> {
    #[inline]
    fn as_str_view(&self) -> &str {
        self
    }
}
