//! Inherent-const shape detection.
//!
//! For each predicate `P` this module defines:
//! 1. a fallback trait with `const IS_P: bool = false`, implemented for
//!    `Detect<X>` for all X
//! 2. an inherent `const IS_P: bool = true` on `Detect<X>` where `X: P`
//!
//! When resolving `Detect::<Concrete>::IS_P` the inherent const is found
//! first if the bound holds, otherwise the trait const.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! In `fn foo<T>()` the answer is always the fallback. Use
//! [`shape_check!`](crate::shape_check) for predicates with parameters
//! (`SequenceLike<E>`, `AssocMapLike<K, V>`).

use core::marker::PhantomData;

use crate::shape::{Numeric, StringViewLike};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a parameterless predicate.
macro_rules! impl_detect {
    ($($Trait:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc(hidden)]
                pub trait [<$Trait Fallback>] { const [<IS_ $Trait:snake:upper>]: bool = false; }
                impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
                impl<T: ?Sized + $Trait> Detect<T> { pub const [<IS_ $Trait:snake:upper>]: bool = true; }
            )*
        }
    };
}

impl_detect!(Numeric, StringViewLike);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_detection() {
        assert!(Detect::<u8>::IS_NUMERIC);
        assert!(Detect::<f64>::IS_NUMERIC);
        assert!(!Detect::<bool>::IS_NUMERIC);
        assert!(!Detect::<char>::IS_NUMERIC);
    }

    #[test]
    fn test_string_view_detection() {
        assert!(Detect::<str>::IS_STRING_VIEW_LIKE);
        assert!(Detect::<&str>::IS_STRING_VIEW_LIKE);
        assert!(!Detect::<u8>::IS_STRING_VIEW_LIKE);
        #[cfg(feature = "alloc")]
        assert!(Detect::<alloc::string::String>::IS_STRING_VIEW_LIKE);
    }
}
