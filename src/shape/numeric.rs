//! Numeric predicate: primitive integers and floats.
//!
//! `bool` and `char` are deliberately outside this set.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Arithmetic primitive types.
pub trait Numeric:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const IS_FLOAT: bool;
    const IS_SIGNED: bool;
}

macro_rules! impl_numeric {
    (int $signed:literal: $($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const IS_FLOAT: bool = false;
                const IS_SIGNED: bool = $signed;
            }
        )*
    };
    (float: $($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const IS_FLOAT: bool = true;
                const IS_SIGNED: bool = true;
            }
        )*
    };
}

impl_numeric!(int true: i8, i16, i32, i64, i128, isize);
impl_numeric!(int false: u8, u16, u32, u64, u128, usize);
impl_numeric!(float: f32, f64);

#[cfg(test)]
mod tests {
    use super::Numeric;

    fn sum<N: Numeric>(values: &[N]) -> N {
        values.iter().fold(N::ZERO, |acc, &v| acc + v)
    }

    #[test]
    fn test_generic_sum() {
        assert_eq!(sum(&[1u8, 2, 3]), 6);
        assert_eq!(sum(&[0.5f64, 0.25]), 0.75);
        assert_eq!(sum::<i64>(&[]), 0);
    }

    #[test]
    fn test_flags() {
        assert!(f32::IS_FLOAT);
        assert!(!u64::IS_SIGNED);
        assert!(i8::IS_SIGNED);
        assert_eq!(usize::ONE, 1);
    }
}
