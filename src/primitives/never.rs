//! The uninhabited marker type.

use core::fmt;

/// A type with no values.
///
/// Used as a placeholder in generic code where a slot must be filled but
/// can never be reached, e.g. an error type for an infallible path.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Never {}

impl Never {
    /// Coerce to any type. Unreachable by construction.
    #[inline(always)]
    pub fn absurd<T>(self) -> T {
        match self {}
    }
}

impl fmt::Debug for Never {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Display for Never {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl core::error::Error for Never {}
