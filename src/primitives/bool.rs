//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! Map types declare which lookup shapes they support as `Bool`s
//! (see [`FindShape`](crate::map::FindShape)); the unified map predicate
//! is the type-level `Or` of those two flags.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;
    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical OR
    type Or<Other: Bool>: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type Or<Other: Bool> = Present;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type Or<Other: Bool> = Other;
}

/// Implemented only by [`Present`].
///
/// Used as a where-clause bound to require that a type-level expression
/// evaluates to true.
pub trait IsPresent: Bool {}

impl IsPresent for Present {}
