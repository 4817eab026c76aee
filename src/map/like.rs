//! Unified map predicate: core AND (cursor shape OR handle shape).
//!
//! Rust has no overlapping blanket impls, so the OR cannot be an impl for
//! "`AssocMapFindStl` or `AssocMapFindHandle`". Instead each map declares the
//! shapes it supports as type-level booleans through [`FindShape`], and the
//! blanket [`AssocMapLike`] impl requires `Stl::Or<Handle>` to be [`Present`].
//!
//! ```text
//! FindShape { Stl, Handle }
//!        |
//!        |  Stl::Or<Handle> == Present       (at least one shape)
//!        |  Stl::If<StlLookup, HandleLookup> (strategy selection)
//!        v
//! AssocMapLike<K, V> { type Lookup: LookupStrategy<Self, K, V> }
//! ```
//!
//! [`Present`]: crate::Present

use super::base::AssocMapCore;
use super::find::{AssocMapFindHandle, AssocMapFindStl};
use crate::primitives::{Bool, IsPresent};

/// Lookup shapes a map supports.
///
/// The flags are declarations, not derived from the impls: each `Present`
/// flag must be backed by the matching trait impl. When `Stl` is `Present`
/// the map resolves to [`StlLookup`], so a map declaring both flags while
/// implementing only [`AssocMapFindHandle`] does not satisfy
/// [`AssocMapLike`].
///
/// | Implements | `Stl` | `Handle` |
/// |------------|-------|----------|
/// | cursor only | `Present` | `Absent` |
/// | handle only | `Absent` | `Present` |
/// | both | `Present` | `Present` |
pub trait FindShape {
    /// `Present` if the map implements [`AssocMapFindStl`].
    type Stl: Bool;
    /// `Present` if the map implements [`AssocMapFindHandle`].
    type Handle: Bool;
}

/// One canonical lookup operation over either shape.
pub trait LookupStrategy<M: ?Sized, K: ?Sized, V> {
    /// `true` iff `find(key)` does not compare equal to the end marker.
    fn is_found(map: &M, key: &K) -> bool;
}

/// Strategy comparing a cursor against `end()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StlLookup;

/// Strategy comparing a handle against `FindEnd::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleLookup;

impl<M, K, V> LookupStrategy<M, K, V> for StlLookup
where
    M: AssocMapFindStl<K, V> + ?Sized,
    K: ?Sized,
{
    #[inline]
    fn is_found(map: &M, key: &K) -> bool {
        <M as AssocMapFindStl<K, V>>::find(map, key) != map.end()
    }
}

impl<M, K, V> LookupStrategy<M, K, V> for HandleLookup
where
    M: AssocMapFindHandle<K, V> + ?Sized,
    K: ?Sized,
{
    #[inline]
    fn is_found(map: &M, key: &K) -> bool {
        let end: <M as AssocMapFindHandle<K, V>>::FindEnd<'_> = Default::default();
        <M as AssocMapFindHandle<K, V>>::find(map, key) != end
    }
}

/// Strategy a map resolves to. The cursor shape wins when both are declared.
pub type SelectedLookup<M> = <<M as FindShape>::Stl as Bool>::If<StlLookup, HandleLookup>;

/// An associative map with at least one lookup shape.
///
/// Generic code bounded on this accepts std maps (cursor shape) and
/// handle-based views alike; it does not learn which shape is in use.
pub trait AssocMapLike<K: ?Sized, V>: AssocMapCore<K, V> {
    type Lookup: LookupStrategy<Self, K, V>;

    #[inline]
    fn is_found(&self, key: &K) -> bool {
        <Self::Lookup as LookupStrategy<Self, K, V>>::is_found(self, key)
    }
}

impl<M, K, V> AssocMapLike<K, V> for M
where
    M: AssocMapCore<K, V> + FindShape,
    K: ?Sized,
    <M::Stl as Bool>::Or<M::Handle>: IsPresent,
    SelectedLookup<M>: LookupStrategy<M, K, V>,
{
    type Lookup = SelectedLookup<M>;
}
