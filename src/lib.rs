#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (HashMap/HashSet impls and aliases)
// - alloc: enables alloc types in no_std (Vec, BTreeMap, String, VecMap)
// - detect: inherent-const shape detection on concrete types

//! # tola-shapes
//!
//! **Structural shape traits for Rust.**
//!
//! Generic code often only cares about the *shape* of a container: "can I
//! walk it twice and index into it?", "can I look a key up in it?". This
//! crate names those shapes as traits, implements them for the std
//! collections, and lets custom containers opt in.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), Never, SameAs                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Shapes                                                  |
//! |  - PairLike, StringViewLike, Numeric, SequenceLike<E>             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Maps                                                    |
//! |  - AssocMapCore, AssocMapFindStl | AssocMapFindHandle             |
//! |  - AssocMapLike = Core & (Stl | Handle)                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Helpers                                                 |
//! |  - str_map_at, is_in!, string-keyed aliases, shape_check!        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Lookup shapes
//!
//! A map qualifies as [`AssocMapLike`] through either of two lookup shapes:
//!
//! - **Cursor** ([`AssocMapFindStl`]): `find(k)` and `end()` return the same
//!   cursor type, compared for equality. The std maps use this shape.
//! - **Handle** ([`AssocMapFindHandle`]): `find(k)` returns a handle
//!   compared against a separate `FindEnd` sentinel. [`VecMap`] uses this
//!   shape.
//!
//! Each map states which shapes it has through [`FindShape`], as type-level
//! booleans; the unified predicate is their type-level OR.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tola_shapes::prelude::*;
//!
//! fn bump<M>(map: &mut M, key: &str) -> Result<(), LookupError>
//! where
//!     M: AssocMapLike<str, u32> + AssocMapMut<str, u32>,
//!     <M as AssocMapCore<str, u32>>::Key: StringViewLike,
//! {
//!     *str_map_at(map, key)? += 1;
//!     Ok(())
//! }
//!
//! let mut counts: UnorderedStrMap<u32> = UnorderedStrMap::default();
//! counts.insert("hits".into(), 0);
//! bump(&mut counts, "hits")?;
//!
//! assert!(is_in!(counts["hits"], 1, 2));
//! assert!(shape_check!(Vec<u8>: SequenceLike<u32> & !Numeric));
//! ```

// Allow `::tola_shapes` paths emitted by the derive to work inside the crate
extern crate self as tola_shapes;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Shapes
// =============================================================================
pub mod shape;

// =============================================================================
// Layer 2: Maps
// =============================================================================
pub mod map;

// =============================================================================
// Layer 3: Helpers
// =============================================================================
pub mod compare;

#[cfg(feature = "alloc")]
pub mod containers;

#[cfg(feature = "alloc")]
pub mod lookup;

#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use compare::is_in_slice;
pub use map::{
    AssocMapCore, AssocMapFindHandle, AssocMapFindStl, AssocMapLike, AssocMapMut, EntryCursor,
    FindEnd, FindShape, Found, HandleLookup, LookupStrategy, SelectedLookup, StlLookup,
};
#[cfg(feature = "alloc")]
pub use map::VecMap;
pub use primitives::{Absent, Bool, IsPresent, Never, Present, SameAs};
pub use shape::{Numeric, PairLike, SequenceLike, StringViewLike};

#[cfg(feature = "alloc")]
pub use containers::{AsciiCaseless, StrMap, StrSet};
#[cfg(feature = "std")]
pub use containers::{UnorderedStrMap, UnorderedStrSet};
#[cfg(feature = "alloc")]
pub use lookup::{LookupError, str_map_at};

// Re-export proc-macros
pub use macros::{PairLike, shape_check};

/// Common items for shape-constrained code.
pub mod prelude {
    pub use crate::map::{
        AssocMapCore, AssocMapFindHandle, AssocMapFindStl, AssocMapLike, AssocMapMut, FindShape,
    };
    pub use crate::shape::{Numeric, PairLike, SequenceLike, StringViewLike};
    pub use crate::{Never, SameAs};

    #[cfg(feature = "alloc")]
    pub use crate::containers::{AsciiCaseless, StrMap, StrSet};
    #[cfg(feature = "std")]
    pub use crate::containers::{UnorderedStrMap, UnorderedStrSet};
    #[cfg(feature = "alloc")]
    pub use crate::lookup::{LookupError, str_map_at};
    #[cfg(feature = "alloc")]
    pub use crate::map::VecMap;

    #[cfg(feature = "detect")]
    pub use crate::detect::{Detect, NumericFallback, StringViewLikeFallback};

    pub use macros::{PairLike, shape_check};
    // Note: is_in! is #[macro_export] so it's at crate root
    pub use crate::is_in;
}
