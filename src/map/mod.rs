//! # Layer 2: Associative maps
//!
//! ```text
//! AssocMapCore<K, V>          traversal, len, contains, at
//!   |-- AssocMapMut<K, V>     at_mut
//!   |-- AssocMapFindStl       find / end -> same cursor type
//!   |-- AssocMapFindHandle    find -> FindResult, FindEnd sentinel
//!   `-- AssocMapLike<K, V>    core + (Stl | Handle), via FindShape
//! ```

pub mod base;
pub mod cursor;
pub mod find;
pub mod like;
mod std_impls;
#[cfg(feature = "alloc")]
pub mod vec_map;

pub use base::{AssocMapCore, AssocMapMut};
pub use cursor::EntryCursor;
pub use find::{AssocMapFindHandle, AssocMapFindStl, FindEnd, Found};
pub use like::{AssocMapLike, FindShape, HandleLookup, LookupStrategy, SelectedLookup, StlLookup};
#[cfg(feature = "alloc")]
pub use vec_map::VecMap;
