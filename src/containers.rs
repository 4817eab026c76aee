//! String-keyed container aliases.
//!
//! Each alias is the plain std container with a string key, so mutation,
//! iteration order, and complexity are exactly those of the underlying type.
//! Policies are substituted through the type parameters:
//!
//! | Alias | Equality / ordering | Hashing |
//! |-------|---------------------|---------|
//! | `UnorderedStrMap<T, K, S>` | `K: Eq + Hash` | `S: BuildHasher` |
//! | `StrMap<T, K>` | `K: Ord` | - |
//! | `StrSet<K>` | `K: Ord` | - |
//! | `UnorderedStrSet<K, S>` | `K: Eq + Hash` | `S: BuildHasher` |
//!
//! With the default `K = String`, lookups accept `&str` directly.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet, hash_map::RandomState};

use crate::shape::StringViewLike;

/// Unordered map from strings to `T`.
#[cfg(feature = "std")]
pub type UnorderedStrMap<T, K = String, S = RandomState> = HashMap<K, T, S>;

/// Ordered map from strings to `T`.
pub type StrMap<T, K = String> = BTreeMap<K, T>;

/// Ordered string set.
pub type StrSet<K = String> = BTreeSet<K>;

/// Unordered string set.
#[cfg(feature = "std")]
pub type UnorderedStrSet<K = String, S = RandomState> = HashSet<K, S>;

// =============================================================================
// AsciiCaseless policy key
// =============================================================================

/// String key that compares, orders, and hashes ignoring ASCII case.
///
/// Plug it in as the `K` parameter of any alias above. The original spelling
/// is kept for display. It does not implement `Borrow<str>`, since `str`
/// compares case-sensitively; look up through `AsciiCaseless::from`.
#[derive(Clone, Default)]
pub struct AsciiCaseless(String);

impl AsciiCaseless {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    fn folded(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b.to_ascii_lowercase())
    }
}

impl PartialEq for AsciiCaseless {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for AsciiCaseless {}

impl PartialOrd for AsciiCaseless {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AsciiCaseless {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl Hash for AsciiCaseless {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.folded() {
            state.write_u8(b);
        }
        // terminator, same as `str`
        state.write_u8(0xff);
    }
}

impl fmt::Debug for AsciiCaseless {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for AsciiCaseless {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AsciiCaseless {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for AsciiCaseless {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl StringViewLike for AsciiCaseless {
    fn as_str_view(&self) -> &str {
        &self.0
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_caseless_ordering_groups_spellings() {
        let mut set: StrSet<AsciiCaseless> = StrSet::new();
        assert!(set.insert("Beta".into()));
        assert!(set.insert("alpha".into()));
        assert!(!set.insert("ALPHA".into()));
        let order: Vec<&str> = set.iter().map(AsciiCaseless::as_str).collect();
        assert_eq!(order, ["alpha", "Beta"]);
    }

    #[test]
    fn test_caseless_hash_agrees_with_eq() {
        let mut m: UnorderedStrMap<u8, AsciiCaseless> = UnorderedStrMap::default();
        m.insert("Key".into(), 1);
        assert_eq!(m.get(&AsciiCaseless::from("KEY")), Some(&1));
        assert_eq!(m.len(), 1);
    }
}
