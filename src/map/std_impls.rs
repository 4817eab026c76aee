//! Shape impls for the standard maps. Both use the cursor shape.

// =============================================================================
// BTreeMap
// =============================================================================

#[cfg(feature = "alloc")]
mod btree {
    use alloc::collections::{BTreeMap, btree_map};
    use core::borrow::Borrow;

    use crate::map::base::{AssocMapCore, AssocMapMut};
    use crate::map::cursor::EntryCursor;
    use crate::map::find::AssocMapFindStl;
    use crate::map::like::FindShape;
    use crate::primitives::{Absent, Present};

    impl<K, Q, V> AssocMapCore<Q, V> for BTreeMap<K, V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        type Key = K;
        type Entry<'a>
            = (&'a K, &'a V)
        where
            Self: 'a;
        type Entries<'a>
            = btree_map::Iter<'a, K, V>
        where
            Self: 'a;

        #[inline]
        fn entries(&self) -> Self::Entries<'_> {
            self.iter()
        }

        #[inline]
        fn len(&self) -> usize {
            BTreeMap::len(self)
        }

        #[inline]
        fn contains(&self, key: &Q) -> bool {
            self.contains_key(key)
        }

        #[inline]
        fn at(&self, key: &Q) -> Option<&V> {
            self.get(key)
        }
    }

    impl<K, Q, V> AssocMapMut<Q, V> for BTreeMap<K, V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        #[inline]
        fn at_mut(&mut self, key: &Q) -> Option<&mut V> {
            self.get_mut(key)
        }
    }

    impl<K, Q, V> AssocMapFindStl<Q, V> for BTreeMap<K, V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        type Cursor<'a>
            = EntryCursor<'a, K, V>
        where
            Self: 'a;

        #[inline]
        fn find(&self, key: &Q) -> Self::Cursor<'_> {
            self.get_key_value(key).into()
        }

        #[inline]
        fn end(&self) -> Self::Cursor<'_> {
            EntryCursor::end()
        }
    }

    impl<K, V> FindShape for BTreeMap<K, V> {
        type Stl = Present;
        type Handle = Absent;
    }
}

// =============================================================================
// HashMap
// =============================================================================

#[cfg(feature = "std")]
mod hash {
    use core::hash::{BuildHasher, Hash};
    use std::collections::{HashMap, hash_map};
    use core::borrow::Borrow;

    use crate::map::base::{AssocMapCore, AssocMapMut};
    use crate::map::cursor::EntryCursor;
    use crate::map::find::AssocMapFindStl;
    use crate::map::like::FindShape;
    use crate::primitives::{Absent, Present};

    impl<K, Q, V, S> AssocMapCore<Q, V> for HashMap<K, V, S>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: Eq + Hash + ?Sized,
        S: BuildHasher,
    {
        type Key = K;
        type Entry<'a>
            = (&'a K, &'a V)
        where
            Self: 'a;
        type Entries<'a>
            = hash_map::Iter<'a, K, V>
        where
            Self: 'a;

        #[inline]
        fn entries(&self) -> Self::Entries<'_> {
            self.iter()
        }

        #[inline]
        fn len(&self) -> usize {
            HashMap::len(self)
        }

        #[inline]
        fn contains(&self, key: &Q) -> bool {
            self.contains_key(key)
        }

        #[inline]
        fn at(&self, key: &Q) -> Option<&V> {
            self.get(key)
        }
    }

    impl<K, Q, V, S> AssocMapMut<Q, V> for HashMap<K, V, S>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: Eq + Hash + ?Sized,
        S: BuildHasher,
    {
        #[inline]
        fn at_mut(&mut self, key: &Q) -> Option<&mut V> {
            self.get_mut(key)
        }
    }

    impl<K, Q, V, S> AssocMapFindStl<Q, V> for HashMap<K, V, S>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: Eq + Hash + ?Sized,
        S: BuildHasher,
    {
        type Cursor<'a>
            = EntryCursor<'a, K, V>
        where
            Self: 'a;

        #[inline]
        fn find(&self, key: &Q) -> Self::Cursor<'_> {
            self.get_key_value(key).into()
        }

        #[inline]
        fn end(&self) -> Self::Cursor<'_> {
            EntryCursor::end()
        }
    }

    impl<K, V, S> FindShape for HashMap<K, V, S> {
        type Stl = Present;
        type Handle = Absent;
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use crate::map::{AssocMapCore, AssocMapFindStl, AssocMapLike};

    #[test]
    fn test_hash_map_find_matches_contains() {
        let m: HashMap<String, i32> = [("a".to_string(), 1)].into_iter().collect();
        let end = AssocMapFindStl::<str, i32>::end(&m);
        assert!(m.find("a") != end);
        assert!(m.find("b") == end);
        assert_eq!(m.find("a").get(), Some((&"a".to_string(), &1)));
        assert!(AssocMapLike::<str, i32>::is_found(&m, "a"));
        assert!(!AssocMapLike::<str, i32>::is_found(&m, "b"));
    }

    #[test]
    fn test_btree_map_entries_in_key_order() {
        let m: BTreeMap<&str, u8> = [("b", 2), ("a", 1)].into_iter().collect();
        let keys: Vec<&str> = AssocMapCore::<str, u8>::entries(&m).map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(m.at("b"), Some(&2));
        assert!(!m.contains("c"));
    }
}
