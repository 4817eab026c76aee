//! Property tests: the invariants every shape implementation must keep.

use std::collections::{BTreeMap, HashMap, VecDeque};

use proptest::prelude::*;
use tola_shapes::prelude::*;
use tola_shapes::{FindEnd, is_in};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Short lowercase keys so probes collide with stored keys often.
fn arb_key() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

fn arb_entries() -> impl Strategy<Value = Vec<(String, u16)>> {
    prop::collection::vec((arb_key(), any::<u16>()), 0..16)
}

fn len_matches_traversal<S: SequenceLike<i64> + ?Sized>(seq: &S) -> bool {
    seq.seq_len() == seq.seq_iter().count() && seq.iter_as().count() == seq.seq_len()
}

fn in_range_converts<S: SequenceLike<i64> + ?Sized>(seq: &S) -> bool {
    (0..seq.seq_len()).all(|i| seq.get_as(i).is_some()) && seq.get_as(seq.seq_len()).is_none()
}

fn contains_iff_at<M: AssocMapCore<str, u16>>(map: &M, key: &str) -> bool {
    map.contains(key) == map.at(key).is_some()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Size equals the number of traversed elements for every std sequence.
    #[test]
    fn sequence_len_equals_traversal(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let deque: VecDeque<i32> = values.iter().copied().collect();
        let boxed: Box<[i32]> = values.clone().into_boxed_slice();
        prop_assert!(len_matches_traversal(&values));
        prop_assert!(len_matches_traversal(&deque));
        prop_assert!(len_matches_traversal(&boxed));
        prop_assert!(len_matches_traversal(values.as_slice()));
    }

    /// Every in-range index converts; one past the end does not.
    #[test]
    fn sequence_indexing_in_range(values in prop::collection::vec(any::<u8>(), 0..32)) {
        prop_assert!(in_range_converts(&values));
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(SequenceLike::<i64>::get_as(&values, i), Some(i64::from(*v)));
        }
    }

    /// contains(k) agrees with a successful at(k), for every map kind.
    #[test]
    fn map_contains_iff_at(entries in arb_entries(), probe in arb_key()) {
        let hash: HashMap<String, u16> = entries.iter().cloned().collect();
        let btree: BTreeMap<String, u16> = entries.iter().cloned().collect();
        let vec: VecMap<String, u16> = entries.iter().cloned().collect();
        prop_assert!(contains_iff_at(&hash, &probe));
        prop_assert!(contains_iff_at(&btree, &probe));
        prop_assert!(contains_iff_at(&vec, &probe));
        for (k, _) in &entries {
            prop_assert!(hash.contains(k.as_str()) && btree.contains(k.as_str()) && vec.contains(k.as_str()));
        }
    }

    /// Cursor shape: find(k) == end() iff the key is missing.
    #[test]
    fn cursor_end_iff_missing(entries in arb_entries(), probe in arb_key()) {
        let hash: HashMap<String, u16> = entries.iter().cloned().collect();
        let btree: BTreeMap<String, u16> = entries.into_iter().collect();
        let hash_end = AssocMapFindStl::<str, u16>::end(&hash);
        let btree_end = AssocMapFindStl::<str, u16>::end(&btree);
        prop_assert_eq!(hash.find(probe.as_str()) == hash_end, !hash.contains(probe.as_str()));
        prop_assert_eq!(btree.find(probe.as_str()) == btree_end, !btree.contains(probe.as_str()));
    }

    /// Handle shape: FindEnd::default() == find(k) iff the key is missing.
    #[test]
    fn handle_sentinel_iff_missing(entries in arb_entries(), probe in arb_key()) {
        let vec: VecMap<String, u16> = entries.into_iter().collect();
        let handle = AssocMapFindHandle::<str, u16>::find(&vec, probe.as_str());
        prop_assert_eq!(FindEnd == handle, !vec.contains(probe.as_str()));
        prop_assert_eq!(handle == FindEnd, !vec.contains(probe.as_str()));
    }

    /// str_map_at hits exactly the stored keys, and writes land in the map.
    #[test]
    fn str_map_at_writes_through(entries in arb_entries(), probe in arb_key(), value in any::<u16>()) {
        let mut map: StrMap<u16> = entries.into_iter().collect();
        let present = map.contains_key(probe.as_str());
        match str_map_at(&mut map, &probe) {
            Ok(slot) => {
                prop_assert!(present);
                *slot = value;
                prop_assert_eq!(map.get(probe.as_str()), Some(&value));
            }
            Err(err) => {
                prop_assert!(!present);
                prop_assert_eq!(err.key(), probe.as_str());
            }
        }
    }

    /// is_in! agrees with a linear scan.
    #[test]
    fn is_in_matches_any(x in 0u8..6, a in 0u8..6, b in 0u8..6, c in 0u8..6) {
        prop_assert_eq!(is_in!(x, a, b, c), [a, b, c].contains(&x));
    }
}
