//! Tests for the string-keyed container aliases.

use std::collections::hash_map::DefaultHasher;
use std::hash::BuildHasherDefault;
use std::ops::Bound;

use tola_shapes::prelude::*;

type Deterministic = BuildHasherDefault<DefaultHasher>;

#[test]
fn test_unordered_map_default_policy() {
    let mut m: UnorderedStrMap<i32> = UnorderedStrMap::new();
    m.insert("a".to_string(), 1);
    assert_eq!(m.get("a"), Some(&1));
    assert_eq!(m.insert("a".to_string(), 2), Some(1));
    assert_eq!(m.len(), 1);
}

#[test]
fn test_unordered_map_custom_hasher() {
    let mut m: UnorderedStrMap<i32, String, Deterministic> = UnorderedStrMap::default();
    m.insert("x".into(), 9);
    assert_eq!(m["x"], 9);
    assert!(m.is_found("x"));
}

#[test]
fn test_ordered_map_iterates_sorted() {
    let m: StrMap<u8> = [("b".to_string(), 2), ("a".to_string(), 1), ("c".to_string(), 3)].into();
    let keys: Vec<&str> = m.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b", "c"]);
    let tail: Vec<u8> = m
        .range::<str, _>((Bound::Included("b"), Bound::Unbounded))
        .map(|(_, v)| *v)
        .collect();
    assert_eq!(tail, [2, 3]);
}

#[test]
fn test_ordered_map_caseless_policy() {
    let mut m: StrMap<u8, AsciiCaseless> = StrMap::new();
    m.insert("Content-Type".into(), 1);
    m.insert("content-type".into(), 2);
    assert_eq!(m.len(), 1);
    assert_eq!(m.get(&AsciiCaseless::from("CONTENT-TYPE")), Some(&2));
    // first spelling is kept as the key
    assert_eq!(m.keys().next().map(AsciiCaseless::as_str), Some("Content-Type"));
}

#[test]
fn test_sets() {
    let mut ordered: StrSet = StrSet::new();
    ordered.insert("z".into());
    ordered.insert("a".into());
    assert_eq!(ordered.first().map(String::as_str), Some("a"));
    assert!(ordered.contains("z"));

    let mut unordered: UnorderedStrSet = UnorderedStrSet::new();
    assert!(unordered.insert("k".into()));
    assert!(!unordered.insert("k".into()));

    let mut caseless: UnorderedStrSet<AsciiCaseless, Deterministic> = UnorderedStrSet::default();
    caseless.insert("Key".into());
    assert!(caseless.contains(&AsciiCaseless::from("kEY")));
}

#[test]
fn test_aliases_are_the_std_types() {
    fn same<A: SameAs<B>, B>() {}
    same::<StrMap<u8>, std::collections::BTreeMap<String, u8>>();
    same::<UnorderedStrSet, std::collections::HashSet<String>>();
}
