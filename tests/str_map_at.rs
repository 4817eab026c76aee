//! Tests for `str_map_at` over every map shape that supports mutation.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use tola_shapes::prelude::*;

fn bump<M>(map: &mut M, key: &str) -> Result<u32, LookupError>
where
    M: AssocMapLike<str, u32> + AssocMapMut<str, u32>,
    <M as AssocMapCore<str, u32>>::Key: StringViewLike,
{
    let slot = str_map_at(map, key)?;
    *slot += 1;
    Ok(*slot)
}

#[test]
fn test_mutation_visible_in_hash_map() {
    let mut m: HashMap<String, u32> = HashMap::new();
    m.insert("k".into(), 1);
    *str_map_at(&mut m, "k").unwrap() = 40;
    assert_eq!(bump(&mut m, "k"), Ok(41));
    assert_eq!(m["k"], 41);
}

#[test]
fn test_mutation_visible_in_btree_map() {
    let mut m: BTreeMap<String, u32> = BTreeMap::new();
    m.insert("k".into(), 0);
    bump(&mut m, "k").unwrap();
    bump(&mut m, "k").unwrap();
    assert_eq!(m.get("k"), Some(&2));
}

#[test]
fn test_mutation_visible_in_vec_map() {
    let mut m: VecMap<String, u32> = VecMap::new();
    m.insert("k".into(), 5);
    assert_eq!(bump(&mut m, "k"), Ok(6));
    assert_eq!(m.get("k"), Some(&6));
}

#[test]
fn test_missing_key_is_reported() {
    let mut hash: HashMap<String, u32> = HashMap::new();
    let mut vec: VecMap<String, u32> = VecMap::new();

    let err = bump(&mut hash, "missing").unwrap_err();
    assert_eq!(err, LookupError::NotFound { key: "missing".into() });
    assert_eq!(err.key(), "missing");

    let err = bump(&mut vec, "missing").unwrap_err();
    assert_eq!(err.to_string(), "key not found: \"missing\"");
}

#[test]
fn test_string_like_probes_and_keys() {
    let mut m: BTreeMap<&str, String> = BTreeMap::new();
    m.insert("greeting", "hi".into());

    let owned = String::from("greeting");
    let cow: Cow<'_, str> = Cow::Borrowed("greeting");
    let boxed: Box<str> = "greeting".into();

    str_map_at(&mut m, &owned).unwrap().push('!');
    str_map_at(&mut m, &cow).unwrap().push('!');
    str_map_at(&mut m, &boxed).unwrap().push('!');
    assert_eq!(m["greeting"], "hi!!!");
}

#[test]
fn test_miss_leaves_map_untouched() {
    let mut m: StrMap<u32> = StrMap::new();
    m.insert("a".into(), 1);
    assert!(str_map_at(&mut m, "b").is_err());
    assert_eq!(m.len(), 1);
    assert!(!m.contains_key("b"));
}

#[test]
fn test_vec_map_with_non_clone_values() {
    #[derive(Debug, Default)]
    struct Buffer {
        bytes: Vec<u8>,
    }

    let mut m: VecMap<String, Buffer> = VecMap::new();
    m.insert("log".into(), Buffer::default());
    str_map_at(&mut m, "log").unwrap().bytes.extend_from_slice(b"ok");
    assert_eq!(m.get("log").map(|b| b.bytes.as_slice()), Some(&b"ok"[..]));
    assert_eq!(
        str_map_at(&mut m, "trace").unwrap_err(),
        LookupError::NotFound { key: "trace".into() }
    );
}
