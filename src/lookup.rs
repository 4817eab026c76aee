//! Bounds-checked lookup on string-keyed maps.

use alloc::string::{String, ToString};

use crate::map::{AssocMapCore, AssocMapLike, AssocMapMut};
use crate::shape::StringViewLike;

/// Errors from map lookups.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Gets returned when the probed key is not in the map.
    #[error("key not found: {key:?}")]
    NotFound { key: String },
}

impl LookupError {
    /// The key that was looked up.
    pub fn key(&self) -> &str {
        match self {
            LookupError::NotFound { key } => key,
        }
    }
}

/// Mutable reference to the value stored under `key`.
///
/// Accepts any map with a lookup shape whose stored keys are string-like,
/// probed by any string-like key. The borrow of the value is tied to the
/// borrow of the map.
///
/// ```
/// use std::collections::HashMap;
/// use tola_shapes::{LookupError, str_map_at};
///
/// let mut m: HashMap<String, i32> = HashMap::new();
/// m.insert("a".into(), 1);
///
/// *str_map_at(&mut m, "a")? += 1;
/// assert_eq!(m["a"], 2);
///
/// let err = str_map_at(&mut m, "missing").unwrap_err();
/// assert_eq!(err.key(), "missing");
/// # Ok::<(), LookupError>(())
/// ```
///
/// Types without a lookup shape are rejected, sequences included:
///
/// ```compile_fail
/// use tola_shapes::str_map_at;
///
/// let mut v = vec![1, 2, 3];
/// let _ = str_map_at(&mut v, "a");
/// ```
///
/// So are maps whose keys are not string-like:
///
/// ```compile_fail
/// use std::collections::HashMap;
/// use tola_shapes::str_map_at;
///
/// let mut m: HashMap<u32, u32> = HashMap::new();
/// let _ = str_map_at(&mut m, "a");
/// ```
pub fn str_map_at<'m, M, V, Q>(map: &'m mut M, key: &Q) -> Result<&'m mut V, LookupError>
where
    M: AssocMapLike<str, V> + AssocMapMut<str, V>,
    <M as AssocMapCore<str, V>>::Key: StringViewLike,
    Q: StringViewLike + ?Sized,
{
    let probe = key.as_str_view();
    match map.at_mut(probe) {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(key = probe, "str_map_at: key not found");
            Err(not_found(probe))
        }
    }
}

fn not_found(key: &str) -> LookupError {
    LookupError::NotFound { key: key.to_string() }
}
