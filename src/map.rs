//! Ordered mapping type for parsed blocks.
//!
//! [`Map`] wraps an [`IndexMap`] so that keys keep the order in which they
//! appeared in the source. Writing a key that already exists replaces the
//! value but keeps the key at its first position, which is what the JSON
//! output relies on for stable key order.
//!
//! ## Examples
//!
//! ```rust
//! use lightconf::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("universe".to_string(), Value::from(1));
//! map.insert("label".to_string(), Value::from("stage left"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("label").and_then(|v| v.as_str()), Some("stage left"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::mem;

/// An ordered map of string keys to values.
///
/// # Examples
///
/// ```rust
/// use lightconf::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
/// map.insert("first".to_string(), Value::from(3));
///
/// // Overwriting keeps the first position
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// assert_eq!(map.get("first").and_then(|v| v.as_i64()), Some(3));
/// ```
#[derive(Debug, PartialEq, Default)]
pub struct Map(IndexMap<String, crate::Value>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Binds `key` to `value`.
    ///
    /// An existing key keeps its position and its old value is returned.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, shifting later entries down to keep their order.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in source order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Values in source order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Entries in source order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl Serialize for Map {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl IntoIterator for Map {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(mut self) -> Self::IntoIter {
        mem::take(&mut self.0).into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        Map(IndexMap::from_iter(iter))
    }
}

type Entries<'a> = indexmap::map::Iter<'a, String, Value>;

/// Copies nested mappings with an explicit stack instead of recursion.
impl Clone for Map {
    fn clone(&self) -> Self {
        let mut open: Vec<(Entries<'_>, Map, &String)> = Vec::new();
        let mut entries = self.0.iter();
        let mut copy = Map::with_capacity(self.len());

        loop {
            match entries.next() {
                Some((key, Value::Mapping(child))) => {
                    let parent = mem::replace(&mut copy, Map::with_capacity(child.len()));
                    let rest = mem::replace(&mut entries, child.0.iter());
                    open.push((rest, parent, key));
                }
                Some((key, scalar)) => {
                    copy.0.insert(key.clone(), scalar.clone());
                }
                None => match open.pop() {
                    Some((rest, parent, key)) => {
                        let child = mem::replace(&mut copy, parent);
                        copy.0.insert(key.clone(), Value::Mapping(child));
                        entries = rest;
                    }
                    None => return copy,
                },
            }
        }
    }
}

/// Frees nested mappings from a heap stack so dropping a deep document
/// does not grow the call stack.
impl Drop for Map {
    fn drop(&mut self) {
        let mut pending: Vec<Map> = Vec::new();
        take_children(self, &mut pending);
        while let Some(mut map) = pending.pop() {
            take_children(&mut map, &mut pending);
        }
    }
}

fn take_children(map: &mut Map, pending: &mut Vec<Map>) {
    for value in map.0.values_mut() {
        if let Value::Mapping(child) = value {
            if !child.is_empty() {
                pending.push(mem::take(child));
            }
        }
    }
}
