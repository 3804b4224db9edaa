//! Serde support for [`Collection`].
//!
//! Lists (keys exactly `0..n`) serialize as sequences, every other collection
//! as a map holding the value of the last entry for each key. Sequences
//! deserialize into index-keyed collections, maps keep their keys and order.

use rustc_hash::FxHashMap;
use serde::de::{Error as _, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use super::{Collection, CollectionKey};

const MAX_PREALLOCATE: usize = 4096;

impl<K, V> Serialize for Collection<K, V>
where
    K: CollectionKey + Eq + Hash + Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for (_, value) in self {
                seq.serialize_element(value)?;
            }
            return seq.end();
        }
        let mut positions: FxHashMap<&K, usize> = FxHashMap::default();
        let mut unique: Vec<(&K, &V)> = Vec::with_capacity(self.len());
        for (key, value) in self {
            if let Some(&position) = positions.get(key) {
                unique[position].1 = value;
            } else {
                positions.insert(key, unique.len());
                unique.push((key, value));
            }
        }
        let mut map = serializer.serialize_map(Some(unique.len()))?;
        for (key, value) in unique {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct CollectionVisitor<K, V> {
    marker: PhantomData<(K, V)>,
}

impl<'de, K, V> Visitor<'de> for CollectionVisitor<K, V>
where
    K: CollectionKey + Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = Collection<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence or a map")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut entries = Vec::with_capacity(capacity);
        while let Some(value) = seq.next_element()? {
            let key = K::from_index(entries.len()).ok_or_else(|| {
                A::Error::custom("a sequence needs an index-like key type")
            })?;
            entries.push((key, value));
        }
        Ok(Collection::from_entries(entries))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let capacity = map.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut entries = Vec::with_capacity(capacity);
        while let Some(entry) = map.next_entry()? {
            entries.push(entry);
        }
        Ok(Collection::from_entries(entries))
    }
}

impl<'de, K, V> Deserialize<'de> for Collection<K, V>
where
    K: CollectionKey + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CollectionVisitor {
            marker: PhantomData,
        })
    }
}
