//! Grouping: `group_by`, `group_by_preserving_keys` and `group_by_field`.
//!
//! Groups are emitted in the order their key is first seen and hold entries
//! in source order. Group keys are compared with their own `Eq`/`Hash`, so a
//! selector that lowercases produces different groups from one that does not.

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::Collection;

/// Record-like values whose named fields can select a group.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection::Fields;
/// use std::collections::HashMap;
///
/// let person = HashMap::from([("name", "Ivriel"), ("department", "IT")]);
/// assert_eq!(person.field("department"), Some("IT"));
/// assert_eq!(person.field("salary"), None);
/// ```
pub trait Fields {
    /// The type of a field value.
    type Field;

    /// Returns the value of the field called `name`, if present.
    fn field(&self, name: &str) -> Option<Self::Field>;
}

impl<K, T, S> Fields for HashMap<K, T, S>
where
    K: Borrow<str> + Eq + Hash,
    T: Clone,
    S: BuildHasher,
{
    type Field = T;

    fn field(&self, name: &str) -> Option<T> {
        self.get(name).cloned()
    }
}

impl<K, T> Fields for BTreeMap<K, T>
where
    K: Borrow<str> + Ord,
    T: Clone,
{
    type Field = T;

    fn field(&self, name: &str) -> Option<T> {
        self.get(name).cloned()
    }
}

impl<K, T> Fields for Collection<K, T>
where
    K: Borrow<str>,
    T: Clone,
{
    type Field = T;

    fn field(&self, name: &str) -> Option<T> {
        self.get(name).cloned()
    }
}

/// Objects expose their members as strings: string members verbatim, other
/// members in their JSON form.
#[cfg(feature = "serde")]
impl Fields for serde_json::Value {
    type Field = String;

    fn field(&self, name: &str) -> Option<String> {
        self.get(name).map(|member| match member {
            Self::String(text) => text.clone(),
            other => other.to_string(),
        })
    }
}

/// Buckets pairs by key, preserving first-seen group order and source order
/// within each group.
pub(crate) fn bucket<G, T, I>(pairs: I) -> Vec<(G, Vec<T>)>
where
    G: Eq + Hash + Clone,
    I: IntoIterator<Item = (G, T)>,
{
    let mut positions: FxHashMap<G, usize> = FxHashMap::default();
    let mut groups: Vec<(G, Vec<T>)> = Vec::new();
    for (group, item) in pairs {
        if let Some(&position) = positions.get(&group) {
            groups[position].1.push(item);
        } else {
            positions.insert(group.clone(), groups.len());
            groups.push((group, vec![item]));
        }
    }
    tracing::trace!(groups = groups.len(), "bucketed entries");
    groups
}

impl<K, V: Clone> Collection<K, V> {
    /// Groups the values by the key `selector(value, key)` returns.
    ///
    /// Each group is a list of the full original values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let words = Collection::of(["apple", "avocado", "banana"]);
    /// let by_initial = words.group_by(|word, _| word.chars().next());
    ///
    /// assert_eq!(by_initial.len(), 2);
    /// assert_eq!(by_initial.get(&Some('a')).unwrap().to_vec(), vec!["apple", "avocado"]);
    /// ```
    pub fn group_by<G, F>(&self, mut selector: F) -> Collection<G, Collection<usize, V>>
    where
        G: Eq + Hash + Clone,
        F: FnMut(&V, &K) -> G,
    {
        let groups = bucket(
            self.entries()
                .iter()
                .map(|(key, value)| (selector(value, key), value.clone())),
        );
        Collection::from_entries(
            groups
                .into_iter()
                .map(|(group, values)| (group, Collection::of(values)))
                .collect(),
        )
    }

    /// Groups the values by a named field of each value.
    ///
    /// Values lacking the field are grouped under the field type's default
    /// (the empty string for strings).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    /// use std::collections::HashMap;
    ///
    /// let staff = Collection::of([
    ///     HashMap::from([("name", "Ivriel"), ("department", "IT")]),
    ///     HashMap::from([("name", "Budi"), ("department", "HR")]),
    /// ]);
    /// let by_department = staff.group_by_field("department");
    /// assert_eq!(by_department.keys().to_vec(), vec!["IT", "HR"]);
    /// ```
    pub fn group_by_field(&self, name: &str) -> Collection<V::Field, Collection<usize, V>>
    where
        V: Fields,
        V::Field: Eq + Hash + Clone + Default,
    {
        self.group_by(|value, _| value.field(name).unwrap_or_default())
    }
}

impl<K: Clone, V: Clone> Collection<K, V> {
    /// Groups entries like [`group_by`](Self::group_by) but keeps each
    /// entry's original key inside its group.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let scores = Collection::from_pairs([("Ivriel", 100), ("Budi", 80), ("Joko", 100)]);
    /// let by_score = scores.group_by_preserving_keys(|score, _| *score);
    /// assert_eq!(by_score.get(&100).unwrap().keys().to_vec(), vec!["Ivriel", "Joko"]);
    /// ```
    pub fn group_by_preserving_keys<G, F>(&self, mut selector: F) -> Collection<G, Collection<K, V>>
    where
        G: Eq + Hash + Clone,
        F: FnMut(&V, &K) -> G,
    {
        let groups = bucket(
            self.entries()
                .iter()
                .map(|(key, value)| (selector(value, key), (key.clone(), value.clone()))),
        );
        Collection::from_entries(
            groups
                .into_iter()
                .map(|(group, entries)| (group, Collection::from_entries(entries)))
                .collect(),
        )
    }
}
