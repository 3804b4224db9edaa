//! Fluent, ordered key-value collections.
//!
//! This module provides [`Collection`], an ordered sequence of `(key, value)`
//! entries with a library of chainable operations:
//!
//! - Per-element transforms: `map`, `map_into`, `map_spread`, `map_to_groups`,
//!   `flat_map`, `collapse`
//! - Combination: `zip`, `concat`, `combine`
//! - Filtering: `filter`, `reject`, `partition`, `contains`
//! - Grouping: `group_by`, `group_by_field`
//! - Slicing: `slice`, `take*`, `skip*`, `chunk`
//! - Queries: `first`, `last`, `random`
//! - String conversion: `join`, `join_with_last`
//!
//! # Value Semantics
//!
//! Every operation returns a new collection and leaves the receiver untouched.
//! The only mutating operations are [`push`](Collection::push) and
//! [`pop`](Collection::pop). Entries live behind an `Arc`, so cloning a
//! collection is O(1) and the first mutation of a shared collection copies
//! its entries (copy-on-write).
//!
//! # Keys
//!
//! Collections built with [`Collection::of`] are lists keyed by position
//! (`Collection<usize, V>`). Collections built with
//! [`Collection::from_pairs`] keep the keys they were given. Keys are not
//! required to be unique; lookup by key reaches the last entry with that key,
//! iteration yields every entry.
//!
//! # Examples
//!
//! ```rust
//! use fluent_collection::collection::{Collection, Materialized};
//!
//! let scores = Collection::from_pairs([("Ivriel", 100), ("Budi", 80), ("Gunawan", 90)]);
//! let passed = scores.filter(|score, _name| *score >= 90);
//! assert_eq!(
//!     passed.all(),
//!     Materialized::Map(vec![("Ivriel", 100), ("Gunawan", 90)])
//! );
//!
//! let numbers = Collection::of(1..=9);
//! let doubled_tail = numbers.skip(6).map(|value, _| value * 2);
//! assert_eq!(doubled_tail.to_vec(), vec![14, 16, 18]);
//! ```

mod combination;
mod error;
mod filtering;
mod grouping;
mod join;
mod key;
mod query;
#[cfg(feature = "serde")]
mod serialization;
mod slicing;
mod spread;
mod transform;

pub use error::CollectionError;
pub use grouping::Fields;
pub use key::CollectionKey;
pub use spread::{Spread, SpreadFn};
pub use transform::Collapse;

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::sync::Arc;

/// An ordered sequence of `(key, value)` entries.
///
/// # Type Parameters
///
/// * `K` - The key type. Lists use `usize`.
/// * `V` - The value type.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection::Collection;
///
/// let mut collection = Collection::of(Vec::<i32>::new());
/// collection.push([1, 2, 3]);
/// assert_eq!(collection.pop(), Ok(3));
/// assert_eq!(collection.to_vec(), vec![1, 2]);
/// ```
pub struct Collection<K, V> {
    entries: Arc<Vec<(K, V)>>,
}

/// A collection converted to a plain sequence or mapping.
///
/// Returned by [`Collection::all`]. Collections whose keys are exactly the
/// positions `0..n` materialise as a [`List`](Self::List); everything else
/// materialises as a [`Map`](Self::Map).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Materialized<K, V> {
    /// Values in order; keys were the positions `0..n`.
    List(Vec<V>),
    /// Unique keys in first-seen order, each with the value of its last entry.
    Map(Vec<(K, V)>),
}

impl<K, V> Materialized<K, V> {
    /// Returns the values if this is a list.
    pub fn as_list(&self) -> Option<&[V]> {
        match self {
            Self::List(values) => Some(values),
            Self::Map(_) => None,
        }
    }

    /// Returns the key-value pairs if this is a map.
    pub fn as_map(&self) -> Option<&[(K, V)]> {
        match self {
            Self::List(_) => None,
            Self::Map(pairs) => Some(pairs),
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<K, V> Collection<K, V> {
    /// Creates an empty collection.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_entries(Vec::new())
    }

    /// Creates an associative collection from `(key, value)` pairs, keeping
    /// their order and keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let collection = Collection::from_pairs([("name", "Ivriel"), ("country", "Indonesia")]);
    /// assert_eq!(collection.get("country"), Some(&"Indonesia"));
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_entries(pairs.into_iter().collect())
    }

    #[inline]
    pub(crate) fn from_entries(entries: Vec<(K, V)>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    #[inline]
    pub(crate) fn entries(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over `(key, value)` references in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns the value of the last entry whose key equals `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let collection = Collection::from_pairs([("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(collection.get("a"), Some(&3));
    /// assert_eq!(collection.get("z"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .rev()
            .find(|(entry_key, _)| entry_key.borrow() == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if any entry has the given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .any(|(entry_key, _)| entry_key.borrow() == key)
    }

    /// Returns `true` if the keys are exactly the positions `0..len`.
    pub fn is_list(&self) -> bool
    where
        K: CollectionKey,
    {
        self.entries
            .iter()
            .enumerate()
            .all(|(position, (key, _))| key.as_index() == Some(position))
    }
}

impl<K: Clone, V: Clone> Collection<K, V> {
    /// Removes the last entry and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is empty.
    pub fn pop(&mut self) -> Result<V, CollectionError> {
        Arc::make_mut(&mut self.entries)
            .pop()
            .map(|(_, value)| value)
            .ok_or_else(|| CollectionError::empty("pop"))
    }

    /// Returns the keys as a list collection.
    pub fn keys(&self) -> Collection<usize, K> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Returns the values as a list collection, discarding the keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let tail = Collection::of([1, 2, 3, 4]).skip(2);
    /// assert_eq!(tail.keys().to_vec(), vec![2, 3]);
    /// assert_eq!(tail.values().keys().to_vec(), vec![0, 1]);
    /// ```
    pub fn values(&self) -> Collection<usize, V> {
        self.entries.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns the values in order as a `Vec`.
    pub fn to_vec(&self) -> Vec<V> {
        self.entries.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Consumes the collection and returns its values in order.
    pub fn into_vec(self) -> Vec<V> {
        Arc::unwrap_or_clone(self.entries)
            .into_iter()
            .map(|(_, value)| value)
            .collect()
    }

    /// Returns the entries in reverse order, keys preserved.
    pub fn reverse(&self) -> Self {
        Self::from_entries(self.entries.iter().rev().cloned().collect())
    }

    /// Materialises the collection as a plain sequence or mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::{Collection, Materialized};
    ///
    /// assert_eq!(Collection::of([1, 2]).all(), Materialized::List(vec![1, 2]));
    /// assert_eq!(
    ///     Collection::of([1, 2, 3]).skip(1).all(),
    ///     Materialized::Map(vec![(1, 2), (2, 3)])
    /// );
    /// ```
    pub fn all(&self) -> Materialized<K, V>
    where
        K: CollectionKey + Eq + Hash,
    {
        if self.is_list() {
            return Materialized::List(self.to_vec());
        }
        let mut positions: FxHashMap<&K, usize> = FxHashMap::default();
        let mut pairs: Vec<(K, V)> = Vec::with_capacity(self.len());
        for (key, value) in self.entries.iter() {
            match positions.get(key) {
                Some(&position) => pairs[position].1 = value.clone(),
                None => {
                    positions.insert(key, pairs.len());
                    pairs.push((key.clone(), value.clone()));
                }
            }
        }
        Materialized::Map(pairs)
    }
}

// =============================================================================
// List Collections
// =============================================================================

impl<V> Collection<usize, V> {
    /// Creates a list collection keyed `0..n` from a sequence of values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let collection = Collection::of([1, 2, 3]);
    /// let entries: Vec<(usize, i32)> = collection.into_iter().collect();
    /// assert_eq!(entries, vec![(0, 1), (1, 2), (2, 3)]);
    /// ```
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::from_entries(values.into_iter().enumerate().collect())
    }

    /// One past the largest key, or `None` once `usize::MAX` is taken.
    fn next_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .map(|(key, _)| *key)
            .max()
            .map_or(Some(0), |key| key.checked_add(1))
    }
}

impl<V: Clone> Collection<usize, V> {
    /// Appends values at the end, each keyed with the next free position.
    ///
    /// The next position is one past the largest existing key, so pushing
    /// onto a filtered list never reuses a key. Once the key `usize::MAX` is
    /// taken there is no free position left, and the remaining values are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let mut collection = Collection::of([10, 20, 30]).filter(|value, _| *value != 20);
    /// collection.push([40]);
    /// assert_eq!(collection.keys().to_vec(), vec![0, 2, 3]);
    /// ```
    pub fn push<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
    {
        let mut next = self.next_index();
        let entries = Arc::make_mut(&mut self.entries);
        let mut values = values.into_iter();
        while let Some(key) = next {
            let Some(value) = values.next() else {
                return;
            };
            entries.push((key, value));
            next = key.checked_add(1);
        }
        let dropped = values.count();
        if dropped > 0 {
            tracing::debug!(dropped, "push: no key left past usize::MAX");
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over the entries of a [`Collection`].
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Owning iterator over the entries of a [`Collection`].
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: Clone, V: Clone> IntoIterator for Collection<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: Arc::unwrap_or_clone(self.entries).into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Collection<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for Collection<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for Collection<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<V> for Collection<usize, V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<V> From<Vec<V>> for Collection<usize, V> {
    fn from(values: Vec<V>) -> Self {
        Self::of(values)
    }
}

impl<V: Clone> Extend<V> for Collection<usize, V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.push(iter);
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Collection<K, V> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries) || self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for Collection<K, V> {}

impl<K: Hash, V: Hash> Hash for Collection<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        for (key, value) in self.entries.iter() {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Collection<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Lists display as `[a, b]`, other collections as `{k: v, ...}`.
impl<K, V> fmt::Display for Collection<K, V>
where
    K: CollectionKey + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.is_list();
        write!(formatter, "{}", if list { "[" } else { "{" })?;
        for (position, (key, value)) in self.entries.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            if list {
                write!(formatter, "{value}")?;
            } else {
                write!(formatter, "{key}: {value}")?;
            }
        }
        write!(formatter, "{}", if list { "]" } else { "}" })
    }
}
