//! Per-element transforms: `map`, `map_into`, `map_spread`, `map_to_groups`,
//! `flat_map` and `collapse`.

use std::hash::Hash;

use super::grouping::bucket;
use super::spread::{Spread, SpreadFn};
use super::{Collection, CollectionError};

/// A value holding a nested sequence that [`Collection::collapse`] can
/// flatten by one level.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection::Collection;
///
/// let nested = Collection::of([vec![1, 2], vec![3]]);
/// assert_eq!(nested.collapse().to_vec(), vec![1, 2, 3]);
/// ```
pub trait Collapse {
    /// The element type of the nested sequence.
    type Item;

    /// Appends the nested elements, in order, to `target`.
    fn collapse_into(&self, target: &mut Vec<Self::Item>);
}

impl<T: Clone> Collapse for Vec<T> {
    type Item = T;

    fn collapse_into(&self, target: &mut Vec<T>) {
        target.extend_from_slice(self);
    }
}

impl<T: Clone, const N: usize> Collapse for [T; N] {
    type Item = T;

    fn collapse_into(&self, target: &mut Vec<T>) {
        target.extend_from_slice(self);
    }
}

impl<K, T: Clone> Collapse for Collection<K, T> {
    type Item = T;

    fn collapse_into(&self, target: &mut Vec<T>) {
        target.extend(self.iter().map(|(_, value)| value.clone()));
    }
}

impl<K: Clone, V> Collection<K, V> {
    /// Replaces every value with `function(value, key)`, keeping the keys.
    ///
    /// The function is called eagerly, once per entry, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let doubled = Collection::of([1, 2, 3]).map(|value, _| value * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn map<R, F>(&self, mut function: F) -> Collection<K, R>
    where
        F: FnMut(&V, &K) -> R,
    {
        Collection::from_entries(
            self.entries()
                .iter()
                .map(|(key, value)| (key.clone(), function(value, key)))
                .collect(),
        )
    }

    /// Converts every value into `R` through its `From` implementation.
    ///
    /// Tuple values feed multi-argument constructors through
    /// `From<(A, B, ..)>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Person {
    ///     name: String,
    /// }
    ///
    /// impl From<&str> for Person {
    ///     fn from(name: &str) -> Self {
    ///         Self { name: name.to_string() }
    ///     }
    /// }
    ///
    /// let people = Collection::of(["Ivriel"]).map_into::<Person>();
    /// assert_eq!(people.to_vec(), vec![Person { name: "Ivriel".to_string() }]);
    /// ```
    pub fn map_into<R>(&self) -> Collection<K, R>
    where
        V: Clone,
        R: From<V>,
    {
        self.map(|value, _| R::from(value.clone()))
    }

    /// Calls `function` with the elements of each value spread out as
    /// positional arguments.
    ///
    /// Closure parameters must be annotated so the arity can be inferred.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Arity`] if a sequence value has fewer
    /// elements than `function` takes. Nothing is returned for the entries
    /// that did spread.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let names = Collection::of([vec!["Ivriel", "Gunawan"], vec!["Gunawan", "Ivriel"]]);
    /// let full_names = names
    ///     .map_spread(|first: &str, last: &str| format!("{first} {last}"))
    ///     .unwrap();
    /// assert_eq!(full_names.to_vec(), vec!["Ivriel Gunawan", "Gunawan Ivriel"]);
    /// ```
    pub fn map_spread<Args, R, F>(&self, mut function: F) -> Result<Collection<K, R>, CollectionError>
    where
        V: Spread<Args>,
        F: SpreadFn<Args, R>,
    {
        let mut entries = Vec::with_capacity(self.len());
        for (key, value) in self.entries() {
            entries.push((key.clone(), function.call_spread(value.spread()?)));
        }
        Ok(Collection::from_entries(entries))
    }
}

impl<K, V> Collection<K, V> {
    /// Groups values under keys produced by `function`.
    ///
    /// `function` returns one `(group_key, group_value)` pair per entry.
    /// Groups appear in the order their key was first produced; each holds
    /// its group values in source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let staff = Collection::of([("Ivriel", "IT"), ("Gunawan", "IT"), ("Budi", "HR")]);
    /// let by_department = staff.map_to_groups(|(name, department), _| (*department, *name));
    ///
    /// assert_eq!(by_department.get("IT").unwrap().to_vec(), vec!["Ivriel", "Gunawan"]);
    /// assert_eq!(by_department.get("HR").unwrap().to_vec(), vec!["Budi"]);
    /// ```
    pub fn map_to_groups<G, R, F>(&self, mut function: F) -> Collection<G, Collection<usize, R>>
    where
        G: Eq + Hash + Clone,
        F: FnMut(&V, &K) -> (G, R),
    {
        let groups = bucket(
            self.entries()
                .iter()
                .map(|(key, value)| function(value, key)),
        );
        Collection::from_entries(
            groups
                .into_iter()
                .map(|(group, values)| (group, Collection::of(values)))
                .collect(),
        )
    }

    /// Maps every entry to a sequence and concatenates the results into a
    /// list, discarding the original keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let people = Collection::of([
    ///     ("Ivriel", vec!["Coding", "Gaming"]),
    ///     ("Gunawan", vec!["Reading", "Writing"]),
    /// ]);
    /// let hobbies = people.flat_map(|(_, hobbies), _| hobbies.clone());
    /// assert_eq!(hobbies.to_vec(), vec!["Coding", "Gaming", "Reading", "Writing"]);
    /// ```
    pub fn flat_map<R, I, F>(&self, mut function: F) -> Collection<usize, R>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(&V, &K) -> I,
    {
        self.entries()
            .iter()
            .flat_map(|(key, value)| function(value, key))
            .collect()
    }

    /// Flattens one level of nesting into a list, outer then inner order.
    ///
    /// Elements nested deeper than one level are kept as they are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let nested = Collection::of([vec![vec![1], vec![2]], vec![vec![3]]]);
    /// assert_eq!(nested.collapse().to_vec(), vec![vec![1], vec![2], vec![3]]);
    /// ```
    pub fn collapse(&self) -> Collection<usize, V::Item>
    where
        V: Collapse,
    {
        let mut values = Vec::new();
        for (_, value) in self.entries() {
            value.collapse_into(&mut values);
        }
        Collection::of(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_receives_keys() {
        let collection = Collection::from_pairs([("a", 1), ("b", 2)]);
        let labelled = collection.map(|value, key| format!("{key}{value}"));
        assert_eq!(labelled.to_vec(), vec!["a1", "b2"]);
        assert_eq!(labelled.keys().to_vec(), vec!["a", "b"]);
    }

    #[rstest]
    fn test_collapse_of_collections() {
        let nested = Collection::of([Collection::of([1, 2]), Collection::of([3])]);
        assert_eq!(nested.collapse().to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_collapse_of_empty_collection() {
        let nested: Collection<usize, Vec<i32>> = Collection::new();
        assert!(nested.collapse().is_empty());
    }
}
