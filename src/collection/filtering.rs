//! Filtering and membership: `filter`, `reject`, `partition`, `contains`
//! and `contains_where`.

use super::Collection;

impl<K: Clone, V: Clone> Collection<K, V> {
    /// Keeps the entries for which `predicate(value, key)` holds, with their
    /// original keys and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let even = Collection::of(1..=10).filter(|value, _| value % 2 == 0);
    /// assert_eq!(even.to_vec(), vec![2, 4, 6, 8, 10]);
    /// assert_eq!(even.keys().to_vec(), vec![1, 3, 5, 7, 9]);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V, &K) -> bool,
    {
        Self::from_entries(
            self.entries()
                .iter()
                .filter(|(key, value)| predicate(value, key))
                .cloned()
                .collect(),
        )
    }

    /// Keeps the entries for which `predicate(value, key)` does not hold.
    pub fn reject<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.filter(|value, key| !predicate(value, key))
    }

    /// Splits the entries into `(matched, unmatched)`.
    ///
    /// Every entry lands in exactly one side, keeping its key and relative
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let scores = Collection::from_pairs([("Ivriel", 100), ("Budi", 80), ("Joko", 90)]);
    /// let (passed, failed) = scores.partition(|score, _| *score >= 90);
    /// assert_eq!(passed.keys().to_vec(), vec!["Ivriel", "Joko"]);
    /// assert_eq!(failed.keys().to_vec(), vec!["Budi"]);
    /// ```
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&V, &K) -> bool,
    {
        let (matched, unmatched): (Vec<_>, Vec<_>) = self
            .entries()
            .iter()
            .cloned()
            .partition(|(key, value)| predicate(value, key));
        (Self::from_entries(matched), Self::from_entries(unmatched))
    }
}

impl<K, V> Collection<K, V> {
    /// Returns `true` if any value equals `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let names = Collection::of(["Ivriel", "Gunawan"]);
    /// assert!(names.contains(&"Ivriel"));
    /// assert!(!names.contains(&"Budi"));
    /// ```
    pub fn contains(&self, target: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, value)| value == target)
    }

    /// Returns `true` if any entry satisfies `predicate(value, key)`.
    ///
    /// Stops at the first match.
    pub fn contains_where<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.iter().any(|(key, value)| predicate(value, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_reject_is_complement_of_filter() {
        let collection = Collection::of(1..=6);
        let odd = collection.reject(|value, _| value % 2 == 0);
        assert_eq!(odd.to_vec(), vec![1, 3, 5]);
    }

    #[rstest]
    fn test_contains_where_short_circuits() {
        let collection = Collection::of([1, 2, 3, 4]);
        let mut calls = 0;
        let found = collection.contains_where(|value, _| {
            calls += 1;
            *value == 2
        });
        assert!(found);
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn test_filter_predicate_sees_keys() {
        let collection = Collection::of(["a", "b", "c"]);
        let tail = collection.filter(|_, key| *key > 0);
        assert_eq!(tail.to_vec(), vec!["b", "c"]);
    }
}
