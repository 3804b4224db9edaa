//! Combining two collections: `zip`, `concat` and `combine`.

use super::{Collection, CollectionError, CollectionKey};

impl<K, V: Clone> Collection<K, V> {
    /// Pairs values by position.
    ///
    /// The result has as many entries as the shorter collection; trailing
    /// values of the longer one are dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let zipped = Collection::of([1, 2, 3]).zip(&Collection::of([4, 5]));
    /// assert_eq!(zipped.to_vec(), vec![(1, 4), (2, 5)]);
    /// ```
    pub fn zip<L, W: Clone>(&self, other: &Collection<L, W>) -> Collection<usize, (V, W)> {
        self.iter()
            .zip(other.iter())
            .map(|((_, left), (_, right))| (left.clone(), right.clone()))
            .collect()
    }

    /// Uses this collection's values as keys for `other`'s values.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::LengthMismatch`] if the collections have
    /// different lengths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::{Collection, Materialized};
    ///
    /// let keys = Collection::of(["name", "country"]);
    /// let values = Collection::of(["Ivriel", "Indonesia"]);
    /// assert_eq!(
    ///     keys.combine(&values).unwrap().all(),
    ///     Materialized::Map(vec![("name", "Ivriel"), ("country", "Indonesia")])
    /// );
    /// ```
    pub fn combine<L, W: Clone>(
        &self,
        other: &Collection<L, W>,
    ) -> Result<Collection<V, W>, CollectionError> {
        if self.len() != other.len() {
            tracing::debug!(left = self.len(), right = other.len(), "combine length mismatch");
            return Err(CollectionError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(Collection::from_pairs(
            self.iter()
                .zip(other.iter())
                .map(|((_, key), (_, value))| (key.clone(), value.clone())),
        ))
    }
}

impl<K: CollectionKey, V: Clone> Collection<K, V> {
    /// Appends `other`'s entries after this collection's entries.
    ///
    /// Index-like keys are renumbered `0, 1, ..` across the concatenation,
    /// named keys are kept. Duplicate values and keys are retained. Once the
    /// key type runs out of positions (past 255 for `u8`), further index-like
    /// entries keep their original key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::{Collection, Materialized};
    ///
    /// let joined = Collection::of([1, 2, 3]).concat(&Collection::of([4, 5, 6]));
    /// assert_eq!(joined.all(), Materialized::List(vec![1, 2, 3, 4, 5, 6]));
    /// ```
    pub fn concat(&self, other: &Self) -> Self {
        let mut next_index = 0;
        Self::from_entries(
            self.iter()
                .chain(other.iter())
                .map(|(key, value)| {
                    let key = match key.as_index().and(K::from_index(next_index)) {
                        Some(renumbered) => {
                            next_index += 1;
                            renumbered
                        }
                        None => {
                            if key.as_index().is_some() {
                                tracing::debug!(next_index, "concat: key type cannot renumber further");
                            }
                            key.clone()
                        }
                    };
                    (key, value.clone())
                })
                .collect(),
        )
    }
}
