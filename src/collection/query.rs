//! Single-element queries: `first`, `last` and `random`.
//!
//! `first_where`/`last_where` fail with [`CollectionError::NotFound`] when
//! nothing matches; `first_or`/`last_or` are the non-failing forms.

use rand::Rng;
use rand::seq::index;

use super::{Collection, CollectionError};

impl<K, V> Collection<K, V> {
    /// Returns the first value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is empty.
    pub fn first(&self) -> Result<&V, CollectionError> {
        self.iter()
            .next()
            .map(|(_, value)| value)
            .ok_or_else(|| CollectionError::empty("first"))
    }

    /// Returns the first value satisfying `predicate(value, key)`, scanning
    /// from the front.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is empty
    /// and [`CollectionError::NotFound`] if no entry matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::{Collection, CollectionError};
    ///
    /// let numbers = Collection::of(1..=9);
    /// assert_eq!(numbers.first_where(|value, _| *value > 5), Ok(&6));
    /// assert_eq!(
    ///     numbers.first_where(|value, _| *value > 9),
    ///     Err(CollectionError::NotFound { operation: "first_where" })
    /// );
    /// ```
    pub fn first_where<P>(&self, mut predicate: P) -> Result<&V, CollectionError>
    where
        P: FnMut(&V, &K) -> bool,
    {
        if self.is_empty() {
            return Err(CollectionError::empty("first_where"));
        }
        self.iter()
            .find(|(key, value)| predicate(value, key))
            .map(|(_, value)| value)
            .ok_or_else(|| CollectionError::not_found("first_where"))
    }

    /// Returns the first value satisfying `predicate`, or `default`.
    pub fn first_or<'a, P>(&'a self, predicate: P, default: &'a V) -> &'a V
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.first_where(predicate).unwrap_or(default)
    }

    /// Returns the last value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is empty.
    pub fn last(&self) -> Result<&V, CollectionError> {
        self.iter()
            .next_back()
            .map(|(_, value)| value)
            .ok_or_else(|| CollectionError::empty("last"))
    }

    /// Returns the last value satisfying `predicate(value, key)`, scanning
    /// from the back.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is empty
    /// and [`CollectionError::NotFound`] if no entry matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let numbers = Collection::of(1..=9);
    /// assert_eq!(numbers.last_where(|value, _| *value < 5), Ok(&4));
    /// ```
    pub fn last_where<P>(&self, mut predicate: P) -> Result<&V, CollectionError>
    where
        P: FnMut(&V, &K) -> bool,
    {
        if self.is_empty() {
            return Err(CollectionError::empty("last_where"));
        }
        self.iter()
            .rev()
            .find(|(key, value)| predicate(value, key))
            .map(|(_, value)| value)
            .ok_or_else(|| CollectionError::not_found("last_where"))
    }

    /// Returns the last value satisfying `predicate`, or `default`.
    pub fn last_or<'a, P>(&'a self, predicate: P, default: &'a V) -> &'a V
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.last_where(predicate).unwrap_or(default)
    }

    /// Returns a uniformly chosen value using the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is empty.
    pub fn random(&self) -> Result<&V, CollectionError> {
        self.random_with(&mut rand::rng())
    }

    /// Returns a uniformly chosen value using `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let numbers = Collection::of(1..=9);
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let picked = numbers.random_with(&mut rng).unwrap();
    /// assert!(numbers.contains(picked));
    /// ```
    pub fn random_with<R>(&self, rng: &mut R) -> Result<&V, CollectionError>
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            return Err(CollectionError::empty("random"));
        }
        let position = rng.random_range(0..self.len());
        Ok(&self.entries()[position].1)
    }
}

impl<K, V: Clone> Collection<K, V> {
    /// Returns `count` distinct entries' values, chosen without replacement
    /// using the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `count` exceeds the
    /// number of entries.
    pub fn random_many(&self, count: usize) -> Result<Collection<usize, V>, CollectionError> {
        self.random_many_with(&mut rand::rng(), count)
    }

    /// Returns `count` distinct entries' values, chosen without replacement
    /// using `rng`. The picked values keep their relative order and are
    /// re-indexed from zero.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `count` exceeds the
    /// number of entries.
    pub fn random_many_with<R>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Collection<usize, V>, CollectionError>
    where
        R: Rng + ?Sized,
    {
        if count > self.len() {
            return Err(CollectionError::invalid_argument(
                "random_many",
                format!("requested {count} items, only {} available", self.len()),
            ));
        }
        let mut positions = index::sample(rng, self.len(), count).into_vec();
        positions.sort_unstable();
        Ok(positions
            .into_iter()
            .map(|position| self.entries()[position].1.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    fn test_first_and_last_of_empty_fail() {
        let empty: Collection<usize, i32> = Collection::new();
        assert_eq!(
            empty.first(),
            Err(CollectionError::EmptyCollection { operation: "first" })
        );
        assert_eq!(
            empty.last_where(|_, _| true),
            Err(CollectionError::EmptyCollection {
                operation: "last_where"
            })
        );
    }

    #[rstest]
    fn test_defaults_apply_only_without_match() {
        let numbers = Collection::of([1, 2, 3]);
        assert_eq!(*numbers.first_or(|value, _| *value > 1, &0), 2);
        assert_eq!(*numbers.last_or(|value, _| *value > 5, &0), 0);
    }

    #[rstest]
    fn test_random_many_is_distinct_and_ordered() {
        let numbers = Collection::of(0..20);
        let mut rng = StdRng::seed_from_u64(42);
        let picked = numbers.random_many_with(&mut rng, 5).unwrap().to_vec();

        assert_eq!(picked.len(), 5);
        assert!(picked.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[rstest]
    fn test_random_many_rejects_oversized_requests() {
        let numbers = Collection::of([1, 2]);
        assert!(matches!(
            numbers.random_many(3),
            Err(CollectionError::InvalidArgument {
                operation: "random_many",
                ..
            })
        ));
    }

    #[rstest]
    fn test_random_many_of_everything_is_the_whole_list() {
        let numbers = Collection::of([3, 1, 2]);
        assert_eq!(numbers.random_many(3).unwrap().to_vec(), vec![3, 1, 2]);
    }
}
