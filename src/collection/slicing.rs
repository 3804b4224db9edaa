//! Slicing and windowed access: `slice`, the `take*` and `skip*` families,
//! and `chunk`. All of them keep the original keys.

use super::{Collection, CollectionError};

impl<K: Clone, V: Clone> Collection<K, V> {
    fn range(&self, start: usize, end: usize) -> Self {
        if start == 0 && end >= self.len() {
            return self.clone();
        }
        let end = end.min(self.len());
        if start >= end {
            return Self::new();
        }
        Self::from_entries(self.entries()[start..end].to_vec())
    }

    fn position_where<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.entries()
            .iter()
            .position(|(key, value)| predicate(value, key))
    }

    /// Returns the entries from `offset` on, at most `length` of them.
    ///
    /// A negative `offset` counts from the end. `length` of `None` runs to
    /// the end; a negative `length` stops that many entries before the end.
    /// Out-of-range arguments produce an empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let numbers = Collection::of(1..=9);
    /// assert_eq!(numbers.slice(3, None).to_vec(), vec![4, 5, 6, 7, 8, 9]);
    /// assert_eq!(numbers.slice(3, Some(2)).to_vec(), vec![4, 5]);
    /// assert_eq!(numbers.slice(-2, None).to_vec(), vec![8, 9]);
    /// assert_eq!(numbers.slice(1, Some(-6)).to_vec(), vec![2, 3]);
    /// assert!(numbers.slice(20, None).is_empty());
    /// ```
    pub fn slice(&self, offset: isize, length: Option<isize>) -> Self {
        let len = self.len();
        let start = if offset < 0 {
            len.saturating_sub(offset.unsigned_abs())
        } else {
            offset.unsigned_abs()
        };
        if start >= len {
            return Self::new();
        }
        let end = match length {
            None => len,
            Some(length) if length < 0 => len.saturating_sub(length.unsigned_abs()),
            Some(length) => start.saturating_add(length.unsigned_abs()),
        };
        self.range(start, end)
    }

    /// Returns the first `count` entries, or all of them if there are fewer.
    pub fn take(&self, count: usize) -> Self {
        self.range(0, count)
    }

    /// Returns the last `count` entries, or all of them if there are fewer.
    pub fn take_last(&self, count: usize) -> Self {
        self.range(self.len().saturating_sub(count), self.len())
    }

    /// Returns the entries before the first one satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let numbers = Collection::of([1, 2, 3, 1, 2, 3]);
    /// assert_eq!(numbers.take_until(|value, _| *value == 3).to_vec(), vec![1, 2]);
    /// assert_eq!(numbers.take_until(|value, _| *value > 9).len(), 6);
    /// ```
    pub fn take_until<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&V, &K) -> bool,
    {
        let end = self.position_where(predicate).unwrap_or(self.len());
        self.range(0, end)
    }

    /// Returns entries from the start for as long as `predicate` holds.
    pub fn take_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.take_until(|value, key| !predicate(value, key))
    }

    /// Returns everything after the first `count` entries.
    pub fn skip(&self, count: usize) -> Self {
        self.range(count, self.len())
    }

    /// Drops entries until one satisfies `predicate`; that entry and
    /// everything after it are returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let numbers = Collection::of(1..=9);
    /// assert_eq!(numbers.skip_until(|value, _| *value == 3).to_vec(), vec![3, 4, 5, 6, 7, 8, 9]);
    /// assert!(numbers.skip_until(|value, _| *value > 9).is_empty());
    /// ```
    pub fn skip_until<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&V, &K) -> bool,
    {
        let start = self.position_where(predicate).unwrap_or(self.len());
        self.range(start, self.len())
    }

    /// Drops entries while `predicate` holds and returns the rest.
    pub fn skip_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.skip_until(|value, key| !predicate(value, key))
    }

    /// Splits the entries into consecutive chunks of `size`; the last chunk
    /// may be shorter. Chunks keep the original keys.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let chunks = Collection::of(1..=10).chunk(3).unwrap();
    /// let sizes: Vec<usize> = chunks.iter().map(|(_, chunk)| chunk.len()).collect();
    /// assert_eq!(sizes, vec![3, 3, 3, 1]);
    /// ```
    pub fn chunk(&self, size: usize) -> Result<Collection<usize, Self>, CollectionError> {
        if size == 0 {
            return Err(CollectionError::invalid_argument(
                "chunk",
                "chunk size must be positive".to_string(),
            ));
        }
        Ok(self
            .entries()
            .chunks(size)
            .map(|entries| Self::from_entries(entries.to_vec()))
            .collect())
    }
}
