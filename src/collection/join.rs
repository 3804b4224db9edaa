//! String conversion: `join` and `join_with_last`.

use std::fmt::Display;

use super::Collection;

impl<K, V: Display> Collection<K, V> {
    /// Joins the values' string forms with `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// assert_eq!(Collection::of(["A", "B", "C"]).join("-"), "A-B-C");
    /// ```
    pub fn join(&self, separator: &str) -> String {
        self.join_with_last(separator, separator)
    }

    /// Joins the values' string forms with `separator`, using
    /// `last_separator` between the final two values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let names = Collection::of(["Ivriel", "Gunawan", "Budi"]);
    /// assert_eq!(names.join_with_last(", ", " and "), "Ivriel, Gunawan and Budi");
    /// assert_eq!(names.take(2).join_with_last(", ", " and "), "Ivriel and Gunawan");
    /// assert_eq!(names.take(1).join_with_last(", ", " and "), "Ivriel");
    /// ```
    pub fn join_with_last(&self, separator: &str, last_separator: &str) -> String {
        let last_position = self.len().saturating_sub(1);
        let mut joined = String::new();
        for (position, (_, value)) in self.iter().enumerate() {
            if position > 0 {
                joined.push_str(if position == last_position {
                    last_separator
                } else {
                    separator
                });
            }
            joined.push_str(&value.to_string());
        }
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], "")]
    #[case(vec![1], "1")]
    #[case(vec![1, 2], "1_2")]
    #[case(vec![1, 2, 3], "1-2_3")]
    #[case(vec![1, 2, 3, 4], "1-2-3_4")]
    fn test_join_with_last_by_length(#[case] values: Vec<i32>, #[case] expected: &str) {
        assert_eq!(Collection::of(values).join_with_last("-", "_"), expected);
    }

    #[rstest]
    fn test_join_of_associative_collection_ignores_keys() {
        let collection = Collection::from_pairs([("a", 1), ("b", 2)]);
        assert_eq!(collection.join(", "), "1, 2");
    }
}
