//! Property-based tests for Collection laws.
//!
//! This module verifies the algebraic laws and invariants of Collection
//! using proptest.

use fluent_collection::collection::{Collection, Materialized};
use proptest::prelude::*;

// =============================================================================
// Functor-style Laws
// =============================================================================

proptest! {
    /// Identity Law: mapping the identity leaves the collection unchanged
    #[test]
    fn prop_map_identity(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let collection = Collection::of(elements);
        prop_assert_eq!(collection.map(|value, _| *value).all(), collection.all());
    }

    /// Composition Law: mapping twice equals mapping the composition
    #[test]
    fn prop_map_composition(elements in prop::collection::vec(any::<i16>(), 0..50)) {
        let collection = Collection::of(elements);
        let double = |value: &i32| value * 2;
        let increment = |value: &i32| value + 1;

        let widened = collection.map(|value, _| i32::from(*value));
        let chained = widened.map(|value, _| double(value)).map(|value, _| increment(value));
        let composed = widened.map(|value, _| increment(&double(value)));
        prop_assert_eq!(chained, composed);
    }
}

// =============================================================================
// Mutation Laws
// =============================================================================

proptest! {
    /// Push-Pop Law: pop returns the value that was just pushed
    #[test]
    fn prop_push_pop(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        new_element: i32
    ) {
        let original = Collection::of(elements);
        let mut collection = original.clone();
        collection.push([new_element]);

        prop_assert_eq!(collection.pop(), Ok(new_element));
        prop_assert_eq!(collection, original);
    }
}

// =============================================================================
// Combination Laws
// =============================================================================

proptest! {
    /// Zip Length Law: the zipped length is the shorter length
    #[test]
    fn prop_zip_length_and_positions(
        left in prop::collection::vec(any::<i32>(), 0..30),
        right in prop::collection::vec(any::<u8>(), 0..30)
    ) {
        let zipped = Collection::of(left.clone()).zip(&Collection::of(right.clone()));
        prop_assert_eq!(zipped.len(), left.len().min(right.len()));
        for (index, pair) in zipped.to_vec().into_iter().enumerate() {
            prop_assert_eq!(pair, (left[index], right[index]));
        }
    }

    /// Concat Law: concatenation of lists is a list of all values in order
    #[test]
    fn prop_concat_is_append(
        left in prop::collection::vec(any::<i32>(), 0..30),
        right in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let joined = Collection::of(left.clone()).concat(&Collection::of(right.clone()));
        let mut expected = left;
        expected.extend(right);
        prop_assert_eq!(joined.all(), Materialized::List(expected));
    }
}

// =============================================================================
// Filtering & Slicing Laws
// =============================================================================

proptest! {
    /// Partition Law: every entry lands in exactly one side
    #[test]
    fn prop_partition_is_complete(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let collection = Collection::of(elements);
        let (matched, unmatched) = collection.partition(|value, _| value % 3 == 0);

        prop_assert_eq!(matched.len() + unmatched.len(), collection.len());
        prop_assert_eq!(matched, collection.filter(|value, _| value % 3 == 0));
        prop_assert_eq!(unmatched, collection.reject(|value, _| value % 3 == 0));
    }

    /// Take-Skip Law: take(n) followed by skip(n) covers the whole collection
    #[test]
    fn prop_take_skip_split(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        count in 0usize..60
    ) {
        let collection = Collection::of(elements);
        let rejoined = collection.take(count).concat(&collection.skip(count));
        prop_assert_eq!(rejoined, collection);
    }

    /// Take-Skip Until Law: take_until and skip_until split at the same entry
    #[test]
    fn prop_take_until_skip_until_split(
        elements in prop::collection::vec(0i32..10, 0..50),
        boundary in 0i32..10
    ) {
        let collection = Collection::of(elements);
        let head = collection.take_until(|value, _| *value == boundary);
        let tail = collection.skip_until(|value, _| *value == boundary);
        prop_assert_eq!(head.len() + tail.len(), collection.len());
        prop_assert!(!head.contains(&boundary));
        if !tail.is_empty() {
            prop_assert_eq!(tail.first(), Ok(&boundary));
        }
    }

    /// Chunk Law: chunks have the requested size except possibly the last
    #[test]
    fn prop_chunk_sizes(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        size in 1usize..10
    ) {
        let collection = Collection::of(elements);
        let chunks = collection.chunk(size).unwrap().to_vec();
        let expected_count = collection.len().div_ceil(size);

        prop_assert_eq!(chunks.len(), expected_count);
        for (index, chunk) in chunks.iter().enumerate() {
            if index + 1 < chunks.len() {
                prop_assert_eq!(chunk.len(), size);
            } else {
                prop_assert!(chunk.len() <= size && !chunk.is_empty());
            }
        }
        let flattened: Vec<i32> = chunks.iter().flat_map(|chunk| chunk.to_vec()).collect();
        prop_assert_eq!(flattened, collection.to_vec());
    }
}

// =============================================================================
// Grouping Laws
// =============================================================================

proptest! {
    /// Group Coverage Law: groups contain every value once, in source order
    #[test]
    fn prop_group_by_covers_all_values(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let collection = Collection::of(elements);
        let groups = collection.group_by(|value, _| value.rem_euclid(4));

        let total: usize = groups.iter().map(|(_, group)| group.len()).sum();
        prop_assert_eq!(total, collection.len());
        for (remainder, group) in &groups {
            let expected = collection.filter(|value, _| value.rem_euclid(4) == *remainder).to_vec();
            prop_assert_eq!(group.to_vec(), expected);
        }
    }
}

// =============================================================================
// Query Laws
// =============================================================================

proptest! {
    /// Random Membership Law: random always picks a member
    #[test]
    fn prop_random_is_member(elements in prop::collection::vec(any::<i32>(), 1..50)) {
        let collection = Collection::of(elements);
        let picked = collection.random().unwrap();
        prop_assert!(collection.contains(picked));
    }

    /// Join Law: joining with one separator matches the std join
    #[test]
    fn prop_join_matches_std(elements in prop::collection::vec("[a-z]{0,5}", 0..10)) {
        let collection = Collection::of(elements.clone());
        prop_assert_eq!(collection.join("-"), elements.join("-"));
    }
}
