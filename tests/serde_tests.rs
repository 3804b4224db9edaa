#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! These tests verify that collections serialize as JSON arrays or objects
//! depending on their keys, and that JSON records can drive grouping.

use fluent_collection::collection::{Collection, Materialized};
use rstest::rstest;
use serde_json::json;

// =============================================================================
// Round Trips
// =============================================================================

#[rstest]
fn test_list_json_roundtrip() {
    let collection: Collection<usize, i32> = (1..=10).collect();
    let json = serde_json::to_string(&collection).unwrap();
    let restored: Collection<usize, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(collection, restored);
}

#[rstest]
fn test_associative_json_roundtrip_keeps_order() {
    let collection = Collection::from_pairs([
        ("name".to_string(), "Ivriel".to_string()),
        ("country".to_string(), "Indonesia".to_string()),
    ]);
    let json = serde_json::to_string(&collection).unwrap();
    assert_eq!(json, r#"{"name":"Ivriel","country":"Indonesia"}"#);

    let restored: Collection<String, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.keys().to_vec(), vec!["name", "country"]);
}

#[rstest]
fn test_nested_collections() {
    let chunks = Collection::of(1..=5).chunk(2).unwrap();
    let json = serde_json::to_string(&chunks).unwrap();
    assert_eq!(json, r#"[[1,2],{"2":3,"3":4},{"4":5}]"#);
}

#[rstest]
fn test_deserialize_object_with_index_keys() {
    let restored: Collection<usize, &str> = serde_json::from_str(r#"{"0":"a","1":"b"}"#).unwrap();
    assert_eq!(restored.all(), Materialized::List(vec!["a", "b"]));
}

// =============================================================================
// JSON Records
// =============================================================================

#[rstest]
fn test_group_by_field_on_json_records() {
    let staff = Collection::of([
        json!({"name": "Ivriel", "department": "IT", "level": 2}),
        json!({"name": "Gunawan", "department": "IT", "level": 1}),
        json!({"name": "Budi", "department": "HR", "level": 2}),
    ]);

    let by_department = staff.group_by_field("department");
    assert_eq!(by_department.keys().to_vec(), vec!["IT", "HR"]);

    let by_level = staff.group_by_field("level");
    assert_eq!(by_level.keys().to_vec(), vec!["2", "1"]);
    assert_eq!(by_level.get("2").unwrap().len(), 2);
}

#[rstest]
fn test_flat_map_over_json_records() {
    let people = Collection::of([
        json!({"name": "Ivriel", "hobbies": ["Coding", "Gaming"]}),
        json!({"name": "Gunawan", "hobbies": ["Reading", "Writing"]}),
    ]);
    let hobbies = people.flat_map(|person, _| {
        person["hobbies"]
            .as_array()
            .cloned()
            .unwrap_or_default()
    });
    assert_eq!(
        hobbies.to_vec(),
        vec![json!("Coding"), json!("Gaming"), json!("Reading"), json!("Writing")]
    );
}
