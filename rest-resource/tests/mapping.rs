//! Integration tests for populating resources from source objects.
//!
//! Covers:
//! - Bulk and field-by-field mapping from serde types
//! - Precedence of formatted fields over bulk mapping
//! - Exclusions
//! - Collection mapping and column projection
//! - Normalization of nested structures

use std::collections::BTreeMap;

use proptest::prelude::*;
use rest_resource::mapper::{normalize, MapOptions};
use rest_resource::{MapError, Resource, Value, ValueKind};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TestStruct {
    int_value: i32,
    string_value: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Measurement {
    float_value: f64,
    label: String,
    active: bool,
}

fn measurement() -> Measurement {
    Measurement {
        float_value: 4234.3982,
        label: "sensor".to_string(),
        active: true,
    }
}

/// Mapping every field copies them with camelCased keys in declaration order.
#[test]
fn test_map_all_struct() {
    let source = TestStruct {
        int_value: 982,
        string_value: "Some test text.".to_string(),
    };

    let mut resource = Resource::default();
    resource.map_all_from(&source).unwrap();

    let keys: Vec<&str> = resource.values().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["intValue", "stringValue"]);
    assert_eq!(resource.get("intValue").and_then(Value::as_i64), Some(982));
    assert_eq!(
        resource.get("stringValue").and_then(Value::as_str),
        Some("Some test text.")
    );
}

/// A collection of strings stored under a key becomes an ordered sequence.
#[test]
fn test_set_string_collection() {
    let strings = vec!["text 1", "text 2", "text 3"];

    let mut resource = Resource::default();
    resource.set_data("Strings", &strings).unwrap();

    let stored = resource.get("strings").and_then(Value::as_sequence).unwrap();
    let stored: Vec<&str> = stored.iter().filter_map(Value::as_str).collect();
    assert_eq!(stored, strings);
}

/// Excluding a field before bulk mapping keeps it out of the resource.
#[test]
fn test_exclude_then_map_all() {
    let mut resource = Resource::default();
    resource
        .map_from(&measurement())
        .unwrap()
        .exclude("FloatValue")
        .map_all();

    assert!(resource.get("floatValue").is_none());
    assert!(resource.contains_key("label"));
    assert!(resource.contains_key("active"));
}

/// A formatted field set before bulk mapping is never overwritten by it.
#[test]
fn test_formatted_field_survives_map_all() {
    let mut resource = Resource::default();
    resource
        .map_from(&measurement())
        .unwrap()
        .map_formatted("FloatValue", |v| format!("{:.2}", v.as_f64().unwrap_or_default()))
        .unwrap()
        .map_all();

    let fd = resource.get("floatValue").and_then(Value::as_formatted).unwrap();
    assert_eq!(fd.rendered(), "4234.40");
    assert_eq!(fd.raw().as_f64(), Some(4234.3982));
}

/// Unknown fields are reported with the requested name.
#[test]
fn test_unknown_field_is_an_error() {
    let mut resource = Resource::default();
    let err = resource
        .map_from(&measurement())
        .unwrap()
        .map("Missing")
        .err()
        .unwrap();

    assert!(err.is_field_not_found());
    assert!(err.to_string().starts_with("Field not found: Missing on "));
}

/// Nested structs, options and collections normalize recursively.
#[test]
fn test_nested_normalization() {
    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Address {
        street_name: String,
        zip: Option<String>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Customer {
        name: String,
        home_address: Address,
        tags: Vec<String>,
    }

    let customer = Customer {
        name: "Ada".to_string(),
        home_address: Address {
            street_name: "Main".to_string(),
            zip: None,
        },
        tags: vec!["vip".to_string()],
    };

    let mut resource = Resource::default();
    resource.map_all_from(&customer).unwrap();

    let address = resource.get("homeAddress").and_then(Value::as_map).unwrap();
    assert_eq!(address["streetName"].as_str(), Some("Main"));
    assert!(address["zip"].is_null());
    assert_eq!(
        resource.get("tags").map(Value::kind),
        Some(ValueKind::Sequence)
    );
}

/// Column projection copies only the requested fields of each element.
#[test]
fn test_slice_projection() {
    let measurements = vec![measurement(), measurement(), measurement()];

    let mut resource = Resource::default();
    resource
        .map_slice_from("Readings", &measurements)
        .unwrap()
        .map("Label")
        .unwrap()
        .map("Active")
        .unwrap()
        .end_map()
        .set("count", measurements.len());

    let rows = resource.get("readings").and_then(Value::as_sequence).unwrap();
    assert_eq!(rows.len(), 3);
    for row in rows {
        let row = row.as_map().unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row["label"].as_str(), Some("sensor"));
    }
    assert_eq!(resource.get("count").and_then(Value::as_u64), Some(3));
}

/// Sources that are not struct-like cannot start a mapping session.
#[test]
fn test_scalar_source_rejected() {
    let mut resource = Resource::default();
    let err = resource.map_from("just a string").err().unwrap();
    assert!(matches!(err, MapError::NotStructLike { .. }));
}

/// Deep sources are refused beyond the configured limit.
#[test]
fn test_depth_limit() {
    let nested = vec![vec![vec![1]]];
    assert!(normalize(&nested, &MapOptions::new().max_depth(3)).is_ok());
    assert!(matches!(
        normalize(&nested, &MapOptions::new().max_depth(2)),
        Err(MapError::DepthLimitExceeded { limit: 2 })
    ));
}

/// Recursive sources thousands of levels deep fail at the limit.
#[test]
fn test_very_deep_recursive_source() {
    #[derive(Serialize)]
    enum List {
        Cons(Box<List>),
        Nil,
    }

    let deep = (0..5000).fold(List::Nil, |tail, _| List::Cons(Box::new(tail)));

    let mut resource = Resource::default();
    let err = resource.set_data("List", &deep).err().unwrap();
    assert!(matches!(err, MapError::DepthLimitExceeded { limit: 64 }));
    assert!(resource.values().is_empty());
}

proptest! {
    /// Every stored key starts with a non-uppercase character.
    #[test]
    fn prop_stored_keys_are_camel_case(fields in prop::collection::btree_map("[A-Za-z][A-Za-z0-9]{0,8}", any::<i32>(), 0..10)) {
        let mut resource = Resource::default();
        resource.map_all_from(&fields).unwrap();
        for key in resource.values().keys() {
            prop_assert!(!key.starts_with(|c: char| c.is_uppercase()));
        }
    }

    /// Excluded fields never appear, whether excluded before or after bulk mapping.
    #[test]
    fn prop_exclusion(
        fields in prop::collection::btree_map("[A-Z][a-z]{0,8}", any::<i64>(), 1..10),
        mask in prop::collection::vec(any::<bool>(), 10),
        after in any::<bool>(),
    ) {
        let excluded: Vec<&String> = fields
            .keys()
            .zip(&mask)
            .filter_map(|(key, exclude)| exclude.then_some(key))
            .collect();

        let mut resource = Resource::default();
        let mut session = resource.map_from(&fields).unwrap();
        if after {
            session = session.map_all();
        }
        for key in &excluded {
            session = session.exclude(key);
        }
        session.map_all();

        for key in &excluded {
            prop_assert!(!resource.contains_key(key));
        }
        prop_assert_eq!(resource.values().len(), fields.len() - excluded.len());
    }

    /// Formatted fields are kept by any number of bulk mappings.
    #[test]
    fn prop_first_writer_wins(repeats in 1usize..4) {
        let mut source = BTreeMap::new();
        source.insert("Amount", 12.345_f64);
        source.insert("Other", 1.0);

        let mut resource = Resource::default();
        let mut session = resource
            .map_from(&source)
            .unwrap()
            .map_formatted("Amount", |v| format!("{:.1}", v.as_f64().unwrap_or_default()))
            .unwrap();
        for _ in 0..repeats {
            session = session.map_all();
        }
        session.end_map();

        prop_assert_eq!(resource.get("amount").map(Value::kind), Some(ValueKind::Formatted));
        prop_assert_eq!(resource.get("amount").map(ToString::to_string), Some("12.3".to_string()));
    }
}
