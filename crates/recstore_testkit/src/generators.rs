//! Property-based test generators using proptest.
//!
//! Provides strategies for generating values, records and store
//! operations.

use proptest::prelude::*;
use recstore_core::{Criteria, Record, Value};
use std::collections::HashSet;
use std::ops::Range;

/// Strategy for generating scalar field values.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        (prop::num::f64::POSITIVE | prop::num::f64::NEGATIVE | prop::num::f64::NORMAL)
            .prop_map(|f| Value::float(f).expect("normal floats are finite")),
        "[A-Za-z ]{0,12}".prop_map(Value::Text),
    ]
}

/// Strategy for generating valid field names.
pub fn field_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9_]{0,11}").expect("Invalid regex")
}

/// Strategy for records with an integer identifier drawn from `ids`.
///
/// Generated fields never shadow the identifier field.
pub fn record_strategy(id_field: &str, ids: Range<i64>) -> impl Strategy<Value = Record> {
    let id_field = id_field.to_string();
    (
        ids,
        prop::collection::vec((field_name_strategy(), value_strategy()), 0..5),
    )
        .prop_map(move |(id, fields)| {
            let mut record = Record::new().with(id_field.clone(), id);
            for (name, value) in fields {
                if name != id_field {
                    record.set(name, value);
                }
            }
            record
        })
}

/// Strategy for up to `max_len` records with pairwise distinct identifiers.
pub fn unique_records_strategy(id_field: &str, max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    let field = id_field.to_string();
    prop::collection::vec(record_strategy(id_field, 0..10_000), 0..max_len).prop_map(
        move |records| {
            let mut seen = HashSet::new();
            records
                .into_iter()
                .filter(|record| seen.insert(record.get(&field).cloned()))
                .collect()
        },
    )
}

/// A store operation for model-based testing.
#[derive(Debug, Clone)]
pub enum StoreOperation {
    /// Insert a record
    Insert(Record),
    /// Update by identifier
    Update(Record),
    /// Remove by criteria
    Remove(Criteria),
}

/// Strategy for store operations over a small identifier space, so that
/// collisions and misses both occur.
pub fn operation_strategy(id_field: &str) -> impl Strategy<Value = StoreOperation> {
    let field = id_field.to_string();
    prop_oneof![
        record_strategy(id_field, 0..16).prop_map(StoreOperation::Insert),
        record_strategy(id_field, 0..16).prop_map(StoreOperation::Update),
        (0i64..16).prop_map(move |id| {
            StoreOperation::Remove(
                Criteria::new(field.clone(), id).expect("identifier field is a valid criteria field"),
            )
        }),
    ]
}
