//! Commands that change the store.

use crate::render;
use recstore_codec::from_json;
use recstore_core::{Criteria, Record, RecordStore};
use tracing::info;

/// Appends a record given as JSON.
pub fn insert(store: &mut RecordStore, json: &str) -> Result<String, Box<dyn std::error::Error>> {
    let record: Record = from_json(json)?;
    store.insert(record)?;
    info!("Inserted record, store now holds {}", store.len());
    Ok("inserted 1 record".to_string())
}

/// Replaces records sharing the identifier of a record given as JSON.
pub fn update(store: &mut RecordStore, json: &str) -> Result<String, Box<dyn std::error::Error>> {
    let record: Record = from_json(json)?;
    let replaced = store.update(record)?;
    info!("Updated {} records", replaced);
    Ok(format!("updated {replaced} record(s)"))
}

/// Removes records matching a `FIELD=VALUE` expression and renders them.
pub fn remove(
    store: &mut RecordStore,
    expr: &str,
    format: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let criteria = Criteria::parse(expr)?;
    let removed = store.remove(&criteria)?;
    info!("Removed {} records matching {}", removed.len(), criteria);
    let removed: Vec<&Record> = removed.iter().collect();
    render::records(&removed, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recstore_core::{CoreError, RemovePolicy, StoreConfig, Value};
    use recstore_testkit::fixtures::{customer_store, items};

    #[test]
    fn insert_from_json() {
        let mut store = customer_store();
        insert(
            &mut store,
            r#"{"CustomerId": 1004, "FirstName": "Manisha", "LastName": "Pant"}"#,
        )
        .unwrap();
        assert_eq!(store.len(), 4);
        assert!(insert(&mut store, r#"{"CustomerId": 1004}"#).is_err());
        assert!(insert(&mut store, "not json").is_err());
    }

    #[test]
    fn update_from_json() {
        let mut store = customer_store();
        let output = update(&mut store, r#"{"CustomerId": 1001, "FirstName": "Reema2"}"#).unwrap();
        assert_eq!(output, "updated 1 record(s)");

        let updated = store.get(&Value::Integer(1001)).unwrap();
        assert_eq!(updated.get("FirstName"), Some(&Value::from("Reema2")));
        assert_eq!(store.position_of(&Value::Integer(1001)), Some(0));
    }

    #[test]
    fn update_unknown_reports_not_found() {
        let mut store = customer_store();
        let err = update(&mut store, r#"{"CustomerId": 7}"#).unwrap_err();
        let err = err.downcast::<CoreError>().unwrap();
        assert!(err.is_not_found());
    }

    #[test]
    fn remove_renders_removed_records() {
        let config = StoreConfig::new().remove_policy(RemovePolicy::AllMatches);
        let mut store = RecordStore::with_records(config, items()).unwrap();

        let output = remove(&mut store, "active=false", "text").unwrap();
        assert_eq!(output.lines().count(), 3);
        assert_eq!(store.len(), 3);
        assert!(remove(&mut store, "active=false", "text").is_err());
    }
}
