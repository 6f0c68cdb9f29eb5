//! Read-only commands.

use crate::render;
use recstore_core::{Criteria, Record, RecordStore, Value};

/// Renders every record in insertion order.
pub fn list(store: &RecordStore, format: &str) -> Result<String, Box<dyn std::error::Error>> {
    let records: Vec<&Record> = store.list_all().collect();
    render::records(&records, format)
}

/// Renders the record with identifier `id`.
pub fn get(store: &RecordStore, id: &str, format: &str) -> Result<String, Box<dyn std::error::Error>> {
    let id = Value::from_literal(id);
    let record = store
        .get(&id)
        .ok_or_else(|| format!("no record with {}={id}", store.identifier_field()))?;
    render::records(&[record], format)
}

/// Renders records matching a `FIELD=VALUE` expression.
pub fn search(
    store: &RecordStore,
    expr: &str,
    format: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let criteria = Criteria::parse(expr)?;
    render::records(&store.search(&criteria), format)
}

/// Renders the record count.
pub fn count(store: &RecordStore) -> String {
    store.len().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use recstore_testkit::fixtures::{customer_store, item_store};

    #[test]
    fn list_prints_every_record() {
        let store = item_store();
        let output = list(&store, "text").unwrap();
        assert_eq!(output.lines().count(), store.len());
        assert!(output.starts_with("id=1 name=Gerbera"));
    }

    #[test]
    fn get_by_identifier() {
        let store = customer_store();
        let output = get(&store, "1002", "text").unwrap();
        assert!(output.contains("FirstName=Ritesh"));
        assert!(get(&store, "\"1002\"", "text").is_err());
        assert!(get(&store, "4242", "text").is_err());
    }

    #[test]
    fn search_by_field() {
        let store = item_store();
        let output = search(&store, "active=true", "text").unwrap();
        assert_eq!(output.lines().count(), 3);
        assert_eq!(search(&store, "name=Orchid", "text").unwrap(), "");
        assert!(search(&store, "name", "text").is_err());
    }

    #[test]
    fn count_records() {
        assert_eq!(count(&customer_store()), "3");
    }
}
