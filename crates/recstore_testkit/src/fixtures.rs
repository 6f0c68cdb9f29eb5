//! Test fixtures and store helpers.
//!
//! Provides seeded record sets modelled on the customer and catalogue
//! screens the store was built for.

use recstore_codec::{to_cbor, to_json_pretty};
use recstore_core::{Record, RecordStore, StoreConfig};
use std::path::Path;
use tempfile::TempDir;

/// Identifier field used by the customer fixtures.
pub const CUSTOMER_ID: &str = "CustomerId";

/// Builds a customer record.
pub fn customer(id: i64, first: &str, last: &str, email: &str) -> Record {
    Record::new()
        .with(CUSTOMER_ID, id)
        .with("FirstName", first)
        .with("LastName", last)
        .with("Address", "Pune")
        .with("Email", email)
        .with("RegistrationDate", "2016-03-14")
}

/// Three customers with distinct identifiers.
pub fn customers() -> Vec<Record> {
    vec![
        customer(1001, "Reema", "Shah", "reema@transflower.in"),
        customer(1002, "Ritesh", "Patil", "ritesh@transflower.in"),
        customer(1003, "Sameer", "Patil", "sameer.patil@gmail.com"),
    ]
}

/// Store configuration keyed on [`CUSTOMER_ID`].
pub fn customer_config() -> StoreConfig {
    StoreConfig::new().identifier_field(CUSTOMER_ID)
}

/// A store seeded with [`customers`].
pub fn customer_store() -> RecordStore {
    RecordStore::with_records(customer_config(), customers())
        .expect("customer fixtures have unique identifiers")
}

/// Builds a catalogue item record.
pub fn item(id: i64, name: &str, description: &str, unit_price: i64, quantity: i64, active: bool) -> Record {
    Record::new()
        .with("id", id)
        .with("name", name)
        .with("description", description)
        .with("unitPrice", unit_price)
        .with("quantity", quantity)
        .with("active", active)
}

/// Six flower items, three of them active.
pub fn items() -> Vec<Record> {
    vec![
        item(1, "Gerbera", "Best Wedding flower", 23, 300, true),
        item(2, "Jasmin", "Best Smelling flower", 15, 120, false),
        item(3, "Carnation", "Best Decorative flower", 20, 304, false),
        item(4, "Lotus", "Best Worship flower", 35, 175, true),
        item(5, "Marigold", "Best festival flower", 12, 276, false),
        item(6, "Tulip", "Best Garden flower", 45, 274, true),
    ]
}

/// A default-configured store seeded with [`items`].
pub fn item_store() -> RecordStore {
    RecordStore::with_records(StoreConfig::default(), items())
        .expect("item fixtures have unique identifiers")
}

/// A record file in a temporary directory, removed on drop.
pub struct RecordFile {
    path: std::path::PathBuf,
    _temp_dir: TempDir,
}

impl RecordFile {
    /// Writes `records` as a JSON array to `records.json`.
    pub fn json(records: &[Record]) -> Self {
        let text = to_json_pretty(records).expect("Failed to encode records");
        Self::write("records.json", text.as_bytes())
    }

    /// Writes `records` as CBOR to `records.cbor`.
    pub fn cbor(records: &[Record]) -> Self {
        let bytes = to_cbor(records).expect("Failed to encode records");
        Self::write("records.cbor", &bytes)
    }

    fn write(name: &str, contents: &[u8]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write record file");
        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recstore_core::{Criteria, Value};

    #[test]
    fn customer_store_is_keyed_on_customer_id() {
        let store = customer_store();
        assert_eq!(store.identifier_field(), CUSTOMER_ID);
        assert!(store.get(&Value::Integer(1002)).is_some());
    }

    #[test]
    fn items_have_three_active() {
        let store = item_store();
        let active = store.search(&Criteria::new("active", true).unwrap());
        assert_eq!(active.len(), 3);
    }

    #[test]
    fn record_file_exists_until_dropped() {
        let file = RecordFile::json(&customers());
        let path = file.path().to_path_buf();
        assert!(path.exists());
        drop(file);
        assert!(!path.exists());
    }
}
