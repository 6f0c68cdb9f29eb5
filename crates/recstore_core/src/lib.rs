//! # recstore core
//!
//! In-memory record store.
//!
//! This crate provides:
//! - [`Record`], a flat mapping of field names to scalar [`Value`]s
//! - [`Criteria`], a single field/value filter
//! - [`RecordStore`], an ordered collection of keyed records with
//!   insert, update, search, remove and list operations
//! - [`SharedRecordStore`], a lock-guarded handle for multi-threaded hosts
//!
//! ## Example
//!
//! ```
//! use recstore_core::{Criteria, Record, RecordStore};
//!
//! let mut store = RecordStore::default();
//! store.insert(Record::new().with("id", 1001).with("name", "Reema")).unwrap();
//! store.insert(Record::new().with("id", 1002).with("name", "Ritesh")).unwrap();
//!
//! store.update(Record::new().with("id", 1001).with("name", "Reema2")).unwrap();
//!
//! let found = store.search(&Criteria::new("name", "Reema2").unwrap());
//! assert_eq!(found.len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod criteria;
mod error;
mod record;
mod store;

pub use config::{RemovePolicy, StoreConfig};
pub use criteria::Criteria;
pub use error::{CoreError, CoreResult};
pub use record::Record;
pub use recstore_codec::Value;
pub use store::{RecordStore, Records, SharedRecordStore};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
