//! # recstore testkit
//!
//! Test utilities for recstore.
//!
//! This crate provides:
//! - Seeded stores and record sets (customers, flower items)
//! - Temporary record files for CLI and I/O tests
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use recstore_testkit::prelude::*;
//!
//! #[test]
//! fn finds_reema() {
//!     let store = customer_store();
//!     assert_eq!(store.search(&Criteria::new("FirstName", "Reema").unwrap()).len(), 1);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use recstore_core::{Criteria, Record, RecordStore, StoreConfig, Value};
}

pub use fixtures::*;
pub use generators::*;
