//! Record store and its shared handle.

mod record_store;
mod shared;

pub use record_store::{RecordStore, Records};
pub use shared::SharedRecordStore;
