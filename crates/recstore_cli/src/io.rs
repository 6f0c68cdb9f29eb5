//! Record file loading and saving.

use recstore_codec::{from_cbor, from_json, to_cbor, to_json_pretty};
use recstore_core::Record;
use std::fs;
use std::path::Path;
use tracing::info;

/// Returns true when the path should be read and written as CBOR.
fn is_cbor(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cbor"))
}

/// Loads records from a JSON or CBOR file.
pub fn load_records(path: &Path) -> Result<Vec<Record>, Box<dyn std::error::Error>> {
    let records: Vec<Record> = if is_cbor(path) {
        from_cbor(&fs::read(path)?)?
    } else {
        from_json(&fs::read_to_string(path)?)?
    };
    info!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}

/// Writes records to a JSON or CBOR file, replacing its contents.
pub fn save_records(path: &Path, records: &[Record]) -> Result<(), Box<dyn std::error::Error>> {
    if is_cbor(path) {
        fs::write(path, to_cbor(records)?)?;
    } else {
        let mut text = to_json_pretty(records)?;
        text.push('\n');
        fs::write(path, text)?;
    }
    info!("Saved {} records to {:?}", records.len(), path);
    Ok(())
}
