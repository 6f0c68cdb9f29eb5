//! Output rendering.

use recstore_codec::to_json_pretty;
use recstore_core::Record;

/// Renders one record as `field=value` pairs in field order.
pub fn record_line(record: &Record) -> String {
    record
        .fields()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders records as text lines or a JSON array.
pub fn records(records: &[&Record], format: &str) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        "json" => Ok(to_json_pretty(records)?),
        _ => Ok(records
            .iter()
            .map(|record| record_line(record))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recstore_core::Value;

    #[test]
    fn text_line_follows_field_order() {
        let record = Record::new()
            .with("CustomerId", 1)
            .with("FirstName", "Ravi")
            .with("Active", true)
            .with("Notes", Value::Null);
        assert_eq!(
            record_line(&record),
            "CustomerId=1 FirstName=Ravi Active=true Notes=null"
        );
    }

    #[test]
    fn text_joins_lines() {
        let a = Record::new().with("id", 1);
        let b = Record::new().with("id", 2);
        assert_eq!(records(&[&a, &b], "text").unwrap(), "id=1\nid=2");
        assert_eq!(records(&[], "text").unwrap(), "");
    }

    #[test]
    fn json_is_array() {
        let a = Record::new().with("id", 1).with("name", "Lotus");
        let text = records(&[&a], "json").unwrap();
        let parsed: Vec<Record> = recstore_codec::from_json(&text).unwrap();
        assert_eq!(parsed, vec![a]);
    }
}
