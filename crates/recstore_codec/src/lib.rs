//! # recstore codec
//!
//! Scalar field values and the interchange formats used by recstore.
//!
//! This crate provides:
//! - [`Value`], the scalar stored in a record field
//! - JSON helpers backed by `serde_json`
//! - CBOR helpers backed by `ciborium`
//!
//! ## Value Rules
//!
//! - Only null, booleans, 64-bit integers, finite floats and UTF-8 text
//!   are accepted
//! - Integers and floats never compare equal (`1` is not `1.0`)
//! - Arrays and maps are rejected (records are flat)
//!
//! ## Usage
//!
//! ```
//! use recstore_codec::{from_json, to_json, Value};
//!
//! let value: Value = from_json("1001").unwrap();
//! assert_eq!(value, Value::Integer(1001));
//! assert_eq!(to_json(&value).unwrap(), "1001");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod cbor;
mod error;
mod json;
mod value;

pub use cbor::{from_cbor, to_cbor};
pub use error::{CodecError, CodecResult};
pub use json::{from_json, to_json, to_json_pretty};
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_and_cbor_agree_on_scalars() {
        let values = vec![
            Value::Null,
            Value::Bool(true),
            Value::Integer(-7),
            Value::float(18.5).unwrap(),
            Value::float(1.0).unwrap(),
            Value::Text("Reema".to_string()),
        ];

        let from_text: Vec<Value> = from_json(&to_json(&values).unwrap()).unwrap();
        let from_bytes: Vec<Value> = from_cbor(&to_cbor(&values).unwrap()).unwrap();

        assert_eq!(from_text, values);
        assert_eq!(from_bytes, values);
    }

    #[test]
    fn non_finite_float_rejected_from_cbor() {
        let bytes = to_cbor(&f64::NAN).unwrap();
        assert!(from_cbor::<Value>(&bytes).is_err());

        let bytes = to_cbor(&f64::INFINITY).unwrap();
        assert!(from_cbor::<Value>(&bytes).is_err());
    }
}
