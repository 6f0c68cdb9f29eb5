//! Field/value criteria.

use crate::error::{CoreError, CoreResult};
use crate::record::{check_field_name, Record};
use recstore_codec::Value;
use std::fmt;
use std::str::FromStr;

/// A single field/value pair used to search or remove records.
///
/// A record matches when it has the field and the field's value is equal
/// to the criteria value. A record without the field never matches, even
/// against [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    field: String,
    value: Value,
}

impl Criteria {
    /// Creates criteria for `field == value`.
    ///
    /// Fails with [`CoreError::InvalidCriteria`] when the field name is
    /// empty or has leading or trailing whitespace.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> CoreResult<Self> {
        let field = field.into();
        check_field_name(&field).map_err(CoreError::invalid_criteria)?;
        Ok(Self {
            field,
            value: value.into(),
        })
    }

    /// Parses `field=value`, reading the value with [`Value::from_literal`].
    pub fn parse(expr: &str) -> CoreResult<Self> {
        let (field, literal) = expr
            .split_once('=')
            .ok_or_else(|| CoreError::invalid_criteria(format!("expected FIELD=VALUE, got {expr:?}")))?;
        Self::new(field, Value::from_literal(literal))
    }

    /// The field to compare.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The value to compare against.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns true if the record matches.
    pub fn matches(&self, record: &Record) -> bool {
        record.get(&self.field) == Some(&self.value)
    }
}

impl FromStr for Criteria {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}
