//! Scalar literals and raw SQL fragments.
//!
//! [`Value`] is the typed scalar that ends up rendered into a statement;
//! [`Raw`] is an opaque pre-formatted fragment inserted verbatim, bypassing
//! all quoting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

#[cfg(feature = "rust_decimal")]
use rust_decimal::Decimal;

/// A scalar literal destined for a rendered statement.
///
/// Conversions exist for the usual Rust scalars plus the ecosystem types
/// supported as column values (chrono date/time, uuid, serde_json).
/// `Option<T>` converts to [`Value::Null`] when `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// String
    Str(String),
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// Date and time, no offset
    DateTime(NaiveDateTime),
    /// UUID
    Uuid(Uuid),
    /// JSON document
    Json(JsonValue),
    /// Arbitrary-precision decimal
    #[cfg(feature = "rust_decimal")]
    Decimal(Decimal),
}

impl Value {
    /// Whether this value is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i8> for Value {
    fn from(n: i8) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Value::UInt(n as u64)
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Value::UInt(n as u64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::UInt(n as u64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveTime> for Value {
    fn from(t: NaiveTime) -> Self {
        Value::Time(t)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt.naive_utc())
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Uuid(u)
    }
}

impl From<JsonValue> for Value {
    fn from(j: JsonValue) -> Self {
        Value::Json(j)
    }
}

#[cfg(feature = "rust_decimal")]
impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// An opaque pre-formatted SQL fragment inserted verbatim, bypassing quoting.
///
/// # Safety
/// The text is concatenated into the statement as-is. The caller must ensure
/// it is safe, no escaping is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw(String);

impl Raw {
    /// Wrap a pre-formatted SQL fragment.
    pub fn new(sql: impl Into<String>) -> Self {
        Raw(sql.into())
    }

    /// The fragment text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the fragment, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Raw {
    fn from(s: &str) -> Self {
        Raw(s.to_string())
    }
}

impl From<String> for Raw {
    fn from(s: String) -> Self {
        Raw(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_none_is_null() {
        let v: Value = Option::<i32>::None.into();
        assert!(v.is_null());
    }

    #[test]
    fn option_some_unwraps() {
        let v: Value = Some("abc").into();
        assert_eq!(v, Value::Str("abc".to_string()));
    }

    #[test]
    fn narrow_ints_widen() {
        assert_eq!(Value::from(7i16), Value::Int(7));
        assert_eq!(Value::from(7u16), Value::UInt(7));
    }

    #[test]
    fn datetime_utc_drops_offset() {
        let dt = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(
            Value::from(dt),
            Value::DateTime(DateTime::from_timestamp(0, 0).unwrap().naive_utc())
        );
    }

    #[test]
    fn raw_roundtrip() {
        let raw = Raw::new("NOW()");
        assert_eq!(raw.as_str(), "NOW()");
        assert_eq!(raw.into_string(), "NOW()");
    }
}
