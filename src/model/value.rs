//! Universal value type covering the Cypher type system.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::Error;
use super::{Node, Path, Relationship};

/// A materialized query-result value.
///
/// Covers every concrete kind in the Cypher type system:
/// - Scalars: Bool, Int, Float, String, Bytes
/// - Containers: List, Map
/// - Graph: Node, Relationship, Path
/// - Temporal: Date, Time, LocalTime, DateTime, LocalDateTime, Duration
/// - Spatial: Point2D, Point3D
///
/// `Null` is the absent-value marker, distinct from a value of any concrete
/// kind. TIME and DATE_TIME carry a UTC offset; LOCAL_TIME and
/// LOCAL_DATE_TIME do not — they are separate kinds, never interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(HashMap<String, Value>),

    // Graph types
    Node(Box<Node>),
    Relationship(Box<Relationship>),
    Path(Box<Path>),

    // Temporal types
    Date(NaiveDate),
    Time { time: NaiveTime, offset_seconds: i32 },
    LocalTime(NaiveTime),
    DateTime(DateTime<FixedOffset>),
    LocalDateTime(NaiveDateTime),
    Duration(IsoDuration),

    // Spatial types
    Point2D { srid: i32, x: f64, y: f64 },
    Point3D { srid: i32, x: f64, y: f64, z: f64 },
}

/// ISO 8601 duration (months, days, seconds, nanoseconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsoDuration {
    pub months: i64,
    pub days: i64,
    pub seconds: i64,
    pub nanoseconds: i32,
}

// ============================================================================
// Kind inspection
// ============================================================================

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }
}

// ============================================================================
// Optional extraction
// ============================================================================

impl Value {
    /// The integer payload, if this is an Int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The float payload; Int widens losslessly enough for display math.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

// ============================================================================
// Checked extraction
// ============================================================================

/// Builds the `TypeError` for a failed extraction and emits a trace event.
fn uncoercible(expected: &'static str, value: &Value) -> Error {
    let got = crate::types::TypeConstructor::of(value).name();
    tracing::trace!(expected, got, "value not coercible to requested type");
    Error::TypeError {
        expected: expected.into(),
        got: got.into(),
    }
}

impl Value {
    /// Exact extraction: fails unless this is an Int (a Float is never an
    /// INTEGER).
    pub fn try_as_int(&self) -> crate::Result<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(uncoercible("INTEGER", other)),
        }
    }

    pub fn try_as_float(&self) -> crate::Result<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            other => Err(uncoercible("FLOAT", other)),
        }
    }

    pub fn try_as_bool(&self) -> crate::Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(uncoercible("BOOLEAN", other)),
        }
    }

    pub fn try_as_str(&self) -> crate::Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(uncoercible("STRING", other)),
        }
    }

    pub fn try_as_bytes(&self) -> crate::Result<&[u8]> {
        match self {
            Value::Bytes(b) => Ok(b),
            other => Err(uncoercible("BYTES", other)),
        }
    }

    pub fn try_as_list(&self) -> crate::Result<&[Value]> {
        match self {
            Value::List(l) => Ok(l),
            other => Err(uncoercible("LIST", other)),
        }
    }

    pub fn try_as_map(&self) -> crate::Result<&HashMap<String, Value>> {
        match self {
            Value::Map(m) => Ok(m),
            other => Err(uncoercible("MAP", other)),
        }
    }

    pub fn try_as_node(&self) -> crate::Result<&Node> {
        match self {
            Value::Node(n) => Ok(n),
            other => Err(uncoercible("NODE", other)),
        }
    }

    pub fn try_as_relationship(&self) -> crate::Result<&Relationship> {
        match self {
            Value::Relationship(r) => Ok(r),
            other => Err(uncoercible("RELATIONSHIP", other)),
        }
    }

    pub fn try_as_path(&self) -> crate::Result<&Path> {
        match self {
            Value::Path(p) => Ok(p),
            other => Err(uncoercible("PATH", other)),
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::Int(v as i64) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Int(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Float(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::String(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::String(v.to_owned()) } }
impl From<Node> for Value { fn from(v: Node) -> Self { Value::Node(Box::new(v)) } }
impl From<Relationship> for Value { fn from(v: Relationship) -> Self { Value::Relationship(Box::new(v)) } }
impl From<Path> for Value { fn from(v: Path) -> Self { Value::Path(Box::new(v)) } }
impl From<NaiveDate> for Value { fn from(v: NaiveDate) -> Self { Value::Date(v) } }
impl From<IsoDuration> for Value { fn from(v: IsoDuration) -> Self { Value::Duration(v) } }
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Value::Bytes(b) => write!(f, "<bytes[{}]>", b.len()),
            Value::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Node(n) => write!(f, "{n:?}"),
            Value::Relationship(r) => write!(f, "{r:?}"),
            Value::Path(p) => write!(f, "{p:?}"),
            Value::Date(d) => write!(f, "{d}"),
            Value::Time { time, offset_seconds } => {
                let sign = if *offset_seconds < 0 { '-' } else { '+' };
                let abs = offset_seconds.abs();
                write!(f, "{time}{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
            }
            Value::LocalTime(t) => write!(f, "{t}"),
            Value::DateTime(dt) => write!(f, "{dt}"),
            Value::LocalDateTime(dt) => write!(f, "{dt}"),
            Value::Duration(d) => write!(f, "P{}M{}DT{}S", d.months, d.days, d.seconds),
            Value::Point2D { srid, x, y } => write!(f, "point({{srid: {srid}, x: {x}, y: {y}}})"),
            Value::Point3D { srid, x, y, z } => write!(f, "point({{srid: {srid}, x: {x}, y: {y}, z: {z}}})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(3.14), Value::Float(3.14));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn test_optional_extraction() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Float(2.5).as_int(), None);
        assert_eq!(Value::Int(7).as_float(), Some(7.0));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Null.as_str(), None);
    }

    #[test]
    fn test_checked_extraction_exact() {
        assert_eq!(Value::Int(7).try_as_int().unwrap(), 7);

        // No coercion: a FLOAT is never an INTEGER.
        let err = Value::Float(7.0).try_as_int().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type error: expected INTEGER, got FLOAT"
        );
    }

    #[test]
    fn test_checked_extraction_null() {
        let err = Value::Null.try_as_str().unwrap_err();
        assert_eq!(err.to_string(), "Type error: expected STRING, got NULL");
    }

    #[test]
    fn test_serde_roundtrip() {
        let v = Value::List(vec![
            Value::Int(1),
            Value::String("two".into()),
            Value::Null,
        ]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(vec![1i64, 2, 3]).to_string(), "[1, 2, 3]");
        let d = Value::Duration(IsoDuration { months: 1, days: 2, seconds: 3, nanoseconds: 0 });
        assert_eq!(d.to_string(), "P1M2DT3S");
    }
}
