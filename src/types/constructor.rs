//! TypeConstructor — the closed taxonomy of Cypher value kinds.

use crate::model::Value;

/// One kind in the Cypher type system.
///
/// The set is fixed by the query-result protocol's value model and is never
/// extended at runtime. Covariant kinds (ANY, NUMBER) own no values of their
/// own; their predicates are composed from the leaf predicates at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeConstructor {
    Any,
    Boolean,
    Bytes,
    String,
    Number,
    Integer,
    Float,
    List,
    Map,
    Node,
    Relationship,
    Path,
    Point2D,
    Point3D,
    Date,
    Time,
    LocalTime,
    LocalDateTime,
    DateTime,
    Duration,
    Null,
}

impl TypeConstructor {
    /// Every kind, in the protocol's canonical order.
    pub const ALL: [TypeConstructor; 21] = [
        TypeConstructor::Any,
        TypeConstructor::Boolean,
        TypeConstructor::Bytes,
        TypeConstructor::String,
        TypeConstructor::Number,
        TypeConstructor::Integer,
        TypeConstructor::Float,
        TypeConstructor::List,
        TypeConstructor::Map,
        TypeConstructor::Node,
        TypeConstructor::Relationship,
        TypeConstructor::Path,
        TypeConstructor::Point2D,
        TypeConstructor::Point3D,
        TypeConstructor::Date,
        TypeConstructor::Time,
        TypeConstructor::LocalTime,
        TypeConstructor::LocalDateTime,
        TypeConstructor::DateTime,
        TypeConstructor::Duration,
        TypeConstructor::Null,
    ];

    /// Canonical display name, stable and unique across kinds.
    pub const fn name(self) -> &'static str {
        match self {
            TypeConstructor::Any => "ANY",
            TypeConstructor::Boolean => "BOOLEAN",
            TypeConstructor::Bytes => "BYTES",
            TypeConstructor::String => "STRING",
            TypeConstructor::Number => "NUMBER",
            TypeConstructor::Integer => "INTEGER",
            TypeConstructor::Float => "FLOAT",
            TypeConstructor::List => "LIST",
            TypeConstructor::Map => "MAP",
            TypeConstructor::Node => "NODE",
            TypeConstructor::Relationship => "RELATIONSHIP",
            TypeConstructor::Path => "PATH",
            TypeConstructor::Point2D => "POINT_2D",
            TypeConstructor::Point3D => "POINT_3D",
            TypeConstructor::Date => "DATE",
            TypeConstructor::Time => "TIME",
            TypeConstructor::LocalTime => "LOCAL_TIME",
            TypeConstructor::LocalDateTime => "LOCAL_DATE_TIME",
            TypeConstructor::DateTime => "DATE_TIME",
            TypeConstructor::Duration => "DURATION",
            TypeConstructor::Null => "NULL",
        }
    }

    /// The exact (leaf) constructor of a value.
    pub fn of(value: &Value) -> TypeConstructor {
        match value {
            Value::Null => TypeConstructor::Null,
            Value::Bool(_) => TypeConstructor::Boolean,
            Value::Int(_) => TypeConstructor::Integer,
            Value::Float(_) => TypeConstructor::Float,
            Value::String(_) => TypeConstructor::String,
            Value::Bytes(_) => TypeConstructor::Bytes,
            Value::List(_) => TypeConstructor::List,
            Value::Map(_) => TypeConstructor::Map,
            Value::Node(_) => TypeConstructor::Node,
            Value::Relationship(_) => TypeConstructor::Relationship,
            Value::Path(_) => TypeConstructor::Path,
            Value::Date(_) => TypeConstructor::Date,
            Value::Time { .. } => TypeConstructor::Time,
            Value::LocalTime(_) => TypeConstructor::LocalTime,
            Value::DateTime(_) => TypeConstructor::DateTime,
            Value::LocalDateTime(_) => TypeConstructor::LocalDateTime,
            Value::Duration(_) => TypeConstructor::Duration,
            Value::Point2D { .. } => TypeConstructor::Point2D,
            Value::Point3D { .. } => TypeConstructor::Point3D,
        }
    }

    /// Membership predicate: does `value` belong to this kind?
    ///
    /// Total over every well-formed value, never panics. Leaf kinds match the
    /// value's concrete kind exactly — no coercion, so a Float value is never
    /// INTEGER. NUMBER delegates to INTEGER and FLOAT; ANY covers everything
    /// except the absent-value marker (null has no type, only the NULL kind
    /// matches it).
    pub fn covers(self, value: &Value) -> bool {
        match self {
            TypeConstructor::Any => !value.is_null(),
            TypeConstructor::Number => {
                TypeConstructor::Integer.covers(value) || TypeConstructor::Float.covers(value)
            }
            leaf => TypeConstructor::of(value) == leaf,
        }
    }
}
