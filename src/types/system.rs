//! TypeSystem — the singleton registry of type handles.

use crate::model::Value;
use super::{TypeConstructor, TypeRepresentation};

/// The process-wide type registry: one handle per Cypher kind.
///
/// Const-constructed into [`TYPE_SYSTEM`], so every thread sees the fully
/// initialized registry without any runtime barrier, and every accessor
/// returns the identical `&'static` handle on every call. There is no
/// mutator and no failing accessor.
pub struct TypeSystem {
    any: TypeRepresentation,
    boolean: TypeRepresentation,
    bytes: TypeRepresentation,
    string: TypeRepresentation,
    number: TypeRepresentation,
    integer: TypeRepresentation,
    float: TypeRepresentation,
    list: TypeRepresentation,
    map: TypeRepresentation,
    node: TypeRepresentation,
    relationship: TypeRepresentation,
    path: TypeRepresentation,
    point_2d: TypeRepresentation,
    point_3d: TypeRepresentation,
    date: TypeRepresentation,
    time: TypeRepresentation,
    local_time: TypeRepresentation,
    local_date_time: TypeRepresentation,
    date_time: TypeRepresentation,
    duration: TypeRepresentation,
    null: TypeRepresentation,
}

/// The one registry. All callers share these 21 handles.
pub static TYPE_SYSTEM: TypeSystem = TypeSystem::new();

impl TypeSystem {
    const fn new() -> Self {
        Self {
            any: TypeRepresentation::new(TypeConstructor::Any),
            boolean: TypeRepresentation::new(TypeConstructor::Boolean),
            bytes: TypeRepresentation::new(TypeConstructor::Bytes),
            string: TypeRepresentation::new(TypeConstructor::String),
            number: TypeRepresentation::new(TypeConstructor::Number),
            integer: TypeRepresentation::new(TypeConstructor::Integer),
            float: TypeRepresentation::new(TypeConstructor::Float),
            list: TypeRepresentation::new(TypeConstructor::List),
            map: TypeRepresentation::new(TypeConstructor::Map),
            node: TypeRepresentation::new(TypeConstructor::Node),
            relationship: TypeRepresentation::new(TypeConstructor::Relationship),
            path: TypeRepresentation::new(TypeConstructor::Path),
            point_2d: TypeRepresentation::new(TypeConstructor::Point2D),
            point_3d: TypeRepresentation::new(TypeConstructor::Point3D),
            date: TypeRepresentation::new(TypeConstructor::Date),
            time: TypeRepresentation::new(TypeConstructor::Time),
            local_time: TypeRepresentation::new(TypeConstructor::LocalTime),
            local_date_time: TypeRepresentation::new(TypeConstructor::LocalDateTime),
            date_time: TypeRepresentation::new(TypeConstructor::DateTime),
            duration: TypeRepresentation::new(TypeConstructor::Duration),
            null: TypeRepresentation::new(TypeConstructor::Null),
        }
    }

    /// the Cypher type ANY
    pub const fn any(&self) -> &TypeRepresentation { &self.any }

    /// the Cypher type BOOLEAN
    pub const fn boolean(&self) -> &TypeRepresentation { &self.boolean }

    /// the Cypher type BYTES
    pub const fn bytes(&self) -> &TypeRepresentation { &self.bytes }

    /// the Cypher type STRING
    pub const fn string(&self) -> &TypeRepresentation { &self.string }

    /// the Cypher type NUMBER
    pub const fn number(&self) -> &TypeRepresentation { &self.number }

    /// the Cypher type INTEGER
    pub const fn integer(&self) -> &TypeRepresentation { &self.integer }

    /// the Cypher type FLOAT
    pub const fn float(&self) -> &TypeRepresentation { &self.float }

    /// the Cypher type LIST
    pub const fn list(&self) -> &TypeRepresentation { &self.list }

    /// the Cypher type MAP
    pub const fn map(&self) -> &TypeRepresentation { &self.map }

    /// the Cypher type NODE
    pub const fn node(&self) -> &TypeRepresentation { &self.node }

    /// the Cypher type RELATIONSHIP
    pub const fn relationship(&self) -> &TypeRepresentation { &self.relationship }

    /// the Cypher type PATH
    pub const fn path(&self) -> &TypeRepresentation { &self.path }

    pub const fn point_2d(&self) -> &TypeRepresentation { &self.point_2d }

    pub const fn point_3d(&self) -> &TypeRepresentation { &self.point_3d }

    pub const fn date(&self) -> &TypeRepresentation { &self.date }

    pub const fn time(&self) -> &TypeRepresentation { &self.time }

    pub const fn local_time(&self) -> &TypeRepresentation { &self.local_time }

    pub const fn local_date_time(&self) -> &TypeRepresentation { &self.local_date_time }

    pub const fn date_time(&self) -> &TypeRepresentation { &self.date_time }

    pub const fn duration(&self) -> &TypeRepresentation { &self.duration }

    /// the Cypher type NULL
    pub const fn null(&self) -> &TypeRepresentation { &self.null }

    /// The handle for a value's exact kind.
    pub fn type_of(&self, value: &Value) -> &TypeRepresentation {
        self.by_constructor(TypeConstructor::of(value))
    }

    /// The handle wrapping the given constructor.
    pub const fn by_constructor(&self, constructor: TypeConstructor) -> &TypeRepresentation {
        match constructor {
            TypeConstructor::Any => &self.any,
            TypeConstructor::Boolean => &self.boolean,
            TypeConstructor::Bytes => &self.bytes,
            TypeConstructor::String => &self.string,
            TypeConstructor::Number => &self.number,
            TypeConstructor::Integer => &self.integer,
            TypeConstructor::Float => &self.float,
            TypeConstructor::List => &self.list,
            TypeConstructor::Map => &self.map,
            TypeConstructor::Node => &self.node,
            TypeConstructor::Relationship => &self.relationship,
            TypeConstructor::Path => &self.path,
            TypeConstructor::Point2D => &self.point_2d,
            TypeConstructor::Point3D => &self.point_3d,
            TypeConstructor::Date => &self.date,
            TypeConstructor::Time => &self.time,
            TypeConstructor::LocalTime => &self.local_time,
            TypeConstructor::LocalDateTime => &self.local_date_time,
            TypeConstructor::DateTime => &self.date_time,
            TypeConstructor::Duration => &self.duration,
            TypeConstructor::Null => &self.null,
        }
    }
}
