//! TypeRepresentation — the type handle exposed to callers.

use std::fmt;

use crate::model::Value;
use super::TypeConstructor;

/// The immutable handle for one Cypher kind.
///
/// Two representations are equal iff they wrap the same constructor, so a
/// handle obtained anywhere compares equal (and hashes identically) to the
/// registry's. Printable form is the kind's canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRepresentation {
    constructor: TypeConstructor,
}

impl TypeRepresentation {
    pub const fn new(constructor: TypeConstructor) -> Self {
        Self { constructor }
    }

    pub const fn name(&self) -> &'static str {
        self.constructor.name()
    }

    /// Is `value` an instance of this type? Delegates unchanged to the
    /// wrapped constructor's predicate.
    pub fn is_type_of(&self, value: &Value) -> bool {
        self.constructor.covers(value)
    }

    pub const fn constructor(&self) -> TypeConstructor {
        self.constructor
    }
}

impl fmt::Display for TypeRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
