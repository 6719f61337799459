//! # cypher-types — Cypher Type System and Value Model
//!
//! The runtime type system for the dynamically-typed values a graph database
//! returns over its query-result protocol.
//!
//! ## Design Principles
//!
//! 1. **Closed taxonomy**: the 21 Cypher kinds are a fixed sum type, never
//!    extended at runtime
//! 2. **Clean DTOs**: `Node`, `Relationship`, `Path`, `Value` cross all
//!    boundaries without knowing about storage or wire formats
//! 3. **Predicates compose**: NUMBER is INTEGER ∪ FLOAT by delegation, not
//!    duplication
//! 4. **One registry**: every caller sees the same 21 type handles
//!
//! ## Quick Start
//!
//! ```rust
//! use cypher_types::{Value, TYPE_SYSTEM};
//!
//! let v = Value::from(42);
//! assert!(TYPE_SYSTEM.integer().is_type_of(&v));
//! assert!(TYPE_SYSTEM.number().is_type_of(&v));
//! assert!(TYPE_SYSTEM.any().is_type_of(&v));
//! assert!(!TYPE_SYSTEM.string().is_type_of(&v));
//! assert_eq!(TYPE_SYSTEM.integer().name(), "INTEGER");
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod types;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Node, Relationship, Path, Value, PropertyMap,
    NodeId, RelId, IsoDuration,
};

// ============================================================================
// Re-exports: Type system
// ============================================================================

pub use types::{TypeConstructor, TypeRepresentation, TypeSystem, TYPE_SYSTEM};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("Malformed path: {0}")]
    MalformedPath(String),
}

pub type Result<T> = std::result::Result<T, Error>;
