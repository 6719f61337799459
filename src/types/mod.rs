//! # Cypher Type System
//!
//! The closed taxonomy of the 21 Cypher value kinds and the singleton
//! registry exposing one immutable handle per kind.
//!
//! Three layers, leaves first:
//!
//! 1. [`TypeConstructor`] — the taxonomy itself: one tag per kind, each with
//!    a canonical name and a total membership predicate over [`Value`]
//! 2. [`TypeRepresentation`] — the handle callers compare, hash and print
//! 3. [`TypeSystem`] / [`TYPE_SYSTEM`] — the const-constructed registry with
//!    one accessor per kind
//!
//! [`Value`]: crate::model::Value

pub mod constructor;
pub mod representation;
pub mod system;

pub use constructor::TypeConstructor;
pub use representation::TypeRepresentation;
pub use system::{TypeSystem, TYPE_SYSTEM};
