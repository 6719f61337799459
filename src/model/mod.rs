//! # Query-Result Value Model
//!
//! Clean DTOs for the Neo4j-compatible value model a query result carries.
//! These types cross every boundary: wire ↔ type system ↔ user.
//!
//! Design rule: pure data — no I/O, no state, no async. The type system in
//! [`crate::types`] classifies these values but never constructs them.

pub mod node;
pub mod relationship;
pub mod path;
pub mod value;
pub mod property_map;

pub use node::{Node, NodeId};
pub use relationship::{Relationship, RelId};
pub use path::Path;
pub use value::{Value, IsoDuration};
pub use property_map::PropertyMap;
