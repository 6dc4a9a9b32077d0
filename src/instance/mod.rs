//! Graph/Instance Builder.
//!
//! Parses node sets (with roles) and an edge stream into a normalized,
//! immutable [`Instance`]. Absent edges and bounds receive deterministic
//! per-variant defaults; a node id outside the declared range or a
//! malformed numeric token aborts construction.

mod builder;
mod types;

pub use builder::InstanceBuilder;
pub use types::{Edge, EdgeTable, Instance, Node, NodeRole, ProblemKind};
