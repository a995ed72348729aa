//! Data models read and mutated by the algorithms.

pub mod array;
pub mod graph;

pub use array::ArrayModel;
pub use graph::{GraphModel, NodeId, Position};
