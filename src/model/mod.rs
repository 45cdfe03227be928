//! # Route Graph Model
//!
//! Plain DTOs shared by storage, search, ranking and reporting.
//!
//! Design rule: this module is pure data — no I/O, no traversal logic.

pub mod node;
pub mod edge;
pub mod path;

pub use node::{Node, NodeId, Adjacency};
pub use edge::{Edge, Weight};
pub use path::PathCandidate;
