//! The grid graph model behind the gridpal visualizer.
//!
//! This crate provides the read-only half of the system: a rectangular
//! [`GridGraph`] of opaque [`Node`]s, the [`Point`] coordinate each node maps
//! to, and the [`WallSet`] of impassable nodes. Everything here is immutable
//! after construction and can be shared across threads freely.

pub mod error;
pub mod geom;
pub mod graph;
pub mod node;
pub mod walls;

pub use error::GridError;
pub use geom::{Point, Range};
pub use graph::GridGraph;
pub use node::Node;
pub use walls::WallSet;
