//! Weighted search over gridpal grid graphs, observed live.
//!
//! This crate provides the mutable half of the system:
//!
//! - [`WeightFunction`]: the pair-keyed edge weights of the 8-connected grid
//!   (1 for orthogonal steps, √2 for diagonal ones).
//! - [`SearchObserver`]: the `begin` / `reached` / `closed` / `done` protocol
//!   a search reports through.
//! - [`ProgressTracker`]: an observer whose open/closed sets can be
//!   snapshotted from another thread while the search keeps writing.
//! - [`Search`]: reference A* ([`Search::astar_path`]) and Dijkstra
//!   ([`Search::dijkstra_path`]) implementations that drive any observer.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod dijkstra;
mod distance;
mod observer;
mod search;
mod tracker;
mod traits;
mod weights;

pub use distance::octile;
pub use observer::{LogObserver, NoOpObserver, SearchObserver};
pub use search::{Path, Search};
pub use tracker::{NodeState, ProgressTracker, Snapshot};
pub use traits::{AstarPather, GridPather, Pather, WeightedPather};
pub use weights::{DIAGONAL_WEIGHT, Edge, ORTHOGONAL_WEIGHT, WeightFunction};
