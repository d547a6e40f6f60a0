use gridpal_core::{GridGraph, Node};

use crate::distance::octile;
use crate::weights::WeightFunction;

/// Neighbour enumeration, the least a search needs from a graph.
pub trait Pather {
    /// Append the traversable neighbors of `node` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, node: Node, buf: &mut Vec<Node>);

    /// Whether a search may start at, end at, or pass through `node`.
    fn is_passable(&self, _node: Node) -> bool {
        true
    }
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Node, to: Node) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Node, to: Node) -> f64;
}

/// The standard pather over a [`GridGraph`] and its [`WeightFunction`].
///
/// Walls are skipped, costs come straight from the weight function and the
/// estimate is the octile distance, which is exact on an empty grid.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    graph: &'a GridGraph,
    weights: &'a WeightFunction,
}

impl<'a> GridPather<'a> {
    pub fn new(graph: &'a GridGraph, weights: &'a WeightFunction) -> Self {
        Self { graph, weights }
    }

    pub fn graph(&self) -> &'a GridGraph {
        self.graph
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, node: Node, buf: &mut Vec<Node>) {
        buf.extend(
            self.weights
                .neighbors(node)
                .map(|(n, _)| n)
                .filter(|&n| !self.graph.is_wall(n)),
        );
    }

    fn is_passable(&self, node: Node) -> bool {
        self.graph.contains(node) && !self.graph.is_wall(node)
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Node, to: Node) -> f64 {
        self.weights.weight(from, to).unwrap_or(f64::INFINITY)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Node, to: Node) -> f64 {
        match (self.graph.coordinate_of(from), self.graph.coordinate_of(to)) {
            (Ok(a), Ok(b)) => octile(a, b),
            _ => 0.0,
        }
    }
}
