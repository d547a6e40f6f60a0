//! Edge weights for the implicit 8-connected grid.
//!
//! [`WeightFunction::build`] walks every node once, enumerates its in-bounds
//! geometric neighbours, and stores one entry per undirected edge. Lookups are
//! then a single hash probe; neighbour enumeration probes at most eight
//! candidate pairs.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::f64::consts::SQRT_2;

use gridpal_core::{GridGraph, Node, Point, Range};
use log::debug;

/// Weight of a horizontal or vertical edge.
pub const ORTHOGONAL_WEIGHT: f64 = 1.0;

/// Weight of a diagonal edge.
pub const DIAGONAL_WEIGHT: f64 = SQRT_2;

/// An undirected edge, stored with the smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    lo: Node,
    hi: Node,
}

impl Edge {
    /// The edge `{a, b}`. Argument order does not matter.
    #[inline]
    pub fn new(a: Node, b: Node) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Both endpoints, smaller id first.
    #[inline]
    pub fn nodes(self) -> (Node, Node) {
        (self.lo, self.hi)
    }
}

/// Symmetric map from adjacent node pairs to positive edge weights.
#[derive(Debug, Clone)]
pub struct WeightFunction {
    bounds: Range,
    weights: HashMap<Edge, f64>,
}

impl WeightFunction {
    /// Record every orthogonal and diagonal edge of `graph`.
    ///
    /// Walls keep their edges; skipping walls is up to the search.
    pub fn build(graph: &GridGraph) -> Self {
        let bounds = graph.bounds();
        let capacity = expected_edges(bounds.width() as usize, bounds.height() as usize);
        let mut weights = HashMap::with_capacity(capacity);

        for p in bounds {
            let Ok(a) = graph.node_at(p) else {
                continue;
            };
            for q in p.neighbors_8() {
                let Ok(b) = graph.node_at(q) else {
                    continue;
                };
                if let Entry::Vacant(slot) = weights.entry(Edge::new(a, b)) {
                    slot.insert(step_weight(p, q));
                }
            }
        }

        debug!(
            "weight function: {} edges for {}x{} grid",
            weights.len(),
            bounds.width(),
            bounds.height()
        );
        Self { bounds, weights }
    }

    /// Weight of the edge `{a, b}`, or `None` if the two are not adjacent.
    #[inline]
    pub fn weight(&self, a: Node, b: Node) -> Option<f64> {
        self.weights.get(&Edge::new(a, b)).copied()
    }

    /// Adjacent nodes of `node` with their edge weights.
    ///
    /// Yields nothing for a node outside the graph.
    pub fn neighbors(&self, node: Node) -> impl Iterator<Item = (Node, f64)> + '_ {
        let candidates = self.point_of(node).map(Point::neighbors_8);
        candidates
            .into_iter()
            .flatten()
            .filter_map(move |q| {
                let other = self.node_of(q)?;
                Some((other, self.weight(node, other)?))
            })
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Every edge with its weight, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (Edge, f64)> + '_ {
        self.weights.iter().map(|(&e, &w)| (e, w))
    }

    fn point_of(&self, node: Node) -> Option<Point> {
        let w = self.bounds.width() as usize;
        let i = node.index();
        if i >= self.bounds.len() {
            return None;
        }
        Some(Point::new((i % w) as i32, (i / w) as i32))
    }

    fn node_of(&self, p: Point) -> Option<Node> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(Node::new((p.y * self.bounds.width() + p.x) as u32))
    }
}

fn step_weight(from: Point, to: Point) -> f64 {
    if from.is_diagonal(to) {
        DIAGONAL_WEIGHT
    } else {
        ORTHOGONAL_WEIGHT
    }
}

/// `h(w-1)` horizontal + `w(h-1)` vertical + `2(w-1)(h-1)` diagonal edges.
fn expected_edges(w: usize, h: usize) -> usize {
    let (w1, h1) = (w.saturating_sub(1), h.saturating_sub(1));
    h * w1 + w * h1 + 2 * w1 * h1
}
