use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpal_core::{GridGraph, Node};
use log::debug;

use crate::observer::SearchObserver;
use crate::traits::WeightedPather;

/// A path returned by a search, from source to target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<Node>,
    cost: f64,
}

impl Path {
    /// Nodes from source to target, both included.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Sum of the edge weights along the path.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true for a path returned by a search.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: f64,
    pub(crate) parent: u32,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

const NO_PARENT: u32 = u32::MAX;

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: 0.0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; ties go to
        // the lower index so runs are deterministic.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Reusable state for best-first searches over one graph.
///
/// `Search` owns the per-node bookkeeping array and a neighbour scratch
/// buffer, so repeated queries allocate only for the heap and the returned
/// path. Entries are invalidated lazily by bumping a generation counter.
pub struct Search {
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) generation: u32,
    pub(crate) nbuf: Vec<Node>,
}

impl Search {
    /// Caches sized for `graph`.
    pub fn new(graph: &GridGraph) -> Self {
        Self::with_len(graph.len())
    }

    /// Caches for a graph of `len` nodes.
    pub fn with_len(len: usize) -> Self {
        Self {
            nodes: vec![SearchNode::default(); len],
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Number of nodes the caches cover.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale entries could now look current.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    /// Best-first search from `from` to `to`, ordering the frontier by
    /// `g + heuristic(node)`.
    ///
    /// Reports to `observer`: `begin`, `reached` for every node whose
    /// tentative cost improves (the source included), `closed` for every node
    /// popped from the frontier, and finally `done` exactly once.
    pub(crate) fn best_first<P, O, H>(
        &mut self,
        pather: &P,
        from: Node,
        to: Node,
        observer: &mut O,
        heuristic: H,
    ) -> Option<Path>
    where
        P: WeightedPather + ?Sized,
        O: SearchObserver + ?Sized,
        H: Fn(Node) -> f64,
    {
        observer.begin();

        let valid = |n: Node| n.index() < self.nodes.len() && pather.is_passable(n);
        if !valid(from) || !valid(to) {
            debug!("search {} -> {}: endpoint missing or blocked", from, to);
            observer.done(&[]);
            return None;
        }

        let cur_gen = self.next_generation();
        let start_idx = from.index();
        let goal_idx = to.index();

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: heuristic(from),
        });
        observer.reached(from);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            self.nodes[ci].open = false;
            let current_node = Node::new(ci as u32);
            observer.closed(current_node);
            expanded += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.nodes[ci].g;

            nbuf.clear();
            pather.neighbors(current_node, &mut nbuf);

            for &np in nbuf.iter() {
                let ni = np.index();
                if ni >= self.nodes.len() {
                    continue;
                }
                let tentative_g = current_g + pather.cost(current_node, np);
                if !tentative_g.is_finite() {
                    continue;
                }

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already seen this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.parent = ci as u32;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + heuristic(np),
                });
                observer.reached(np);
            }
        };

        self.nbuf = nbuf;

        if !found {
            debug!(
                "search {} -> {}: no path after {} expansions",
                from, to, expanded
            );
            observer.done(&[]);
            return None;
        }

        // Reconstruct path.
        let mut nodes = Vec::new();
        let mut ci = goal_idx as u32;
        while ci != NO_PARENT {
            nodes.push(Node::new(ci));
            ci = self.nodes[ci as usize].parent;
        }
        nodes.reverse();

        let path = Path {
            cost: self.nodes[goal_idx].g,
            nodes,
        };
        debug!(
            "search {} -> {}: {} nodes, cost {:.3}, {} expansions",
            from,
            to,
            path.len(),
            path.cost,
            expanded
        );
        observer.done(path.nodes());
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_pops_lowest_f_first() {
        let mut heap = BinaryHeap::new();
        for (idx, f) in [(0, 3.0), (1, 1.5), (2, 2.0), (3, 1.5)] {
            heap.push(NodeRef { idx, f });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|r| r.idx)).collect();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn generation_wrap_resets_nodes() {
        let mut s = Search::with_len(3);
        s.nodes[1].generation = 5;
        s.generation = u32::MAX;
        assert_eq!(s.next_generation(), 1);
        assert!(s.nodes.iter().all(|n| n.generation == 0));
    }
}
