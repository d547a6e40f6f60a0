//! The [`WallSet`] of impassable nodes.
//!
//! Stored as a dense membership mask indexed by node id, plus the count, so
//! that lookups are a single bounds-checked index and iteration is row-major.

use rand::{Rng, RngExt};

use crate::node::Node;

/// Set of wall nodes for one graph. Immutable once the graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallSet {
    mask: Vec<bool>,
    count: usize,
}

impl WallSet {
    /// An empty set sized for `len` nodes.
    pub(crate) fn empty(len: usize) -> Self {
        Self {
            mask: vec![false; len],
            count: 0,
        }
    }

    /// Mark each of `len` nodes as a wall with probability `p`, one
    /// independent draw per node in id order.
    pub(crate) fn sample(len: usize, p: f64, rng: &mut impl Rng) -> Self {
        let mut set = Self::empty(len);
        for i in 0..len {
            if rng.random_bool(p) {
                set.mask[i] = true;
                set.count += 1;
            }
        }
        set
    }

    pub(crate) fn insert(&mut self, node: Node) {
        if let Some(slot) = self.mask.get_mut(node.index()) {
            if !*slot {
                *slot = true;
                self.count += 1;
            }
        }
    }

    /// Whether `node` is a wall. Nodes outside the graph are not walls.
    #[inline]
    pub fn contains(&self, node: Node) -> bool {
        self.mask.get(node.index()).copied().unwrap_or(false)
    }

    /// Number of walls.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Wall nodes in ascending id (row-major) order.
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, wall)| **wall)
            .map(|(i, _)| Node::new(i as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn insert_is_idempotent() {
        let mut w = WallSet::empty(4);
        w.insert(Node::new(2));
        w.insert(Node::new(2));
        assert_eq!(w.len(), 1);
        assert!(w.contains(Node::new(2)));
        assert!(!w.contains(Node::new(1)));
        assert_eq!(w.iter().collect::<Vec<_>>(), vec![Node::new(2)]);
    }

    #[test]
    fn foreign_nodes_are_not_walls() {
        let mut w = WallSet::empty(2);
        w.insert(Node::new(10));
        assert!(w.is_empty());
        assert!(!w.contains(Node::new(10)));
    }

    #[test]
    fn sample_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(WallSet::sample(50, 0.0, &mut rng).is_empty());
        assert_eq!(WallSet::sample(50, 1.0, &mut rng).len(), 50);
    }

    #[test]
    fn sample_is_reproducible_for_a_seed() {
        let a = WallSet::sample(200, 0.3, &mut StdRng::seed_from_u64(1));
        let b = WallSet::sample(200, 0.3, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert!(a.len() > 0 && a.len() < 200);
    }
}
