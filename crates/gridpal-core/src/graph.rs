//! The [`GridGraph`] type: a fixed rectangle of [`Node`]s with walls.
//!
//! Nodes are created once, in row-major order, so the node at `(x, y)` has id
//! `y * width + x`. The node array and the node→coordinate table are both
//! indexed by id, which makes the bijection between the two total and O(1)
//! in both directions.
//!
//! A `GridGraph` is never mutated after construction. It is `Send + Sync`
//! and can be shared between a search thread and a render thread through an
//! `Arc` or a plain reference.

use log::debug;
use rand::Rng;

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::node::Node;
use crate::walls::WallSet;

/// A rectangular grid of nodes and the set of walls among them.
#[derive(Debug, Clone)]
pub struct GridGraph {
    bounds: Range,
    nodes: Vec<Node>,
    coords: Vec<Point>,
    walls: WallSet,
}

impl GridGraph {
    /// Create a wall-free graph.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let len = checked_len(width, height)?;
        Ok(Self::build(width, height, WallSet::empty(len)))
    }

    /// Create a graph whose nodes are each, independently, a wall with
    /// probability `wall_probability`. One draw per node, in id order.
    pub fn with_walls(
        width: i32,
        height: i32,
        wall_probability: f64,
        rng: &mut impl Rng,
    ) -> Result<Self, GridError> {
        let len = checked_len(width, height)?;
        if !(0.0..=1.0).contains(&wall_probability) {
            return Err(GridError::InvalidWallProbability(wall_probability));
        }
        Ok(Self::build(
            width,
            height,
            WallSet::sample(len, wall_probability, rng),
        ))
    }

    /// Create a graph with walls at exactly the given coordinates.
    pub fn from_walls(
        width: i32,
        height: i32,
        walls: impl IntoIterator<Item = Point>,
    ) -> Result<Self, GridError> {
        let mut graph = Self::new(width, height)?;
        let mut set = WallSet::empty(graph.len());
        for p in walls {
            set.insert(graph.node_at(p)?);
        }
        debug!("placed {} fixed walls", set.len());
        graph.walls = set;
        Ok(graph)
    }

    fn build(width: i32, height: i32, walls: WallSet) -> Self {
        let bounds = Range::new(0, 0, width, height);
        let coords: Vec<Point> = bounds.iter().collect();
        let nodes = (0..coords.len() as u32).map(Node::new).collect();
        debug!(
            "built {}x{} grid graph with {} walls",
            width,
            height,
            walls.len()
        );
        Self {
            bounds,
            nodes,
            coords,
            walls,
        }
    }

    /// Width in columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of nodes, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `node` was created by this graph.
    #[inline]
    pub fn contains(&self, node: Node) -> bool {
        node.index() < self.nodes.len()
    }

    /// The node at coordinate `p`.
    pub fn node_at(&self, p: Point) -> Result<Node, GridError> {
        if !self.bounds.contains(p) {
            return Err(GridError::OutOfBounds(p));
        }
        let i = (p.y as usize) * (self.width() as usize) + (p.x as usize);
        Ok(self.nodes[i])
    }

    /// The coordinate of `node`.
    pub fn coordinate_of(&self, node: Node) -> Result<Point, GridError> {
        self.coords
            .get(node.index())
            .copied()
            .ok_or(GridError::UnknownNode(node))
    }

    /// Whether `node` is a wall. Foreign nodes are reported as non-walls.
    #[inline]
    pub fn is_wall(&self, node: Node) -> bool {
        self.walls.contains(node)
    }

    /// The wall set, for renderers that draw walls in one pass.
    #[inline]
    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }
}

fn checked_len(width: i32, height: i32) -> Result<usize, GridError> {
    let invalid = GridError::InvalidDimension { width, height };
    if width <= 0 || height <= 0 {
        return Err(invalid);
    }
    // Node ids are u32.
    (width as u64)
        .checked_mul(height as u64)
        .filter(|&n| n <= u32::MAX as u64)
        .map(|n| n as usize)
        .ok_or(invalid)
}
