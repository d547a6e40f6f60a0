//! The [`Node`] identity type.
//!
//! A `Node` is a newtype over `u32`. Ids are handed out in row-major order by
//! [`GridGraph`](crate::GridGraph); a node carries no coordinates or edges of
//! its own, so it is cheap to copy, hash and store in sets.

use std::fmt;

/// Opaque identity of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node(u32);

impl Node {
    /// Create a node with the given id.
    ///
    /// Only the graph should mint nodes during normal use; this is public so
    /// tests and tools can name a node that belongs to no graph.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The stable integer id.
    pub const fn id(self) -> u32 {
        self.0
    }

    /// The id as a slice index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Node {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<Node> for u32 {
    fn from(n: Node) -> Self {
        n.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip() {
        let n = Node::new(42);
        assert_eq!(n.id(), 42);
        assert_eq!(n.index(), 42);
        assert_eq!(u32::from(n), 42);
        assert_eq!(Node::from(42), n);
        assert_eq!(n.to_string(), "#42");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_bare_id() {
        let json = serde_json::to_string(&Node::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Node::new(7));
    }
}
