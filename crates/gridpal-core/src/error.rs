use std::fmt;

use crate::geom::Point;
use crate::node::Node;

/// Errors reported by [`GridGraph`](crate::GridGraph) construction and lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Width or height was not strictly positive.
    InvalidDimension { width: i32, height: i32 },
    /// A coordinate outside `[0, width) × [0, height)`.
    OutOfBounds(Point),
    /// A node that does not belong to the graph it was passed to.
    UnknownNode(Node),
    /// Wall probability outside `[0, 1]` or NaN.
    InvalidWallProbability(f64),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid grid dimension {width}x{height}")
            }
            Self::OutOfBounds(p) => write!(f, "coordinate {p} is out of bounds"),
            Self::UnknownNode(n) => write!(f, "node {n} does not belong to this graph"),
            Self::InvalidWallProbability(p) => {
                write!(f, "wall probability {p} is not within [0, 1]")
            }
        }
    }
}

impl std::error::Error for GridError {}
