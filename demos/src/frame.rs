//! Turning tracker snapshots into a picture.
//!
//! [`Frame::compose`] decides what each cell looks like; the terminal code
//! only maps [`Shade`]s to colours. Precedence, lowest to highest:
//! empty, open, closed, path, endpoints. Walls are never searched, so they
//! cannot collide with open/closed.

use gridpal_core::{GridGraph, Node, Point};
use gridpal_paths::{NodeState, Snapshot};

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Empty,
    Wall,
    Open,
    Closed,
    Path,
    Source,
    Target,
}

/// One composed picture of the grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    cells: Vec<Shade>,
}

impl Frame {
    /// Compose the picture for `graph` given the current search progress.
    pub fn compose(
        graph: &GridGraph,
        snapshot: &Snapshot,
        endpoints: (Node, Node),
        path: &[Node],
    ) -> Self {
        let mut cells: Vec<Shade> = graph
            .nodes()
            .map(|n| {
                if graph.is_wall(n) {
                    return Shade::Wall;
                }
                match snapshot.state_of(n) {
                    NodeState::Closed => Shade::Closed,
                    NodeState::Open => Shade::Open,
                    NodeState::Unvisited => Shade::Empty,
                }
            })
            .collect();

        let mut paint = |n: Node, shade: Shade| {
            if let Some(c) = cells.get_mut(n.index()) {
                *c = shade;
            }
        };
        for &n in path {
            paint(n, Shade::Path);
        }
        paint(endpoints.0, Shade::Source);
        paint(endpoints.1, Shade::Target);

        Self {
            width: graph.width(),
            height: graph.height(),
            cells,
        }
    }

    /// Shade at `p`, or `None` outside the frame.
    pub fn at(&self, p: Point) -> Option<Shade> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        self.cells.get((p.y * self.width + p.x) as usize).copied()
    }

    /// Rows of shades, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Shade]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Number of cells with the given shade.
    pub fn count(&self, shade: Shade) -> usize {
        self.cells.iter().filter(|&&s| s == shade).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpal_paths::ProgressTracker;

    #[test]
    fn closed_wins_over_open() {
        let g = GridGraph::new(5, 5).unwrap();
        let at = |x, y| g.node_at(Point::new(x, y)).unwrap();
        let t = ProgressTracker::new();
        t.begin();
        for n in [at(0, 0), at(1, 0), at(1, 1)] {
            t.reached(n);
        }
        t.close(at(0, 0));

        let frame = Frame::compose(&g, &t.snapshot(), (at(4, 4), at(4, 3)), &[]);
        assert_eq!(frame.at(Point::new(0, 0)), Some(Shade::Closed));
        assert_eq!(frame.at(Point::new(1, 0)), Some(Shade::Open));
        assert_eq!(frame.at(Point::new(1, 1)), Some(Shade::Open));
        assert_eq!(frame.at(Point::new(2, 2)), Some(Shade::Empty));
        assert_eq!(frame.at(Point::new(4, 4)), Some(Shade::Source));
        assert_eq!(frame.at(Point::new(4, 3)), Some(Shade::Target));
        assert_eq!(frame.at(Point::new(5, 0)), None);
        assert_eq!(frame.count(Shade::Open), 2);
    }

    #[test]
    fn path_and_walls() {
        let g = GridGraph::from_walls(3, 2, [Point::new(1, 1)]).unwrap();
        let at = |x, y| g.node_at(Point::new(x, y)).unwrap();
        let path = [at(0, 0), at(1, 0), at(2, 0)];
        let frame = Frame::compose(&g, &Snapshot::default(), (path[0], path[2]), &path);

        let rows: Vec<Vec<Shade>> = frame.rows().map(<[Shade]>::to_vec).collect();
        assert_eq!(
            rows,
            vec![
                vec![Shade::Source, Shade::Path, Shade::Target],
                vec![Shade::Empty, Shade::Wall, Shade::Empty],
            ]
        );
    }
}
