use gridpal_core::Node;

use crate::observer::SearchObserver;
use crate::search::{Path, Search};
use crate::traits::WeightedPather;

impl Search {
    /// Compute the shortest path from `from` to `to` with Dijkstra's
    /// algorithm (uniform-cost search), reporting progress to `observer`.
    ///
    /// Same contract as [`astar_path`](Search::astar_path) but needs no
    /// heuristic, so it explores every node cheaper than the target.
    pub fn dijkstra_path<P, O>(
        &mut self,
        pather: &P,
        from: Node,
        to: Node,
        observer: &mut O,
    ) -> Option<Path>
    where
        P: WeightedPather + ?Sized,
        O: SearchObserver + ?Sized,
    {
        self.best_first(pather, from, to, observer, |_| 0.0)
    }
}

#[cfg(test)]
mod tests {
    use gridpal_core::{GridGraph, Point};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::observer::LogObserver;
    use crate::tracker::ProgressTracker;
    use crate::traits::GridPather;
    use crate::weights::WeightFunction;

    use super::*;

    #[test]
    fn agrees_with_astar_on_random_grids() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = GridGraph::with_walls(16, 12, 0.25, &mut rng).unwrap();
            let wf = WeightFunction::build(&g);
            let p = GridPather::new(&g, &wf);
            let mut s = Search::new(&g);
            let from = g.node_at(Point::new(0, 0)).unwrap();
            let to = g.node_at(Point::new(15, 11)).unwrap();

            let d = s.dijkstra_path(&p, from, to, &mut LogObserver::new("dijkstra"));
            let a = s.astar_path(&p, from, to, &mut LogObserver::new("astar"));
            match (d, a) {
                (Some(d), Some(a)) => assert!((d.cost() - a.cost()).abs() < 1e-9),
                (None, None) => {}
                other => panic!("seed {seed}: algorithms disagree: {other:?}"),
            }
        }
    }

    #[test]
    fn dijkstra_closes_at_least_as_much_as_astar() {
        let g = GridGraph::new(20, 20).unwrap();
        let wf = WeightFunction::build(&g);
        let p = GridPather::new(&g, &wf);
        let mut s = Search::new(&g);
        let from = g.node_at(Point::new(0, 10)).unwrap();
        let to = g.node_at(Point::new(19, 10)).unwrap();

        let tracker = ProgressTracker::new();
        s.dijkstra_path(&p, from, to, &mut &tracker).unwrap();
        let dijkstra_closed = tracker.snapshot_closed().len();
        s.astar_path(&p, from, to, &mut &tracker).unwrap();
        let astar_closed = tracker.snapshot_closed().len();

        assert_eq!(tracker.run(), 2);
        assert!(astar_closed <= dijkstra_closed);
        assert!(tracker.is_closed(to));
    }

    #[test]
    fn tracker_holds_last_run_after_done() {
        let g = GridGraph::new(5, 5).unwrap();
        let wf = WeightFunction::build(&g);
        let p = GridPather::new(&g, &wf);
        let mut s = Search::new(&g);
        let from = g.node_at(Point::new(0, 0)).unwrap();
        let to = g.node_at(Point::new(2, 0)).unwrap();

        let mut tracker = ProgressTracker::new();
        let path = s.dijkstra_path(&p, from, to, &mut tracker).unwrap();
        assert_eq!(path.cost(), 2.0);
        let snap = tracker.snapshot();
        assert!(!snap.is_empty());
        assert!(snap.closed.is_subset(&snap.open));
        for n in path.nodes() {
            assert!(snap.open.contains(n));
        }
    }
}
