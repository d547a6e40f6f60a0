use gridpal_core::Node;

use crate::observer::SearchObserver;
use crate::search::{Path, Search};
use crate::traits::AstarPather;

impl Search {
    /// Compute the shortest path from `from` to `to` using A*, reporting
    /// progress to `observer`.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists or either endpoint is not passable. The observer sees `done`
    /// exactly once either way.
    pub fn astar_path<P, O>(
        &mut self,
        pather: &P,
        from: Node,
        to: Node,
        observer: &mut O,
    ) -> Option<Path>
    where
        P: AstarPather + ?Sized,
        O: SearchObserver + ?Sized,
    {
        self.best_first(pather, from, to, observer, |n| pather.estimate(n, to))
    }
}
