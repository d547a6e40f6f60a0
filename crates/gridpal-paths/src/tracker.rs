//! Live search progress shared between a search thread and render threads.
//!
//! [`ProgressTracker`] holds the `open` (frontier) and `closed` (finalized)
//! node sets of the current search behind one [`RwLock`]. The search thread is
//! the only writer; any number of readers may take snapshots at any time.
//!
//! - `begin` replaces both sets in a single critical section, so a reader
//!   sees either the previous run or the new one, never half of each.
//! - Readers get owned copies ([`Snapshot`]) and iterate without holding the
//!   lock, so a slow renderer never stalls the writer for longer than one
//!   clone.
//! - Entering `closed` does not remove a node from `open`. Consumers resolve
//!   the overlap with [`Snapshot::state_of`], where closed wins.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gridpal_core::Node;
use log::{debug, trace};

use crate::observer::SearchObserver;

/// How a node should be presented, after applying closed-over-open
/// precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    Unvisited,
    Open,
    Closed,
}

#[derive(Debug, Default)]
struct Progress {
    run: u64,
    open: HashSet<Node>,
    closed: HashSet<Node>,
}

/// Concurrent open/closed sets of the search in progress.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    state: RwLock<Progress>,
}

impl ProgressTracker {
    /// An idle tracker with both sets empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for sharing with a search thread.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    // A panicking writer can only have been inside a single `HashSet::insert`
    // or a whole-set swap, so the state behind a poisoned lock is still valid.
    fn read(&self) -> RwLockReadGuard<'_, Progress> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Progress> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a new run: discard both sets and bump the run number.
    pub fn begin(&self) {
        let mut state = self.write();
        let previous = (state.open.len(), state.closed.len());
        state.open = HashSet::new();
        state.closed = HashSet::new();
        state.run += 1;
        debug!(
            "tracker run {} started (previous run: {} open, {} closed)",
            state.run, previous.0, previous.1
        );
    }

    /// Add `node` to the open set.
    pub fn reached(&self, node: Node) {
        self.write().open.insert(node);
    }

    /// Add `node` to the closed set.
    pub fn close(&self, node: Node) {
        self.write().closed.insert(node);
    }

    /// Copy of the open set.
    pub fn snapshot_open(&self) -> HashSet<Node> {
        self.read().open.clone()
    }

    /// Copy of the closed set.
    pub fn snapshot_closed(&self) -> HashSet<Node> {
        self.read().closed.clone()
    }

    /// Copy of both sets, taken under one lock so they belong to the same run.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.read();
        Snapshot {
            run: state.run,
            open: state.open.clone(),
            closed: state.closed.clone(),
        }
    }

    /// Whether `node` is currently in the open set.
    pub fn is_open(&self, node: Node) -> bool {
        self.read().open.contains(&node)
    }

    /// Whether `node` is currently in the closed set.
    pub fn is_closed(&self, node: Node) -> bool {
        self.read().closed.contains(&node)
    }

    /// Number of `begin` calls so far. Zero while idle.
    pub fn run(&self) -> u64 {
        self.read().run
    }

    /// Whether no run has been started yet.
    pub fn is_idle(&self) -> bool {
        self.run() == 0
    }
}

impl SearchObserver for ProgressTracker {
    fn begin(&mut self) {
        ProgressTracker::begin(self);
    }

    fn reached(&mut self, node: Node) {
        ProgressTracker::reached(self, node);
    }

    fn closed(&mut self, node: Node) {
        self.close(node);
    }

    fn done(&mut self, path: &[Node]) {
        trace!("tracker: search done, path of {} nodes", path.len());
    }
}

impl SearchObserver for &ProgressTracker {
    fn begin(&mut self) {
        ProgressTracker::begin(self);
    }

    fn reached(&mut self, node: Node) {
        ProgressTracker::reached(self, node);
    }

    fn closed(&mut self, node: Node) {
        self.close(node);
    }

    fn done(&mut self, path: &[Node]) {
        trace!("tracker: search done, path of {} nodes", path.len());
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A consistent, owned copy of a tracker's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub run: u64,
    pub open: HashSet<Node>,
    pub closed: HashSet<Node>,
}

impl Snapshot {
    /// Presentation state of `node`: closed wins over open.
    pub fn state_of(&self, node: Node) -> NodeState {
        if self.closed.contains(&node) {
            NodeState::Closed
        } else if self.open.contains(&node) {
            NodeState::Open
        } else {
            NodeState::Unvisited
        }
    }

    /// Whether both sets are empty.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.closed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpal_core::{GridGraph, Point};
    use std::thread;

    fn nodes(ids: &[u32]) -> HashSet<Node> {
        ids.iter().copied().map(Node::new).collect()
    }

    #[test]
    fn starts_idle_and_empty() {
        let t = ProgressTracker::new();
        assert!(t.is_idle());
        assert!(t.snapshot_open().is_empty());
        assert!(t.snapshot_closed().is_empty());
        t.begin();
        assert!(!t.is_idle());
        assert_eq!(t.run(), 1);
    }

    #[test]
    fn reached_is_idempotent() {
        let t = ProgressTracker::new();
        t.begin();
        t.reached(Node::new(3));
        t.reached(Node::new(3));
        assert_eq!(t.snapshot_open(), nodes(&[3]));
        t.close(Node::new(3));
        t.close(Node::new(3));
        assert_eq!(t.snapshot_closed(), nodes(&[3]));
    }

    #[test]
    fn begin_resets_both_sets() {
        let t = ProgressTracker::new();
        t.begin();
        for i in 0..10 {
            t.reached(Node::new(i));
            t.close(Node::new(i));
        }
        t.begin();
        assert!(t.snapshot_open().is_empty());
        assert!(t.snapshot_closed().is_empty());
        assert_eq!(t.run(), 2);
        // begin without any prior state is fine too
        ProgressTracker::new().begin();
    }

    #[test]
    fn closed_does_not_leave_open() {
        let t = ProgressTracker::new();
        t.begin();
        t.reached(Node::new(1));
        t.close(Node::new(1));
        assert!(t.is_open(Node::new(1)));
        assert!(t.is_closed(Node::new(1)));
        let snap = t.snapshot();
        assert_eq!(snap.state_of(Node::new(1)), NodeState::Closed);
        assert_eq!(snap.state_of(Node::new(2)), NodeState::Unvisited);
    }

    #[test]
    fn five_by_five_scenario() {
        let g = GridGraph::new(5, 5).unwrap();
        let at = |x, y| g.node_at(Point::new(x, y)).unwrap();
        let mut t = ProgressTracker::new();
        let obs: &mut dyn SearchObserver = &mut t;
        obs.begin();
        obs.reached(at(0, 0));
        obs.reached(at(1, 0));
        obs.reached(at(1, 1));
        obs.closed(at(0, 0));

        let closed: HashSet<_> = [at(0, 0)].into();
        let open: HashSet<_> = [at(0, 0), at(1, 0), at(1, 1)].into();
        assert_eq!(t.snapshot_closed(), closed);
        assert_eq!(t.snapshot_open(), open);

        let snap = t.snapshot();
        assert_eq!(snap.state_of(at(0, 0)), NodeState::Closed);
        assert_eq!(snap.state_of(at(1, 1)), NodeState::Open);
        assert_eq!(snap.state_of(at(4, 4)), NodeState::Unvisited);
    }

    #[test]
    fn observer_impls_share_one_state() {
        let shared = ProgressTracker::shared();
        let mut via_ref = &*shared;
        SearchObserver::begin(&mut via_ref);
        SearchObserver::reached(&mut via_ref, Node::new(5));
        let mut boxed: Box<dyn SearchObserver + '_> = Box::new(&*shared);
        boxed.closed(Node::new(5));
        boxed.done(&[]);
        assert_eq!(shared.run(), 1);
        assert_eq!(shared.snapshot_open(), nodes(&[5]));
        assert_eq!(shared.snapshot_closed(), nodes(&[5]));
    }

    #[test]
    fn shared_handles_need_no_mut_with_observer_in_scope() {
        // `SearchObserver` is imported here; the inherent `&self` methods
        // must still be the ones an `Arc` reaches.
        let tracker = ProgressTracker::shared();
        let t = Arc::clone(&tracker);
        t.begin();
        t.reached(Node::new(1));
        t.close(Node::new(1));
        assert_eq!(tracker.run(), 1);
        assert!(tracker.is_open(Node::new(1)));
        assert!(tracker.is_closed(Node::new(1)));
    }

    #[test]
    fn concurrent_reader_sees_only_reported_nodes() {
        const N: u32 = 10_000;
        let tracker = ProgressTracker::shared();
        tracker.begin();

        let writer = {
            let t = Arc::clone(&tracker);
            thread::spawn(move || {
                for i in 0..N {
                    t.reached(Node::new(i));
                    if i % 2 == 0 {
                        t.close(Node::new(i));
                    }
                }
            })
        };

        let reader = {
            let t = Arc::clone(&tracker);
            thread::spawn(move || {
                let mut polls = 0usize;
                loop {
                    let open = t.snapshot_open();
                    let closed = t.snapshot_closed();
                    assert!(open.iter().all(|n| n.id() < N));
                    assert!(closed.iter().all(|n| n.id() < N && n.id() % 2 == 0));
                    polls += 1;
                    if open.len() == N as usize && closed.len() == (N / 2) as usize {
                        return polls;
                    }
                }
            })
        };

        writer.join().unwrap();
        let polls = reader.join().unwrap();
        assert!(polls >= 1);
        assert_eq!(tracker.snapshot_open().len(), N as usize);
    }

    #[test]
    fn snapshots_never_mix_runs() {
        const N: u32 = 2_000;
        const RUNS: u64 = 20;
        let tracker = ProgressTracker::shared();

        let writer = {
            let t = Arc::clone(&tracker);
            thread::spawn(move || {
                for _ in 0..RUNS {
                    t.begin();
                    for i in 0..N {
                        t.reached(Node::new(i));
                        t.close(Node::new(i));
                    }
                }
            })
        };

        let readers: Vec<_> = (0..2)
            .map(|_| {
                let t = Arc::clone(&tracker);
                thread::spawn(move || {
                    loop {
                        let snap = t.snapshot();
                        // Within one run the writer reports ids in order,
                        // reaching each before closing it.
                        let n = snap.open.len() as u32;
                        assert!((0..n).all(|i| snap.open.contains(&Node::new(i))));
                        assert!(snap.closed.len() <= snap.open.len());
                        assert!(snap.closed.iter().all(|c| snap.open.contains(c)));
                        if snap.run == RUNS && snap.closed.len() == N as usize {
                            break;
                        }
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for r in readers {
            r.join().unwrap();
        }
    }

    #[test]
    fn tracker_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProgressTracker>();
    }
}
