//! The search observer protocol.
//!
//! A search algorithm reports its progress through [`SearchObserver`]: one
//! `begin`, any number of `reached`/`closed`, then one `done`. The algorithm
//! never learns who is listening. The progress tracker, a logger, or a test
//! recorder all look the same from its side.

use gridpal_core::Node;
use log::{debug, info, trace};

/// Callbacks a search algorithm invokes while it runs.
///
/// All methods default to no-ops so implementors override only what they
/// need.
pub trait SearchObserver {
    /// A new search is starting. Called before any node is reported.
    fn begin(&mut self) {}

    /// `node` entered the frontier. May be repeated for the same node.
    fn reached(&mut self, _node: Node) {}

    /// `node` was finalized and expanded.
    fn closed(&mut self, _node: Node) {}

    /// The search finished. `path` runs from source to target and is empty
    /// when no path was found.
    fn done(&mut self, _path: &[Node]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl SearchObserver for NoOpObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn begin(&mut self) {
        (**self).begin();
    }

    fn reached(&mut self, node: Node) {
        (**self).reached(node);
    }

    fn closed(&mut self, node: Node) {
        (**self).closed(node);
    }

    fn done(&mut self, path: &[Node]) {
        (**self).done(path);
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for Box<O> {
    fn begin(&mut self) {
        (**self).begin();
    }

    fn reached(&mut self, node: Node) {
        (**self).reached(node);
    }

    fn closed(&mut self, node: Node) {
        (**self).closed(node);
    }

    fn done(&mut self, path: &[Node]) {
        (**self).done(path);
    }
}

/// Fan-out: every call goes to `.0`, then to `.1`.
impl<A: SearchObserver, B: SearchObserver> SearchObserver for (A, B) {
    fn begin(&mut self) {
        self.0.begin();
        self.1.begin();
    }

    fn reached(&mut self, node: Node) {
        self.0.reached(node);
        self.1.reached(node);
    }

    fn closed(&mut self, node: Node) {
        self.0.closed(node);
        self.1.closed(node);
    }

    fn done(&mut self, path: &[Node]) {
        self.0.done(path);
        self.1.done(path);
    }
}

/// Observer that reports search progress through the `log` facade.
///
/// Per-node events go to `trace!`; the start and end of a search go to
/// `debug!`, except a failed search which is logged at `info!`.
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    label: String,
    reached: usize,
    closed: usize,
}

impl LogObserver {
    /// A logger whose lines are prefixed with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// `reached` calls seen since the last `begin`.
    pub fn reached_count(&self) -> usize {
        self.reached
    }

    /// `closed` calls seen since the last `begin`.
    pub fn closed_count(&self) -> usize {
        self.closed
    }
}

impl SearchObserver for LogObserver {
    fn begin(&mut self) {
        self.reached = 0;
        self.closed = 0;
        debug!("{}: search started", self.label);
    }

    fn reached(&mut self, node: Node) {
        self.reached += 1;
        trace!("{}: reached {}", self.label, node);
    }

    fn closed(&mut self, node: Node) {
        self.closed += 1;
        trace!("{}: closed {}", self.label, node);
    }

    fn done(&mut self, path: &[Node]) {
        if path.is_empty() {
            info!(
                "{}: no path found after closing {} nodes",
                self.label, self.closed
            );
        } else {
            debug!(
                "{}: path of {} nodes found ({} reached, {} closed)",
                self.label,
                path.len(),
                self.reached,
                self.closed
            );
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// One protocol call, as seen by [`Recorder`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Event {
        Begin,
        Reached(Node),
        Closed(Node),
        Done(Vec<Node>),
    }

    /// Test double that records every call in order.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) events: Vec<Event>,
    }

    impl SearchObserver for Recorder {
        fn begin(&mut self) {
            self.events.push(Event::Begin);
        }

        fn reached(&mut self, node: Node) {
            self.events.push(Event::Reached(node));
        }

        fn closed(&mut self, node: Node) {
            self.events.push(Event::Closed(node));
        }

        fn done(&mut self, path: &[Node]) {
            self.events.push(Event::Done(path.to_vec()));
        }
    }

    fn drive(obs: &mut impl SearchObserver) {
        obs.begin();
        obs.reached(Node::new(0));
        obs.reached(Node::new(1));
        obs.closed(Node::new(0));
        obs.done(&[Node::new(0), Node::new(1)]);
    }

    #[test]
    fn defaults_are_no_ops() {
        drive(&mut NoOpObserver);
    }

    #[test]
    fn forwarding_through_mut_ref_and_box() {
        let mut rec = Recorder::default();
        drive(&mut &mut rec);
        assert_eq!(rec.events.len(), 5);

        let mut boxed: Box<dyn SearchObserver> = Box::new(Recorder::default());
        drive(&mut boxed);
    }

    #[test]
    fn pair_fans_out_in_order() {
        let mut pair = (Recorder::default(), Recorder::default());
        drive(&mut pair);
        assert_eq!(pair.0.events, pair.1.events);
        assert_eq!(
            pair.0.events,
            vec![
                Event::Begin,
                Event::Reached(Node::new(0)),
                Event::Reached(Node::new(1)),
                Event::Closed(Node::new(0)),
                Event::Done(vec![Node::new(0), Node::new(1)]),
            ]
        );
    }

    #[test]
    fn log_observer_counts_per_search() {
        let mut log = LogObserver::new("test");
        drive(&mut log);
        assert_eq!(log.reached_count(), 2);
        assert_eq!(log.closed_count(), 1);
        log.begin();
        assert_eq!(log.reached_count(), 0);
        log.done(&[]);
    }
}
