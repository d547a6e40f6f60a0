//! The search side of the demo: one background thread per search.
//!
//! The worker owns nothing but `Arc`s to the read-only graph and weights and
//! to the shared tracker. It reports through an observer stack of tracker,
//! logger, throttle, and a completion channel, so the render loop learns
//! about the final path without ever touching the search itself.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use gridpal_core::{GridGraph, Node};
use gridpal_paths::{
    GridPather, LogObserver, ProgressTracker, Search, SearchObserver, WeightFunction,
};
use log::warn;
use rand::{Rng, RngExt};

use crate::config::Algorithm;

/// Sleeps after every closed node so a human can follow the search.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    pub delay: Duration,
}

impl SearchObserver for Throttle {
    fn closed(&mut self, _node: Node) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// Forwards the final path over a channel.
#[derive(Debug)]
pub struct Completion {
    tx: Sender<Vec<Node>>,
}

impl SearchObserver for Completion {
    fn done(&mut self, path: &[Node]) {
        if self.tx.send(path.to_vec()).is_err() {
            warn!("search finished but nobody is listening for the path");
        }
    }
}

/// Handle to a running search.
pub struct SearchJob {
    pub endpoints: (Node, Node),
    pub algorithm: Algorithm,
    handle: JoinHandle<()>,
    done: Receiver<Vec<Node>>,
    path: Option<Vec<Node>>,
}

impl SearchJob {
    /// Start searching from `endpoints.0` to `endpoints.1` on a new thread.
    pub fn spawn(
        graph: Arc<GridGraph>,
        weights: Arc<WeightFunction>,
        tracker: Arc<ProgressTracker>,
        algorithm: Algorithm,
        endpoints: (Node, Node),
        step_delay: Duration,
    ) -> std::io::Result<Self> {
        let (tx, done) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("gridpal-search".into())
            .spawn(move || {
                let pather = GridPather::new(&graph, &weights);
                let mut search = Search::new(&graph);
                let mut observer = (
                    &*tracker,
                    (
                        LogObserver::new(algorithm.to_string()),
                        (Throttle { delay: step_delay }, Completion { tx }),
                    ),
                );
                let (from, to) = endpoints;
                match algorithm {
                    Algorithm::Astar => search.astar_path(&pather, from, to, &mut observer),
                    Algorithm::Dijkstra => search.dijkstra_path(&pather, from, to, &mut observer),
                };
            })?;
        Ok(Self {
            endpoints,
            algorithm,
            handle,
            done,
            path: None,
        })
    }

    /// The final path, once the search has reported `done`. An empty path
    /// means the target is unreachable. Keeps returning the same path once
    /// it has arrived.
    pub fn try_result(&mut self) -> Option<Vec<Node>> {
        if self.path.is_none() {
            self.path = self.done.try_recv().ok();
        }
        self.path.clone()
    }

    /// Block until the search reports `done`, then join the thread.
    pub fn wait(mut self) -> Vec<Node> {
        let path = match self.path.take() {
            Some(path) => path,
            None => self.done.recv().unwrap_or_default(),
        };
        if self.handle.join().is_err() {
            warn!("search thread panicked");
        }
        path
    }
}

/// Pick two distinct non-wall nodes, or `None` if fewer than two exist.
pub fn pick_endpoints(graph: &GridGraph, rng: &mut impl Rng) -> Option<(Node, Node)> {
    let free: Vec<Node> = graph.nodes().filter(|&n| !graph.is_wall(n)).collect();
    if free.len() < 2 {
        return None;
    }
    let a = rng.random_range(0..free.len());
    let mut b = rng.random_range(0..free.len() - 1);
    if b >= a {
        b += 1;
    }
    Some((free[a], free[b]))
}
