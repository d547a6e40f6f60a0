//! The gridpal demo: a search thread filling a [`ProgressTracker`] while the
//! main thread redraws the grid from tracker snapshots.
//!
//! The two threads share nothing mutable except the tracker. The graph and
//! weights are built once and handed out as `Arc`s.

pub mod config;
pub mod frame;
pub mod term;
pub mod worker;

use std::error::Error;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use gridpal_core::{GridGraph, Node};
use gridpal_paths::{ProgressTracker, WeightFunction};
use log::info;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

pub use config::{Algorithm, Config};
pub use frame::{Frame, Shade};
pub use worker::{SearchJob, pick_endpoints};

use term::{Input, Terminal};

/// Shared state of one demo session.
pub struct Session {
    pub config: Config,
    pub graph: Arc<GridGraph>,
    pub weights: Arc<WeightFunction>,
    pub tracker: Arc<ProgressTracker>,
    rng: StdRng,
}

impl Session {
    /// Build the graph and weights for a `width × height` grid.
    pub fn new(config: Config, width: i32, height: i32) -> Result<Self, Box<dyn Error>> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().next_u64());
        info!("seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = GridGraph::with_walls(width, height, config.wall_probability, &mut rng)?;
        let weights = WeightFunction::build(&graph);
        info!(
            "{}x{} grid, {} walls, {} edges",
            width,
            height,
            graph.walls().len(),
            weights.edge_count()
        );
        Ok(Self {
            config,
            graph: Arc::new(graph),
            weights: Arc::new(weights),
            tracker: ProgressTracker::shared(),
            rng,
        })
    }

    /// Start a search between two fresh random endpoints.
    pub fn start(&mut self) -> Result<SearchJob, Box<dyn Error>> {
        let endpoints = pick_endpoints(&self.graph, &mut self.rng)
            .ok_or("fewer than two free cells; lower --wall-probability")?;
        info!(
            "searching {} -> {} with {}",
            self.coordinate(endpoints.0),
            self.coordinate(endpoints.1),
            self.config.algorithm
        );
        let job = SearchJob::spawn(
            Arc::clone(&self.graph),
            Arc::clone(&self.weights),
            Arc::clone(&self.tracker),
            self.config.algorithm,
            endpoints,
            Duration::from_micros(self.config.step_delay_us),
        )?;
        Ok(job)
    }

    fn coordinate(&self, node: Node) -> String {
        self.graph
            .coordinate_of(node)
            .map(|p| p.to_string())
            .unwrap_or_else(|e| e.to_string())
    }

    fn status(&self, algorithm: Algorithm, path: Option<&[Node]>) -> String {
        let snap = self.tracker.snapshot();
        let outcome = match path {
            None => "searching".to_string(),
            Some([]) => "no path".to_string(),
            Some(p) => format!("path of {} nodes", p.len()),
        };
        format!(
            " {} | run {} | open {} | closed {} | {} | r: restart  q: quit",
            algorithm,
            snap.run,
            snap.open.len(),
            snap.closed.len(),
            outcome
        )
    }
}

/// Draw the search live until the user quits.
pub fn run_interactive(config: Config) -> Result<(), Box<dyn Error>> {
    let (width, height) = config.grid_size(Terminal::size());
    let mut session = Session::new(config, width, height)?;
    let frame_delay = Duration::from_millis(session.config.frame_ms);

    let mut term = Terminal::open()?;
    let mut job = session.start()?;
    let mut path: Option<Vec<Node>> = None;

    loop {
        if path.is_none() {
            path = job.try_result();
        }
        let frame = Frame::compose(
            &session.graph,
            &session.tracker.snapshot(),
            job.endpoints,
            path.as_deref().unwrap_or(&[]),
        );
        term.draw(&frame, &session.status(job.algorithm, path.as_deref()))?;

        match term.poll_input(frame_delay)? {
            Input::Quit => break,
            // A new search needs the old one to have let go of the tracker.
            Input::Restart if path.is_some() => {
                job = session.start()?;
                path = None;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Run one search without a terminal, logging progress as the renderer
/// would see it.
pub fn run_headless(config: Config) -> Result<Vec<Node>, Box<dyn Error>> {
    let (width, height) = config.grid_size(None);
    let mut session = Session::new(config, width, height)?;
    let frame_delay = Duration::from_millis(session.config.frame_ms.max(1));
    let mut job = session.start()?;

    while job.try_result().is_none() {
        let snap = session.tracker.snapshot();
        info!(
            "run {}: {} open, {} closed",
            snap.run,
            snap.open.len(),
            snap.closed.len()
        );
        thread::sleep(frame_delay);
    }

    let (algorithm, endpoints) = (job.algorithm, job.endpoints);
    let path = job.wait();
    let snap = session.tracker.snapshot();
    let frame = Frame::compose(&session.graph, &snap, endpoints, &path);
    info!(
        "done: {} | {} closed, {} open-only",
        session.status(algorithm, Some(&path)),
        frame.count(Shade::Closed),
        frame.count(Shade::Open)
    );
    Ok(path)
}
