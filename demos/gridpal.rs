//! Live grid search visualizer.
//!
//! Run: cargo run --bin gridpal -- --algorithm dijkstra
//! Logs go to stderr; set RUST_LOG=debug and redirect stderr to a file to
//! keep them off the drawing.

use clap::Parser;
use gridpal_demos::{Config, run_headless, run_interactive};

fn main() {
    let config = Config::parse();
    let default_level = if config.headless { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = if config.headless {
        run_headless(config).map(|path| {
            if path.is_empty() {
                println!("no path found");
            } else {
                println!("path of {} nodes", path.len());
            }
        })
    } else {
        run_interactive(config)
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
