use clap::{Parser, ValueEnum};

/// Which reference search drives the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Astar,
    Dijkstra,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Astar => write!(f, "A*"),
            Self::Dijkstra => write!(f, "Dijkstra"),
        }
    }
}

/// Watch a grid search explore, live.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Grid width in cells (defaults to the terminal width)
    #[arg(long)]
    pub width: Option<i32>,

    /// Grid height in cells (defaults to the terminal height minus a status line)
    #[arg(long)]
    pub height: Option<i32>,

    /// Probability that any given cell is a wall
    #[arg(long, default_value_t = 0.1)]
    pub wall_probability: f64,

    /// Seed for wall placement and endpoints; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Algorithm::Astar)]
    pub algorithm: Algorithm,

    /// Pause after each closed node, in microseconds
    #[arg(long, default_value_t = 300)]
    pub step_delay_us: u64,

    /// Redraw interval in milliseconds
    #[arg(long, default_value_t = 33)]
    pub frame_ms: u64,

    /// Run without drawing; progress is logged instead
    #[arg(long, default_value_t = false)]
    pub headless: bool,
}

/// Grid size used when no terminal size is available.
pub const FALLBACK_SIZE: (i32, i32) = (80, 24);

impl Config {
    /// Resolve the grid size, filling gaps from `terminal` (columns, rows).
    pub fn grid_size(&self, terminal: Option<(u16, u16)>) -> (i32, i32) {
        let (tw, th) = terminal
            .map(|(w, h)| (w as i32, h as i32 - 1))
            .unwrap_or(FALLBACK_SIZE);
        (self.width.unwrap_or(tw), self.height.unwrap_or(th))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::parse_from(["gridpal"]);
        assert_eq!(c.algorithm, Algorithm::Astar);
        assert_eq!(c.wall_probability, 0.1);
        assert!(!c.headless);
        assert_eq!(c.grid_size(None), FALLBACK_SIZE);
        assert_eq!(c.grid_size(Some((120, 40))), (120, 39));
    }

    #[test]
    fn explicit_values() {
        let c = Config::parse_from([
            "gridpal",
            "--width",
            "30",
            "--algorithm",
            "dijkstra",
            "--seed",
            "7",
            "--headless",
        ]);
        assert_eq!(c.algorithm, Algorithm::Dijkstra);
        assert_eq!(c.seed, Some(7));
        assert!(c.headless);
        assert_eq!(c.grid_size(Some((100, 50))), (30, 49));
    }
}
