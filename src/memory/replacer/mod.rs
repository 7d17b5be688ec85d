//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - evicts the least recently inserted page
//! - [`OptimalReplacer`] - evicts the page whose next use is farthest away
//!
//! Replacers only read the table; the simulator performs the eviction.

mod fifo;
mod optimal;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId};
use crate::memory::{FrameRef, FrameTable};

pub use fifo::FifoReplacer;
pub use optimal::{NextUse, OptimalReplacer};

/// Chooses which resident frame to evict when a miss finds the table full.
pub trait Replacer: fmt::Debug {
    /// Short policy name for logs and reports.
    fn name(&self) -> &'static str;

    /// Pick a victim among the frames in `table`.
    ///
    /// `upcoming` is the part of the reference stream not yet consumed,
    /// excluding the reference that caused the miss. Returns None only when
    /// the table is empty.
    fn select_victim(&self, table: &FrameTable, upcoming: &[PageId]) -> Option<FrameRef>;
}

/// The replacement policies a simulation can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Policy {
    /// First-In-First-Out.
    Fifo,
    /// Belady's optimal replacement, using full lookahead.
    #[value(alias = "opt", alias = "opr")]
    Optimal,
}

impl Policy {
    /// Every policy, in report order.
    pub const ALL: [Policy; 2] = [Policy::Fifo, Policy::Optimal];

    /// Build the replacer implementing this policy.
    pub fn replacer(&self) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Optimal => Box::new(OptimalReplacer::new()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::Optimal => write!(f, "Optimal"),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "optimal" | "opt" | "opr" => Ok(Policy::Optimal),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown policy '{}'",
                other
            ))),
        }
    }
}
