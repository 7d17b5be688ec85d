//! Simulation driver and entry points.
//!
//! # Components
//! - [`Simulator`] - step-by-step driver owning one frame table
//! - [`run`] - whole-stream convenience returning table snapshots
//! - [`simulate`] - whole-stream run returning records plus statistics

mod simulator;

pub use simulator::{Access, SimState, Simulator, StepRecord};

use crate::common::config::SimConfig;
use crate::common::{PageId, Result};
use crate::memory::replacer::Policy;
use crate::memory::{SimulationStats, TableSnapshot};

/// Everything produced by a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub policy: Policy,
    pub frame_capacity: usize,
    pub records: Vec<StepRecord>,
    pub stats: SimulationStats,
}

impl SimulationReport {
    /// Table snapshots, one per reference.
    pub fn snapshots(&self) -> Vec<TableSnapshot> {
        self.records.iter().map(|r| r.snapshot.clone()).collect()
    }

    /// Pages evicted over the run, in order.
    pub fn evictions(&self) -> Vec<PageId> {
        self.records
            .iter()
            .filter_map(|r| match r.outcome {
                Access::Miss { evicted } => evicted,
                Access::Hit => None,
            })
            .collect()
    }
}

/// Run `reference_stream` through `frame_capacity` frames under `policy`.
///
/// Returns the table snapshot after every reference. Nothing is produced on
/// failure.
///
/// # Example
/// ```
/// use pagesim::{run, PageId, Policy};
///
/// let stream: Vec<PageId> = [1, 2, 3, 4, 5].into_iter().map(PageId::new).collect();
/// let snapshots = run(Policy::Fifo, 4, &stream).unwrap();
///
/// let last = snapshots.last().unwrap();
/// assert_eq!(last.pages(), [5, 4, 3, 2].map(PageId::new).to_vec());
/// ```
///
/// # Errors
/// `Error::InvalidConfiguration` for a zero capacity or empty stream.
pub fn run(
    policy: Policy,
    frame_capacity: usize,
    reference_stream: &[PageId],
) -> Result<Vec<TableSnapshot>> {
    let config = SimConfig::new(policy, frame_capacity, reference_stream.to_vec());
    let mut sim = Simulator::new(config)?;
    let records = sim.run_to_end()?;
    Ok(records.into_iter().map(|r| r.snapshot).collect())
}

/// Run the configured simulation to completion.
pub fn simulate(config: &SimConfig) -> Result<SimulationReport> {
    let mut sim = Simulator::new(config.clone())?;
    let records = sim.run_to_end()?;
    Ok(SimulationReport {
        policy: sim.policy(),
        frame_capacity: config.frame_capacity,
        records,
        stats: *sim.stats(),
    })
}
