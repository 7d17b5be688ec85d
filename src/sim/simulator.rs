//! Simulator - drives a reference stream through the frame table.
//!
//! The [`Simulator`] provides:
//! - Hit/miss detection against the frame table
//! - Victim selection through a pluggable [`Replacer`]
//! - A snapshot of the table after every reference
//! - Running statistics

use tracing::{debug, info};

use crate::common::config::SimConfig;
use crate::common::{PageId, Result};
use crate::memory::replacer::{Policy, Replacer};
use crate::memory::{FrameTable, SimulationStats, TableSnapshot};

/// Lifecycle of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    /// No reference processed yet.
    Idle,
    /// At least one reference processed, more remain.
    Processing,
    /// Every reference has been consumed.
    Done,
}

/// What happened to a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident; the table is unchanged.
    Hit,
    /// The page was loaded, evicting `evicted` first if the table was full.
    Miss { evicted: Option<PageId> },
}

impl Access {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }
}

/// Result of processing one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Position of the reference in the stream.
    pub index: usize,

    /// The referenced page.
    pub page: PageId,

    pub outcome: Access,

    /// Table state after the reference was processed.
    pub snapshot: TableSnapshot,
}

/// Owns one frame table and feeds it a reference stream.
///
/// # Usage
/// ```
/// use pagesim::{Policy, SimConfig, Simulator, SimState};
///
/// let config = SimConfig::default().with_policy(Policy::Optimal);
/// let mut sim = Simulator::new(config).unwrap();
///
/// while let Some(record) = sim.step().unwrap() {
///     println!("{}: {:?}", record.page, record.outcome);
/// }
/// assert_eq!(sim.state(), SimState::Done);
/// ```
#[derive(Debug)]
pub struct Simulator {
    table: FrameTable,
    replacer: Box<dyn Replacer>,
    policy: Policy,
    stream: Vec<PageId>,

    /// Index of the next reference to process.
    cursor: usize,

    state: SimState,
    stats: SimulationStats,
}

impl Simulator {
    /// Create a simulator for `config`.
    ///
    /// # Errors
    /// Any error from [`SimConfig::validate`].
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;

        let table = FrameTable::new(config.frame_capacity)?;
        Ok(Self {
            table,
            replacer: config.policy.replacer(),
            policy: config.policy,
            stream: config.reference_stream,
            cursor: 0,
            state: SimState::Idle,
            stats: SimulationStats::new(),
        })
    }

    // ========================================================================
    // Driving
    // ========================================================================

    /// Process the next reference.
    ///
    /// Returns `Ok(None)` once the stream is exhausted.
    ///
    /// # Errors
    /// Frame table protocol errors. These indicate a bug, not bad input.
    pub fn step(&mut self) -> Result<Option<StepRecord>> {
        let Some(&page) = self.stream.get(self.cursor) else {
            self.state = SimState::Done;
            return Ok(None);
        };
        let index = self.cursor;

        if self.state == SimState::Idle {
            info!(
                policy = self.replacer.name(),
                frames = self.table.capacity(),
                references = self.stream.len(),
                "simulation started"
            );
        }

        let outcome = if self.table.contains(page) {
            debug!(index, %page, "hit");
            self.stats.record_hit();
            Access::Hit
        } else {
            let evicted = if self.table.is_full() {
                // Lookahead excludes the reference being served.
                let upcoming = &self.stream[index + 1..];
                let replacer = &self.replacer;
                Some(
                    self.table
                        .evict(|table| replacer.select_victim(table, upcoming))?,
                )
            } else {
                None
            };
            self.table.insert_front(page)?;
            debug!(index, %page, evicted = ?evicted, "miss");
            self.stats.record_miss(evicted.is_some());
            Access::Miss { evicted }
        };

        self.cursor += 1;
        self.state = if self.cursor == self.stream.len() {
            info!(policy = self.replacer.name(), stats = %self.stats, "simulation finished");
            SimState::Done
        } else {
            SimState::Processing
        };

        Ok(Some(StepRecord {
            index,
            page,
            outcome,
            snapshot: self.table.snapshot(),
        }))
    }

    /// Process every remaining reference.
    pub fn run_to_end(&mut self) -> Result<Vec<StepRecord>> {
        let mut records = Vec::with_capacity(self.remaining().len());
        while let Some(record) = self.step()? {
            records.push(record);
        }
        Ok(records)
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn table(&self) -> &FrameTable {
        &self.table
    }

    /// References not yet processed.
    pub fn remaining(&self) -> &[PageId] {
        &self.stream[self.cursor..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(pages: &[u32]) -> Vec<PageId> {
        pages.iter().copied().map(PageId::new).collect()
    }

    fn simulator(policy: Policy, capacity: usize, pages: &[u32]) -> Simulator {
        Simulator::new(SimConfig::new(policy, capacity, ids(pages))).unwrap()
    }

    #[test]
    fn test_state_transitions() {
        let mut sim = simulator(Policy::Fifo, 2, &[1, 2]);
        assert_eq!(sim.state(), SimState::Idle);
        assert_eq!(sim.policy(), Policy::Fifo);

        sim.step().unwrap();
        assert_eq!(sim.state(), SimState::Processing);

        sim.step().unwrap();
        assert_eq!(sim.state(), SimState::Done);

        assert_eq!(sim.step().unwrap(), None);
        assert_eq!(sim.state(), SimState::Done);
    }

    #[test]
    fn test_single_reference_goes_straight_to_done() {
        let mut sim = simulator(Policy::Optimal, 1, &[9]);
        let record = sim.step().unwrap().unwrap();
        assert_eq!(record.outcome, Access::Miss { evicted: None });
        assert_eq!(sim.state(), SimState::Done);
    }

    #[test]
    fn test_hit_leaves_table_unchanged() {
        let mut sim = simulator(Policy::Fifo, 3, &[1, 2, 1]);
        let records = sim.run_to_end().unwrap();

        assert!(!records[1].outcome.is_hit());
        assert!(records[2].outcome.is_hit());
        assert_eq!(records[2].snapshot, records[1].snapshot);
    }

    #[test]
    fn test_miss_on_full_table_evicts() {
        let mut sim = simulator(Policy::Fifo, 2, &[1, 2, 3]);
        let records = sim.run_to_end().unwrap();

        assert_eq!(
            records[2].outcome,
            Access::Miss {
                evicted: Some(PageId::new(1))
            }
        );
        assert_eq!(records[2].snapshot.pages(), ids(&[3, 2]));
    }

    #[test]
    fn test_stats_track_steps() {
        let mut sim = simulator(Policy::Fifo, 2, &[1, 2, 1, 3, 1]);
        sim.run_to_end().unwrap();

        let stats = sim.stats();
        assert_eq!(stats.references, 5);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 4);
        assert_eq!(stats.evictions, 2);
    }

    #[test]
    fn test_remaining_shrinks() {
        let mut sim = simulator(Policy::Optimal, 2, &[1, 2, 3]);
        assert_eq!(sim.remaining().len(), 3);
        sim.step().unwrap();
        assert_eq!(sim.remaining(), &ids(&[2, 3])[..]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Simulator::new(SimConfig::new(Policy::Fifo, 0, ids(&[1]))).is_err());
        assert!(Simulator::new(SimConfig::new(Policy::Fifo, 4, vec![])).is_err());
    }
}
