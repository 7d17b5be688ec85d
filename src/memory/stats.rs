//! Simulation statistics tracking.

use std::fmt;

/// Counters updated by the simulator on every reference.
///
/// Runs are single-threaded, so plain integers suffice.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::new();
/// stats.record_hit();
/// stats.record_miss(false);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationStats {
    /// References processed so far.
    pub references: u64,

    /// References whose page was already resident.
    pub hits: u64,

    /// References that had to load their page (page faults).
    pub misses: u64,

    /// Misses that first had to evict a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.references += 1;
        self.hits += 1;
    }

    pub fn record_miss(&mut self, evicted: bool) {
        self.references += 1;
        self.misses += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.misses as f64 / self.references as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ refs: {}, hits: {}, misses: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.misses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
