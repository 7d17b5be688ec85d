//! Configuration for a simulation run.

use crate::common::{Error, PageId, Result};
use crate::memory::replacer::Policy;

/// Number of physical frames when none is configured.
pub const DEFAULT_FRAME_CAPACITY: usize = 4;

/// Size of the page alphabet the default reference stream draws from.
pub const DEFAULT_PAGE_COUNT: usize = 10;

/// Reference stream used when none is configured.
///
/// Long enough to force evictions at the default capacity and to give the
/// optimal policy a non-trivial lookahead.
pub const DEFAULT_REFERENCE_STREAM: [u32; DEFAULT_PAGE_COUNT] = [1, 2, 3, 4, 5, 1, 2, 1, 3, 4];

/// Everything a [`Simulator`](crate::sim::Simulator) needs to run.
///
/// # Example
/// ```
/// use pagesim::{Policy, SimConfig};
///
/// let config = SimConfig::default()
///     .with_frame_capacity(3)
///     .with_policy(Policy::Optimal);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of physical frames.
    pub frame_capacity: usize,

    /// Page references, consumed front to back.
    pub reference_stream: Vec<PageId>,

    /// Which replacement policy chooses victims.
    pub policy: Policy,
}

impl SimConfig {
    /// Create a config from explicit values.
    pub fn new(policy: Policy, frame_capacity: usize, reference_stream: Vec<PageId>) -> Self {
        Self {
            frame_capacity,
            reference_stream,
            policy,
        }
    }

    pub fn with_frame_capacity(mut self, frame_capacity: usize) -> Self {
        self.frame_capacity = frame_capacity;
        self
    }

    pub fn with_reference_stream(mut self, reference_stream: Vec<PageId>) -> Self {
        self.reference_stream = reference_stream;
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Reject configurations that cannot produce a run.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if the capacity is zero or the stream is empty.
    pub fn validate(&self) -> Result<()> {
        if self.frame_capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "frame_capacity must be > 0".to_string(),
            ));
        }
        if self.reference_stream.is_empty() {
            return Err(Error::InvalidConfiguration(
                "reference_stream must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_capacity: DEFAULT_FRAME_CAPACITY,
            reference_stream: DEFAULT_REFERENCE_STREAM
                .iter()
                .copied()
                .map(PageId::from)
                .collect(),
            policy: Policy::Fifo,
        }
    }
}
