//! pagesim - a page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Driver (sim/)                            │   │
//! │  │    reference stream → hit/miss → snapshot per step       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Eviction Engine (memory/)  [Swappable policy]     │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │        Replacers: FIFO | Optimal (OPR)          │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        FrameTable + Frame + TableSnapshot + Stats        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`memory`] - Frame table and eviction policies
//! - [`sim`] - Simulation driver
//!
//! # Quick Start
//! ```
//! use pagesim::{run, PageId, Policy};
//!
//! let stream: Vec<PageId> = [1, 2, 3, 4, 5, 1, 2, 1, 3, 4]
//!     .into_iter()
//!     .map(PageId::new)
//!     .collect();
//!
//! for snapshot in run(Policy::Optimal, 4, &stream).unwrap() {
//!     print!("{}", snapshot);
//! }
//! ```

pub mod common;
pub mod memory;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::{SimConfig, DEFAULT_FRAME_CAPACITY, DEFAULT_REFERENCE_STREAM};
pub use common::{Error, PageId, Result};

pub use memory::replacer::{FifoReplacer, OptimalReplacer, Policy, Replacer};
pub use memory::{Frame, FrameRef, FrameTable, SimulationStats, TableSnapshot};
pub use sim::{run, simulate, Access, SimState, SimulationReport, Simulator, StepRecord};
