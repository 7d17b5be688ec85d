//! Physical memory model: the eviction engine.
//!
//! # Components
//! - [`FrameTable`] - ordered, fixed-capacity set of resident pages
//! - [`Frame`] - one physical slot
//! - [`TableSnapshot`] - read-only view of the table for reporting
//! - [`SimulationStats`] - hit/miss counters
//! - [`replacer`] - eviction policy implementations

mod frame;
mod frame_table;
pub mod replacer;
mod snapshot;
mod stats;

pub use frame::Frame;
pub use frame_table::{FrameRef, FrameTable};
pub use snapshot::TableSnapshot;
pub use stats::SimulationStats;
