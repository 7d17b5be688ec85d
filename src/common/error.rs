//! Error types for the page replacement simulator.

use thiserror::Error;

use crate::common::PageId;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the simulator.
///
/// Every variant is a hard failure: a run either completes or stops before
/// producing any snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Insert attempted on a full frame table without a prior eviction.
    ///
    /// This indicates a driver bug - callers must evict first.
    #[error("Frame table is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Eviction requested on a table with no resident frames.
    #[error("Cannot evict from an empty frame table")]
    EmptyTable,

    /// The simulation was configured with values it cannot run.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Insert of a page that already occupies a frame.
    #[error("Page {0} is already resident")]
    PageAlreadyResident(PageId),

    /// The replacer found no candidate in a non-empty table.
    #[error("Replacement policy selected no victim")]
    NoVictim,

    /// A page reference could not be parsed or uses the reserved sentinel.
    #[error("Invalid page ID: {0}")]
    InvalidPageId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CapacityExceeded { capacity: 4 };
        assert_eq!(format!("{}", err), "Frame table is full (capacity 4)");

        let err = Error::EmptyTable;
        assert_eq!(format!("{}", err), "Cannot evict from an empty frame table");

        let err = Error::PageAlreadyResident(PageId::new(3));
        assert_eq!(format!("{}", err), "Page 3 is already resident");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Err(Error::InvalidConfiguration("frame_capacity must be > 0".into()))
        }

        assert_eq!(
            might_fail().unwrap_err().to_string(),
            "Invalid configuration: frame_capacity must be > 0"
        );
    }
}
