//! FIFO (First-In-First-Out) replacement policy.

use tracing::debug;

use crate::common::PageId;
use crate::memory::replacer::Replacer;
use crate::memory::{FrameRef, FrameTable};

/// Evicts the page that has been resident the longest.
///
/// The frame table already keeps insertion order, so the victim is simply
/// its back frame. No lookahead and no per-page metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoReplacer;

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for FifoReplacer {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn select_victim(&self, table: &FrameTable, _upcoming: &[PageId]) -> Option<FrameRef> {
        let victim = table.back()?;
        debug!(policy = self.name(), page = %victim.page, "victim selected");
        Some(victim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(pages: &[u32]) -> FrameTable {
        let mut table = FrameTable::new(pages.len().max(1)).unwrap();
        for &p in pages {
            table.insert_front(PageId::new(p)).unwrap();
        }
        table
    }

    #[test]
    fn test_fifo_picks_oldest() {
        let table = table_with(&[0, 1, 2]);
        let victim = FifoReplacer::new().select_victim(&table, &[]).unwrap();
        assert_eq!(victim.page, PageId::new(0));
        assert_eq!(victim.position, 2);
    }

    #[test]
    fn test_fifo_eviction_order() {
        let mut table = table_with(&[0, 1, 2]);
        let replacer = FifoReplacer::new();

        let mut evicted = vec![];
        while !table.is_empty() {
            evicted.push(table.evict(|t| replacer.select_victim(t, &[])).unwrap().0);
        }
        assert_eq!(evicted, vec![0, 1, 2]);
    }

    #[test]
    fn test_fifo_ignores_lookahead() {
        // The oldest page goes even though it is needed next.
        let table = table_with(&[0, 1, 2]);
        let upcoming = [PageId::new(0), PageId::new(0)];
        let victim = FifoReplacer::new().select_victim(&table, &upcoming).unwrap();
        assert_eq!(victim.page, PageId::new(0));
    }

    #[test]
    fn test_fifo_empty_table() {
        let table = FrameTable::new(2).unwrap();
        assert_eq!(FifoReplacer::new().select_victim(&table, &[]), None);
    }
}
