//! Point-in-time view of the frame table.

use std::fmt;

use crate::common::PageId;
use crate::memory::Frame;

/// Frames of a [`FrameTable`](super::FrameTable), front to back.
///
/// Unlike the table itself this is a plain value and can be stored,
/// compared and printed freely. It is never consulted for victim selection.
///
/// # Example
/// ```
/// use pagesim::{FrameTable, PageId};
///
/// let mut table = FrameTable::new(4).unwrap();
/// table.insert_front(PageId::new(1)).unwrap();
/// println!("{}", table.snapshot());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableSnapshot {
    frames: Vec<Frame>,
}

impl TableSnapshot {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// `(page, occupied)` pairs in table order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Resident pages in table order.
    pub fn pages(&self) -> Vec<PageId> {
        self.frames.iter().filter_map(Frame::page_id).collect()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for TableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current frame list state:")?;
        for frame in &self.frames {
            match frame.page_id() {
                Some(page) => writeln!(f, "Page: {}, State: Occupied", page)?,
                None => writeln!(f, "Page: -1, State: Empty")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_pages() {
        let snapshot = TableSnapshot::new(vec![
            Frame::loaded(PageId::new(3)),
            Frame::new(),
            Frame::loaded(PageId::new(1)),
        ]);
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.pages(), vec![PageId::new(3), PageId::new(1)]);
    }

    #[test]
    fn test_snapshot_display() {
        let snapshot = TableSnapshot::new(vec![Frame::loaded(PageId::new(2)), Frame::new()]);
        assert_eq!(
            format!("{}", snapshot),
            "Current frame list state:\nPage: 2, State: Occupied\nPage: -1, State: Empty\n"
        );
    }

    #[test]
    fn test_empty_snapshot_display() {
        let snapshot = TableSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(format!("{}", snapshot), "Current frame list state:\n");
    }
}
