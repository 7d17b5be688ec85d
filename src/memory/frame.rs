//! Frame - a physical memory slot.
//!
//! A [`Frame`] records which page it holds, if any. Frames are owned by the
//! [`FrameTable`](super::FrameTable) and have no identity of their own once
//! evicted.

use crate::common::PageId;

/// A physical frame holding at most one resident page.
///
/// Occupancy is carried by the `Option`, so every `u32` stays available as
/// a page identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    /// The resident page, or None when empty.
    page: Option<PageId>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self { page: None }
    }

    /// Create a frame already holding `page`.
    pub fn loaded(page: PageId) -> Self {
        Self { page: Some(page) }
    }

    /// The resident page, or None if the frame is empty.
    #[inline]
    pub fn page_id(&self) -> Option<PageId> {
        self.page
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.page.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
    }

    /// Check whether this frame holds `page`.
    #[inline]
    pub fn holds(&self, page: PageId) -> bool {
        self.page == Some(page)
    }
}
