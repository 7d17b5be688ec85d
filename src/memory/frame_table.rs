//! Frame table - the ordered set of resident pages.
//!
//! The table keeps frames in insertion order: the front holds the most
//! recently loaded page, the back the least recently loaded one.
//!
//! ```text
//!   front (newest)                         back (oldest)
//!   ┌────────┐   ┌────────┐   ┌────────┐   ┌────────┐
//!   │ page 5 │ → │ page 4 │ → │ page 3 │ → │ page 2 │
//!   └────────┘   └────────┘   └────────┘   └────────┘
//! ```

use std::collections::VecDeque;

use tracing::trace;

use crate::common::{Error, PageId, Result};
use crate::memory::{Frame, TableSnapshot};

/// A resident frame located in the table.
///
/// Positions are only meaningful until the next insert or evict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRef {
    /// Index from the front of the table.
    pub position: usize,

    /// The page held by the frame.
    pub page: PageId,
}

/// Fixed-capacity, insertion-ordered collection of resident frames.
///
/// # Invariants
/// - `len() <= capacity()`
/// - no two frames hold the same page
/// - new frames always enter at the front
///
/// Insert on a full table fails; callers evict first.
#[derive(Debug, Clone)]
pub struct FrameTable {
    frames: VecDeque<Frame>,
    capacity: usize,
}

impl FrameTable {
    /// Create an empty table with room for `capacity` frames.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "frame_capacity must be > 0".to_string(),
            ));
        }
        Ok(Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Load `page` into a new frame at the front of the table.
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if the table is full
    /// - `Error::PageAlreadyResident` if `page` already occupies a frame
    pub fn insert_front(&mut self, page: PageId) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.contains(page) {
            return Err(Error::PageAlreadyResident(page));
        }

        self.frames.push_front(Frame::loaded(page));
        trace!(%page, resident = self.frames.len(), "inserted frame");
        Ok(())
    }

    /// Remove the frame picked by `selector` and return its page.
    ///
    /// The selector sees the table read-only and names a victim by
    /// [`FrameRef`]; the frame is destroyed on removal.
    ///
    /// # Errors
    /// - `Error::EmptyTable` if no frame is resident
    /// - `Error::NoVictim` if the selector returns nothing, or a reference
    ///   that no longer matches the table
    pub fn evict<F>(&mut self, selector: F) -> Result<PageId>
    where
        F: FnOnce(&FrameTable) -> Option<FrameRef>,
    {
        if self.is_empty() {
            return Err(Error::EmptyTable);
        }

        let victim = selector(self).ok_or(Error::NoVictim)?;
        match self.frames.get(victim.position) {
            Some(frame) if frame.holds(victim.page) => {}
            _ => return Err(Error::NoVictim),
        }

        let page = self
            .frames
            .remove(victim.position)
            .and_then(|frame| frame.page_id())
            .ok_or(Error::NoVictim)?;
        trace!(%page, position = victim.position, "evicted frame");
        Ok(page)
    }

    // ========================================================================
    // Queries (never mutate)
    // ========================================================================

    /// Locate `page` if it is resident.
    pub fn find(&self, page: PageId) -> Option<FrameRef> {
        self.frames
            .iter()
            .position(|frame| frame.holds(page))
            .map(|position| FrameRef { position, page })
    }

    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.find(page).is_some()
    }

    /// The least recently inserted frame.
    pub fn back(&self) -> Option<FrameRef> {
        let position = self.frames.len().checked_sub(1)?;
        let page = self.frames.back()?.page_id()?;
        Some(FrameRef { position, page })
    }

    /// Resident frames, front to back.
    pub fn iter(&self) -> impl Iterator<Item = FrameRef> + '_ {
        self.frames
            .iter()
            .enumerate()
            .filter_map(|(position, frame)| {
                frame.page_id().map(|page| FrameRef { position, page })
            })
    }

    /// Resident pages, front to back.
    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.frames.iter().filter_map(Frame::page_id)
    }

    /// Read-only copy of the table, front to back.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::new(self.frames.iter().copied().collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.frames.len() == self.capacity
    }
}
