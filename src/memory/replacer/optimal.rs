//! Optimal (Belady / OPR) replacement policy.
//!
//! Needs the whole future reference stream, so it models an oracle rather
//! than something a real kernel could run. Useful as the lower bound on
//! page faults when comparing other policies.

use tracing::debug;

use crate::common::PageId;
use crate::memory::replacer::Replacer;
use crate::memory::{FrameRef, FrameTable};

/// When a resident page is referenced next.
///
/// Variant order makes `Never` compare greater than any `At`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NextUse {
    /// Index into the upcoming references.
    At(usize),
    /// Not referenced again.
    Never,
}

impl NextUse {
    /// Scan `upcoming` for the first reference to `page`.
    pub fn of(page: PageId, upcoming: &[PageId]) -> Self {
        upcoming
            .iter()
            .position(|&p| p == page)
            .map_or(NextUse::Never, NextUse::At)
    }
}

/// Evicts the resident page whose next use lies farthest in the future.
///
/// Pages never referenced again beat every page that is. Ties go to the
/// first candidate in table order (front to back), so traces are
/// deterministic. Each decision costs O(frames x upcoming).
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    /// Create a new optimal replacer.
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for OptimalReplacer {
    fn name(&self) -> &'static str {
        "optimal"
    }

    fn select_victim(&self, table: &FrameTable, upcoming: &[PageId]) -> Option<FrameRef> {
        let mut best: Option<(FrameRef, NextUse)> = None;

        for candidate in table.iter() {
            let next = NextUse::of(candidate.page, upcoming);
            // Strictly greater only: the earliest maximal candidate wins.
            if best.is_none_or(|(_, farthest)| next > farthest) {
                best = Some((candidate, next));
            }
            if next == NextUse::Never {
                break;
            }
        }

        let (victim, next) = best?;
        debug!(policy = self.name(), page = %victim.page, next_use = ?next, "victim selected");
        Some(victim)
    }
}
