//! Rotation scheduler state for the stat panel.
//!
//! Every tick advances exactly one slot. Slots take turns in the fixed
//! order of [`ROTATION_ORDER`], so a given slot changes once every four
//! ticks and neighbouring slots never change together.

use tracing::debug;

use crate::catalog::{SLOT_COUNT, StatCatalog};
use crate::types::StatEntry;

/// Period of the rotation timer.
pub const ROTATION_PERIOD_MS: u32 = 2000;

/// Slot advanced on each successive tick.
pub const ROTATION_ORDER: [usize; SLOT_COUNT] = [2, 0, 1, 3];

/// Which entry each slot shows, and whose turn is next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationState {
    active: [usize; SLOT_COUNT],
    pointer: usize,
}

impl RotationState {
    /// Every slot on its first entry, slot 2 next.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry index shown in each slot.
    pub fn active_indexes(&self) -> [usize; SLOT_COUNT] {
        self.active
    }

    /// Position in [`ROTATION_ORDER`] of the next slot to advance.
    pub fn rotation_pointer(&self) -> usize {
        self.pointer
    }

    /// Slot the next advance will touch.
    pub fn next_slot(&self) -> usize {
        ROTATION_ORDER[self.pointer]
    }

    /// Advance one slot unconditionally and return it.
    pub fn advance(&mut self, catalog: &StatCatalog) -> usize {
        let slot = self.next_slot();
        self.active[slot] = (self.active[slot] + 1) % catalog.group_len(slot);
        self.pointer = (self.pointer + 1) % ROTATION_ORDER.len();
        debug!(slot, entry = self.active[slot], "stat slot advanced");
        slot
    }

    /// Timer tick: advance only while the page is visible.
    pub fn tick(&mut self, catalog: &StatCatalog, visible: bool) -> Option<usize> {
        if !visible {
            return None;
        }
        Some(self.advance(catalog))
    }

    /// Entry currently displayed in `slot`.
    pub fn entry<'c>(&self, catalog: &'c StatCatalog, slot: usize) -> &'c StatEntry {
        catalog.entry(slot, self.active[slot])
    }

    /// The full set of statistics on screen.
    pub fn displayed<'c>(&self, catalog: &'c StatCatalog) -> [&'c StatEntry; SLOT_COUNT] {
        std::array::from_fn(|slot| self.entry(catalog, slot))
    }
}
