use std::collections::HashMap;

use serde::Serialize;

use crate::constants::PALETTE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Color {
    pub slot: usize,
    pub hex: &'static str,
}

/// First-seen-first-served palette slots, keyed by exact name.
///
/// Slots are never reclaimed, so a name keeps its colour through elimination,
/// removal and re-adding for the lifetime of the assignment.
#[derive(Clone, Debug, Default)]
pub struct ColorAssignment {
    slots: HashMap<String, usize>,
    next: usize,
}

impl ColorAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_for(&mut self, name: &str) -> Color {
        let slot = match self.slots.get(name) {
            Some(slot) => *slot,
            None => {
                let slot = self.next % PALETTE.len();
                self.next += 1;
                self.slots.insert(name.to_string(), slot);
                slot
            }
        };
        Color {
            slot,
            hex: PALETTE[slot],
        }
    }

    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    /// Number of distinct names seen so far.
    pub fn assigned(&self) -> usize {
        self.next
    }
}
