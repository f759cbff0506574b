//! Per-card interaction state
//!
//! Each rendered card owns a hover flag and an alternate-platform flag.
//! Slots are keyed by project id; a missing slot means both flags are off.

use std::collections::HashMap;

use crate::types::ProjectId;

/// Interaction flags for one card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardInteraction {
    /// Pointer is over the card surface
    pub hovered: bool,
    /// Card shows the alternate-platform image
    pub showing_alternate: bool,
}

/// Independent interaction slots for every card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStates {
    slots: HashMap<ProjectId, CardInteraction>,
}

impl CardStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flags for a card.
    pub fn get(&self, id: &ProjectId) -> CardInteraction {
        self.slots.get(id).copied().unwrap_or_default()
    }

    pub fn is_hovered(&self, id: &ProjectId) -> bool {
        self.get(id).hovered
    }

    pub fn is_showing_alternate(&self, id: &ProjectId) -> bool {
        self.get(id).showing_alternate
    }

    /// Flip the alternate-platform flag, returning the new value.
    pub fn toggle_alternate(&mut self, id: &ProjectId) -> bool {
        let slot = self.slots.entry(id.clone()).or_default();
        slot.showing_alternate = !slot.showing_alternate;
        let value = slot.showing_alternate;
        self.prune(id);
        value
    }

    pub fn pointer_enter(&mut self, id: &ProjectId) {
        self.slots.entry(id.clone()).or_default().hovered = true;
    }

    pub fn pointer_leave(&mut self, id: &ProjectId) {
        if let Some(slot) = self.slots.get_mut(id) {
            slot.hovered = false;
        }
        self.prune(id);
    }

    /// Reset every card to its defaults.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Number of cards with at least one flag set.
    pub fn active_len(&self) -> usize {
        self.slots.len()
    }

    fn prune(&mut self, id: &ProjectId) {
        if self.slots.get(id).is_some_and(|s| *s == CardInteraction::default()) {
            self.slots.remove(id);
        }
    }
}
