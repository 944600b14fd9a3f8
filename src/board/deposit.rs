//! Mineral deposits and their excavation tracks.
//!
//! ## Track rules
//!
//! The track is a fixed row of slots. A newcomer takes the first slot nobody
//! has ever stood on. A player already on the track advances to the next
//! free slot above their current one and leaves their old slot vacant.
//! Vacated slots are never handed to newcomers, so slot indices only grow.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::core::{PlayerId, Resource};

/// A deposit on the ocean floor spanning a run of columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineralDeposit {
    primary: Resource,
    secondary: Resource,
    setup_bonus: Resource,
    columns: Range<usize>,
    track: Vec<Option<PlayerId>>,
    /// Slots `0..touched` have been stood on at some point.
    touched: usize,
}

impl MineralDeposit {
    #[must_use]
    pub fn new(
        primary: Resource,
        secondary: Resource,
        setup_bonus: Resource,
        columns: Range<usize>,
        track_length: usize,
    ) -> Self {
        Self {
            primary,
            secondary,
            setup_bonus,
            columns,
            track: vec![None; track_length],
            touched: 0,
        }
    }

    /// Kind excavated here and dissolved on even columns.
    #[must_use]
    pub fn primary(&self) -> Resource {
        self.primary
    }

    /// Kind dissolved on odd columns.
    #[must_use]
    pub fn secondary(&self) -> Resource {
        self.secondary
    }

    /// Cube granted at setup to a vessel above this deposit.
    #[must_use]
    pub fn setup_bonus(&self) -> Resource {
        self.setup_bonus
    }

    #[must_use]
    pub fn columns(&self) -> Range<usize> {
        self.columns.clone()
    }

    #[must_use]
    pub fn covers(&self, column: usize) -> bool {
        self.columns.contains(&column)
    }

    /// Kind this deposit dissolves into `column`.
    #[must_use]
    pub fn dissolved_kind(&self, column: usize) -> Resource {
        if column % 2 == 0 {
            self.primary
        } else {
            self.secondary
        }
    }

    /// Slot occupancy, lowest first.
    #[must_use]
    pub fn track(&self) -> &[Option<PlayerId>] {
        &self.track
    }

    /// Slot `player` stands on.
    #[must_use]
    pub fn slot_of(&self, player: PlayerId) -> Option<usize> {
        self.track.iter().position(|&p| p == Some(player))
    }

    /// Slot `player` would reach by excavating now, without moving them.
    #[must_use]
    pub fn next_slot(&self, player: PlayerId) -> Option<usize> {
        match self.slot_of(player) {
            None => (self.touched < self.track.len()).then_some(self.touched),
            Some(current) => (current + 1..self.track.len()).find(|&i| self.track[i].is_none()),
        }
    }

    /// Advance `player` one step. Returns the new slot, or `None` when the
    /// track has no room for them.
    pub fn excavate(&mut self, player: PlayerId) -> Option<usize> {
        let slot = self.next_slot(player)?;
        if let Some(current) = self.slot_of(player) {
            self.track[current] = None;
        }
        self.track[slot] = Some(player);
        self.touched = self.touched.max(slot + 1);
        Some(slot)
    }
}
