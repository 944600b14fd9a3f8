//! Worker placement on contested resources.
//!
//! A contested resource is held by whoever last committed workers to it this
//! round. A rival takes it over only by committing strictly more workers
//! than the holder; the holder then gets their workers back.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CraftId, GameError, GameResult, PlayerId};

/// Something only one seat controls per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContestedResource {
    /// Control of a submersible.
    Craft(CraftId),
    /// The first-player privilege.
    SpecialElection,
}

impl std::fmt::Display for ContestedResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContestedResource::Craft(id) => write!(f, "submersible {id}"),
            ContestedResource::SpecialElection => write!(f, "special election"),
        }
    }
}

/// Who holds a resource and with how many workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub player: PlayerId,
    pub workers: u32,
}

/// This round's placements. Cleared at the start of every round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkerLedger {
    placements: FxHashMap<ContestedResource, Placement>,
}

impl WorkerLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn holder(&self, resource: ContestedResource) -> Option<Placement> {
        self.placements.get(&resource).copied()
    }

    /// Fewest workers `player` must commit to take `resource` now.
    #[must_use]
    pub fn workers_needed(&self, resource: ContestedResource, player: PlayerId) -> u32 {
        match self.holder(resource) {
            Some(held) if held.player != player => held.workers + 1,
            _ => 1,
        }
    }

    /// Check a commitment without recording it.
    pub fn check(&self, resource: ContestedResource, player: PlayerId, workers: u32) -> GameResult<()> {
        if workers == 0 {
            return Err(GameError::invalid(format!("must commit at least one worker to {resource}")));
        }
        let needed = self.workers_needed(resource, player);
        if workers < needed {
            return Err(GameError::illegal(format!("Need {needed} workers to bump")));
        }
        Ok(())
    }

    /// Record a commitment. Returns the rival placement it displaced, whose
    /// workers the caller must hand back.
    pub fn place(&mut self, resource: ContestedResource, player: PlayerId, workers: u32) -> Option<Placement> {
        self.placements
            .insert(resource, Placement { player, workers })
            .filter(|previous| previous.player != player)
    }

    pub fn clear(&mut self) {
        self.placements.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements in a stable order.
    #[must_use]
    pub fn entries(&self) -> Vec<(ContestedResource, Placement)> {
        let mut entries: Vec<_> = self.placements.iter().map(|(&r, &p)| (r, p)).collect();
        entries.sort_by_key(|&(r, _)| r);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUB_A: ContestedResource = ContestedResource::Craft(CraftId('A'));

    #[test]
    fn test_free_resource_needs_one_worker() {
        let ledger = WorkerLedger::new();
        assert_eq!(ledger.workers_needed(SUB_A, PlayerId::new(0)), 1);
        assert!(ledger.check(SUB_A, PlayerId::new(0), 1).is_ok());
        assert!(matches!(
            ledger.check(SUB_A, PlayerId::new(0), 0),
            Err(GameError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bump_needs_strictly_more() {
        let mut ledger = WorkerLedger::new();
        assert_eq!(ledger.place(SUB_A, PlayerId::new(0), 2), None);

        let err = ledger.check(SUB_A, PlayerId::new(1), 2).unwrap_err();
        assert_eq!(err.to_string(), "Need 3 workers to bump");
        assert!(ledger.check(SUB_A, PlayerId::new(1), 3).is_ok());

        let displaced = ledger.place(SUB_A, PlayerId::new(1), 3);
        assert_eq!(displaced, Some(Placement { player: PlayerId::new(0), workers: 2 }));
        assert_eq!(ledger.holder(SUB_A).map(|p| p.player), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_holder_recommits_without_bumping() {
        let mut ledger = WorkerLedger::new();
        ledger.place(SUB_A, PlayerId::new(0), 2);
        assert!(ledger.check(SUB_A, PlayerId::new(0), 1).is_ok());
        assert_eq!(ledger.place(SUB_A, PlayerId::new(0), 1), None);
        assert_eq!(ledger.holder(SUB_A).map(|p| p.workers), Some(1));
    }

    #[test]
    fn test_resources_are_independent() {
        let mut ledger = WorkerLedger::new();
        ledger.place(SUB_A, PlayerId::new(0), 2);
        ledger.place(ContestedResource::SpecialElection, PlayerId::new(1), 1);
        assert_eq!(ledger.workers_needed(ContestedResource::Craft(CraftId('B')), PlayerId::new(1)), 1);
        assert_eq!(ledger.entries().len(), 2);
        assert_eq!(ledger.entries()[0].0, SUB_A);

        ledger.clear();
        assert!(ledger.is_empty());
    }
}
