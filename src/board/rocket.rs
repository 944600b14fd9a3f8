//! Rocket manifests.
//!
//! A rocket asks for a fixed multiset of specific cubes plus one wildcard
//! cube of any kind. A cube goes to its specific slot while one is open; only
//! when the specific slots for that kind are full does it fall into the
//! wildcard, and the wildcard is used at most once. The rocket is complete
//! when it holds exactly `required + 1` cubes.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Resource, ResourcePool};

/// Where a loaded cube went.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadSlot {
    Specific,
    Wildcard,
}

/// Per-kind loading progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindProgress {
    pub kind: Resource,
    pub loaded: u32,
    pub needed: u32,
}

/// A rocket waiting on the launch pad of one column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rocket {
    name: String,
    column: u8,
    required: ResourcePool,
    loaded: ResourcePool,
    wildcard: Option<Resource>,
    completed_by: Option<PlayerId>,
}

impl Rocket {
    #[must_use]
    pub fn new(name: impl Into<String>, column: u8, required: ResourcePool) -> Self {
        Self {
            name: name.into(),
            column,
            required,
            loaded: ResourcePool::new(),
            wildcard: None,
            completed_by: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn column(&self) -> u8 {
        self.column
    }

    #[must_use]
    pub fn required(&self) -> &ResourcePool {
        &self.required
    }

    #[must_use]
    pub fn loaded(&self) -> &ResourcePool {
        &self.loaded
    }

    /// Kind sitting in the wildcard slot.
    #[must_use]
    pub fn wildcard(&self) -> Option<Resource> {
        self.wildcard
    }

    #[must_use]
    pub fn completed_by(&self) -> Option<PlayerId> {
        self.completed_by
    }

    /// Cubes needed to complete: every specific slot plus the wildcard.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.required.total() + 1
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.loaded.total() == self.target()
    }

    /// Cubes of `kind` sitting in specific slots.
    #[must_use]
    pub fn specific_loaded(&self, kind: Resource) -> u32 {
        let in_wildcard = u32::from(self.wildcard == Some(kind));
        self.loaded.count(kind) - in_wildcard
    }

    /// Slot a cube of `kind` would take, if any.
    #[must_use]
    pub fn accepts(&self, kind: Resource) -> Option<LoadSlot> {
        if self.specific_loaded(kind) < self.required.count(kind) {
            Some(LoadSlot::Specific)
        } else if self.wildcard.is_none() {
            Some(LoadSlot::Wildcard)
        } else {
            None
        }
    }

    /// Load one cube. `None` means rejected, with no change.
    pub fn load(&mut self, kind: Resource) -> Option<LoadSlot> {
        let slot = self.accepts(kind)?;
        self.loaded.add(kind, 1);
        if slot == LoadSlot::Wildcard {
            self.wildcard = Some(kind);
        }
        Some(slot)
    }

    pub(crate) fn mark_completed(&mut self, player: PlayerId) {
        self.completed_by = Some(player);
    }

    /// Specific-slot progress per required kind, in ledger order.
    #[must_use]
    pub fn progress(&self) -> Vec<KindProgress> {
        self.required
            .iter()
            .map(|(kind, needed)| KindProgress {
                kind,
                loaded: self.specific_loaded(kind),
                needed,
            })
            .collect()
    }
}

impl std::fmt::Display for Rocket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}/{}]", self.name, self.loaded.total(), self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iron_iron_salt() -> Rocket {
        Rocket::new(
            "Lunar Base",
            2,
            ResourcePool::from_cubes(&[Resource::Iron, Resource::Iron, Resource::Salt]),
        )
    }

    #[test]
    fn test_specific_slots_fill_first() {
        let mut rocket = iron_iron_salt();
        assert_eq!(rocket.load(Resource::Iron), Some(LoadSlot::Specific));
        assert_eq!(rocket.load(Resource::Iron), Some(LoadSlot::Specific));
        assert_eq!(rocket.load(Resource::Salt), Some(LoadSlot::Specific));

        assert!(!rocket.is_complete());
        assert_eq!(rocket.wildcard(), None);
    }

    #[test]
    fn test_wildcard_takes_one_overflow_cube() {
        let mut rocket = iron_iron_salt();
        rocket.load(Resource::Iron);
        rocket.load(Resource::Iron);
        assert_eq!(rocket.load(Resource::Iron), Some(LoadSlot::Wildcard));
        assert_eq!(rocket.wildcard(), Some(Resource::Iron));

        // Wildcard gone: a further overflow cube is refused.
        let before = rocket.clone();
        assert_eq!(rocket.load(Resource::Hydrocarbon), None);
        assert_eq!(rocket, before);

        // Salt still has its specific slot.
        assert_eq!(rocket.load(Resource::Salt), Some(LoadSlot::Specific));
        assert!(rocket.is_complete());
    }

    #[test]
    fn test_wildcard_does_not_count_as_specific() {
        let mut rocket = iron_iron_salt();
        rocket.load(Resource::Silica);
        assert_eq!(rocket.wildcard(), Some(Resource::Silica));
        assert_eq!(rocket.specific_loaded(Resource::Silica), 0);

        let progress = rocket.progress();
        assert_eq!(
            progress,
            vec![
                KindProgress { kind: Resource::Salt, loaded: 0, needed: 1 },
                KindProgress { kind: Resource::Iron, loaded: 0, needed: 2 },
            ]
        );
    }

    #[test]
    fn test_complete_rocket_refuses_everything() {
        let mut rocket = iron_iron_salt();
        for kind in [Resource::Iron, Resource::Iron, Resource::Salt, Resource::Sulfur] {
            assert!(rocket.load(kind).is_some());
        }
        assert!(rocket.is_complete());
        assert_eq!(rocket.loaded().total(), rocket.target());

        for kind in Resource::ALL {
            assert_eq!(rocket.accepts(kind), None);
        }
    }
}
