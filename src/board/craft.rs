//! Submersibles: shared, contestable cargo craft.

use serde::{Deserialize, Serialize};

use crate::core::{CraftId, Position, Resource, ResourcePool};

/// A submersible and its cargo hold.
///
/// Cargo never exceeds `capacity`. The position is `None` only before the
/// board places the craft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submersible {
    id: CraftId,
    capacity: u32,
    cargo: ResourcePool,
    pub(crate) position: Option<Position>,
}

impl Submersible {
    #[must_use]
    pub fn new(id: CraftId, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            cargo: ResourcePool::new(),
            position: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> CraftId {
        self.id
    }

    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[must_use]
    pub fn cargo(&self) -> &ResourcePool {
        &self.cargo
    }

    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Cubes that still fit.
    #[must_use]
    pub fn free_space(&self) -> u32 {
        self.capacity.saturating_sub(self.cargo.total())
    }

    #[must_use]
    pub fn has_space(&self) -> bool {
        self.free_space() > 0
    }

    /// Stow one cube. Fails without change when full.
    pub fn load(&mut self, kind: Resource) -> bool {
        if !self.has_space() {
            return false;
        }
        self.cargo.add(kind, 1);
        true
    }

    pub fn unload(&mut self, kind: Resource) -> bool {
        self.cargo.remove(kind, 1)
    }

    /// Empty the hold into `bay`, returning what moved.
    pub fn unload_into(&mut self, bay: &mut ResourcePool) -> ResourcePool {
        self.cargo.drain_into(bay)
    }
}

impl std::fmt::Display for Submersible {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Submersible {} [{}/{}]", self.id, self.cargo.total(), self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_respects_capacity() {
        let mut sub = Submersible::new(CraftId('A'), 2);
        assert!(sub.load(Resource::Iron));
        assert!(sub.load(Resource::Salt));

        let before = sub.clone();
        assert!(!sub.load(Resource::Silica));
        assert_eq!(sub, before);
        assert_eq!(sub.free_space(), 0);
    }

    #[test]
    fn test_unload_into_bay() {
        let mut sub = Submersible::new(CraftId('C'), 3);
        sub.load(Resource::Hydrocarbon);
        sub.load(Resource::Hydrocarbon);

        let mut bay = ResourcePool::new();
        let moved = sub.unload_into(&mut bay);

        assert_eq!(moved.count(Resource::Hydrocarbon), 2);
        assert!(sub.cargo().is_empty());
        assert_eq!(bay.total(), 2);
    }

    #[test]
    fn test_display() {
        let mut sub = Submersible::new(CraftId('F'), 3);
        sub.load(Resource::Sulfur);
        assert_eq!(sub.to_string(), "Submersible F [1/3]");
    }
}
