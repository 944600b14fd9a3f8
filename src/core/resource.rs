//! Resource kinds and the fungible resource ledger.
//!
//! A `ResourcePool` is a multiset over the five resource kinds. It backs the
//! player cargo bay, submersible cargo and rocket manifests.
//!
//! Counts are unsigned, so a negative add or remove cannot be expressed.
//! `remove` and `transfer_to` either succeed completely or leave both pools
//! untouched.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A resource cube kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Resource {
    Silica,
    Sulfur,
    Salt,
    Iron,
    /// Burnable in the diesel engine.
    Hydrocarbon,
}

impl Resource {
    /// Number of resource kinds.
    pub const COUNT: usize = 5;

    /// Every kind, in ledger order.
    pub const ALL: [Resource; Resource::COUNT] = [
        Resource::Silica,
        Resource::Sulfur,
        Resource::Salt,
        Resource::Iron,
        Resource::Hydrocarbon,
    ];

    /// Ledger slot of this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Silica => "silica",
            Resource::Sulfur => "sulfur",
            Resource::Salt => "salt",
            Resource::Iron => "iron",
            Resource::Hydrocarbon => "hydrocarbon",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Resource {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Resource::ALL
            .into_iter()
            .find(|r| r.name() == lower)
            .ok_or_else(|| GameError::invalid(format!("unknown resource '{s}'")))
    }
}

/// Fungible counters per resource kind.
///
/// ```
/// use lineae::core::{Resource, ResourcePool};
///
/// let mut bay = ResourcePool::new();
/// bay.add(Resource::Iron, 2);
/// assert!(bay.remove(Resource::Iron, 1));
/// assert!(!bay.remove(Resource::Iron, 5));
/// assert_eq!(bay.count(Resource::Iron), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourcePool {
    counts: [u32; Resource::COUNT],
    total: u32,
}

impl ResourcePool {
    /// Empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool holding the listed cubes.
    #[must_use]
    pub fn from_cubes(cubes: &[Resource]) -> Self {
        let mut pool = Self::new();
        for &cube in cubes {
            pool.add(cube, 1);
        }
        pool
    }

    /// Add `count` cubes of `kind`.
    pub fn add(&mut self, kind: Resource, count: u32) {
        self.counts[kind.index()] += count;
        self.total += count;
    }

    /// Remove `count` cubes of `kind`. Returns false, unchanged, if short.
    pub fn remove(&mut self, kind: Resource, count: u32) -> bool {
        let slot = &mut self.counts[kind.index()];
        if *slot < count {
            return false;
        }
        *slot -= count;
        self.total -= count;
        true
    }

    /// At least `count` cubes of `kind`.
    #[must_use]
    pub fn has(&self, kind: Resource, count: u32) -> bool {
        self.counts[kind.index()] >= count
    }

    /// Cubes of `kind`.
    #[must_use]
    pub fn count(&self, kind: Resource) -> u32 {
        self.counts[kind.index()]
    }

    /// Cubes of every kind.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Does this pool contain every cube of `other`?
    #[must_use]
    pub fn contains_all(&self, other: &ResourcePool) -> bool {
        Resource::ALL
            .into_iter()
            .all(|kind| self.count(kind) >= other.count(kind))
    }

    /// Move `count` cubes of `kind` into `other`, all or nothing.
    pub fn transfer_to(&mut self, other: &mut ResourcePool, kind: Resource, count: u32) -> bool {
        if !self.remove(kind, count) {
            return false;
        }
        other.add(kind, count);
        true
    }

    /// Move every cube into `other`, returning what moved.
    pub fn drain_into(&mut self, other: &mut ResourcePool) -> ResourcePool {
        let moved = std::mem::take(self);
        for (kind, count) in moved.iter() {
            other.add(kind, count);
        }
        moved
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Non-zero (kind, count) pairs in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, u32)> + '_ {
        Resource::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|&(_, count)| count > 0)
    }
}

impl std::fmt::Display for ResourcePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, n)| format!("{k}: {n}")).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
