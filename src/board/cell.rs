//! A single ocean cell.

use serde::{Deserialize, Serialize};

use crate::core::{CraftId, Resource};

/// Contents of one grid position.
///
/// A cell is occupied by at most one resource cube or one submersible,
/// never both. Water is independent of occupancy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) resource: Option<Resource>,
    pub(crate) craft: Option<CraftId>,
    pub(crate) water: bool,
}

impl Cell {
    #[must_use]
    pub fn resource(&self) -> Option<Resource> {
        self.resource
    }

    #[must_use]
    pub fn craft(&self) -> Option<CraftId> {
        self.craft
    }

    #[must_use]
    pub fn has_water(&self) -> bool {
        self.water
    }

    /// Neither a cube nor a submersible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resource.is_none() && self.craft.is_none()
    }

    /// Put a cube here if the cell is empty.
    pub(crate) fn add_resource(&mut self, kind: Resource) -> bool {
        if !self.is_empty() {
            return false;
        }
        self.resource = Some(kind);
        true
    }

    pub(crate) fn take_resource(&mut self) -> Option<Resource> {
        self.resource.take()
    }
}
