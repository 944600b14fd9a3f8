//! What an executed action did.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Resource, ResourcePool};

/// Structured result of one successful action. Rejected actions never
/// produce an outcome; they come back as a `GameError`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Human-readable summary.
    pub message: String,
    pub vp_earned: u32,
    /// Cubes picked up along a submersible path.
    pub resources_collected: Vec<Resource>,
    /// Name of the rocket this action completed.
    pub rocket_launched: Option<String>,
    /// The same seat acts again.
    pub immediate_action: bool,
    /// Seat whose workers were returned by a bump.
    pub bumped: Option<PlayerId>,
    /// Kind loaded by excavation, and the track slot reached.
    pub excavated: Option<(Resource, usize)>,
    pub bonus_resource: Option<Resource>,
    pub technology_gained: Option<String>,
    pub technology_discarded: Option<String>,
    /// Cargo moved into the bay by docking.
    pub docked: Option<ResourcePool>,
    /// Electricity actually stored (income cap applies).
    pub electricity_gained: u32,
}

impl ActionOutcome {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

impl std::fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if self.vp_earned > 0 {
            write!(f, " (+{} VP)", self.vp_earned)?;
        }
        if let Some(rocket) = &self.rocket_launched {
            write!(f, ", launched {rocket}")?;
        }
        Ok(())
    }
}
