//! Player actions.
//!
//! An `Action` is one fully-formed request from a seat. Each variant carries
//! only its own parameters; the acting seat is passed alongside it to
//! `Game::submit_action`. `ActionKind` names the variant without parameters
//! and is what `Game::valid_action_kinds` enumerates.
//!
//! ```
//! use lineae::core::{Action, ActionKind, CraftId, Position};
//!
//! let dive = Action::move_submersible(CraftId('A'), [Position::new(0, 6), Position::new(0, 7)])
//!     .with_workers(2);
//! assert_eq!(dive.kind(), ActionKind::MoveSubmersible);
//! assert_eq!(dive.workers_required(), 2);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::{CraftId, Position};
use super::error::GameError;
use super::resource::Resource;

/// Cells a submersible steps through, in order. Short paths stay inline.
pub type Path = SmallVec<[Position; 6]>;

/// Cubes to load, in loading order.
pub type CubeList = SmallVec<[Resource; 5]>;

/// A complete player request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Stop taking actions this round.
    Pass,
    /// Take money from the bank. The seat acts again immediately.
    BasicIncome,
    /// Buy another worker at the scheduled price.
    HireWorker,
    /// Claim the first-player marker, bumping its holder.
    SpecialElection { workers: u32 },
    /// Sail the surface vessel to another column.
    MoveVessel { column: u8 },
    /// Take control of a submersible and optionally drive it.
    MoveSubmersible {
        craft: CraftId,
        path: Path,
        workers: u32,
        excavate: bool,
        dock: bool,
    },
    /// Open or close a lock. The seat acts again immediately.
    ToggleLock { column: u8 },
    /// Load cubes from the cargo bay onto the rocket at the vessel's column.
    LoadRocket { cubes: CubeList },
    /// Burn a hydrocarbon for electricity, polluting a column.
    /// `None` pollutes the vessel's own column.
    UseDiesel { pollution_column: Option<u8> },
}

impl Action {
    /// Submersible move with one worker and no excavate/dock.
    pub fn move_submersible(craft: CraftId, path: impl IntoIterator<Item = Position>) -> Self {
        Action::MoveSubmersible {
            craft,
            path: path.into_iter().collect(),
            workers: 1,
            excavate: false,
            dock: false,
        }
    }

    /// Rocket load of the listed cubes.
    pub fn load_rocket(cubes: impl IntoIterator<Item = Resource>) -> Self {
        Action::LoadRocket {
            cubes: cubes.into_iter().collect(),
        }
    }

    /// Set the committed workers of a contested action. No-op otherwise.
    #[must_use]
    pub fn with_workers(mut self, count: u32) -> Self {
        match &mut self {
            Action::SpecialElection { workers } | Action::MoveSubmersible { workers, .. } => {
                *workers = count;
            }
            _ => {}
        }
        self
    }

    /// Request excavation at the end of a submersible move. No-op otherwise.
    #[must_use]
    pub fn with_excavate(mut self) -> Self {
        if let Action::MoveSubmersible { excavate, .. } = &mut self {
            *excavate = true;
        }
        self
    }

    /// Request docking at the end of a submersible move. No-op otherwise.
    #[must_use]
    pub fn with_dock(mut self) -> Self {
        if let Action::MoveSubmersible { dock, .. } = &mut self {
            *dock = true;
        }
        self
    }

    /// The parameterless kind of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Pass => ActionKind::Pass,
            Action::BasicIncome => ActionKind::BasicIncome,
            Action::HireWorker => ActionKind::HireWorker,
            Action::SpecialElection { .. } => ActionKind::SpecialElection,
            Action::MoveVessel { .. } => ActionKind::MoveVessel,
            Action::MoveSubmersible { .. } => ActionKind::MoveSubmersible,
            Action::ToggleLock { .. } => ActionKind::ToggleLock,
            Action::LoadRocket { .. } => ActionKind::LoadRocket,
            Action::UseDiesel { .. } => ActionKind::UseDiesel,
        }
    }

    /// Workers this action places.
    #[must_use]
    pub fn workers_required(&self) -> u32 {
        match self {
            Action::Pass | Action::MoveVessel { .. } | Action::UseDiesel { .. } => 0,
            Action::BasicIncome | Action::HireWorker | Action::ToggleLock { .. } | Action::LoadRocket { .. } => 1,
            Action::SpecialElection { workers } | Action::MoveSubmersible { workers, .. } => *workers,
        }
    }
}

/// Action variant names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Pass,
    BasicIncome,
    HireWorker,
    SpecialElection,
    MoveVessel,
    MoveSubmersible,
    ToggleLock,
    LoadRocket,
    UseDiesel,
}

impl ActionKind {
    pub const ALL: [ActionKind; 9] = [
        ActionKind::Pass,
        ActionKind::BasicIncome,
        ActionKind::HireWorker,
        ActionKind::SpecialElection,
        ActionKind::MoveVessel,
        ActionKind::MoveSubmersible,
        ActionKind::ToggleLock,
        ActionKind::LoadRocket,
        ActionKind::UseDiesel,
    ];

    /// Does the acting seat keep the turn after this action?
    #[must_use]
    pub const fn is_immediate(self) -> bool {
        matches!(self, ActionKind::BasicIncome | ActionKind::ToggleLock)
    }

    /// Snake-case name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Pass => "pass",
            ActionKind::BasicIncome => "basic_income",
            ActionKind::HireWorker => "hire_worker",
            ActionKind::SpecialElection => "special_election",
            ActionKind::MoveVessel => "move_vessel",
            ActionKind::MoveSubmersible => "move_submersible",
            ActionKind::ToggleLock => "toggle_lock",
            ActionKind::LoadRocket => "load_rocket",
            ActionKind::UseDiesel => "use_diesel",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ActionKind {
    type Err = GameError;

    /// Accepts `basic_income`, `BASIC_INCOME`, `basic-income` and `basicincome`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.name().replace('_', "") == normalized)
            .ok_or_else(|| GameError::UnknownActionKind(s.to_string()))
    }
}
