//! Core value types: ids, positions, resources, actions, errors, RNG and
//! rules configuration.
//!
//! Nothing here knows about the board or turn structure; the other modules
//! build on these types.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod resource;
pub mod rng;

pub use action::{Action, ActionKind, CubeList, Path};
pub use config::RulesConfig;
pub use entity::{CraftId, Position};
pub use error::{GameError, GameResult};
pub use player::{PlayerId, PlayerMap};
pub use resource::{Resource, ResourcePool};
pub use rng::GameRng;
