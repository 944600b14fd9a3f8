//! # lineae
//!
//! Rules engine for an ocean-world worker-placement game. Players commit
//! workers to shared submersibles and privileges, dive for mineral cubes,
//! dock them at their surface vessels and load them onto rockets before the
//! occluder darkens the sky or the round limit runs out.
//!
//! ## Design Principles
//!
//! 1. **Validate, then execute**: every action is checked against a
//!    read-only view first. A rejected action is a `GameError` value and
//!    leaves no trace.
//!
//! 2. **Seeded randomness**: setup and excavation bonuses draw from a
//!    `GameRng`, so a seed plus an action sequence replays exactly.
//!
//! 3. **No output**: the engine returns structured outcomes and emits
//!    `tracing` events. Rendering, input loops and analytics live outside.
//!
//! ## Modules
//!
//! - `core`: ids, positions, resources, actions, errors, RNG, configuration
//! - `board`: grid, locks and water, occluder, submersibles, rockets, deposits
//! - `players`: seat economy and turn rotation
//! - `rules`: contention ledger, validator, executor
//! - `game`: phase controller, scoring, snapshots
//! - `policy`: automated seats and a game driver
//!
//! ```
//! use std::collections::BTreeMap;
//! use lineae::{Action, GameBuilder, PlayerId};
//!
//! let mut game = GameBuilder::new().players(["Ada", "Grace"]).seed(1).build().unwrap();
//! game.setup(&BTreeMap::from([(PlayerId::new(0), 2), (PlayerId::new(1), 5)])).unwrap();
//! assert!(game.start_round());
//! game.run_income_phase();
//!
//! let outcome = game.submit_action(PlayerId::new(0), Action::BasicIncome).unwrap();
//! assert!(outcome.immediate_action);
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod players;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, CraftId, GameError, GameResult, GameRng, PlayerId, PlayerMap, Position, Resource,
    ResourcePool, RulesConfig,
};

pub use crate::board::{Board, MineralDeposit, Rocket, Submersible};

pub use crate::players::{Player, TurnOrder};

pub use crate::rules::{ActionOutcome, ContestedResource, WorkerLedger};

pub use crate::game::{ActionRecord, FinalScore, Game, GameBuilder, GameSnapshot, GameSummary, Phase};

pub use crate::policy::{play_game, Policy, RandomPolicy};
