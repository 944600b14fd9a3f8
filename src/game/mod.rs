//! Game controller: phases, turn flow, scoring and read-only views.
//!
//! ## Key Types
//!
//! - `GameBuilder`: seats, seed and rules configuration
//! - `Game`: owns the table and drives income, action and cleanup phases
//! - `FinalScore`, `GameSnapshot`, `GameSummary`: results and views

pub mod controller;
pub mod scoring;
pub mod snapshot;

pub use controller::{Game, GameBuilder, Phase};
pub use scoring::{final_scores, ranking, FinalScore};
pub use snapshot::{ActionRecord, GameSnapshot, GameSummary};
