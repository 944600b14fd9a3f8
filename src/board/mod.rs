//! The ocean board and the pieces it owns.
//!
//! ## Key Types
//!
//! - `Board`: grid cells, locks and water, vessels, occluder, pollution
//! - `Submersible`: shared craft with a capacity-limited hold
//! - `Rocket`: per-column cargo manifest with one wildcard slot
//! - `MineralDeposit`: floor deposit with its excavation track

pub mod cell;
pub mod craft;
pub mod deposit;
pub mod ocean;
pub mod rocket;

pub use cell::Cell;
pub use craft::Submersible;
pub use deposit::MineralDeposit;
pub use ocean::{Board, PathPreview};
pub use rocket::{KindProgress, LoadSlot, Rocket};
