//! The action pipeline: contention ledger, validation, execution.
//!
//! ## Flow
//!
//! `Table::apply` runs `Table::validate` and, only if it passes, performs
//! the action and returns an `ActionOutcome`. Turn advancement and phases
//! belong to `game::Game`, which owns the `Table`.

pub mod contention;
pub mod execute;
pub mod outcome;
pub mod table;
pub mod validate;

pub use contention::{ContestedResource, Placement, WorkerLedger};
pub use outcome::ActionOutcome;
pub use table::Table;
