//! Seats: per-player economy and the action-phase rotation.

pub mod player;
pub mod turn_order;

pub use player::Player;
pub use turn_order::TurnOrder;
