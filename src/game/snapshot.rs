//! Read-only views for display and logging collaborators.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Action, PlayerId, PlayerMap};
use crate::players::Player;
use crate::rules::{ActionOutcome, ContestedResource, Placement};

use super::controller::Phase;
use super::scoring::FinalScore;

/// One executed action in the history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub round: u32,
    /// Position in the whole game, starting at 0.
    pub sequence: u64,
    pub player: PlayerId,
    pub action: Action,
    pub outcome: ActionOutcome,
}

/// Full public state at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub current_player: Option<PlayerId>,
    pub first_player: PlayerId,
    pub board: Board,
    pub players: Vec<Player>,
    /// This round's worker placements.
    pub placements: Vec<(ContestedResource, Placement)>,
    pub actions_taken: u64,
}

/// Headline numbers of a finished (or abandoned) game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    pub rounds_played: u32,
    pub actions_taken: u64,
    pub rockets_launched: u32,
    pub final_scores: PlayerMap<FinalScore>,
    pub winner: Option<PlayerId>,
}
