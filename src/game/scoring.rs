//! End-of-game scoring and ranking.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::core::{PlayerId, PlayerMap};
use crate::players::Player;

/// One seat's final tally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    /// Points earned in play plus the end-of-game bonus.
    pub victory_points: u32,
    pub end_game_bonus: u32,
    pub money: u32,
    /// Cubes left in the cargo bay.
    pub resources: u32,
    pub rockets_launched: u32,
    pub technology_cards: u32,
}

impl FinalScore {
    #[must_use]
    pub fn for_player(player: &Player) -> Self {
        let bonus = player.end_game_bonus();
        Self {
            victory_points: player.victory_points() + bonus,
            end_game_bonus: bonus,
            money: player.money(),
            resources: player.cargo().total(),
            rockets_launched: player.launched_rockets().len() as u32,
            technology_cards: player.technology_cards().len() as u32,
        }
    }
}

/// Scores for every seat. Players are not modified.
#[must_use]
pub fn final_scores(players: &PlayerMap<Player>) -> PlayerMap<FinalScore> {
    players.map(|_, player| FinalScore::for_player(player))
}

/// Seats best first: most VP, then most rockets launched, then seat order.
#[must_use]
pub fn ranking(scores: &PlayerMap<FinalScore>) -> Vec<PlayerId> {
    let mut seats: Vec<PlayerId> = scores.player_ids().collect();
    seats.sort_by_key(|&id| {
        let score = &scores[id];
        (Reverse(score.victory_points), Reverse(score.rockets_launched), id)
    });
    seats
}
