//! Automated seats.
//!
//! A `Policy` turns a read-only view of the game into one fully-formed
//! action. The controller validates whatever comes back, so a policy never
//! needs to be right; `play_game` falls back to passing when it is not.

use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::core::{Action, GameResult, GameRng, PlayerId};
use crate::game::{Game, GameSummary};

/// Actions one seat may take in a round before it is made to pass.
pub const MAX_ACTIONS_PER_ROUND: usize = 200;

// =============================================================================
// Policy
// =============================================================================

/// Chooses actions for a seat.
pub trait Policy {
    /// Pick the next action for `player`, who is the current player.
    fn choose_action(&self, game: &Game, player: PlayerId, rng: &mut GameRng) -> Action;

    /// Pick a starting vessel column during setup.
    fn choose_vessel_column(&self, game: &Game, _player: PlayerId, rng: &mut GameRng) -> u8 {
        rng.gen_range_usize(0..game.board().width()) as u8
    }
}

/// Uniform choice among the legal candidates.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn choose_action(&self, game: &Game, player: PlayerId, rng: &mut GameRng) -> Action {
        let legal = game.legal_actions(player);
        rng.choose(&legal).cloned().unwrap_or(Action::Pass)
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Play `game` to the end with one policy per seat.
///
/// Setup runs first if it has not happened yet. Each seat draws from its
/// own fork of `rng`. Rejected actions are replaced by a pass.
///
/// # Panics
///
/// If `policies` does not have one entry per seat.
pub fn play_game(game: &mut Game, policies: &[&dyn Policy], rng: &mut GameRng) -> GameResult<GameSummary> {
    assert_eq!(
        policies.len(),
        game.players().player_count(),
        "one policy per seat required"
    );

    let mut seat_rngs: Vec<GameRng> = policies.iter().map(|_| rng.fork()).collect();

    if game.phase() == crate::game::Phase::Setup {
        let mut columns = BTreeMap::new();
        for player in game.setup_order() {
            let seat = player.index();
            let column = policies[seat].choose_vessel_column(game, player, &mut seat_rngs[seat]);
            columns.insert(player, column);
        }
        game.setup(&columns)?;
    }

    while game.start_round() {
        game.run_income_phase();
        let mut taken = vec![0usize; policies.len()];

        while let Some(player) = game.current_player() {
            let seat = player.index();
            let action = if taken[seat] >= MAX_ACTIONS_PER_ROUND {
                Action::Pass
            } else {
                policies[seat].choose_action(game, player, &mut seat_rngs[seat])
            };
            taken[seat] += 1;

            if let Err(err) = game.submit_action(player, action) {
                warn!(player = %player, reason = %err, "policy chose an illegal action, passing");
                game.submit_action(player, Action::Pass)?;
            }
        }

        game.run_cleanup_phase();
    }

    let summary = game.summary();
    debug!(seed = summary.seed, winner = ?summary.winner, actions = summary.actions_taken, "game finished");
    Ok(summary)
}
