//! Round structure and the single mutation entry point.
//!
//! ## Lifecycle
//!
//! ```text
//! build → setup → start_round → run_income_phase → submit_action* → run_cleanup_phase
//!                      ↑                                                   │
//!                      └───────────────────────────────────────────────────┘
//! ```
//!
//! `start_round` returns `false` once the round limit is passed or every
//! rocket has launched; the game is then over. Calling a phase method out
//! of sequence is a bug in the caller and panics. Rule violations inside
//! the action phase are ordinary `GameError` values.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::core::{Action, ActionKind, GameError, GameResult, GameRng, PlayerId, PlayerMap, RulesConfig};
use crate::players::Player;
use crate::rules::{ActionOutcome, Table, WorkerLedger};

use super::scoring::{self, FinalScore};
use super::snapshot::{ActionRecord, GameSnapshot, GameSummary};

/// Where in the round the game is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Built, vessels not yet placed.
    Setup,
    /// Between rounds, and the income step of a round.
    Sunlight,
    Action,
    Cleanup,
    GameOver,
}

/// Builder for a [`Game`].
///
/// ```
/// use lineae::GameBuilder;
///
/// let game = GameBuilder::new().player("Ada").player("Grace").seed(7).build().unwrap();
/// assert_eq!(game.players().player_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    names: Vec<String>,
    seed: u64,
    config: Option<RulesConfig>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    #[must_use]
    pub fn players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Generate the board and seat the players.
    pub fn build(self) -> GameResult<Game> {
        let rng = GameRng::new(self.seed);
        let table = Table::new(self.config.unwrap_or_default(), &self.names, &rng)?;
        Ok(Game {
            table,
            seed: self.seed,
            round: 0,
            phase: Phase::Setup,
            history: Vector::new(),
        })
    }
}

/// One play-through.
#[derive(Clone, Debug)]
pub struct Game {
    table: Table,
    seed: u64,
    round: u32,
    phase: Phase,
    history: Vector<ActionRecord>,
}

impl Game {
    // === Queries ===

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        self.table.config()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.table.board()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        self.table.players()
    }

    pub fn player(&self, id: PlayerId) -> GameResult<&Player> {
        self.table.player(id)
    }

    #[must_use]
    pub fn ledger(&self) -> &WorkerLedger {
        self.table.ledger()
    }

    #[must_use]
    pub fn first_player(&self) -> PlayerId {
        self.table.turn_order().first_player()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Seat to act. `None` outside the action phase.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        (self.phase == Phase::Action).then(|| self.table.turn_order().current())
    }

    /// Order in which seats pick starting vessel columns.
    #[must_use]
    pub fn setup_order(&self) -> Vec<PlayerId> {
        self.table.turn_order().setup_order()
    }

    /// Action kinds `player` could legally take now.
    #[must_use]
    pub fn valid_action_kinds(&self, player: PlayerId) -> Vec<ActionKind> {
        if self.phase != Phase::Action {
            return Vec::new();
        }
        self.table.valid_action_kinds(player)
    }

    /// Concrete legal actions from the candidate set.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.phase != Phase::Action {
            return Vec::new();
        }
        self.table.legal_actions(player)
    }

    /// Check an action without performing it.
    pub fn validate(&self, player: PlayerId, action: &Action) -> GameResult<()> {
        if self.phase != Phase::Action {
            return Err(GameError::illegal("Not in the action phase"));
        }
        self.table.validate(player, action)
    }

    // === Phases ===

    /// Place each listed seat's vessel and hand out setup bonus cubes from
    /// the deposit beneath it.
    pub fn setup(&mut self, vessel_columns: &BTreeMap<PlayerId, u8>) -> GameResult<()> {
        assert_eq!(self.phase, Phase::Setup, "setup called twice");

        for (&player, &column) in vessel_columns {
            self.table.player(player)?;
            if usize::from(column) >= self.table.board.width() {
                return Err(GameError::invalid(format!("column {column} is off the board")));
            }
        }
        for (&player, &column) in vessel_columns {
            self.table.board.place_vessel(player, column)?;
            if let Some(deposit) = self.table.board.deposit_at_column(column) {
                let bonus = self.table.board.deposits()[deposit].setup_bonus();
                self.table.players[player].cargo_mut().add(bonus, 1);
            }
        }

        self.phase = Phase::Sunlight;
        debug!(players = vessel_columns.len(), "setup complete");
        Ok(())
    }

    /// Begin the next round. Returns `false` when the game has ended.
    pub fn start_round(&mut self) -> bool {
        assert!(
            matches!(self.phase, Phase::Sunlight | Phase::GameOver),
            "start_round called during {:?}",
            self.phase
        );
        if self.phase == Phase::GameOver {
            return false;
        }

        self.round += 1;
        if self.round > self.table.config.max_rounds || self.table.board.incomplete_rockets() == 0 {
            self.round -= 1;
            self.phase = Phase::GameOver;
            info!(rounds = self.round, winner = ?self.winner(), "game over");
            return false;
        }

        for (_, seat) in self.table.players.iter_mut() {
            seat.clear_passed();
        }
        self.table.turn_order.reset_for_new_round();
        self.table.ledger.clear();
        info!(round = self.round, first = %self.first_player(), "round started");
        true
    }

    /// Each vessel collects the energy of its column. Moves to the action
    /// phase.
    pub fn run_income_phase(&mut self) -> PlayerMap<u32> {
        assert_eq!(self.phase, Phase::Sunlight, "income outside the sunlight phase");
        assert!(self.round > 0, "income before the first round");

        let table = &mut self.table;
        let energy = table
            .players
            .map(|id, _| table.board.vessel_column(id).map_or(0, |col| table.board.energy_at(col)));
        let mut granted = PlayerMap::with_value(energy.player_count(), 0);
        for (id, seat) in table.players.iter_mut() {
            granted[id] = seat.add_electricity(energy[id]);
        }

        self.phase = Phase::Action;
        debug!(round = self.round, ?granted, "income granted");
        granted
    }

    /// Validate and perform one action.
    ///
    /// # Panics
    ///
    /// Outside the action phase.
    pub fn submit_action(&mut self, player: PlayerId, action: Action) -> GameResult<ActionOutcome> {
        assert_eq!(self.phase, Phase::Action, "submit_action called outside the action phase");

        let outcome = match self.table.apply(player, &action) {
            Ok(outcome) => outcome,
            Err(err) => {
                trace!(player = %player, kind = %action.kind(), reason = %err, "action rejected");
                return Err(err);
            }
        };

        if !outcome.immediate_action {
            let players = &self.table.players;
            let next = self.table.turn_order.next_turn(|id| players[id].has_passed());
            if next.is_none() {
                self.phase = Phase::Cleanup;
                debug!(round = self.round, "all players passed");
            }
        }

        self.history.push_back(ActionRecord {
            round: self.round,
            sequence: self.history.len() as u64,
            player,
            action,
            outcome: outcome.clone(),
        });
        Ok(outcome)
    }

    /// Advance the occluder, dissolve deposits, return every worker.
    pub fn run_cleanup_phase(&mut self) {
        assert_eq!(self.phase, Phase::Cleanup, "cleanup before every player passed");

        self.table.board.advance_occluder();
        let dissolved = self.table.board.dissolve_deposits();
        for (_, seat) in self.table.players.iter_mut() {
            seat.reset_workers();
        }

        self.phase = Phase::Sunlight;
        debug!(
            round = self.round,
            occluder = self.table.board.occluder(),
            dissolved = dissolved.len(),
            "cleanup complete"
        );
    }

    // === Results ===

    /// Final tallies including end-of-game bonuses. Seats are not modified.
    #[must_use]
    pub fn final_scores(&self) -> PlayerMap<FinalScore> {
        scoring::final_scores(&self.table.players)
    }

    /// Winner of a finished game.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.is_game_over() {
            return None;
        }
        scoring::ranking(&self.final_scores()).first().copied()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            round: self.round,
            phase: self.phase,
            game_over: self.is_game_over(),
            current_player: self.current_player(),
            first_player: self.first_player(),
            board: self.table.board.clone(),
            players: self.table.players.values().cloned().collect(),
            placements: self.table.ledger.entries(),
            actions_taken: self.history.len() as u64,
        }
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            seed: self.seed,
            rounds_played: self.round,
            actions_taken: self.history.len() as u64,
            rockets_launched: self
                .table
                .players
                .values()
                .map(|p| p.launched_rockets().len() as u32)
                .sum(),
            final_scores: self.final_scores(),
            winner: self.winner(),
        }
    }

    #[cfg(test)]
    pub(crate) fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, Resource};

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    fn game(players: usize) -> Game {
        GameBuilder::new()
            .players((0..players).map(|i| format!("Player {}", i + 1)))
            .seed(21)
            .build()
            .unwrap()
    }

    fn started(vessels: &[u8]) -> Game {
        let mut g = game(vessels.len());
        let columns = vessels.iter().enumerate().map(|(i, &c)| (p(i as u8), c)).collect();
        g.setup(&columns).unwrap();
        assert!(g.start_round());
        g
    }

    #[test]
    fn test_player_count_bounds() {
        assert!(GameBuilder::new().build().is_err());
        assert!(game(5).players().player_count() == 5);
        let six = GameBuilder::new().players((0..6).map(|i| i.to_string())).build();
        assert_eq!(six.unwrap_err().to_string(), "Invalid argument: Must have 1-5 players");
    }

    #[test]
    fn test_setup_grants_deposit_bonus() {
        let mut g = game(2);
        let bonus = g.board().deposits()[2].setup_bonus();
        g.setup(&BTreeMap::from([(p(0), 5), (p(1), 0)])).unwrap();

        assert_eq!(g.board().vessel_column(p(0)), Some(5));
        assert_eq!(g.player(p(0)).unwrap().cargo().count(bonus), 1);
        assert_eq!(g.player(p(1)).unwrap().cargo().total(), 1);
        assert_eq!(g.phase(), Phase::Sunlight);
    }

    #[test]
    fn test_setup_rejects_bad_column_without_change() {
        let mut g = game(2);
        let err = g.setup(&BTreeMap::from([(p(0), 2), (p(1), 8)])).unwrap_err();
        assert!(matches!(err, GameError::InvalidArgument(_)));
        assert_eq!(g.board().vessel_column(p(0)), None);
        assert_eq!(g.phase(), Phase::Setup);
    }

    #[test]
    #[should_panic(expected = "setup called twice")]
    fn test_setup_twice_panics() {
        let mut g = started(&[0, 1]);
        let _ = g.setup(&BTreeMap::new());
    }

    #[test]
    fn test_income_by_column() {
        // Occluder starts at 0: column 5 is the rightmost lit column.
        let mut g = started(&[5, 7]);
        let granted = g.run_income_phase();
        assert_eq!(granted[p(0)], 6);
        assert_eq!(granted[p(1)], 0);
        assert_eq!(g.player(p(0)).unwrap().electricity(), 6);
        assert_eq!(g.phase(), Phase::Action);
        assert_eq!(g.current_player(), Some(p(0)));
    }

    #[test]
    #[should_panic(expected = "submit_action called outside the action phase")]
    fn test_submit_outside_action_phase_panics() {
        let mut g = started(&[0, 1]);
        let _ = g.submit_action(p(0), Action::Pass);
    }

    #[test]
    fn test_validate_outside_action_phase_is_illegal() {
        let g = game(2);
        let err = g.validate(p(0), &Action::Pass).unwrap_err();
        assert!(matches!(err, GameError::IllegalAction(_)));
        assert_eq!(err.to_string(), "Not in the action phase");

        let mut g = started(&[0, 1]);
        assert_eq!(g.phase(), Phase::Sunlight);
        assert!(g.validate(p(0), &Action::BasicIncome).is_err());

        g.run_income_phase();
        assert!(g.validate(p(0), &Action::BasicIncome).is_ok());

        g.submit_action(p(0), Action::Pass).unwrap();
        g.submit_action(p(1), Action::Pass).unwrap();
        assert_eq!(g.phase(), Phase::Cleanup);
        assert!(g.validate(p(1), &Action::Pass).is_err());
    }

    #[test]
    fn test_turns_rotate_and_immediate_actions_keep_turn() {
        let mut g = started(&[0, 1]);
        g.run_income_phase();

        let outcome = g.submit_action(p(0), Action::BasicIncome).unwrap();
        assert!(outcome.immediate_action);
        assert_eq!(g.current_player(), Some(p(0)));

        g.submit_action(p(0), Action::MoveVessel { column: 2 }).unwrap();
        assert_eq!(g.current_player(), Some(p(1)));

        let err = g.submit_action(p(0), Action::Pass).unwrap_err();
        assert_eq!(err.to_string(), "Not your turn");
        assert_eq!(g.history().len(), 2);
    }

    #[test]
    fn test_round_ends_when_everyone_passes() {
        let mut g = started(&[0, 1]);
        g.run_income_phase();
        g.submit_action(p(0), Action::Pass).unwrap();
        assert_eq!(g.current_player(), Some(p(1)));
        g.submit_action(p(1), Action::Pass).unwrap();

        assert_eq!(g.phase(), Phase::Cleanup);
        assert_eq!(g.current_player(), None);
        assert!(g.valid_action_kinds(p(0)).is_empty());
    }

    #[test]
    fn test_passed_player_is_skipped() {
        let mut g = started(&[0, 1, 2]);
        g.run_income_phase();
        g.submit_action(p(0), Action::Pass).unwrap();
        g.submit_action(p(1), Action::MoveVessel { column: 0 }).unwrap();
        g.submit_action(p(2), Action::MoveVessel { column: 3 }).unwrap();
        assert_eq!(g.current_player(), Some(p(1)));
    }

    #[test]
    fn test_cleanup_resets_and_advances() {
        let mut g = started(&[0, 1]);
        g.run_income_phase();
        g.submit_action(p(0), Action::BasicIncome).unwrap();
        g.submit_action(p(0), Action::Pass).unwrap();
        g.submit_action(p(1), Action::Pass).unwrap();
        let cubes = g.board().cubes_on_board();

        g.run_cleanup_phase();

        assert_eq!(g.board().occluder(), 1);
        assert_eq!(g.board().cubes_on_board(), cubes + 8);
        assert_eq!(g.player(p(0)).unwrap().available_workers(), 4);
        assert_eq!(g.phase(), Phase::Sunlight);

        assert!(g.start_round());
        assert_eq!(g.round(), 2);
        assert!(!g.player(p(0)).unwrap().has_passed());
    }

    #[test]
    fn test_game_ends_after_round_limit() {
        let mut g = GameBuilder::new()
            .player("Solo")
            .config(RulesConfig::default().with_max_rounds(1))
            .build()
            .unwrap();
        g.setup(&BTreeMap::from([(p(0), 3)])).unwrap();
        assert!(g.start_round());
        assert_eq!(g.winner(), None);
        g.run_income_phase();
        g.submit_action(p(0), Action::Pass).unwrap();
        g.run_cleanup_phase();

        assert!(!g.start_round());
        assert!(g.is_game_over());
        assert_eq!(g.round(), 1);
        assert_eq!(g.winner(), Some(p(0)));
        assert!(!g.start_round());
    }

    #[test]
    fn test_special_election_sets_next_round_order() {
        let mut g = started(&[0, 1]);
        g.run_income_phase();
        g.submit_action(p(0), Action::Pass).unwrap();
        g.submit_action(p(1), Action::SpecialElection { workers: 1 }).unwrap();
        assert_eq!(g.first_player(), p(1));
        // P1 is the only seat left and keeps acting.
        assert_eq!(g.current_player(), Some(p(1)));
        g.submit_action(p(1), Action::Pass).unwrap();
        g.run_cleanup_phase();
        g.start_round();
        g.run_income_phase();
        assert_eq!(g.current_player(), Some(p(1)));
    }

    #[test]
    fn test_full_excavation_track_rejects_submission() {
        let mut g = started(&[0, 1]);
        g.run_income_phase();
        for _ in 0..5 {
            g.table_mut().board.deposit_mut(3).unwrap().excavate(p(1));
        }
        let board = g.board().clone();
        let players = g.players().clone();

        let action = Action::move_submersible(crate::core::CraftId('E'), std::iter::empty()).with_excavate();
        let err = g.submit_action(p(0), action).unwrap_err();

        assert_eq!(err.to_string(), "Excavation track is full");
        assert_eq!(g.board(), &board);
        assert_eq!(g.players(), &players);
        assert!(g.ledger().is_empty());
        assert!(g.history().is_empty());
        assert_eq!(g.current_player(), Some(p(0)));
    }

    #[test]
    fn test_history_and_snapshot() {
        let mut g = started(&[0, 1]);
        g.run_income_phase();
        g.table_mut()
            .board
            .place_resource(Position::new(0, 4), Resource::Salt)
            .unwrap();
        g.submit_action(p(0), Action::move_submersible(crate::core::CraftId('A'), [Position::new(0, 4)]))
            .unwrap();

        let record = g.history().front().unwrap();
        assert_eq!(record.round, 1);
        assert_eq!(record.sequence, 0);
        assert_eq!(record.outcome.resources_collected, vec![Resource::Salt]);

        let snap = g.snapshot();
        assert_eq!(snap.placements.len(), 1);
        assert_eq!(snap.current_player, Some(p(1)));
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
