//! Everything the rules read and write during play.

use crate::board::Board;
use crate::core::{GameError, GameResult, GameRng, PlayerId, PlayerMap, RulesConfig};
use crate::players::{Player, TurnOrder};

use super::contention::WorkerLedger;

/// Board, seats, rotation and placements of one game.
///
/// The validator only reads a `Table`; the executor is the only code that
/// writes one.
#[derive(Clone, Debug)]
pub struct Table {
    pub(crate) config: RulesConfig,
    pub(crate) board: Board,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) turn_order: TurnOrder,
    pub(crate) ledger: WorkerLedger,
    /// Stream for excavation bonus cubes.
    pub(crate) rng: GameRng,
}

impl Table {
    /// Seat `names` around a freshly generated board.
    pub fn new(config: RulesConfig, names: &[String], rng: &GameRng) -> GameResult<Self> {
        config.validate()?;
        if !(config.min_players..=config.max_players).contains(&names.len()) {
            return Err(GameError::invalid(format!(
                "Must have {}-{} players",
                config.min_players, config.max_players
            )));
        }

        let board = Board::generate(&config, rng)?;
        let count = names.len();
        let players = PlayerMap::new(count, |id| Player::new(id, names[id.index()].clone(), count, &config));

        Ok(Self {
            board,
            players,
            turn_order: TurnOrder::new(count),
            ledger: WorkerLedger::new(),
            rng: rng.for_context("excavation"),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn turn_order(&self) -> &TurnOrder {
        &self.turn_order
    }

    #[must_use]
    pub fn ledger(&self) -> &WorkerLedger {
        &self.ledger
    }

    pub fn player(&self, id: PlayerId) -> GameResult<&Player> {
        self.players
            .get(id)
            .ok_or_else(|| GameError::not_found(format!("Player {id}")))
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> GameResult<&mut Player> {
        self.players
            .get_mut(id)
            .ok_or_else(|| GameError::not_found(format!("Player {id}")))
    }
}
