//! Rules configuration.
//!
//! Every tunable number of the rules lives in `RulesConfig`. The defaults are
//! the published game; tests and simulations shrink or stretch them with the
//! `with_*` builders.

use serde::{Deserialize, Serialize};

use super::entity::{CraftId, Position};
use super::error::{GameError, GameResult};

/// Tunable rules parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Grid columns. Also the number of rockets (one per column).
    pub board_width: usize,
    /// Grid rows; row 0 is the surface.
    pub board_height: usize,
    /// Columns covered by one mineral deposit.
    pub deposit_span: usize,

    pub min_players: usize,
    pub max_players: usize,
    pub max_rounds: u32,

    pub initial_money: u32,
    pub max_electricity: u32,
    /// Starting workers for games with fewer than `crowded_player_count` seats.
    pub initial_workers: u32,
    /// Starting workers once the table is crowded.
    pub crowded_initial_workers: u32,
    pub crowded_player_count: usize,
    /// Workers a player can ever own, hired or not.
    pub worker_pool: u32,
    /// Price of the 1st, 2nd, ... hire beyond the starting count.
    /// The last entry repeats.
    pub hire_costs: Vec<u32>,
    pub max_technology_cards: usize,

    pub basic_income: u32,
    pub submersible_capacity: u32,
    pub dock_cost_per_cube: u32,
    /// Money per cube a submersible picks up on its path.
    pub collect_reward: u32,
    /// Electricity per submersible step after the first.
    pub electricity_per_step: u32,
    pub diesel_electricity: u32,

    /// Energy a sunlit column yields before pollution.
    pub base_energy: u32,
    /// Energy lost per pollution marker on a column.
    pub pollution_penalty: u32,

    /// Lock columns and whether each starts open.
    pub locks: Vec<(u8, bool)>,
    /// Submersibles and where they start.
    pub submersibles: Vec<(CraftId, Position)>,

    /// VP per excavation-track slot.
    pub excavation_vp: Vec<u32>,
    /// Track slot that grants a random bonus cube.
    pub bonus_cube_slot: usize,
    /// Track slot that grants a technology card.
    pub technology_slot: usize,
    /// VP for the 1st, 2nd, ... cube loaded in one action. The last entry repeats.
    pub loading_vp: Vec<u32>,
    /// Kind-specific cubes per rocket (one wildcard comes on top).
    pub rocket_requirements: u32,
    /// Cubes each deposit dissolves into its columns per cleanup.
    pub dissolve_per_round: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_width: 8,
            board_height: 10,
            deposit_span: 2,
            min_players: 1,
            max_players: 5,
            max_rounds: 7,
            initial_money: 3,
            max_electricity: 9,
            initial_workers: 4,
            crowded_initial_workers: 3,
            crowded_player_count: 4,
            worker_pool: 8,
            hire_costs: vec![4, 5, 6, 7, 8],
            max_technology_cards: 2,
            basic_income: 2,
            submersible_capacity: 3,
            dock_cost_per_cube: 1,
            collect_reward: 1,
            electricity_per_step: 1,
            diesel_electricity: 6,
            base_energy: 6,
            pollution_penalty: 2,
            locks: vec![(1, true), (3, false), (4, true), (6, false)],
            submersibles: vec![
                (CraftId('A'), Position::new(0, 5)),
                (CraftId('B'), Position::new(2, 5)),
                (CraftId('C'), Position::new(3, 7)),
                (CraftId('D'), Position::new(5, 7)),
                (CraftId('E'), Position::new(6, 9)),
                (CraftId('F'), Position::new(7, 5)),
            ],
            excavation_vp: vec![1, 1, 2, 1, 3],
            bonus_cube_slot: 1,
            technology_slot: 3,
            loading_vp: vec![1, 2, 3, 3, 3],
            rocket_requirements: 4,
            dissolve_per_round: 2,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_initial_money(mut self, money: u32) -> Self {
        self.initial_money = money;
        self
    }

    /// Replace the lock layout.
    #[must_use]
    pub fn with_locks(mut self, locks: Vec<(u8, bool)>) -> Self {
        self.locks = locks;
        self
    }

    /// Replace the submersible fleet.
    #[must_use]
    pub fn with_submersibles(mut self, submersibles: Vec<(CraftId, Position)>) -> Self {
        self.submersibles = submersibles;
        self
    }

    #[must_use]
    pub fn with_rocket_requirements(mut self, cubes: u32) -> Self {
        self.rocket_requirements = cubes;
        self
    }

    /// Number of mineral deposits on the floor.
    #[must_use]
    pub fn deposit_count(&self) -> usize {
        self.board_width / self.deposit_span
    }

    /// Excavation track length.
    #[must_use]
    pub fn track_length(&self) -> usize {
        self.excavation_vp.len()
    }

    /// Workers each player starts with at this table size.
    #[must_use]
    pub fn starting_workers(&self, player_count: usize) -> u32 {
        if player_count >= self.crowded_player_count {
            self.crowded_initial_workers
        } else {
            self.initial_workers
        }
    }

    /// Price of the next hire after `hired` hires.
    #[must_use]
    pub fn hire_cost(&self, hired: u32) -> u32 {
        schedule(&self.hire_costs, hired as usize)
    }

    /// VP for the cube at `index` within one loading action.
    #[must_use]
    pub fn loading_vp_at(&self, index: usize) -> u32 {
        schedule(&self.loading_vp, index)
    }

    /// Reject layouts the board cannot represent.
    pub fn validate(&self) -> GameResult<()> {
        if self.board_width == 0 || self.board_height < 2 || self.board_width > 64 || self.board_height > 64 {
            return Err(GameError::invalid("board must be 1-64 columns and 2-64 rows"));
        }
        if self.deposit_span == 0 || self.board_width % self.deposit_span != 0 {
            return Err(GameError::invalid("deposit span must divide the board width"));
        }
        if self.min_players == 0 || self.min_players > self.max_players {
            return Err(GameError::invalid("player bounds"));
        }
        if self.hire_costs.is_empty() || self.loading_vp.is_empty() || self.excavation_vp.is_empty() {
            return Err(GameError::invalid("cost and VP schedules must not be empty"));
        }
        if self.bonus_cube_slot >= self.track_length() || self.technology_slot >= self.track_length() {
            return Err(GameError::invalid("track bonus slot beyond track length"));
        }
        if let Some((col, _)) = self.locks.iter().find(|(col, _)| usize::from(*col) >= self.board_width) {
            return Err(GameError::invalid(format!("lock column {col} off the board")));
        }
        for (i, (id, pos)) in self.submersibles.iter().enumerate() {
            if usize::from(pos.col) >= self.board_width || usize::from(pos.row) >= self.board_height {
                return Err(GameError::invalid(format!("submersible {id} starts off the board")));
            }
            if self.submersibles[..i].iter().any(|(other, p)| other == id || p == pos) {
                return Err(GameError::invalid(format!("submersible {id} duplicated")));
            }
        }
        Ok(())
    }
}

/// Escalating schedule lookup: the last entry repeats.
fn schedule(table: &[u32], index: usize) -> u32 {
    table
        .get(index)
        .or_else(|| table.last())
        .copied()
        .unwrap_or(0)
}
