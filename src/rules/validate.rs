//! Legality checks.
//!
//! Every check here takes `&Table` and reports the first broken rule as a
//! `GameError`. Nothing is mutated; multi-step actions are simulated on
//! projected counters.

use crate::board::{Board, PathPreview};
use crate::core::{Action, ActionKind, CraftId, GameError, GameResult, PlayerId, Position, Resource, ResourcePool};
use crate::players::Player;

use super::contention::ContestedResource;
use super::table::Table;

/// Checked plan for a submersible action, reused by the executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DivePlan {
    pub electricity: u32,
    pub preview: PathPreview,
    /// Deposit to excavate, with the slot the player will reach.
    pub excavation: Option<(usize, usize)>,
    /// Fee for docking the final cargo.
    pub dock_cost: Option<u32>,
}

impl Table {
    /// Check `action` for `player` against the current state.
    pub fn validate(&self, player: PlayerId, action: &Action) -> GameResult<()> {
        let seat = self.player(player)?;
        if seat.has_passed() {
            return Err(GameError::illegal("Player has already passed"));
        }
        if self.turn_order.current() != player {
            return Err(GameError::illegal("Not your turn"));
        }

        match action {
            Action::Pass => Ok(()),
            Action::BasicIncome => require_workers(seat, 1),
            Action::HireWorker => {
                require_workers(seat, 1)?;
                if seat.workers_in_supply() == 0 {
                    return Err(GameError::illegal("No workers left to hire"));
                }
                let cost = self.config.hire_cost(seat.workers_hired());
                if seat.money() < cost {
                    return Err(GameError::illegal(format!("Not enough money (need ${cost})")));
                }
                Ok(())
            }
            Action::SpecialElection { workers } => {
                self.ledger.check(ContestedResource::SpecialElection, player, *workers)?;
                require_workers(seat, *workers)
            }
            Action::MoveVessel { column } => self.board.check_vessel_move(player, *column),
            Action::MoveSubmersible {
                craft,
                path,
                workers,
                excavate,
                dock,
            } => self
                .plan_dive(player, *craft, path, *workers, *excavate, *dock)
                .map(|_| ()),
            Action::ToggleLock { column } => {
                require_workers(seat, 1)?;
                self.board
                    .lock_is_open(*column)
                    .map(|_| ())
                    .ok_or_else(|| GameError::not_found(format!("Lock at column {column}")))
            }
            Action::LoadRocket { cubes } => self.check_load(seat, cubes),
            Action::UseDiesel { pollution_column } => self.diesel_column(seat, *pollution_column).map(|_| ()),
        }
    }

    /// Simulate a submersible action step by step.
    pub(crate) fn plan_dive(
        &self,
        player: PlayerId,
        craft: CraftId,
        path: &[Position],
        workers: u32,
        excavate: bool,
        dock: bool,
    ) -> GameResult<DivePlan> {
        let seat = self.player(player)?;
        let sub = self
            .board
            .submersible(craft)
            .ok_or_else(|| GameError::not_found(format!("Submersible {craft}")))?;
        self.ledger.check(ContestedResource::Craft(craft), player, workers)?;
        require_workers(seat, workers)?;

        if path.is_empty() && !excavate && !dock {
            return Err(GameError::illegal("Must specify movement, excavation, or docking"));
        }
        let electricity = path.len().saturating_sub(1) as u32 * self.config.electricity_per_step;
        if seat.electricity() < electricity {
            return Err(GameError::illegal(format!("Need {electricity} electricity")));
        }

        let preview = self.board.check_path(craft, path)?;
        let mut cargo = sub.cargo().total() + preview.collected.len() as u32;
        let money = seat.money() + preview.collected.len() as u32 * self.config.collect_reward;

        let excavation = if excavate {
            let deposit = self
                .board
                .deposit_under(preview.end)
                .ok_or_else(|| GameError::illegal(format!("No deposit below {}", preview.end)))?;
            if cargo >= sub.capacity() {
                return Err(GameError::illegal(format!("Submersible {craft} has no space to excavate")));
            }
            let slot = self.board.deposits()[deposit]
                .next_slot(player)
                .ok_or_else(|| GameError::illegal("Excavation track is full"))?;
            cargo += 1;
            Some((deposit, slot))
        } else {
            None
        };

        let dock_cost = if dock {
            if !is_below_vessel(&self.board, player, preview.end) {
                return Err(GameError::illegal(format!("Submersible {craft} is not below your vessel")));
            }
            if cargo == 0 {
                return Err(GameError::illegal("Nothing to dock"));
            }
            let cost = cargo * self.config.dock_cost_per_cube;
            if money < cost {
                return Err(GameError::illegal(format!("Not enough money to dock (need ${cost})")));
            }
            Some(cost)
        } else {
            None
        };

        Ok(DivePlan {
            electricity,
            preview,
            excavation,
            dock_cost,
        })
    }

    fn check_load(&self, seat: &Player, cubes: &[Resource]) -> GameResult<()> {
        require_workers(seat, 1)?;
        if cubes.is_empty() {
            return Err(GameError::invalid("nothing to load"));
        }
        let column = self
            .board
            .vessel_column(seat.id())
            .ok_or_else(|| GameError::illegal("Vessel not placed"))?;
        let mut rocket = match self.board.rocket_at(column) {
            Some(r) if r.completed_by().is_none() && !r.is_complete() => r.clone(),
            _ => return Err(GameError::illegal("No rocket or already complete")),
        };

        let wanted = ResourcePool::from_cubes(cubes);
        if let Some((kind, _)) = wanted.iter().find(|&(kind, n)| !seat.cargo().has(kind, n)) {
            return Err(GameError::illegal(format!("Don't have {kind}")));
        }
        for &kind in cubes {
            if rocket.load(kind).is_none() {
                return Err(GameError::illegal(format!("{} cannot take {kind}", rocket.name())));
            }
        }
        Ok(())
    }

    /// Column a diesel burn would pollute.
    pub(crate) fn diesel_column(&self, seat: &Player, requested: Option<u8>) -> GameResult<u8> {
        if !seat.cargo().has(Resource::Hydrocarbon, 1) {
            return Err(GameError::illegal("No hydrocarbon available"));
        }
        let vessel = self
            .board
            .vessel_column(seat.id())
            .ok_or_else(|| GameError::illegal("Vessel not placed"))?;
        let column = requested.unwrap_or(vessel);
        if usize::from(column) >= self.board.width() {
            return Err(GameError::invalid(format!("column {column} is off the board")));
        }
        if !self.board.same_water_level(vessel, column) {
            return Err(GameError::illegal(format!(
                "Column {column} is not reachable at the current water level"
            )));
        }
        if self.board.pollution_at(column) > 0 {
            return Err(GameError::illegal(format!("Column {column} already has pollution")));
        }
        Ok(column)
    }

    /// A representative set of well-formed actions for `player`, legal or
    /// not: one per target for single-target actions, single steps and
    /// in-place excavation or docking for every submersible, and the
    /// cheapest winning commitment for contested resources.
    #[must_use]
    pub fn candidate_actions(&self, player: PlayerId) -> Vec<Action> {
        let mut actions = vec![Action::Pass, Action::BasicIncome, Action::HireWorker];
        let board = &self.board;

        actions.push(Action::SpecialElection {
            workers: self.ledger.workers_needed(ContestedResource::SpecialElection, player),
        });
        actions.extend((0..board.width() as u8).map(|column| Action::MoveVessel { column }));

        for sub in board.submersibles() {
            let Some(at) = sub.position() else { continue };
            let workers = self.ledger.workers_needed(ContestedResource::Craft(sub.id()), player);
            let stay = Action::move_submersible(sub.id(), std::iter::empty()).with_workers(workers);
            actions.push(stay.clone().with_excavate());
            actions.push(stay.with_dock());
            for step in at.neighbours(board.width(), board.height()) {
                let dive = Action::move_submersible(sub.id(), [step]).with_workers(workers);
                actions.push(dive.clone().with_excavate());
                actions.push(dive.clone().with_dock());
                actions.push(dive);
            }
        }

        actions.extend(board.locks().map(|(column, _)| Action::ToggleLock { column }));

        if let Ok(seat) = self.player(player) {
            let cubes: Vec<Resource> = seat
                .cargo()
                .iter()
                .flat_map(|(kind, n)| std::iter::repeat(kind).take(n as usize))
                .collect();
            actions.extend(seat.cargo().iter().map(|(kind, _)| Action::load_rocket([kind])));
            if cubes.len() > 1 {
                actions.push(Action::load_rocket(cubes));
            }
        }

        actions.push(Action::UseDiesel { pollution_column: None });
        actions.extend((0..board.width() as u8).map(|c| Action::UseDiesel { pollution_column: Some(c) }));
        actions
    }

    /// Candidates that pass validation right now.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        self.candidate_actions(player)
            .into_iter()
            .filter(|action| self.validate(player, action).is_ok())
            .collect()
    }

    /// Action kinds with at least one legal candidate, in declaration order.
    #[must_use]
    pub fn valid_action_kinds(&self, player: PlayerId) -> Vec<ActionKind> {
        let legal = self.legal_actions(player);
        ActionKind::ALL
            .into_iter()
            .filter(|kind| legal.iter().any(|a| a.kind() == *kind))
            .collect()
    }
}

fn require_workers(seat: &Player, count: u32) -> GameResult<()> {
    if count == 0 {
        return Err(GameError::invalid("must commit at least one worker"));
    }
    match seat.available_workers() {
        0 => Err(GameError::illegal("No workers available")),
        n if n < count => Err(GameError::illegal(format!("Need {count} workers"))),
        _ => Ok(()),
    }
}

/// `end` is the surfaced cell under `player`'s vessel.
fn is_below_vessel(board: &Board, player: PlayerId, end: Position) -> bool {
    board.vessel_column(player) == Some(end.col) && board.water_level_at(end.col) == Some(end.row)
}
