//! Applying validated actions.
//!
//! `Table::apply` is the only writer of board and seat state during the
//! action phase. It validates first; once validation passes, every step
//! below is guaranteed to succeed, so a rejected action never leaves a
//! partial change behind.

use tracing::{debug, info};

use crate::core::{Action, CraftId, GameError, GameResult, PlayerId, Position, Resource};

use super::contention::ContestedResource;
use super::outcome::ActionOutcome;
use super::table::Table;

impl Table {
    /// Validate and perform `action` for `player`.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> GameResult<ActionOutcome> {
        self.validate(player, action)?;

        let mut outcome = match action {
            Action::Pass => {
                let seat = self.player_mut(player)?;
                seat.pass();
                ActionOutcome::new(format!("{} passed", seat.name()))
            }
            Action::BasicIncome => {
                let income = self.config.basic_income;
                let seat = self.player_mut(player)?;
                seat.place_workers(1)?;
                seat.add_money(income);
                ActionOutcome::new(format!("{} took ${income} basic income", seat.name()))
            }
            Action::HireWorker => {
                let seat = &mut self.players[player];
                let cost = self.config.hire_cost(seat.workers_hired());
                seat.place_workers(1)?;
                seat.hire_worker(cost)?;
                ActionOutcome::new(format!("{} hired a worker for ${cost}", seat.name()))
            }
            Action::SpecialElection { workers } => self.special_election(player, *workers)?,
            Action::MoveVessel { column } => {
                self.board.move_vessel(player, *column)?;
                ActionOutcome::new(format!("{} moved vessel to column {column}", self.players[player].name()))
            }
            Action::MoveSubmersible {
                craft,
                path,
                workers,
                excavate,
                dock,
            } => self.dive(player, *craft, path, *workers, *excavate, *dock)?,
            Action::ToggleLock { column } => {
                self.player_mut(player)?.place_workers(1)?;
                let open = self.board.toggle_lock(*column)?;
                let verb = if open { "opened" } else { "closed" };
                ActionOutcome::new(format!("{} {verb} lock at column {column}", self.players[player].name()))
            }
            Action::LoadRocket { cubes } => self.load_rocket(player, cubes)?,
            Action::UseDiesel { pollution_column } => {
                let column = self.diesel_column(&self.players[player], *pollution_column)?;
                let gained = self.players[player].burn_hydrocarbon(self.config.diesel_electricity)?;
                self.board.add_pollution(column)?;
                let mut outcome = ActionOutcome::new(format!(
                    "{} burned diesel for {gained} electricity, polluting column {column}",
                    self.players[player].name()
                ));
                outcome.electricity_gained = gained;
                outcome
            }
        };

        outcome.immediate_action = action.kind().is_immediate();
        debug!(
            player = %player,
            kind = %action.kind(),
            immediate = outcome.immediate_action,
            "action executed"
        );
        Ok(outcome)
    }

    /// Take a contested resource, returning a displaced rival's workers.
    fn commit_workers(&mut self, player: PlayerId, resource: ContestedResource, workers: u32) -> GameResult<Option<PlayerId>> {
        self.player_mut(player)?.place_workers(workers)?;
        let displaced = self.ledger.place(resource, player, workers);
        if let Some(rival) = displaced {
            self.player_mut(rival.player)?.recall_workers(rival.workers);
            debug!(player = %player, bumped = %rival.player, %resource, "bumped");
        }
        Ok(displaced.map(|p| p.player))
    }

    fn special_election(&mut self, player: PlayerId, workers: u32) -> GameResult<ActionOutcome> {
        let bumped = self.commit_workers(player, ContestedResource::SpecialElection, workers)?;
        for (id, seat) in self.players.iter_mut() {
            seat.set_first_player_marker(id == player);
        }
        self.turn_order.set_first_player(player);

        let mut outcome = ActionOutcome::new(format!("{} took the first player marker", self.players[player].name()));
        outcome.bumped = bumped;
        Ok(outcome)
    }

    fn dive(
        &mut self,
        player: PlayerId,
        craft: CraftId,
        path: &[Position],
        workers: u32,
        excavate: bool,
        dock: bool,
    ) -> GameResult<ActionOutcome> {
        let plan = self.plan_dive(player, craft, path, workers, excavate, dock)?;
        let mut outcome = ActionOutcome::new(format!(
            "{} took control of submersible {craft}",
            self.players[player].name()
        ));
        outcome.bumped = self.commit_workers(player, ContestedResource::Craft(craft), workers)?;

        if !path.is_empty() {
            self.player_mut(player)?.use_electricity(plan.electricity)?;
            let collected = self.board.move_submersible(craft, path)?;
            let reward = collected.len() as u32 * self.config.collect_reward;
            self.player_mut(player)?.add_money(reward);
            outcome.message = format!("{} moved submersible {craft} to {}", self.players[player].name(), plan.preview.end);
            outcome.resources_collected = collected.into_vec();
        }

        if let Some((deposit, _)) = plan.excavation {
            let kind = self.board.deposits()[deposit].primary();
            let slot = self
                .board
                .deposit_mut(deposit)?
                .excavate(player)
                .ok_or_else(|| GameError::illegal("Excavation track is full"))?;
            self.board.submersible_mut(craft)?.load(kind);

            let vp = self.config.excavation_vp.get(slot).copied().unwrap_or(0);
            self.player_mut(player)?.add_victory_points(vp);
            outcome.vp_earned += vp;
            outcome.excavated = Some((kind, slot));

            if slot == self.config.bonus_cube_slot {
                let bonus = *self.rng.choose(&Resource::ALL).unwrap_or(&kind);
                self.player_mut(player)?.cargo_mut().add(bonus, 1);
                outcome.bonus_resource = Some(bonus);
            }
            if slot == self.config.technology_slot {
                let (card, discarded) = self.player_mut(player)?.gain_technology_card();
                outcome.technology_gained = Some(card);
                outcome.technology_discarded = discarded;
            }
        }

        if let Some(cost) = plan.dock_cost {
            let seat = &mut self.players[player];
            seat.spend_money(cost)?;
            let sub = self.board.submersible_mut(craft)?;
            let moved = sub.unload_into(seat.cargo_mut());
            outcome.docked = Some(moved);
        }

        Ok(outcome)
    }

    fn load_rocket(&mut self, player: PlayerId, cubes: &[Resource]) -> GameResult<ActionOutcome> {
        let column = self
            .board
            .vessel_column(player)
            .ok_or_else(|| GameError::illegal("Vessel not placed"))?;
        self.player_mut(player)?.place_workers(1)?;

        let mut vp = 0;
        let rocket = self.board.rocket_at_mut(column)?;
        let seat = &mut self.players[player];
        for (i, &kind) in cubes.iter().enumerate() {
            if rocket.load(kind).is_some() && seat.cargo_mut().remove(kind, 1) {
                vp += self.config.loading_vp_at(i);
            }
        }
        seat.add_victory_points(vp);

        let mut outcome = ActionOutcome::new(format!("{} loaded {} cubes onto {}", seat.name(), cubes.len(), rocket.name()));
        outcome.vp_earned = vp;

        if rocket.is_complete() {
            rocket.mark_completed(player);
            let name = rocket.name().to_string();
            seat.launch_rocket(name.clone());
            let (card, discarded) = seat.gain_technology_card();
            info!(player = %player, rocket = %name, "rocket launched");
            outcome.rocket_launched = Some(name);
            outcome.technology_gained = Some(card);
            outcome.technology_discarded = discarded;
        }
        Ok(outcome)
    }
}
