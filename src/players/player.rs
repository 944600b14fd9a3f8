//! Per-seat economy.
//!
//! ## Counters
//!
//! Money, VP and electricity are plain unsigned counters. Spending more than
//! is held fails with [`GameError::IllegalAction`] and changes nothing.
//! Electricity is capped at the configured maximum; any excess is lost.
//!
//! ## Workers
//!
//! `total_workers` are owned; `available_workers` are not currently placed.
//! Hiring draws from a finite supply at an escalating price.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameResult, PlayerId, Resource, ResourcePool, RulesConfig};

/// One seat's economy and round flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    money: u32,
    victory_points: u32,
    electricity: u32,
    max_electricity: u32,
    total_workers: u32,
    available_workers: u32,
    workers_in_supply: u32,
    workers_hired: u32,
    cargo: ResourcePool,
    technology_cards: Vec<String>,
    technology_gained: u32,
    max_technology_cards: usize,
    launched_rockets: Vec<String>,
    first_player: bool,
    passed: bool,
}

impl Player {
    /// Fresh seat for a table of `player_count`.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, player_count: usize, config: &RulesConfig) -> Self {
        let workers = config.starting_workers(player_count);
        Self {
            id,
            name: name.into(),
            money: config.initial_money,
            victory_points: 0,
            electricity: 0,
            max_electricity: config.max_electricity,
            total_workers: workers,
            available_workers: workers,
            workers_in_supply: config.worker_pool.saturating_sub(workers),
            workers_hired: 0,
            cargo: ResourcePool::new(),
            technology_cards: Vec::new(),
            technology_gained: 0,
            max_technology_cards: config.max_technology_cards,
            launched_rockets: Vec::new(),
            first_player: false,
            passed: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn money(&self) -> u32 {
        self.money
    }

    #[must_use]
    pub fn victory_points(&self) -> u32 {
        self.victory_points
    }

    #[must_use]
    pub fn electricity(&self) -> u32 {
        self.electricity
    }

    #[must_use]
    pub fn max_electricity(&self) -> u32 {
        self.max_electricity
    }

    #[must_use]
    pub fn total_workers(&self) -> u32 {
        self.total_workers
    }

    #[must_use]
    pub fn available_workers(&self) -> u32 {
        self.available_workers
    }

    /// Workers left to hire.
    #[must_use]
    pub fn workers_in_supply(&self) -> u32 {
        self.workers_in_supply
    }

    /// Hires made so far; indexes the hire price schedule.
    #[must_use]
    pub fn workers_hired(&self) -> u32 {
        self.workers_hired
    }

    /// Cargo bay.
    #[must_use]
    pub fn cargo(&self) -> &ResourcePool {
        &self.cargo
    }

    pub fn cargo_mut(&mut self) -> &mut ResourcePool {
        &mut self.cargo
    }

    /// Held technology cards, oldest first.
    #[must_use]
    pub fn technology_cards(&self) -> &[String] {
        &self.technology_cards
    }

    #[must_use]
    pub fn launched_rockets(&self) -> &[String] {
        &self.launched_rockets
    }

    #[must_use]
    pub fn has_first_player_marker(&self) -> bool {
        self.first_player
    }

    #[must_use]
    pub fn has_passed(&self) -> bool {
        self.passed
    }

    // === Money and points ===

    pub fn add_money(&mut self, amount: u32) {
        self.money += amount;
    }

    pub fn spend_money(&mut self, amount: u32) -> GameResult<()> {
        if self.money < amount {
            return Err(GameError::illegal(format!("Not enough money (need ${amount})")));
        }
        self.money -= amount;
        Ok(())
    }

    pub fn add_victory_points(&mut self, points: u32) {
        self.victory_points += points;
    }

    // === Electricity ===

    /// Add electricity up to the cap. Returns the amount actually stored.
    pub fn add_electricity(&mut self, amount: u32) -> u32 {
        let before = self.electricity;
        self.electricity = (self.electricity + amount).min(self.max_electricity);
        self.electricity - before
    }

    pub fn use_electricity(&mut self, amount: u32) -> GameResult<()> {
        if self.electricity < amount {
            return Err(GameError::illegal(format!("Need {amount} electricity")));
        }
        self.electricity -= amount;
        Ok(())
    }

    // === Workers ===

    /// Take `count` workers off the available pool.
    pub fn place_workers(&mut self, count: u32) -> GameResult<()> {
        if count == 0 {
            return Err(GameError::invalid("must place at least one worker"));
        }
        if self.available_workers < count {
            return Err(GameError::illegal(format!("Need {count} workers")));
        }
        self.available_workers -= count;
        Ok(())
    }

    /// Workers come back after being bumped. Never exceeds the total.
    pub fn recall_workers(&mut self, count: u32) {
        self.available_workers = (self.available_workers + count).min(self.total_workers);
    }

    pub fn reset_workers(&mut self) {
        self.available_workers = self.total_workers;
    }

    /// Buy one worker at `cost`. The new worker is available at once.
    pub fn hire_worker(&mut self, cost: u32) -> GameResult<()> {
        if self.workers_in_supply == 0 {
            return Err(GameError::illegal("No workers left to hire"));
        }
        self.spend_money(cost)?;
        self.workers_in_supply -= 1;
        self.workers_hired += 1;
        self.total_workers += 1;
        self.available_workers += 1;
        Ok(())
    }

    // === Cards, rockets, flags ===

    /// Gain the next technology card. Past the hand limit the oldest card is
    /// discarded and returned.
    pub fn gain_technology_card(&mut self) -> (String, Option<String>) {
        self.technology_gained += 1;
        let card = format!("Technology {}", self.technology_gained);
        self.technology_cards.push(card.clone());
        let discarded = (self.technology_cards.len() > self.max_technology_cards)
            .then(|| self.technology_cards.remove(0));
        (card, discarded)
    }

    pub fn launch_rocket(&mut self, rocket_name: impl Into<String>) {
        self.launched_rockets.push(rocket_name.into());
    }

    pub fn set_first_player_marker(&mut self, held: bool) {
        self.first_player = held;
    }

    pub fn pass(&mut self) {
        self.passed = true;
    }

    pub(crate) fn clear_passed(&mut self) {
        self.passed = false;
    }

    /// Burn one hydrocarbon from the bay. Returns the electricity stored.
    pub fn burn_hydrocarbon(&mut self, electricity: u32) -> GameResult<u32> {
        if !self.cargo.remove(Resource::Hydrocarbon, 1) {
            return Err(GameError::illegal("No hydrocarbon available"));
        }
        Ok(self.add_electricity(electricity))
    }

    /// VP awarded at game end: $5 per point, plus one per identical pair in
    /// the bay.
    #[must_use]
    pub fn end_game_bonus(&self) -> u32 {
        let pairs: u32 = Resource::ALL.iter().map(|&k| self.cargo.count(k) / 2).sum();
        self.money / 5 + pairs
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} VP, ${}, {}E, {}/{} workers",
            self.name, self.id, self.victory_points, self.money, self.electricity, self.available_workers, self.total_workers
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(count: usize) -> Player {
        Player::new(PlayerId::new(0), "Ada", count, &RulesConfig::default())
    }

    #[test]
    fn test_starting_workers_by_table_size() {
        assert_eq!(player(2).total_workers(), 4);
        assert_eq!(player(2).workers_in_supply(), 4);
        assert_eq!(player(4).total_workers(), 3);
        assert_eq!(player(4).workers_in_supply(), 5);
    }

    #[test]
    fn test_spend_money_fails_without_change() {
        let mut p = player(2);
        assert_eq!(p.money(), 3);
        let err = p.spend_money(4).unwrap_err();
        assert_eq!(err.to_string(), "Not enough money (need $4)");
        assert_eq!(p.money(), 3);
        assert!(p.spend_money(3).is_ok());
        assert_eq!(p.money(), 0);
    }

    #[test]
    fn test_electricity_cap() {
        let mut p = player(2);
        assert_eq!(p.add_electricity(6), 6);
        assert_eq!(p.add_electricity(6), 3);
        assert_eq!(p.electricity(), 9);
        assert!(p.use_electricity(10).is_err());
        assert!(p.use_electricity(9).is_ok());
    }

    #[test]
    fn test_place_and_recall_workers() {
        let mut p = player(2);
        assert!(matches!(p.place_workers(0), Err(GameError::InvalidArgument(_))));
        p.place_workers(3).unwrap();
        assert_eq!(p.available_workers(), 1);
        assert!(p.place_workers(2).is_err());

        p.recall_workers(10);
        assert_eq!(p.available_workers(), 4);
    }

    #[test]
    fn test_hire_worker() {
        let mut p = player(2);
        p.add_money(10);
        p.hire_worker(4).unwrap();
        assert_eq!(p.total_workers(), 5);
        assert_eq!(p.available_workers(), 5);
        assert_eq!(p.workers_hired(), 1);
        assert_eq!(p.money(), 9);

        assert!(p.hire_worker(10).is_err());
        assert_eq!(p.total_workers(), 5);
    }

    #[test]
    fn test_hire_worker_exhausts_supply() {
        let mut p = player(2);
        p.add_money(100);
        for _ in 0..4 {
            p.hire_worker(1).unwrap();
        }
        assert_eq!(p.workers_in_supply(), 0);
        assert_eq!(p.hire_worker(1).unwrap_err().to_string(), "No workers left to hire");
    }

    #[test]
    fn test_technology_cards_discard_oldest() {
        let mut p = player(2);
        assert_eq!(p.gain_technology_card(), ("Technology 1".to_string(), None));
        p.gain_technology_card();
        let (card, discarded) = p.gain_technology_card();
        assert_eq!(card, "Technology 3");
        assert_eq!(discarded.as_deref(), Some("Technology 1"));
        assert_eq!(p.technology_cards(), &["Technology 2".to_string(), "Technology 3".to_string()]);
    }

    #[test]
    fn test_burn_hydrocarbon() {
        let mut p = player(2);
        assert!(p.burn_hydrocarbon(6).is_err());
        p.cargo_mut().add(Resource::Hydrocarbon, 1);
        assert_eq!(p.burn_hydrocarbon(6), Ok(6));
        assert!(p.cargo().is_empty());
    }

    #[test]
    fn test_end_game_bonus() {
        let mut p = player(2);
        p.add_money(8); // $11
        p.cargo_mut().add(Resource::Iron, 3);
        p.cargo_mut().add(Resource::Salt, 2);
        p.cargo_mut().add(Resource::Silica, 1);
        assert_eq!(p.end_game_bonus(), 2 + 1 + 1);
        assert_eq!(p.victory_points(), 0);
    }
}
