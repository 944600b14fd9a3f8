//! The ocean board.
//!
//! ## Geometry
//!
//! - Row 0 is the surface, the last row the ocean floor.
//! - One rocket per column; each deposit spans `deposit_span` columns.
//! - Water enters from the east edge. A column's water level (its topmost
//!   water row) is the number of closed locks at or east of it, so closing
//!   the lock at column `L` drops every column `<= L` by one row.
//! - The occluder creeps in from the east: column `c` is dark once
//!   `c >= width - 2 - occluder`.
//!
//! Mutators validate first and report failures as [`GameError`]; a failed
//! call leaves the board unchanged.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

use super::cell::Cell;
use super::craft::Submersible;
use super::deposit::MineralDeposit;
use super::rocket::Rocket;
use crate::core::{CraftId, GameError, GameResult, GameRng, PlayerId, Position, Resource, ResourcePool, RulesConfig};

const ROCKET_NAMES: [&str; 8] = [
    "Orbital Station",
    "Mars Colony",
    "Asteroid Miner",
    "Jupiter Probe",
    "Research Lab",
    "Solar Array",
    "Lunar Base",
    "Deep Space Explorer",
];

/// Result of checking a submersible path without moving anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPreview {
    /// Cell the craft would stop on.
    pub end: Position,
    /// Cubes it would pick up, in path order.
    pub collected: SmallVec<[Resource; 4]>,
}

/// Board state: grid, locks, pieces, rockets, deposits, sky.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    locks: BTreeMap<u8, bool>,
    water_levels: Vec<u8>,
    submersibles: BTreeMap<CraftId, Submersible>,
    vessels: BTreeMap<PlayerId, u8>,
    rockets: Vec<Rocket>,
    deposits: Vec<MineralDeposit>,
    occluder: u8,
    pollution: Vec<u32>,
    base_energy: u32,
    pollution_penalty: u32,
    dissolve_per_round: u32,
}

impl Board {
    /// Empty grid with locks, water and submersibles at their start cells.
    /// No deposits, rockets or cubes yet; see [`Board::generate`].
    pub fn new(config: &RulesConfig) -> GameResult<Self> {
        config.validate()?;

        let mut board = Self {
            width: config.board_width,
            height: config.board_height,
            cells: vec![Cell::default(); config.board_width * config.board_height],
            locks: config.locks.iter().copied().collect(),
            water_levels: vec![0; config.board_width],
            submersibles: BTreeMap::new(),
            vessels: BTreeMap::new(),
            rockets: Vec::new(),
            deposits: Vec::new(),
            occluder: 0,
            pollution: vec![0; config.board_width],
            base_energy: config.base_energy,
            pollution_penalty: config.pollution_penalty,
            dissolve_per_round: config.dissolve_per_round,
        };
        board.recompute_water();

        for &(id, start) in &config.submersibles {
            board
                .submersibles
                .insert(id, Submersible::new(id, config.submersible_capacity));
            board.place_submersible(id, start)?;
        }

        Ok(board)
    }

    /// Full random setup: deposits with their starting floor cubes, and one
    /// rocket manifest per column.
    pub fn generate(config: &RulesConfig, rng: &GameRng) -> GameResult<Self> {
        let mut board = Self::new(config)?;

        let mut deposit_rng = rng.for_context("deposits");
        let mut kinds = Resource::ALL;
        deposit_rng.shuffle(&mut kinds);
        for i in 0..config.deposit_count() {
            let primary = kinds[i % kinds.len()];
            let others: SmallVec<[Resource; 4]> =
                Resource::ALL.into_iter().filter(|&k| k != primary).collect();
            let secondary = *deposit_rng.choose(&others).unwrap_or(&primary);
            let setup_bonus = *deposit_rng.choose(&Resource::ALL).unwrap_or(&primary);
            let columns = i * config.deposit_span..(i + 1) * config.deposit_span;
            board.add_deposit(MineralDeposit::new(
                primary,
                secondary,
                setup_bonus,
                columns,
                config.track_length(),
            ));
        }

        let floor = board.floor_row();
        for i in 0..board.deposits.len() {
            let primary = board.deposits[i].primary();
            for col in board.deposits[i].columns() {
                // A submersible parked on the floor keeps its cell.
                let _ = board.place_resource(Position::new(col as u8, floor), primary);
            }
        }

        let mut rocket_rng = rng.for_context("rockets");
        for col in 0..board.width {
            let mut required = ResourcePool::new();
            for _ in 0..config.rocket_requirements {
                if let Some(&kind) = rocket_rng.choose(&Resource::ALL) {
                    required.add(kind, 1);
                }
            }
            let name = ROCKET_NAMES
                .get(col)
                .map_or_else(|| format!("Rocket {}", col + 1), |n| (*n).to_string());
            board.rockets.push(Rocket::new(name, col as u8, required));
        }

        Ok(board)
    }

    // === Grid ===

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row index of the ocean floor.
    #[must_use]
    pub fn floor_row(&self) -> u8 {
        (self.height - 1) as u8
    }

    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        usize::from(pos.col) < self.width && usize::from(pos.row) < self.height
    }

    fn index(&self, pos: Position) -> usize {
        usize::from(pos.row) * self.width + usize::from(pos.col)
    }

    fn check_bounds(&self, pos: Position) -> GameResult<()> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(GameError::invalid(format!("{pos} is off the board")))
        }
    }

    fn check_column(&self, column: u8) -> GameResult<()> {
        if usize::from(column) < self.width {
            Ok(())
        } else {
            Err(GameError::invalid(format!("column {column} is off the board")))
        }
    }

    /// Cell at `pos`, `None` out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.in_bounds(pos).then(|| &self.cells[self.index(pos)])
    }

    /// Drop a cube on an empty cell.
    pub fn place_resource(&mut self, pos: Position, kind: Resource) -> GameResult<()> {
        self.check_bounds(pos)?;
        let idx = self.index(pos);
        if self.cells[idx].add_resource(kind) {
            Ok(())
        } else {
            Err(GameError::illegal(format!("{pos} is blocked")))
        }
    }

    /// Lift the cube off `pos`, if any.
    pub fn remove_resource(&mut self, pos: Position) -> Option<Resource> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = self.index(pos);
        self.cells[idx].take_resource()
    }

    /// Cubes lying on the grid.
    #[must_use]
    pub fn cubes_on_board(&self) -> usize {
        self.cells.iter().filter(|c| c.resource.is_some()).count()
    }

    // === Locks and water ===

    /// (column, open) for every lock, west to east.
    pub fn locks(&self) -> impl Iterator<Item = (u8, bool)> + '_ {
        self.locks.iter().map(|(&col, &open)| (col, open))
    }

    /// Whether the lock at `column` is open; `None` if there is no lock.
    #[must_use]
    pub fn lock_is_open(&self, column: u8) -> Option<bool> {
        self.locks.get(&column).copied()
    }

    /// Flip a lock and let the water settle. Returns the new state.
    pub fn toggle_lock(&mut self, column: u8) -> GameResult<bool> {
        let open = self
            .locks
            .get_mut(&column)
            .ok_or_else(|| GameError::not_found(format!("Lock at column {column}")))?;
        *open = !*open;
        let now_open = *open;
        self.recompute_water();
        Ok(now_open)
    }

    fn recompute_water(&mut self) {
        let deepest = self.floor_row();
        for col in 0..self.width {
            let closed_downstream = self
                .locks
                .range(col as u8..)
                .filter(|&(_, &open)| !open)
                .count();
            let level = (closed_downstream as u8).min(deepest);
            self.water_levels[col] = level;
            for row in 0..self.height {
                let idx = row * self.width + col;
                self.cells[idx].water = row >= usize::from(level);
            }
        }
    }

    /// Topmost water row of `column`.
    #[must_use]
    pub fn water_level_at(&self, column: u8) -> Option<u8> {
        self.water_levels.get(usize::from(column)).copied()
    }

    /// Every column between `a` and `b` (inclusive) sits at one water level.
    #[must_use]
    pub fn same_water_level(&self, a: u8, b: u8) -> bool {
        let (lo, hi) = (usize::from(a.min(b)), usize::from(a.max(b)));
        if hi >= self.width {
            return false;
        }
        let level = self.water_levels[lo];
        self.water_levels[lo..=hi].iter().all(|&l| l == level)
    }

    // === Submersibles ===

    #[must_use]
    pub fn submersible(&self, id: CraftId) -> Option<&Submersible> {
        self.submersibles.get(&id)
    }

    pub fn submersibles(&self) -> impl Iterator<Item = &Submersible> {
        self.submersibles.values()
    }

    pub(crate) fn submersible_mut(&mut self, id: CraftId) -> GameResult<&mut Submersible> {
        self.submersibles
            .get_mut(&id)
            .ok_or_else(|| GameError::not_found(format!("Submersible {id}")))
    }

    /// Put a submersible on an empty cell (its own cell counts as empty).
    pub fn place_submersible(&mut self, id: CraftId, pos: Position) -> GameResult<()> {
        self.check_bounds(pos)?;
        let old = self
            .submersibles
            .get(&id)
            .ok_or_else(|| GameError::not_found(format!("Submersible {id}")))?
            .position;
        let target = &self.cells[self.index(pos)];
        if target.resource.is_some() || target.craft.is_some_and(|c| c != id) {
            return Err(GameError::illegal(format!("{pos} is blocked")));
        }

        if let Some(old) = old {
            let idx = self.index(old);
            self.cells[idx].craft = None;
        }
        let idx = self.index(pos);
        self.cells[idx].craft = Some(id);
        self.submersible_mut(id)?.position = Some(pos);
        Ok(())
    }

    /// Check a path step by step without touching the board.
    ///
    /// Each step must be orthogonally adjacent to the previous cell (the
    /// first to the craft). A step may not enter another craft's cell, and
    /// enters a cube's cell only if the hold still has room for it.
    pub fn check_path(&self, id: CraftId, path: &[Position]) -> GameResult<PathPreview> {
        let sub = self
            .submersible(id)
            .ok_or_else(|| GameError::not_found(format!("Submersible {id}")))?;
        let mut at = sub
            .position()
            .ok_or_else(|| GameError::illegal(format!("Submersible {id} is not on the board")))?;
        let mut room = sub.free_space();
        let mut collected: SmallVec<[Resource; 4]> = SmallVec::new();
        let mut emptied: SmallVec<[Position; 4]> = SmallVec::new();

        for &step in path {
            self.check_bounds(step)?;
            if !at.is_adjacent(step) {
                return Err(GameError::illegal(format!("{step} is not adjacent to {at}")));
            }
            let cell = &self.cells[self.index(step)];
            if let Some(other) = cell.craft.filter(|&c| c != id) {
                return Err(GameError::illegal(format!("{step} is blocked by submersible {other}")));
            }
            if let Some(kind) = cell.resource.filter(|_| !emptied.contains(&step)) {
                if room == 0 {
                    return Err(GameError::illegal(format!(
                        "Submersible {id} has no capacity for the {kind} at {step}"
                    )));
                }
                room -= 1;
                collected.push(kind);
                emptied.push(step);
            }
            at = step;
        }

        Ok(PathPreview { end: at, collected })
    }

    /// Drive a submersible along `path`, picking up cubes on the way.
    /// Returns the cubes collected.
    pub fn move_submersible(&mut self, id: CraftId, path: &[Position]) -> GameResult<SmallVec<[Resource; 4]>> {
        let preview = self.check_path(id, path)?;

        for &step in path {
            let idx = self.index(step);
            if let Some(kind) = self.cells[idx].take_resource() {
                self.submersible_mut(id)?.load(kind);
            }
        }
        self.place_submersible(id, preview.end)?;
        Ok(preview.collected)
    }

    /// Craft sits on the topmost water row of its column.
    #[must_use]
    pub fn is_at_surface(&self, id: CraftId) -> bool {
        self.submersible(id)
            .and_then(Submersible::position)
            .is_some_and(|pos| self.water_level_at(pos.col) == Some(pos.row))
    }

    /// Craft is surfaced directly beneath `player`'s vessel.
    #[must_use]
    pub fn is_below_vessel(&self, id: CraftId, player: PlayerId) -> bool {
        let (Some(pos), Some(vessel)) = (
            self.submersible(id).and_then(Submersible::position),
            self.vessel_column(player),
        ) else {
            return false;
        };
        pos.col == vessel && self.is_at_surface(id)
    }

    // === Vessels ===

    pub fn place_vessel(&mut self, player: PlayerId, column: u8) -> GameResult<()> {
        self.check_column(column)?;
        self.vessels.insert(player, column);
        Ok(())
    }

    #[must_use]
    pub fn vessel_column(&self, player: PlayerId) -> Option<u8> {
        self.vessels.get(&player).copied()
    }

    /// Surface cell of `player`'s vessel.
    #[must_use]
    pub fn vessel_position(&self, player: PlayerId) -> Option<Position> {
        self.vessel_column(player).map(|col| Position::new(col, 0))
    }

    pub fn vessels(&self) -> impl Iterator<Item = (PlayerId, u8)> + '_ {
        self.vessels.iter().map(|(&p, &c)| (p, c))
    }

    /// Validate a vessel move without performing it.
    pub fn check_vessel_move(&self, player: PlayerId, column: u8) -> GameResult<()> {
        self.check_column(column)?;
        let from = self
            .vessel_column(player)
            .ok_or_else(|| GameError::illegal("Vessel not placed"))?;
        if from == column {
            return Err(GameError::illegal(format!("Vessel is already at column {column}")));
        }
        if !self.same_water_level(from, column) {
            return Err(GameError::illegal(format!(
                "Column {column} is not reachable at the current water level"
            )));
        }
        Ok(())
    }

    pub fn move_vessel(&mut self, player: PlayerId, column: u8) -> GameResult<()> {
        self.check_vessel_move(player, column)?;
        self.vessels.insert(player, column);
        Ok(())
    }

    /// Columns `player`'s vessel could sail to now.
    #[must_use]
    pub fn reachable_columns(&self, player: PlayerId) -> Vec<u8> {
        (0..self.width as u8)
            .filter(|&col| self.check_vessel_move(player, col).is_ok())
            .collect()
    }

    // === Sky ===

    #[must_use]
    pub fn occluder(&self) -> u8 {
        self.occluder
    }

    /// Move the occluder one column west, stopping once the sky is dark.
    pub fn advance_occluder(&mut self) {
        let limit = self.width.saturating_sub(2) as u8;
        if self.occluder < limit {
            self.occluder += 1;
        }
    }

    #[must_use]
    pub fn is_occluded(&self, column: u8) -> bool {
        let edge = self.width.saturating_sub(2 + usize::from(self.occluder));
        usize::from(column) >= edge
    }

    #[must_use]
    pub fn pollution_at(&self, column: u8) -> u32 {
        self.pollution.get(usize::from(column)).copied().unwrap_or(0)
    }

    pub fn add_pollution(&mut self, column: u8) -> GameResult<()> {
        self.check_column(column)?;
        self.pollution[usize::from(column)] += 1;
        Ok(())
    }

    /// Energy a vessel collects at `column` during income.
    #[must_use]
    pub fn energy_at(&self, column: u8) -> u32 {
        if usize::from(column) >= self.width || self.is_occluded(column) {
            return 0;
        }
        self.base_energy
            .saturating_sub(self.pollution_at(column) * self.pollution_penalty)
    }

    // === Rockets ===

    #[must_use]
    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    #[must_use]
    pub fn rocket_at(&self, column: u8) -> Option<&Rocket> {
        self.rockets.iter().find(|r| r.column() == column)
    }

    pub(crate) fn rocket_at_mut(&mut self, column: u8) -> GameResult<&mut Rocket> {
        self.rockets
            .iter_mut()
            .find(|r| r.column() == column)
            .ok_or_else(|| GameError::not_found(format!("Rocket at column {column}")))
    }

    /// Replace the rocket on its column (or add one).
    pub fn set_rocket(&mut self, rocket: Rocket) -> GameResult<()> {
        self.check_column(rocket.column())?;
        self.rockets.retain(|r| r.column() != rocket.column());
        self.rockets.push(rocket);
        self.rockets.sort_by_key(Rocket::column);
        Ok(())
    }

    #[must_use]
    pub fn incomplete_rockets(&self) -> usize {
        self.rockets.iter().filter(|r| r.completed_by().is_none()).count()
    }

    // === Deposits ===

    #[must_use]
    pub fn deposits(&self) -> &[MineralDeposit] {
        &self.deposits
    }

    pub fn add_deposit(&mut self, deposit: MineralDeposit) {
        self.deposits.push(deposit);
    }

    /// Deposit covering `column`.
    #[must_use]
    pub fn deposit_at_column(&self, column: u8) -> Option<usize> {
        self.deposits.iter().position(|d| d.covers(usize::from(column)))
    }

    /// Deposit directly under a floor cell.
    #[must_use]
    pub fn deposit_under(&self, pos: Position) -> Option<usize> {
        if pos.row != self.floor_row() {
            return None;
        }
        self.deposit_at_column(pos.col)
    }

    pub(crate) fn deposit_mut(&mut self, index: usize) -> GameResult<&mut MineralDeposit> {
        self.deposits
            .get_mut(index)
            .ok_or_else(|| GameError::not_found(format!("Deposit {index}")))
    }

    /// Each deposit seeps cubes into its columns, alternating kinds by column
    /// parity. A cube settles in the lowest empty cell of its column; a full
    /// column gets nothing. Returns the cells filled.
    pub fn dissolve_deposits(&mut self) -> Vec<(Position, Resource)> {
        let mut placed = Vec::new();
        for i in 0..self.deposits.len() {
            let mut remaining = self.dissolve_per_round;
            for col in self.deposits[i].columns() {
                if remaining == 0 {
                    break;
                }
                let kind = self.deposits[i].dissolved_kind(col);
                let lowest_empty = (0..self.height).rev().find(|&row| self.cells[row * self.width + col].is_empty());
                if let Some(row) = lowest_empty {
                    let pos = Position::new(col as u8, row as u8);
                    let idx = self.index(pos);
                    self.cells[idx].add_resource(kind);
                    placed.push((pos, kind));
                    remaining -= 1;
                }
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(&RulesConfig::default()).unwrap()
    }

    #[test]
    fn test_new_places_submersibles() {
        let b = board();
        for sub in b.submersibles() {
            let pos = sub.position().unwrap();
            assert_eq!(b.cell(pos).unwrap().craft(), Some(sub.id()));
        }
        assert_eq!(b.submersibles().count(), 6);
    }

    #[test]
    fn test_default_water_levels() {
        // Locks: 1 open, 3 closed, 4 open, 6 closed.
        let b = board();
        let levels: Vec<_> = (0..8).map(|c| b.water_level_at(c).unwrap()).collect();
        assert_eq!(levels, vec![2, 2, 2, 2, 1, 1, 1, 0]);
        assert!(b.cell(Position::new(0, 2)).unwrap().has_water());
        assert!(!b.cell(Position::new(0, 1)).unwrap().has_water());
        assert_eq!(b.water_level_at(8), None);
    }

    #[test]
    fn test_toggle_lock_recomputes_water() {
        let mut b = board();
        assert_eq!(b.toggle_lock(6), Ok(true));
        let levels: Vec<_> = (0..8).map(|c| b.water_level_at(c).unwrap()).collect();
        assert_eq!(levels, vec![1, 1, 1, 1, 0, 0, 0, 0]);

        assert_eq!(b.toggle_lock(6), Ok(false));
        assert_eq!(b.water_level_at(5), Some(1));
    }

    #[test]
    fn test_toggle_missing_lock() {
        let mut b = board();
        assert!(matches!(b.toggle_lock(2), Err(GameError::NotFound(_))));
    }

    #[test]
    fn test_vessel_moves_within_one_level() {
        let mut b = board();
        b.place_vessel(PlayerId::new(0), 4).unwrap();

        assert!(b.move_vessel(PlayerId::new(0), 6).is_ok());
        assert_eq!(b.vessel_column(PlayerId::new(0)), Some(6));

        // Column 7 sits a row higher.
        assert!(b.move_vessel(PlayerId::new(0), 7).is_err());
        assert!(matches!(b.move_vessel(PlayerId::new(0), 9), Err(GameError::InvalidArgument(_))));
        assert_eq!(b.reachable_columns(PlayerId::new(0)), vec![4, 5]);
    }

    #[test]
    fn test_place_vessel_off_board() {
        let mut b = board();
        assert!(b.place_vessel(PlayerId::new(1), 8).is_err());
        assert_eq!(b.vessel_column(PlayerId::new(1)), None);
    }

    #[test]
    fn test_energy_and_occluder() {
        let mut b = board();
        // Occluder at 0 darkens columns 6 and 7.
        assert_eq!(b.energy_at(5), 6);
        assert_eq!(b.energy_at(6), 0);

        b.add_pollution(5).unwrap();
        assert_eq!(b.energy_at(5), 4);
        for _ in 0..5 {
            b.add_pollution(5).unwrap();
        }
        assert_eq!(b.energy_at(5), 0);

        b.advance_occluder();
        assert!(b.is_occluded(5));
        for _ in 0..10 {
            b.advance_occluder();
        }
        assert_eq!(b.occluder(), 6);
        assert!(b.is_occluded(0));
    }

    #[test]
    fn test_path_collects_cubes() {
        let mut b = board();
        b.place_resource(Position::new(0, 6), Resource::Iron).unwrap();
        b.place_resource(Position::new(0, 7), Resource::Salt).unwrap();

        let collected = b
            .move_submersible(CraftId('A'), &[Position::new(0, 6), Position::new(0, 7)])
            .unwrap();

        assert_eq!(collected.as_slice(), &[Resource::Iron, Resource::Salt]);
        assert_eq!(b.cell(Position::new(0, 6)).unwrap().resource(), None);
        assert_eq!(b.cell(Position::new(0, 5)).unwrap().craft(), None);
        assert_eq!(b.cell(Position::new(0, 7)).unwrap().craft(), Some(CraftId('A')));
        let sub = b.submersible(CraftId('A')).unwrap();
        assert_eq!(sub.position(), Some(Position::new(0, 7)));
        assert_eq!(sub.cargo().total(), 2);
    }

    #[test]
    fn test_path_rejects_jumps_and_blocked_cells() {
        let b = board();
        let before = b.clone();

        assert!(b.check_path(CraftId('A'), &[Position::new(2, 2)]).is_err());
        // B sits at (2,5); A at (0,5).
        let err = b
            .check_path(CraftId('A'), &[Position::new(1, 5), Position::new(2, 5)])
            .unwrap_err();
        assert_eq!(err.to_string(), "(2,5) is blocked by submersible B");
        assert!(matches!(b.check_path(CraftId('Z'), &[]), Err(GameError::NotFound(_))));
        assert_eq!(b, before);
    }

    #[test]
    fn test_path_stops_at_full_hold() {
        let mut b = board();
        for row in 6..10 {
            b.place_resource(Position::new(0, row), Resource::Sulfur).unwrap();
        }
        let path: Vec<_> = (6..10).map(|r| Position::new(0, r)).collect();

        let err = b.check_path(CraftId('A'), &path).unwrap_err();
        assert!(err.to_string().contains("no capacity"));
        assert!(b.move_submersible(CraftId('A'), &path[..3]).is_ok());
        assert_eq!(b.submersible(CraftId('A')).unwrap().free_space(), 0);
    }

    #[test]
    fn test_path_may_return_through_own_cell() {
        let b = board();
        let preview = b
            .check_path(CraftId('A'), &[Position::new(0, 4), Position::new(0, 5), Position::new(0, 6)])
            .unwrap();
        assert_eq!(preview.end, Position::new(0, 6));
        assert!(preview.collected.is_empty());
    }

    #[test]
    fn test_surface_and_vessel_docking_position() {
        let mut b = board();
        b.place_vessel(PlayerId::new(0), 7).unwrap();
        // Column 7 water level is 0.
        b.place_submersible(CraftId('F'), Position::new(7, 0)).unwrap();
        assert!(b.is_at_surface(CraftId('F')));
        assert!(b.is_below_vessel(CraftId('F'), PlayerId::new(0)));
        assert!(!b.is_below_vessel(CraftId('F'), PlayerId::new(1)));

        b.place_submersible(CraftId('F'), Position::new(7, 1)).unwrap();
        assert!(!b.is_at_surface(CraftId('F')));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = RulesConfig::default();
        let a = Board::generate(&config, &GameRng::new(5)).unwrap();
        let b = Board::generate(&config, &GameRng::new(5)).unwrap();
        assert_eq!(a, b);

        assert_eq!(a.deposits().len(), 4);
        assert_eq!(a.rockets().len(), 8);
        for rocket in a.rockets() {
            assert_eq!(rocket.required().total(), 4);
            assert_eq!(rocket.target(), 5);
        }
        // Floor cubes everywhere except under E at (6,9).
        assert_eq!(a.cubes_on_board(), 7);
        assert_eq!(a.cell(Position::new(6, 9)).unwrap().craft(), Some(CraftId('E')));
    }

    #[test]
    fn test_deposit_lookup() {
        let b = Board::generate(&RulesConfig::default(), &GameRng::new(1)).unwrap();
        assert_eq!(b.deposit_under(Position::new(0, 9)), Some(0));
        assert_eq!(b.deposit_under(Position::new(5, 9)), Some(2));
        assert_eq!(b.deposit_under(Position::new(5, 8)), None);
    }

    #[test]
    fn test_dissolve_fills_lowest_empty_cell() {
        let mut b = Board::generate(&RulesConfig::default(), &GameRng::new(3)).unwrap();
        let deposit = b.deposits()[0].clone();

        let placed = b.dissolve_deposits();

        // Floor of columns 0 and 1 already holds a cube; the new ones land above.
        assert!(placed.contains(&(Position::new(0, 8), deposit.primary())));
        assert!(placed.contains(&(Position::new(1, 8), deposit.secondary())));
        assert_eq!(placed.len(), 8);
    }

    #[test]
    fn test_dissolve_skips_full_column() {
        let mut b = Board::generate(&RulesConfig::default(), &GameRng::new(3)).unwrap();
        for row in 0..10 {
            let _ = b.place_resource(Position::new(0, row), Resource::Iron);
        }
        let placed = b.dissolve_deposits();
        assert!(placed.iter().all(|(pos, _)| pos.col != 0));
        assert!(placed.iter().any(|(pos, _)| pos.col == 1));
    }
}
