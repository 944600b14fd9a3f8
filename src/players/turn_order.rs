//! Seat rotation during the action phase.
//!
//! The rotation walks seats clockwise from the current one, skipping seats
//! that have passed. Pass flags live on the players; callers hand them in as
//! a predicate so the rotation itself holds only seat indices.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    seats: usize,
    current: PlayerId,
    first: PlayerId,
}

impl TurnOrder {
    #[must_use]
    pub fn new(seats: usize) -> Self {
        assert!(seats > 0, "Must have at least 1 player");
        Self {
            seats,
            current: PlayerId::new(0),
            first: PlayerId::new(0),
        }
    }

    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Seat that opens the next round.
    #[must_use]
    pub fn first_player(&self) -> PlayerId {
        self.first
    }

    #[must_use]
    pub fn seats(&self) -> usize {
        self.seats
    }

    /// Advance to the next seat that has not passed.
    ///
    /// Coming all the way round returns the current seat again if it is still
    /// in the round, and `None` once every seat has passed.
    pub fn next_turn(&mut self, has_passed: impl Fn(PlayerId) -> bool) -> Option<PlayerId> {
        let start = self.current.index();
        for step in 1..=self.seats {
            let seat = PlayerId::new(((start + step) % self.seats) as u8);
            if !has_passed(seat) {
                self.current = seat;
                return Some(seat);
            }
        }
        self.current = PlayerId::new(start as u8);
        None
    }

    /// Hand the first-player anchor to `player` and make them current.
    pub fn set_first_player(&mut self, player: PlayerId) {
        assert!(player.index() < self.seats, "Unknown seat {player}");
        self.first = player;
        self.current = player;
    }

    /// Start of a round: the first player acts first.
    pub fn reset_for_new_round(&mut self) {
        self.current = self.first;
    }

    /// Seats counter-clockwise, starting from the seat before the first
    /// player. Vessel placement at setup follows this order.
    #[must_use]
    pub fn setup_order(&self) -> Vec<PlayerId> {
        let first = self.first.index();
        (1..=self.seats)
            .map(|back| PlayerId::new(((first + self.seats - back) % self.seats) as u8))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_rotation_without_passes() {
        let mut order = TurnOrder::new(3);
        assert_eq!(order.next_turn(|_| false), Some(p(1)));
        assert_eq!(order.next_turn(|_| false), Some(p(2)));
        assert_eq!(order.next_turn(|_| false), Some(p(0)));
    }

    #[test]
    fn test_skips_passed_seats() {
        let mut order = TurnOrder::new(4);
        assert_eq!(order.next_turn(|s| s == p(1) || s == p(2)), Some(p(3)));
        assert_eq!(order.next_turn(|s| s == p(1) || s == p(2)), Some(p(0)));
    }

    #[test]
    fn test_last_active_seat_keeps_turn() {
        let mut order = TurnOrder::new(3);
        assert_eq!(order.next_turn(|s| s != p(0)), Some(p(0)));
        assert_eq!(order.current(), p(0));
    }

    #[test]
    fn test_none_when_everyone_passed() {
        let mut order = TurnOrder::new(3);
        order.set_first_player(p(2));
        assert_eq!(order.next_turn(|_| true), None);
        assert_eq!(order.current(), p(2));
    }

    #[test]
    fn test_first_player_anchor() {
        let mut order = TurnOrder::new(3);
        order.set_first_player(p(1));
        order.next_turn(|_| false);
        assert_eq!(order.current(), p(2));

        order.reset_for_new_round();
        assert_eq!(order.current(), p(1));
        assert_eq!(order.first_player(), p(1));
    }

    #[test]
    fn test_setup_order_runs_backwards() {
        let mut order = TurnOrder::new(4);
        assert_eq!(order.setup_order(), vec![p(3), p(2), p(1), p(0)]);
        order.set_first_player(p(2));
        assert_eq!(order.setup_order(), vec![p(1), p(0), p(3), p(2)]);
    }
}
