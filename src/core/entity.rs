//! Identities of board pieces and grid coordinates.
//!
//! ## Layout
//!
//! - `Position`: (column, row) on the ocean grid. Row 0 is the surface,
//!   the last row is the ocean floor.
//! - `CraftId`: single-letter submersible name (`A`..`F` by default).

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A cell coordinate on the ocean grid.
///
/// ```
/// use lineae::core::Position;
///
/// let p = Position::new(2, 5);
/// assert!(p.is_adjacent(Position::new(2, 6)));
/// assert!(!p.is_adjacent(Position::new(3, 6)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub col: u8,
    pub row: u8,
}

impl Position {
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Orthogonal neighbour (shares an edge).
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row) == 1
    }

    /// In-bounds orthogonal neighbours.
    pub fn neighbours(self, width: usize, height: usize) -> impl Iterator<Item = Position> {
        const STEPS: [(i16, i16); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        STEPS.into_iter().filter_map(move |(dc, dr)| {
            let col = i16::from(self.col) + dc;
            let row = i16::from(self.row) + dr;
            let in_bounds = (0..width as i16).contains(&col) && (0..height as i16).contains(&row);
            in_bounds.then(|| Position::new(col as u8, row as u8))
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// Submersible identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CraftId(pub char);

impl CraftId {
    #[must_use]
    pub const fn new(name: char) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for CraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CraftId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c.to_ascii_uppercase())),
            _ => Err(GameError::invalid(format!("submersible name '{s}'"))),
        }
    }
}
