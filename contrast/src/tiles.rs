use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{Board, IllegalPlacement, BOARD_SIZE};

/// The tiles each game starts with, in inventory order.
pub const INITIAL_TILES: [i8; 6] = [2, 2, 3, -2, -2, -3];

/// One of the two players.
///
/// Pieces and tiles don't store their owner separately, it is the sign of
/// their value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Owns positive values and starts on the bottom row.
    Positive,
    /// Owns negative values and starts on the top row.
    Negative,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Positive => Side::Negative,
            Side::Negative => Side::Positive,
        }
    }

    /// The unit piece value of this side.
    pub fn sign(self) -> i8 {
        match self {
            Side::Positive => 1,
            Side::Negative => -1,
        }
    }

    /// The owner of a piece or tile value, or `None` for zero.
    pub fn of_value(value: i8) -> Option<Side> {
        match value.signum() {
            1 => Some(Side::Positive),
            -1 => Some(Side::Negative),
            _ => None,
        }
    }

    pub fn owns(self, value: i8) -> bool {
        Side::of_value(value) == Some(self)
    }

    /// The row this side's pieces start on.
    pub fn home_row(self) -> i8 {
        match self {
            Side::Positive => BOARD_SIZE - 1,
            Side::Negative => 0,
        }
    }

    /// The row direction pointing at the opponent's home row.
    pub fn forward(self) -> i8 {
        match self {
            Side::Positive => -1,
            Side::Negative => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Positive => write!(f, "positive"),
            Side::Negative => write!(f, "negative"),
        }
    }
}

/// The tiles that have not been placed yet.
///
/// This is an ordered multiset: placing a tile removes the first entry with
/// the same value and keeps the order of the rest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileInventory {
    tiles: Vec<i8>,
}

impl TileInventory {
    pub fn new() -> Self {
        Self {
            tiles: Vec::from(INITIAL_TILES),
        }
    }

    pub fn contains(&self, tile: i8) -> bool {
        self.tiles.contains(&tile)
    }

    pub fn count(&self, tile: i8) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// The remaining tiles of one side, in inventory order.
    pub fn for_side(&self, side: Side) -> impl Iterator<Item = i8> + '_ {
        self.tiles.iter().copied().filter(move |&t| side.owns(t))
    }

    /// Every tile value `side` could still select, each listed once.
    pub fn distinct_for_side(&self, side: Side) -> Vec<i8> {
        let mut values: Vec<i8> = self.for_side(side).collect();
        values.sort_by_key(|t| t.unsigned_abs());
        values.dedup();
        values
    }

    /// Removes one entry equal to `tile`. Returns false if there is none.
    pub(crate) fn take(&mut self, tile: i8) -> bool {
        match self.tiles.iter().position(|&t| t == tile) {
            Some(idx) => {
                self.tiles.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl Default for TileInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TileInventory {
    type Target = [i8];

    fn deref(&self) -> &Self::Target {
        &self.tiles
    }
}

impl Board {
    /// Checks whether a tile may be placed on this square.
    ///
    /// Both the piece and the tile of the square must be empty. The value of
    /// the tile itself is not checked here, see
    /// [`Engine::tile_intent()`](crate::Engine::tile_intent).
    pub fn check_placement(&self, i: i8, j: i8) -> Result<(), IllegalPlacement> {
        if !Board::is_in_bounds(i, j) {
            return Err(IllegalPlacement::OutOfBounds { i, j });
        }
        let cell = self.get(i, j);
        if cell.piece() != 0 {
            return Err(IllegalPlacement::SquareOccupied { i, j });
        }
        if cell.tile() != 0 {
            return Err(IllegalPlacement::TileAlreadyPlaced {
                existing_tile: cell.tile(),
            });
        }
        Ok(())
    }

    /// All squares that currently accept a tile.
    pub fn legal_placements(&self) -> Vec<(i8, i8)> {
        self.iter()
            .filter(|&(i, j, _)| self.check_placement(i, j).is_ok())
            .map(|(i, j, _)| (i, j))
            .collect()
    }
}
