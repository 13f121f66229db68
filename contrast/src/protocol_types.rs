use serde::{Deserialize, Serialize};

use crate::Side;

/// Something the player did, to be fed into [`Engine::apply()`](crate::Engine::apply).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Intent {
    /// Start the game after a reset.
    Start,
    /// Act on a square: select a piece, move the selected piece there, or
    /// place the selected tile there, depending on the mode.
    Cell { i: i8, j: i8 },
    /// Select a tile value from the inventory.
    Tile { tile: i8 },
}

/// Describes the state change caused by an accepted intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Transition {
    Started { turn: Side },
    PieceSelected { i: i8, j: i8 },
    PieceMoved { from: (i8, i8), to: (i8, i8) },
    TileSelected { tile: i8 },
    /// Placing a tile ends the turn.
    TilePlaced { i: i8, j: i8, tile: i8, next_turn: Side },
}
