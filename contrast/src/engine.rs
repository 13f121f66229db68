use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Board, Cell, IgnoredIntent, Intent, Side, TileInventory, Transition};

/// The phase of the turn cycle, deciding which intents are accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Waiting for the start intent.
    Setup,
    /// Waiting for the side to move to pick one of its pieces.
    PieceSelecting,
    /// A piece is selected and waits for its destination. Picking another
    /// piece of the same side is still possible.
    PieceMoving,
    /// The piece has moved, a tile must be picked.
    TileSelecting,
    /// A tile is selected and waits for its square. Picking another tile is
    /// still possible.
    TileMoving,
}

/// The complete game state.
///
/// All changes go through the intent methods. An intent that is not legal in
/// the current state is ignored and leaves the engine untouched, so repeating
/// an invalid click is always harmless.
///
/// Deserializing does not validate the state. A deserialized engine is only
/// as trustworthy as its source, e.g. a recording checked by replaying it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    board: Board,
    inventory: TileInventory,
    turn: Side,
    mode: Mode,
    selected_piece: Option<(i8, i8)>,
    selected_tile: Option<i8>,
}

impl Engine {
    /// Creates an engine in the starting position, waiting in [`Mode::Setup`].
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            inventory: TileInventory::new(),
            turn: Side::Positive,
            mode: Mode::Setup,
            selected_piece: None,
            selected_tile: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shortcut for `self.board().get(i, j)`.
    pub fn cell(&self, i: i8, j: i8) -> Cell {
        self.board.get(i, j)
    }

    pub fn inventory(&self) -> &TileInventory {
        &self.inventory
    }

    /// The side to move. Only meaningful after the game was started.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected_piece(&self) -> Option<(i8, i8)> {
        self.selected_piece
    }

    pub fn selected_tile(&self) -> Option<i8> {
        self.selected_tile
    }

    /// Feeds a serialized intent to the matching intent method.
    pub fn apply<R: Rng + ?Sized>(&mut self, intent: Intent, rng: &mut R) -> Option<Transition> {
        match intent {
            Intent::Start => self.start_intent(rng),
            Intent::Cell { i, j } => self.cell_intent(i, j),
            Intent::Tile { tile } => self.tile_intent(tile),
        }
    }

    /// Starts the game with a random side to move.
    ///
    /// Only accepted in [`Mode::Setup`]. This is the only place randomness
    /// enters the game, and it draws exactly one value from `rng`.
    pub fn start_intent<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Transition> {
        let outcome = self.try_start(rng);
        log_outcome(outcome)
    }

    /// Acts on the square `(i, j)`.
    ///
    /// While selecting pieces, this selects a piece of the side to move, or
    /// moves the selected piece here. While placing a tile, this places the
    /// selected tile here and ends the turn. Returns `None` when the intent
    /// was ignored, which includes coordinates outside of the board.
    pub fn cell_intent(&mut self, i: i8, j: i8) -> Option<Transition> {
        let outcome = self.try_cell(i, j);
        log_outcome(outcome)
    }

    /// Selects a tile value for placement.
    ///
    /// The tile must belong to the side to move and still be in the inventory.
    pub fn tile_intent(&mut self, tile: i8) -> Option<Transition> {
        let outcome = self.try_tile(tile);
        log_outcome(outcome)
    }

    fn try_start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Transition, IgnoredIntent> {
        if self.mode != Mode::Setup {
            return Err(IgnoredIntent::WrongMode { mode: self.mode });
        }
        self.turn = if rng.gen::<bool>() {
            Side::Negative
        } else {
            Side::Positive
        };
        self.mode = Mode::PieceSelecting;
        Ok(Transition::Started { turn: self.turn })
    }

    fn try_cell(&mut self, i: i8, j: i8) -> Result<Transition, IgnoredIntent> {
        if !Board::is_in_bounds(i, j) {
            return Err(IgnoredIntent::OutOfBounds { i, j });
        }
        match self.mode {
            Mode::PieceSelecting | Mode::PieceMoving => {
                if self.cell(i, j).owner() == Some(self.turn) {
                    self.selected_piece = Some((i, j));
                    self.mode = Mode::PieceMoving;
                    return Ok(Transition::PieceSelected { i, j });
                }
                let from = match (self.mode, self.selected_piece) {
                    (Mode::PieceMoving, Some(from)) => from,
                    _ => return Err(IgnoredIntent::NoPieceSelected),
                };
                self.board.check_move(from, (i, j))?;
                self.board.move_piece(from, (i, j));
                self.selected_piece = None;
                self.mode = Mode::TileSelecting;
                Ok(Transition::PieceMoved { from, to: (i, j) })
            }
            Mode::TileMoving => {
                let tile = self.selected_tile.ok_or(IgnoredIntent::NoTileSelected)?;
                self.board.check_placement(i, j)?;
                if !self.inventory.take(tile) {
                    return Err(IgnoredIntent::TileExhausted { tile });
                }
                self.board.place_tile((i, j), tile);
                self.selected_tile = None;
                self.turn = self.turn.other();
                self.mode = Mode::PieceSelecting;
                Ok(Transition::TilePlaced {
                    i,
                    j,
                    tile,
                    next_turn: self.turn,
                })
            }
            mode => Err(IgnoredIntent::WrongMode { mode }),
        }
    }

    fn try_tile(&mut self, tile: i8) -> Result<Transition, IgnoredIntent> {
        if !matches!(self.mode, Mode::TileSelecting | Mode::TileMoving) {
            return Err(IgnoredIntent::WrongMode { mode: self.mode });
        }
        if !self.turn.owns(tile) {
            return Err(IgnoredIntent::TileOfOtherSide {
                tile,
                turn: self.turn,
            });
        }
        if !self.inventory.contains(tile) {
            return Err(IgnoredIntent::TileExhausted { tile });
        }
        self.selected_tile = Some(tile);
        self.mode = Mode::TileMoving;
        Ok(Transition::TileSelected { tile })
    }

    /// Would acting on `(i, j)` move the selected piece or place the selected
    /// tile there?
    ///
    /// Meant for highlighting targets. Uses the same checks as
    /// [`Self::cell_intent()`].
    pub fn is_target(&self, i: i8, j: i8) -> bool {
        match (self.mode, self.selected_piece) {
            (Mode::PieceMoving, Some(from)) => self.board.check_move(from, (i, j)).is_ok(),
            (Mode::TileMoving, _) => {
                self.selected_tile.is_some() && self.board.check_placement(i, j).is_ok()
            }
            _ => false,
        }
    }

    /// The destinations of the selected piece, empty if none is selected.
    pub fn legal_destinations(&self) -> Vec<(i8, i8)> {
        match (self.mode, self.selected_piece) {
            (Mode::PieceMoving, Some(from)) => self.board.legal_destinations(from),
            _ => Vec::new(),
        }
    }

    /// The squares that currently accept a tile.
    pub fn legal_placements(&self) -> Vec<(i8, i8)> {
        self.board.legal_placements()
    }

    /// The pieces of the side to move that have at least one legal move.
    pub fn movable_pieces(&self) -> Vec<(i8, i8)> {
        self.board
            .pieces_of(self.turn)
            .filter(|&from| !self.board.legal_destinations(from).is_empty())
            .collect()
    }

    /// The tile values the side to move may still select.
    pub fn selectable_tiles(&self) -> Vec<i8> {
        self.inventory.distinct_for_side(self.turn)
    }

    /// Can the side to move still finish the current turn?
    ///
    /// This needs a legal move (unless it was already made), a tile left in
    /// the inventory and a free square to put it on after the move. When
    /// this is false, no sequence of intents will ever end the turn.
    pub fn can_complete_turn(&self) -> bool {
        if self.inventory.for_side(self.turn).next().is_none() {
            return false;
        }
        match self.mode {
            Mode::Setup => false,
            Mode::PieceSelecting | Mode::PieceMoving => {
                self.board.pieces_of(self.turn).any(|from| {
                    self.board.legal_destinations(from).into_iter().any(|to| {
                        let mut board = self.board.clone();
                        board.move_piece(from, to);
                        !board.legal_placements().is_empty()
                    })
                })
            }
            Mode::TileSelecting | Mode::TileMoving => !self.legal_placements().is_empty(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn log_outcome(outcome: Result<Transition, IgnoredIntent>) -> Option<Transition> {
    match outcome {
        Ok(transition) => {
            trace!(?transition, "Intent accepted");
            Some(transition)
        }
        Err(IgnoredIntent::IllegalMove(err)) => {
            debug!(reason = %err, "Intent ignored, illegal move");
            None
        }
        Err(IgnoredIntent::IllegalPlacement(err)) => {
            debug!(reason = %err, "Intent ignored, illegal tile placement");
            None
        }
        Err(reason) => {
            debug!(%reason, "Intent ignored");
            None
        }
    }
}
