use serde::{Deserialize, Serialize};

use crate::Side;

pub const BOARD_SIZE: i8 = 5;

const NUM_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// The contents of one square.
///
/// The piece and the tile are independent: a tile can lie on an empty square,
/// and a piece can stand with or without a tile beneath it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Positive or negative one for a piece of that side, zero for no piece.
    piece: i8,
    /// Zero when no tile has been placed. Otherwise the sign is the side that
    /// placed it and the magnitude decides how a piece on it moves.
    tile: i8,
}

impl Cell {
    pub const EMPTY: Cell = Cell { piece: 0, tile: 0 };

    pub fn piece(self) -> i8 {
        self.piece
    }

    pub fn tile(self) -> i8 {
        self.tile
    }

    /// The side owning the piece on this square.
    pub fn owner(self) -> Option<Side> {
        Side::of_value(self.piece)
    }

    pub fn is_vacant(self) -> bool {
        self.piece == 0
    }
}

/// The 5x5 playing area.
///
/// Coordinates are `(i, j)` with `i` the row (0 is the top) and `j` the column.
/// Cells are only changed through moving a piece or placing a tile, so the
/// number of pieces of each side never changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Row-major.
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// The starting position: a row of pieces for each side on its home row,
    /// and no tiles.
    pub fn new() -> Self {
        let mut cells = [Cell::EMPTY; NUM_CELLS];
        for side in [Side::Positive, Side::Negative] {
            for j in 0..BOARD_SIZE {
                cells[Self::index(side.home_row(), j)].piece = side.sign();
            }
        }
        Self { cells }
    }

    pub fn is_in_bounds(i: i8, j: i8) -> bool {
        (0..BOARD_SIZE).contains(&i) && (0..BOARD_SIZE).contains(&j)
    }

    // Only call with in-bounds coordinates.
    fn index(i: i8, j: i8) -> usize {
        debug_assert!(Self::is_in_bounds(i, j));
        i as usize * BOARD_SIZE as usize + j as usize
    }

    /// Returns the cell at the given coordinate.
    ///
    /// Coordinates outside of the board are answered with [`Cell::EMPTY`], so
    /// it's fine to probe the neighbors of edge squares.
    pub fn get(&self, i: i8, j: i8) -> Cell {
        if Self::is_in_bounds(i, j) {
            self.cells[Self::index(i, j)]
        } else {
            Cell::EMPTY
        }
    }

    /// Iterates over all squares in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, &cell)| {
            (
                (idx / BOARD_SIZE as usize) as i8,
                (idx % BOARD_SIZE as usize) as i8,
                cell,
            )
        })
    }

    /// The squares holding a piece of `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.iter()
            .filter(move |&(_, _, cell)| cell.owner() == Some(side))
            .map(|(i, j, _)| (i, j))
    }

    // Moves the piece without touching either tile. The move must have been
    // validated with check_move().
    pub(crate) fn move_piece(&mut self, from: (i8, i8), to: (i8, i8)) {
        let piece = std::mem::take(&mut self.cells[Self::index(from.0, from.1)].piece);
        self.cells[Self::index(to.0, to.1)].piece = piece;
    }

    // The placement must have been validated with check_placement().
    pub(crate) fn place_tile(&mut self, at: (i8, i8), tile: i8) {
        self.cells[Self::index(at.0, at.1)].tile = tile;
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            cells: [Cell::EMPTY; NUM_CELLS],
        }
    }

    #[cfg(test)]
    pub(crate) fn with_cell(mut self, i: i8, j: i8, piece: i8, tile: i8) -> Self {
        self.cells[Self::index(i, j)] = Cell { piece, tile };
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
