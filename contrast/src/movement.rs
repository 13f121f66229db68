use serde::{Deserialize, Serialize};

use crate::{Board, Cell, IllegalMove};

/// The directions a piece may slide in.
///
/// A piece's movement is determined by the tile it currently stands on, not by
/// the piece itself. Pieces slide any distance until they hit the edge of the
/// board or another piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    /// There is no piece to move.
    None,
    /// Along rows and columns.
    Orthogonal,
    Diagonal,
    /// Orthogonal and diagonal.
    Both,
}

impl Movement {
    /// Movement granted by a tile.
    ///
    /// Only the magnitude matters, so a piece may profit from a tile the
    /// opponent placed. Squares without a tile grant orthogonal movement.
    pub fn from_tile(tile: i8) -> Self {
        match tile.unsigned_abs() {
            2 => Movement::Diagonal,
            3 => Movement::Both,
            _ => Movement::Orthogonal,
        }
    }

    pub fn of_cell(cell: Cell) -> Self {
        if cell.is_vacant() {
            Movement::None
        } else {
            Self::from_tile(cell.tile())
        }
    }

    pub fn is_orthogonal(self) -> bool {
        matches!(self, Movement::Orthogonal | Movement::Both)
    }

    pub fn is_diagonal(self) -> bool {
        matches!(self, Movement::Diagonal | Movement::Both)
    }

    /// Whether a displacement lies on one of the lines this movement allows.
    pub fn allows(self, di: i8, dj: i8) -> bool {
        (self.is_orthogonal() && (di == 0 || dj == 0))
            || (self.is_diagonal() && di.abs() == dj.abs())
    }
}

impl Board {
    /// Checks whether the piece on `from` may move to `to`.
    ///
    /// Returns the movement the piece used. This does not check whose turn it
    /// is, see [`Engine::cell_intent()`](crate::Engine::cell_intent) for that.
    pub fn check_move(&self, from: (i8, i8), to: (i8, i8)) -> Result<Movement, IllegalMove> {
        for (i, j) in [from, to] {
            if !Board::is_in_bounds(i, j) {
                return Err(IllegalMove::OutOfBounds { i, j });
            }
        }
        if from == to {
            return Err(IllegalMove::SameSquare);
        }
        if !self.get(to.0, to.1).is_vacant() {
            return Err(IllegalMove::DestinationOccupied {
                i: to.0,
                j: to.1,
            });
        }

        let movement = Movement::of_cell(self.get(from.0, from.1));
        if movement == Movement::None {
            return Err(IllegalMove::NoPieceToMove);
        }
        let (di, dj) = (to.0 - from.0, to.1 - from.1);
        if !movement.allows(di, dj) {
            return Err(IllegalMove::NotAlongLine { movement });
        }

        // Any piece on the way blocks, regardless of its side
        let (step_i, step_j) = (di.signum(), dj.signum());
        let (mut i, mut j) = (from.0 + step_i, from.1 + step_j);
        while (i, j) != to {
            if !self.get(i, j).is_vacant() {
                return Err(IllegalMove::LineOfSightBlocked { i, j });
            }
            i += step_i;
            j += step_j;
        }
        Ok(movement)
    }

    /// All squares the piece on `from` may move to, in row-major order.
    pub fn legal_destinations(&self, from: (i8, i8)) -> Vec<(i8, i8)> {
        self.iter()
            .filter(|&(i, j, _)| self.check_move(from, (i, j)).is_ok())
            .map(|(i, j, _)| (i, j))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn every_tile_grants_some_movement(tile: i8) -> bool {
            Movement::from_tile(tile) != Movement::None
        }
    }

    #[test]
    fn movement_from_tile_magnitude() {
        assert_eq!(Movement::from_tile(0), Movement::Orthogonal);
        assert_eq!(Movement::from_tile(-1), Movement::Orthogonal);
        assert_eq!(Movement::from_tile(2), Movement::Diagonal);
        assert_eq!(Movement::from_tile(-2), Movement::Diagonal);
        assert_eq!(Movement::from_tile(-3), Movement::Both);
        assert_eq!(Movement::of_cell(Cell::EMPTY), Movement::None);
        assert!(!Movement::None.allows(0, 1));
    }

    #[test]
    fn diagonal_move_blocked_by_either_side() {
        for tile in [2, -2, 3, -3] {
            let clear = Board::new().with_cell(4, 0, 1, tile);
            assert_eq!(clear.check_move((4, 0), (2, 2)), Ok(Movement::from_tile(tile)));
            for blocker in [1, -1] {
                let blocked = clear.clone().with_cell(3, 1, blocker, 0);
                assert_eq!(
                    blocked.check_move((4, 0), (2, 2)),
                    Err(IllegalMove::LineOfSightBlocked { i: 3, j: 1 })
                );
            }
        }
    }

    #[test]
    fn untiled_piece_slides_orthogonally() {
        let board = Board::new();
        assert_eq!(board.check_move((4, 2), (1, 2)), Ok(Movement::Orthogonal));
        assert_eq!(board.check_move((4, 2), (3, 2)), Ok(Movement::Orthogonal));
        assert_eq!(
            board.check_move((4, 2), (3, 3)),
            Err(IllegalMove::NotAlongLine {
                movement: Movement::Orthogonal
            })
        );
        assert_eq!(
            board.check_move((4, 2), (0, 2)),
            Err(IllegalMove::DestinationOccupied { i: 0, j: 2 })
        );
        assert_eq!(
            board.legal_destinations((4, 2)),
            vec![(1, 2), (2, 2), (3, 2)]
        );
    }

    #[test]
    fn diagonal_piece_cannot_move_orthogonally() {
        let board = Board::empty().with_cell(2, 2, -1, 2);
        assert_eq!(
            board.check_move((2, 2), (2, 4)),
            Err(IllegalMove::NotAlongLine {
                movement: Movement::Diagonal
            })
        );
        assert_eq!(board.legal_destinations((2, 2)).len(), 8);
        let both = Board::empty().with_cell(2, 2, -1, -3);
        assert_eq!(both.legal_destinations((2, 2)).len(), 16);
    }

    #[test]
    fn degenerate_moves() {
        let board = Board::new();
        assert_eq!(board.check_move((4, 0), (4, 0)), Err(IllegalMove::SameSquare));
        assert_eq!(board.check_move((2, 0), (1, 0)), Err(IllegalMove::NoPieceToMove));
        assert_eq!(
            board.check_move((4, 0), (-1, 0)),
            Err(IllegalMove::OutOfBounds { i: -1, j: 0 })
        );
        assert!(board.legal_destinations((2, 2)).is_empty());
    }
}
