use crate::{Mode, Movement, Side};

/// The error type for [`Board::check_move()`](crate::Board::check_move).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { i: i8, j: i8 },
    SameSquare,
    NoPieceToMove,
    DestinationOccupied { i: i8, j: i8 },
    NotAlongLine { movement: Movement },
    LineOfSightBlocked { i: i8, j: i8 },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { i, j } =>
                write!(f, "The square ({}, {}) is outside of the board", i, j),
            IllegalMove::SameSquare =>
                write!(f, "A piece cannot move onto its own square"),
            IllegalMove::NoPieceToMove =>
                write!(f, "There is no piece on the starting square"),
            IllegalMove::DestinationOccupied { i, j } =>
                write!(f, "The destination ({}, {}) is already occupied", i, j),
            IllegalMove::NotAlongLine { movement } =>
                write!(f, "The destination is not reachable with {:?} movement", movement),
            IllegalMove::LineOfSightBlocked { i, j } =>
                write!(f, "The path is blocked by the piece on ({}, {})", i, j),
        }
    }
}

/// The error type for [`Board::check_placement()`](crate::Board::check_placement).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { i: i8, j: i8 },
    SquareOccupied { i: i8, j: i8 },
    TileAlreadyPlaced { existing_tile: i8 },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { i, j } =>
                write!(f, "The square ({}, {}) is outside of the board", i, j),
            IllegalPlacement::SquareOccupied { i, j } =>
                write!(f, "A tile cannot be placed under the piece on ({}, {})", i, j),
            IllegalPlacement::TileAlreadyPlaced { existing_tile } =>
                write!(f, "The square already holds the tile {}", existing_tile),
        }
    }
}

/// Why an intent was ignored.
///
/// The engine never hands this out from its intent methods, an ignored intent
/// simply leaves the state unchanged. It is only used for logging.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IgnoredIntent {
    WrongMode { mode: Mode },
    OutOfBounds { i: i8, j: i8 },
    NoPieceSelected,
    NoTileSelected,
    TileOfOtherSide { tile: i8, turn: Side },
    TileExhausted { tile: i8 },
    IllegalMove(IllegalMove),
    IllegalPlacement(IllegalPlacement),
}

impl From<IllegalMove> for IgnoredIntent {
    fn from(err: IllegalMove) -> Self {
        IgnoredIntent::IllegalMove(err)
    }
}

impl From<IllegalPlacement> for IgnoredIntent {
    fn from(err: IllegalPlacement) -> Self {
        IgnoredIntent::IllegalPlacement(err)
    }
}

impl std::error::Error for IgnoredIntent {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IgnoredIntent::IllegalMove(err) => Some(err),
            IgnoredIntent::IllegalPlacement(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IgnoredIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoredIntent::WrongMode { mode } => write!(f, "Not accepted in mode {:?}", mode),
            IgnoredIntent::OutOfBounds { i, j } => {
                write!(f, "The square ({}, {}) is outside of the board", i, j)
            }
            IgnoredIntent::NoPieceSelected => {
                write!(f, "The square holds no piece of the side to move")
            }
            IgnoredIntent::NoTileSelected => write!(f, "No tile has been selected"),
            IgnoredIntent::TileOfOtherSide { tile, turn } => {
                write!(f, "The tile {} does not belong to the {} side", tile, turn)
            }
            IgnoredIntent::TileExhausted { tile } => {
                write!(f, "There is no tile {} left to place", tile)
            }
            IgnoredIntent::IllegalMove(_) => write!(f, "Illegal move"),
            IgnoredIntent::IllegalPlacement(_) => write!(f, "Illegal tile placement"),
        }
    }
}
