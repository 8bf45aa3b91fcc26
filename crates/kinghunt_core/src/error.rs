use thiserror::Error;

use crate::location::Location;
use crate::types::PieceId;

/// Everything that can go wrong while mutating a board.
///
/// `NotPlaced`, `AlreadyPlaced`, and `OccupancyMismatch` are invalid-state
/// errors: they indicate a logic bug in the caller or a corrupted
/// grid/piece relation, and the attempted operation is aborted. `OffBoard`
/// and `DegenerateMove` reject bad arguments at construction or execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("piece {0:?} is not on the board")]
    NotPlaced(PieceId),

    #[error("piece {id:?} is already placed at {at}")]
    AlreadyPlaced { id: PieceId, at: Location },

    #[error("the board holds a different piece at {0}")]
    OccupancyMismatch(Location),

    #[error("location {0} is off the board")]
    OffBoard(Location),

    #[error("move source and destination are both {0}")]
    DegenerateMove(Location),

    #[error("piece {0:?} belongs to a different board")]
    UnknownPiece(PieceId),
}
